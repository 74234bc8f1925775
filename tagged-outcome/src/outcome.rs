//
// Copyright (c) 2023 ZettaScale Technology
//
// This program and the accompanying materials are made available under the
// terms of the Eclipse Public License 2.0 which is available at
// http://www.eclipse.org/legal/epl-2.0, or the Apache License, Version 2.0
// which is available at https://www.apache.org/licenses/LICENSE-2.0.
//
// SPDX-License-Identifier: EPL-2.0 OR Apache-2.0
//
// Contributors:
//   Pierre Avital, <pierre.avital@me.com>
//

use core::mem::ManuallyDrop;

use crate::union::Union;
use crate::{BadAccess, Empty};

/// Either a success payload `S` or a failure payload `F`, stored inline.
///
/// Exactly one member of the inner [`Union`] is alive at any time, and the discriminant says which.
/// Switching states always goes through destroying the whole container and writing a new one in its
/// place: see [`Clone::clone_from`], [`Outcome::set_value`] and [`Outcome::set_error`].
///
/// Accessing the wrong side through [`Outcome::value`] or [`Outcome::error`] panics with the
/// matching [`BadAccess`] message; the `try_` accessors return that [`BadAccess`] instead.
///
/// `Outcome` is a plain value: it does no synchronization of its own, and is `Send`/`Sync`
/// exactly when both payloads are.
///
/// ```
/// use tagged_outcome::Outcome;
///
/// let mut parsed: Outcome<u8, &str> = "12".parse::<u8>().map_err(|_| "not a byte").into();
/// assert_eq!(parsed.value_or(0u8), 12);
/// parsed.set_error("gave up");
/// assert_eq!(parsed.value_or(0u8), 0);
/// assert_eq!(*parsed.error(), "gave up");
/// ```
#[must_use = "this `Outcome` may hold a failure, which should be handled"]
pub struct Outcome<S = Empty, F = Empty> {
    discriminant: bool,
    union: Union<S, F>,
}

impl<S, F> Drop for Outcome<S, F> {
    fn drop(&mut self) {
        if self.discriminant {
            unsafe { ManuallyDrop::drop(&mut self.union.value) }
        } else {
            unsafe { ManuallyDrop::drop(&mut self.union.error) }
        }
    }
}
impl<S: Clone, F: Clone> Clone for Outcome<S, F> {
    fn clone(&self) -> Self {
        self.match_ref(
            |value| Self::Success(value.clone()),
            |error| Self::Failure(error.clone()),
        )
    }
    /// Destroys the current payload, then rebuilds `self` as a copy of `source`.
    ///
    /// The copy is made before anything is destroyed, so a panicking `clone` leaves `self` intact.
    fn clone_from(&mut self, source: &Self) {
        if core::ptr::eq(&*self, source) {
            return;
        }
        *self = source.clone();
    }
}
impl<S: Default, F> Default for Outcome<S, F> {
    fn default() -> Self {
        Self::Success(S::default())
    }
}
impl<S, F> core::fmt::Debug for Outcome<S, F>
where
    S: core::fmt::Debug,
    F: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.as_ref() {
            Ok(value) => f.debug_tuple("Success").field(value).finish(),
            Err(error) => f.debug_tuple("Failure").field(error).finish(),
        }
    }
}
impl<S, F> core::hash::Hash for Outcome<S, F>
where
    S: core::hash::Hash,
    F: core::hash::Hash,
{
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.discriminant.hash(state);
        match self.as_ref() {
            Ok(value) => value.hash(state),
            Err(error) => error.hash(state),
        }
    }
}
impl<S, F> core::cmp::PartialEq for Outcome<S, F>
where
    S: core::cmp::PartialEq,
    F: core::cmp::PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.as_ref() == other.as_ref()
    }
}
impl<S, F> core::cmp::Eq for Outcome<S, F>
where
    S: core::cmp::Eq,
    F: core::cmp::Eq,
{
}
impl<S, F> From<core::result::Result<S, F>> for Outcome<S, F> {
    fn from(value: core::result::Result<S, F>) -> Self {
        match value {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}
impl<S, F> From<Outcome<S, F>> for core::result::Result<S, F> {
    fn from(value: Outcome<S, F>) -> Self {
        value.match_owned(Ok, Err)
    }
}
/// The explicit boolean view of an [`Outcome`]: `true` when it holds a success.
impl<S, F> From<&Outcome<S, F>> for bool {
    fn from(value: &Outcome<S, F>) -> Self {
        value.has_value()
    }
}
/// Rebinds a payload-less success to a concrete success type.
///
/// Only sources whose success type is [`Empty`] convert: a success becomes `S::default()`, and a
/// failure is cloned over.
impl<S: Default, F: Clone> From<&Outcome<Empty, F>> for Outcome<S, F> {
    fn from(value: &Outcome<Empty, F>) -> Self {
        value.match_ref(
            |_| Self::Success(S::default()),
            |error| Self::Failure(error.clone()),
        )
    }
}

impl<S, F> Outcome<S, F> {
    /// Construct the success state.
    #[allow(non_snake_case)]
    pub const fn Success(value: S) -> Self {
        Self {
            discriminant: true,
            union: Union::value(value),
        }
    }
    /// Construct the failure state.
    #[allow(non_snake_case)]
    pub const fn Failure(error: F) -> Self {
        Self {
            discriminant: false,
            union: Union::error(error),
        }
    }

    fn match_ref<'a, U, FnS: FnOnce(&'a S) -> U, FnF: FnOnce(&'a F) -> U>(
        &'a self,
        value: FnS,
        error: FnF,
    ) -> U {
        if self.discriminant {
            unsafe { value(&self.union.value) }
        } else {
            unsafe { error(&self.union.error) }
        }
    }
    fn match_mut<'a, U, FnS: FnOnce(&'a mut S) -> U, FnF: FnOnce(&'a mut F) -> U>(
        &'a mut self,
        value: FnS,
        error: FnF,
    ) -> U {
        if self.discriminant {
            unsafe { value(&mut self.union.value) }
        } else {
            unsafe { error(&mut self.union.error) }
        }
    }
    fn match_owned<U, FnS: FnOnce(S) -> U, FnF: FnOnce(F) -> U>(self, value: FnS, error: FnF) -> U {
        // The payload is moved out below, so the shell must not run `Drop`.
        let mut this = ManuallyDrop::new(self);
        if this.discriminant {
            value(unsafe { ManuallyDrop::take(&mut this.union.value) })
        } else {
            error(unsafe { ManuallyDrop::take(&mut this.union.error) })
        }
    }

    /// Returns `true` if the success payload is active.
    pub const fn has_value(&self) -> bool {
        self.discriminant
    }
    /// Returns `true` if the failure payload is active.
    pub const fn has_error(&self) -> bool {
        !self.discriminant
    }
    /// Converts to a standard [`Result`](core::result::Result) of immutable references to the payloads.
    #[allow(clippy::missing_errors_doc)]
    pub fn as_ref(&self) -> core::result::Result<&S, &F> {
        self.match_ref(Ok, Err)
    }
    /// Converts to a standard [`Result`](core::result::Result) of mutable references to the payloads.
    #[allow(clippy::missing_errors_doc)]
    pub fn as_mut(&mut self) -> core::result::Result<&mut S, &mut F> {
        self.match_mut(Ok, Err)
    }
    /// Returns the success payload by reference if it is active, `None` otherwise.
    pub fn ok_ref(&self) -> Option<&S> {
        self.match_ref(Some, |_| None)
    }
    /// Returns the failure payload by reference if it is active, `None` otherwise.
    pub fn err_ref(&self) -> Option<&F> {
        self.match_ref(|_| None, Some)
    }

    /// Returns the success payload, or [`BadAccess::ValueOfFailure`].
    pub fn try_value(&self) -> core::result::Result<&S, BadAccess> {
        self.match_ref(Ok, |_| Err(BadAccess::ValueOfFailure))
    }
    /// Returns the success payload mutably, or [`BadAccess::ValueOfFailure`].
    pub fn try_value_mut(&mut self) -> core::result::Result<&mut S, BadAccess> {
        self.match_mut(Ok, |_| Err(BadAccess::ValueOfFailure))
    }
    /// Returns the failure payload, or [`BadAccess::ErrorOfSuccess`].
    pub fn try_error(&self) -> core::result::Result<&F, BadAccess> {
        self.match_ref(|_| Err(BadAccess::ErrorOfSuccess), Ok)
    }
    /// Returns the failure payload mutably, or [`BadAccess::ErrorOfSuccess`].
    pub fn try_error_mut(&mut self) -> core::result::Result<&mut F, BadAccess> {
        self.match_mut(|_| Err(BadAccess::ErrorOfSuccess), Ok)
    }

    /// Returns the success payload.
    /// # Panics
    /// If the failure payload is active.
    #[track_caller]
    pub fn value(&self) -> &S {
        match self.try_value() {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
    /// Returns the success payload mutably.
    /// # Panics
    /// If the failure payload is active.
    #[track_caller]
    pub fn value_mut(&mut self) -> &mut S {
        match self.try_value_mut() {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
    /// Moves the success payload out.
    /// # Panics
    /// If the failure payload is active.
    #[track_caller]
    pub fn into_value(self) -> S {
        let result: core::result::Result<S, F> = self.into();
        match result {
            Ok(value) => value,
            Err(_) => panic!("{}", BadAccess::ValueOfFailure),
        }
    }
    /// Returns the failure payload.
    /// # Panics
    /// If the success payload is active.
    #[track_caller]
    pub fn error(&self) -> &F {
        match self.try_error() {
            Ok(error) => error,
            Err(e) => panic!("{e}"),
        }
    }
    /// Returns the failure payload mutably.
    /// # Panics
    /// If the success payload is active.
    #[track_caller]
    pub fn error_mut(&mut self) -> &mut F {
        match self.try_error_mut() {
            Ok(error) => error,
            Err(e) => panic!("{e}"),
        }
    }
    /// Moves the failure payload out.
    /// # Panics
    /// If the success payload is active.
    #[track_caller]
    pub fn into_error(self) -> F {
        let result: core::result::Result<S, F> = self.into();
        match result {
            Ok(_) => panic!("{}", BadAccess::ErrorOfSuccess),
            Err(error) => error,
        }
    }

    /// Returns a copy of the success payload, or `fallback` converted to `S`.
    pub fn value_or<T: Into<S>>(&self, fallback: T) -> S
    where
        S: Clone,
    {
        self.match_ref(S::clone, |_| fallback.into())
    }
    /// Returns a copy of the failure payload, or `fallback` converted to `F`.
    pub fn error_or<T: Into<F>>(&self, fallback: T) -> F
    where
        F: Clone,
    {
        self.match_ref(|_| fallback.into(), F::clone)
    }
    /// Returns the success payload, or `fallback` converted to `S`.
    pub fn into_value_or<T: Into<S>>(self, fallback: T) -> S {
        self.match_owned(|value| value, |_| fallback.into())
    }
    /// Returns the failure payload, or `fallback` converted to `F`.
    pub fn into_error_or<T: Into<F>>(self, fallback: T) -> F {
        self.match_owned(|_| fallback.into(), |error| error)
    }

    /// Destroys the current payload and rebuilds `self` in the success state.
    pub fn set_value(&mut self, value: S) {
        *self = Self::Success(value);
    }
    /// Destroys the current payload and rebuilds `self` in the failure state.
    pub fn set_error(&mut self, error: F) {
        *self = Self::Failure(error);
    }
}

impl<F> Outcome<Empty, F> {
    /// Consuming form of `Outcome::<S, F>::from(&self)`: the failure payload is moved rather than
    /// cloned, and a success becomes `S::default()`.
    pub fn into_outcome<S: Default>(self) -> Outcome<S, F> {
        self.match_owned(|_| Outcome::Success(S::default()), Outcome::Failure)
    }
}
