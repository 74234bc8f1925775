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

/// A wrong-state access on an [`Outcome`](crate::Outcome).
///
/// The panicking accessors panic with this error's [`Display`](core::fmt::Display) message, while the
/// `try_` accessors return it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadAccess {
    /// The success payload was requested while the failure payload was active.
    ValueOfFailure,
    /// The failure payload was requested while the success payload was active.
    ErrorOfSuccess,
}
impl BadAccess {
    /// The fixed message describing this mismatch.
    pub const fn message(&self) -> &'static str {
        match self {
            BadAccess::ValueOfFailure => "Attempted to access the value of a error state",
            BadAccess::ErrorOfSuccess => "Attempted to access the error of a value state",
        }
    }
}
impl core::fmt::Display for BadAccess {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}
#[rustversion::since(1.81)]
impl core::error::Error for BadAccess {}
#[rustversion::before(1.81)]
#[cfg(feature = "std")]
impl std::error::Error for BadAccess {}
