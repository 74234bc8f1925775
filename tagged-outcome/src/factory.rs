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
use crate::{Empty, Outcome};

/// Builds a failure whose success side carries nothing.
///
/// Convert the result with [`Outcome::into_outcome`] or `Outcome::from(&failure)` when the caller
/// expects a concrete success type.
pub fn make_failure<F>(error: F) -> Outcome<Empty, F> {
    Outcome::Failure(error)
}

/// Builds a failure carrying an owned copy of `text`.
#[cfg(feature = "alloc")]
pub fn make_failure_str(text: &str) -> Outcome<Empty, alloc::string::String> {
    make_failure(alloc::string::String::from(text))
}
