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

//! A success-or-failure return type whose payload lives inline, in a tagged union.
//!
//! [`Outcome<S, F>`](Outcome) holds exactly one of a success payload `S` or a failure payload `F`.
//! Both default to the [`Empty`] marker, and [`make_failure`] builds failures whose success side is [`Empty`].
//!
//! ```
//! use tagged_outcome::{make_failure_str, Outcome};
//!
//! let parsed: Outcome<i32, String> = Outcome::Success(5);
//! assert!(parsed.has_value());
//! assert_eq!(*parsed.value(), 5);
//!
//! let oops = make_failure_str("oops");
//! assert!(!oops.has_value());
//! assert_eq!(oops.error(), "oops");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#[cfg(feature = "alloc")]
extern crate alloc;

mod access;
mod empty;
mod factory;
mod outcome;
pub mod union;

pub use access::BadAccess;
pub use empty::Empty;
pub use factory::make_failure;
#[cfg(feature = "alloc")]
pub use factory::make_failure_str;
pub use outcome::Outcome;
