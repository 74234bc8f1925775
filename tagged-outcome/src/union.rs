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

//! The raw storage behind [`Outcome`](crate::Outcome).

/// Storage large enough and aligned enough for either an `A` or a `B`, but never both.
///
/// Neither field is ever dropped implicitly: whoever owns a `Union` must track which member was
/// written last, and drop only that one.
pub union Union<A, B> {
    /// The success member.
    pub value: core::mem::ManuallyDrop<A>,
    /// The failure member.
    pub error: core::mem::ManuallyDrop<B>,
}
impl<A, B> Union<A, B> {
    /// Storage whose success member is initialized.
    pub const fn value(value: A) -> Self {
        Self {
            value: core::mem::ManuallyDrop::new(value),
        }
    }
    /// Storage whose failure member is initialized.
    pub const fn error(error: B) -> Self {
        Self {
            error: core::mem::ManuallyDrop::new(error),
        }
    }
}
