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

use std::cell::Cell;
use std::rc::Rc;

use rand::{Rng, SeedableRng};
use tagged_outcome::Outcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Value,
    Error,
}

/// A payload that records its side and keeps a count of live instances.
#[derive(Debug)]
struct Counted {
    side: Side,
    id: u32,
    live: Rc<Cell<isize>>,
}
impl Counted {
    fn new(side: Side, id: u32, live: &Rc<Cell<isize>>) -> Self {
        live.set(live.get() + 1);
        Self {
            side,
            id,
            live: live.clone(),
        }
    }
}
impl Clone for Counted {
    fn clone(&self) -> Self {
        Self::new(self.side, self.id, &self.live)
    }
}
impl Drop for Counted {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

type Slot = Outcome<Counted, Counted>;

fn check(slot: &Slot, side: Side, id: u32) {
    let payload = match slot.as_ref() {
        Ok(value) => value,
        Err(error) => error,
    };
    assert_eq!(slot.has_value(), side == Side::Value);
    assert_eq!((payload.side, payload.id), (side, id));
}

#[test]
fn random_lifetime_sequences() {
    const SLOTS: usize = 16;
    const STEPS: usize = 5000;
    let live = Rc::new(Cell::new(0));
    let mut rng = rand::rngs::StdRng::seed_from_u64(0);
    {
        let mut slots: Vec<Slot> = Vec::with_capacity(SLOTS);
        let mut model: Vec<(Side, u32)> = Vec::with_capacity(SLOTS);
        for id in 0..SLOTS as u32 {
            slots.push(Outcome::Success(Counted::new(Side::Value, id, &live)));
            model.push((Side::Value, id));
        }
        let mut next_id = SLOTS as u32;
        for _ in 0..STEPS {
            let target = rng.gen_range(0..SLOTS);
            let source = rng.gen_range(0..SLOTS);
            match rng.gen_range(0..5u8) {
                0 => {
                    slots[target].set_value(Counted::new(Side::Value, next_id, &live));
                    model[target] = (Side::Value, next_id);
                    next_id += 1;
                }
                1 => {
                    slots[target].set_error(Counted::new(Side::Error, next_id, &live));
                    model[target] = (Side::Error, next_id);
                    next_id += 1;
                }
                2 if target != source => {
                    let (a, b) = if target < source {
                        let (low, high) = slots.split_at_mut(source);
                        (&mut low[target], &high[0])
                    } else {
                        let (low, high) = slots.split_at_mut(target);
                        (&mut high[0], &low[source])
                    };
                    a.clone_from(b);
                    model[target] = model[source];
                }
                3 => {
                    slots[target] = slots[source].clone();
                    model[target] = model[source];
                }
                _ => {
                    let taken = slots.swap_remove(target);
                    let (side, id) = model[target];
                    let mut payload = if side == Side::Value {
                        taken.into_value()
                    } else {
                        taken.into_error()
                    };
                    assert_eq!(payload.id, id);
                    payload.side = Side::Value;
                    slots.push(Outcome::Success(payload));
                    let last = slots.len() - 1;
                    slots.swap(target, last);
                    model[target].0 = Side::Value;
                }
            }
            assert_eq!(live.get(), SLOTS as isize);
        }
        for (slot, &(side, id)) in slots.iter().zip(&model) {
            check(slot, side, id);
        }
    }
    assert_eq!(live.get(), 0);
}
