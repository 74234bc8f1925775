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

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng};
use tagged_outcome::Outcome;

const N: usize = 100000;
fn bench_assign(c: &mut Criterion) {
    let rng = rand::rngs::StdRng::seed_from_u64(0);
    let sources = (0..N)
        .map({
            let mut rng = rng.clone();
            move |_| {
                let text = rng.gen_range(0..=100u32).to_string();
                if rng.gen_bool(0.5) {
                    Ok(text)
                } else {
                    Err(text)
                }
            }
        })
        .collect::<Vec<Result<String, String>>>();
    let outcomes = sources
        .iter()
        .cloned()
        .map(Outcome::<String, String>::from)
        .collect::<Vec<Outcome<String, String>>>();

    c.bench_function("std_clone_from", |b| {
        let mut target: Result<String, String> = Ok(String::new());
        b.iter(|| {
            for source in &sources {
                target.clone_from(source);
            }
            black_box(&target);
        });
    });
    // Every assignment destroys the previous payload, so this is expected to trail `std_clone_from`.
    c.bench_function("outcome_clone_from", |b| {
        let mut target: Outcome<String, String> = Outcome::Success(String::new());
        b.iter(|| {
            for source in &outcomes {
                target.clone_from(source);
            }
            black_box(&target);
        });
    });

    c.bench_function("std_access", |b| {
        b.iter(|| {
            let mut total = 0;
            for source in &sources {
                total += match source {
                    Ok(value) => value.len(),
                    Err(error) => error.len() * 2,
                };
            }
            black_box(total)
        });
    });
    c.bench_function("outcome_access", |b| {
        b.iter(|| {
            let mut total = 0;
            for outcome in &outcomes {
                total += if outcome.has_value() {
                    outcome.value().len()
                } else {
                    outcome.error().len() * 2
                };
            }
            black_box(total)
        });
    });
}

criterion_group!(benches, bench_assign);
criterion_main!(benches);
