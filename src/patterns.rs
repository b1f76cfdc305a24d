//! Input patterns for testing and benchmarking the sort and its primitives.
//! Currently limited to `i32` values.
//!
//! Every generator draws from a process-wide seed so failures are
//! reproducible: set the `OVERRIDE_SEED` environment variable to replay a
//! reported seed, or call [`disable_fixed_seed`] (benchmarks do) to draw
//! fresh values on every call.

use std::env;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;

use rand::prelude::*;

pub fn random(size: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    random_vec(size)
}

pub fn random_uniform<R>(size: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::
    let mut rng = seeded_rng();
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

pub fn all_equal(size: usize) -> Vec<i32> {
    // ......
    // ::::::

    (0..size).map(|_| 66).collect::<Vec<_>>()
}

pub fn ascending(size: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..size as i32).collect::<Vec<_>>()
}

pub fn descending(size: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..size as i32).rev().collect::<Vec<_>>()
}

pub fn saw_mixed(size: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if size == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(size);
    let chunk_size = (size / saw_count.max(1)).max(1);
    let saw_directions = random_uniform((size / chunk_size) + 1, 0..=1);

    for (i, chunk) in vals.chunks_mut(chunk_size).enumerate() {
        if saw_directions[i] == 0 {
            chunk.sort();
        } else {
            chunk.sort_by_key(|&e| std::cmp::Reverse(e));
        }
    }

    vals
}

pub fn pipe_organ(size: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random_vec(size);

    let (first_half, second_half) = vals.split_at_mut(size / 2);
    first_half.sort();
    second_half.sort_by_key(|&e| std::cmp::Reverse(e));

    vals
}

static USE_FIXED_SEED: AtomicBool = AtomicBool::new(true);

/// Makes every later pattern call draw fresh random values instead of
/// replaying the per-process seed. Benchmarks want this, tests do not.
pub fn disable_fixed_seed() {
    USE_FIXED_SEED.store(false, Ordering::Release);
}

pub fn random_init_seed() -> u64 {
    if USE_FIXED_SEED.load(Ordering::Acquire) {
        static SEED: OnceCell<u64> = OnceCell::new();
        *SEED.get_or_init(|| {
            if let Ok(override_seed) = env::var("OVERRIDE_SEED") {
                u64::from_str(&override_seed).expect("OVERRIDE_SEED must be a u64")
            } else {
                thread_rng().gen()
            }
        })
    } else {
        thread_rng().gen()
    }
}

// --- Private ---

fn seeded_rng() -> StdRng {
    rand::SeedableRng::seed_from_u64(random_init_seed())
}

fn random_vec(size: usize) -> Vec<i32> {
    let mut rng = seeded_rng();

    (0..size).map(|_| rng.gen::<i32>()).collect()
}
