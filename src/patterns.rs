//! Input patterns for testing and benchmarking the sort.
//! Currently limited to i32 values.

use std::env;
use std::str::FromStr;

use once_cell::sync::OnceCell;
use rand::prelude::*;

// --- Public ---

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
    let mut rng = StdRng::seed_from_u64(random_init_seed());
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
    let chunks_size = size / saw_count.max(1);

    for (i, chunk) in vals.chunks_mut(chunks_size).enumerate() {
        if i % 2 == 0 {
            chunk.sort();
        } else {
            chunk.sort_by_key(|&e| std::cmp::Reverse(e));
        }
    }

    vals
}

/// Seed shared by every pattern in a process. Set the `OVERRIDE_SEED` env
/// var to reproduce a failing run.
pub fn random_init_seed() -> u64 {
    static SEED: OnceCell<u64> = OnceCell::new();

    *SEED.get_or_init(|| {
        env::var("OVERRIDE_SEED")
            .ok()
            .map(|seed| u64::from_str(&seed).unwrap())
            .unwrap_or_else(|| thread_rng().gen())
    })
}

// --- Private ---

fn random_vec(len: usize) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(random_init_seed());

    (0..len).map(|_| rng.gen::<i32>()).collect()
}
