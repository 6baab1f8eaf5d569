//! Seeded random instance generation.
//!
//! Every list is an independent uniform shuffle of `[1, n]`. The RNG is
//! ChaCha8 seeded with `seed + n`, so each size gets its own stream while
//! the whole sweep stays reproducible from one base seed.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::types::{AgentId, PreferenceModel};

/// Random complete-preference instance of size `n`.
///
/// ```
/// use stable_match::generator::random_instance;
///
/// let a = random_instance(16, 42);
/// let b = random_instance(16, 42);
/// assert_eq!(a, b);
/// ```
pub fn random_instance(n: usize, seed: u64) -> PreferenceModel {
    let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(n as u64));
    let ids: Vec<AgentId> = (1..=n).collect();

    let mut shuffled = || {
        (0..n)
            .map(|_| {
                let mut list = ids.clone();
                list.shuffle(&mut rng);
                list
            })
            .collect::<Vec<_>>()
    };
    let hospitals = shuffled();
    let students = shuffled();

    from_permutations(n, hospitals, students)
}

/// Wrap lists that are permutations by construction.
fn from_permutations(
    n: usize,
    hospitals: Vec<Vec<AgentId>>,
    students: Vec<Vec<AgentId>>,
) -> PreferenceModel {
    // Shuffles of 1..=n always validate; an error here is a bug in this module.
    match PreferenceModel::build(n, hospitals, students) {
        Ok(model) => model,
        Err(e) => unreachable!("generated lists failed validation: {e}"),
    }
}
