//! Random derangements by fixed-point repair.
//!
//! The index set is shuffled uniformly, then every fixed point left by the
//! shuffle is swapped with a nearby non-fixed index. The pass is linear in the
//! number of participants and never retries.
//!
//! The result is **not** uniformly distributed over all derangements: the
//! repair swaps favour permutations close to the shuffled one. Nothing relies
//! on uniformity, but callers should not treat the draw as a fair sample.

use crate::domain::model::{Assignment, Pair};
use crate::utils::error::{Result, SantaError};
use crate::utils::validation::{count_unique, validate_unique};
use rand::seq::SliceRandom;
use rand::Rng;

pub const MIN_PARTICIPANTS: usize = 2;

/// Draws a random derangement of `0..n`.
pub fn derange<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Assignment> {
    if n < MIN_PARTICIPANTS {
        return Err(SantaError::InvalidInput {
            unique: n,
            required: MIN_PARTICIPANTS,
        });
    }

    let mut assignment = Assignment::identity(n);
    assignment.receivers_mut().shuffle(rng);
    tracing::debug!(
        "Shuffled {} indices, {} fixed points to repair",
        n,
        assignment.fixed_points().len()
    );

    for i in 0..n {
        if !assignment.is_fixed(i) {
            continue;
        }
        let j = repair_target(&assignment, i)
            .ok_or(SantaError::RepairExhausted { index: i, size: n })?;
        tracing::debug!("Repairing fixed point {} by swapping with {}", i, j);
        assignment.receivers_mut().swap(i, j);
    }

    if let Some(&index) = assignment.fixed_points().first() {
        return Err(SantaError::RepairExhausted { index, size: n });
    }
    if !assignment.is_permutation() {
        return Err(SantaError::RepairExhausted { index: n, size: n });
    }

    Ok(assignment)
}

// Scans forward from `i`, wrapping, for at most n - 1 probes. A non-fixed
// index is preferred. When every other index is fixed too (identity shuffle)
// the nearest index is used; swapping two fixed points repairs both.
fn repair_target(assignment: &Assignment, i: usize) -> Option<usize> {
    let n = assignment.len();
    let probes = move || (1..n).map(move |step| (i + step) % n);

    probes()
        .find(|&j| !assignment.is_fixed(j))
        .or_else(|| probes().next())
}

/// Pairs every participant with a receiver other than themselves.
///
/// Pairs come back in roster order. Needs at least two distinct participants
/// and rejects duplicate names. See the module docs for the distribution
/// caveat.
pub fn generate<R: Rng + ?Sized>(participants: &[String], rng: &mut R) -> Result<Vec<Pair>> {
    let unique = count_unique(participants);
    if unique < MIN_PARTICIPANTS {
        return Err(SantaError::InvalidInput {
            unique,
            required: MIN_PARTICIPANTS,
        });
    }
    validate_unique("participants", participants)?;

    let assignment = derange(participants.len(), rng)?;

    Ok(participants
        .iter()
        .zip(assignment.receivers())
        .map(|(giver, &receiver)| Pair::new(giver.clone(), participants[receiver].clone()))
        .collect())
}

/// [`generate`] with the thread-local system RNG.
pub fn generate_with_thread_rng(participants: &[String]) -> Result<Vec<Pair>> {
    generate(participants, &mut rand::thread_rng())
}
