//! Random selection utilities.
//!
//! Both helpers take the RNG explicitly so callers control seeding and the
//! whole generation stays reproducible. Selection is strict: asking for more
//! entries than the pool holds is a contract violation and is rejected, not
//! clamped. Callers that want clamping (the enhancer does) bound the count by
//! the pool length before calling in.

use rand::Rng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::error::GenerationError;

/// Draws a uniformly distributed integer from the inclusive range `min..=max`.
///
/// Returns `min` when the bounds coincide.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidRange`] when `min > max`. Inverted
/// bounds are never swapped; they indicate a mistake in the relation table.
pub fn random_int_between(
    rng: &mut ChaCha8Rng,
    min: usize,
    max: usize,
) -> Result<usize, GenerationError> {
    if min > max {
        return Err(GenerationError::InvalidRange { min, max });
    }
    if min == max {
        return Ok(min);
    }
    Ok(rng.random_range(min..=max))
}

/// Selects `count` distinct entries from `pool`, in no particular order.
///
/// The pool is not mutated; entries are cloned into a fresh vector, shuffled,
/// and truncated. No entry appears twice in the result.
///
/// # Errors
///
/// Returns [`GenerationError::SelectionOverflow`] when `count` exceeds the
/// pool length.
pub fn random_entries<T: Clone>(
    rng: &mut ChaCha8Rng,
    pool: &[T],
    count: usize,
) -> Result<Vec<T>, GenerationError> {
    if count > pool.len() {
        return Err(GenerationError::SelectionOverflow {
            requested: count,
            available: pool.len(),
        });
    }
    let mut drawn = pool.to_vec();
    drawn.shuffle(rng);
    drawn.truncate(count);
    Ok(drawn)
}
