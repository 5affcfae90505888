//! Bounded integers.

use crate::error::{RandomError, RandomResult};
use rand::Rng;

/// Returns a uniformly distributed integer in `[ceil(min), floor(max)]`.
///
/// # Errors
/// [`RandomError::NonFinite`] if either bound is NaN or infinite,
/// [`RandomError::EmptyRange`] if no integer lies between the rounded bounds,
/// and [`RandomError::OutOfRange`] if a rounded bound does not fit in an `i64`.
pub fn random_num<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> RandomResult<i64> {
    if !min.is_finite() || !max.is_finite() {
        return Err(RandomError::NonFinite);
    }
    let lo = min.ceil();
    let hi = max.floor();
    if lo > hi {
        return Err(RandomError::EmptyRange { min, max });
    }
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range
    if lo < i64::MIN as f64 || hi >= i64::MAX as f64 {
        return Err(RandomError::OutOfRange { min, max });
    }
    Ok(rng.gen_range(lo as i64..=hi as i64))
}

/// [`random_num`] using the thread-local generator.
pub fn thread_random_num(min: f64, max: f64) -> RandomResult<i64> {
    random_num(&mut rand::thread_rng(), min, max)
}
