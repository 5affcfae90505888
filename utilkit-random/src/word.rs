//! Random alphanumeric words.

use crate::error::{RandomError, RandomResult};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Characters a word is drawn from: `0-9`, `a-z`, `A-Z`.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// How long a generated word should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WordLength {
    /// Exactly `len` characters.
    Fixed { len: usize },
    /// A length drawn from `[min, max]`.
    Between { min: usize, max: usize },
}

impl WordLength {
    /// Maps the flag form onto a length: `false` means exactly `min`
    /// characters and ignores `max`.
    #[must_use]
    pub const fn from_flag(random_flag: bool, min: usize, max: usize) -> Self {
        if random_flag {
            Self::Between { min, max }
        } else {
            Self::Fixed { len: min }
        }
    }

    /// Picks a concrete length.
    ///
    /// For `Between`, the length is `round(u * (max - min)) + min` with `u`
    /// uniform in `[0, 1)`, so the end points are half as likely as the
    /// lengths between them.
    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> RandomResult<usize> {
        match self {
            Self::Fixed { len } => Ok(len),
            Self::Between { min, max } if max < min => {
                Err(RandomError::InvalidLength { min, max })
            }
            Self::Between { min, max } => {
                let span = (max - min) as f64;
                let offset = (rng.r#gen::<f64>() * span).round() as usize;
                Ok(min + offset.min(max - min))
            }
        }
    }
}

/// Generates a word of the given length from [`ALPHABET`].
///
/// Characters are drawn independently and uniformly, with replacement.
///
/// # Errors
/// [`RandomError::InvalidLength`] if a `Between` length has `max < min`.
pub fn random_word_with<R: Rng + ?Sized>(rng: &mut R, length: WordLength) -> RandomResult<String> {
    let len = length.sample(rng)?;
    let word: String = (0..len)
        .map(|_| char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())]))
        .collect();
    trace!(len, "generated random word");
    Ok(word)
}

/// Generates a word of exactly `min` characters, or of a length in
/// `[min, max]` when `random_flag` is set.
///
/// # Errors
/// [`RandomError::InvalidLength`] if `random_flag` is set and `max < min`.
pub fn random_word<R: Rng + ?Sized>(
    rng: &mut R,
    random_flag: bool,
    min: usize,
    max: usize,
) -> RandomResult<String> {
    random_word_with(rng, WordLength::from_flag(random_flag, min, max))
}

/// [`random_word`] using the thread-local generator.
pub fn thread_random_word(random_flag: bool, min: usize, max: usize) -> RandomResult<String> {
    random_word(&mut rand::thread_rng(), random_flag, min, max)
}
