//! Random value generators for utilkit.
//!
//! Every generator takes the random source as an argument, so callers can
//! pass a seeded [`rand::rngs::StdRng`] for reproducible output or use the
//! `thread_*` wrappers backed by [`rand::thread_rng`].
//!
//! - [`random_num`] — uniform integer in an inclusive range
//! - [`random_color`] — `#rrggbb` hex colour
//! - [`random_word`] — alphanumeric string of fixed or bounded length
//!
//! None of these are suitable for secrets.

mod color;
mod error;
mod num;
mod word;

pub use color::{random_color, thread_random_color};
pub use error::{RandomError, RandomResult};
pub use num::{random_num, thread_random_num};
pub use word::{ALPHABET, WordLength, random_word, random_word_with, thread_random_word};
