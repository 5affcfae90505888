//! Hex colours.

use rand::Rng;

/// Returns `#rrggbb` with lowercase digits, uniform over all 24-bit colours.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("#{:06x}", rng.gen_range(0..0x100_0000u32))
}

/// [`random_color`] using the thread-local generator.
#[must_use]
pub fn thread_random_color() -> String {
    random_color(&mut rand::thread_rng())
}
