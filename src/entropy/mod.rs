//! Randomness sources and entropy estimates.

mod source;

pub use source::Source;

/// Uniform integer source used by the generator.
pub trait RandomSource {
    /// Return an integer drawn uniformly from `[0, n)`. `n` must be non-zero.
    fn below(&mut self, n: usize) -> usize;
}

impl<R: ::rand::RngCore + ?Sized> RandomSource for R {
    #[inline]
    fn below(&mut self, n: usize) -> usize {
        ::rand::Rng::gen_range(self, 0..n)
    }
}

/// Estimated password entropy in bits.
pub fn estimate_bits(password_length: usize, pool_size: usize) -> f64 {
    if pool_size == 0 {
        return 0.0;
    }
    password_length as f64 * (pool_size as f64).log2()
}

/// Strength label for an entropy estimate.
pub fn strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}
