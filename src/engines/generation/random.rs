use rand::Rng;

/// Source of randomness threaded through every operation that needs entropy.
///
/// Any `rand::Rng` qualifies, so a seeded `StdRng` gives reproducible runs.
/// Tests can supply a scripted source to force exact draws.
pub trait RandomSource {
    /// Uniform integer in `[min, max]` (inclusive)
    fn uniform_int(&mut self, min: i32, max: i32) -> i32;

    /// Uniform real in `[min, max)`
    fn uniform_real(&mut self, min: f64, max: f64) -> f64;

    /// Uniform index in `[0, len)`; `len` must be positive
    fn uniform_index(&mut self, len: usize) -> usize {
        let upper = i32::try_from(len - 1).unwrap_or(i32::MAX);
        self.uniform_int(0, upper) as usize
    }

    /// Bernoulli trial with success probability `p`
    fn chance(&mut self, p: f64) -> bool {
        self.uniform_real(0.0, 1.0) < p
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn uniform_int(&mut self, min: i32, max: i32) -> i32 {
        self.gen_range(min..=max)
    }

    fn uniform_real(&mut self, min: f64, max: f64) -> f64 {
        self.gen_range(min..max)
    }
}
