//! Selectable randomness sources.

use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};

/// Where random draws come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Source {
    /// Thread-local generator seeded from the OS.
    #[default]
    Thread,
    /// Operating system generator, queried on every draw.
    Os,
    /// Deterministic generator for reproducible output.
    Seeded(u64),
}

impl Source {
    pub fn name(&self) -> &'static str {
        match self {
            Source::Thread => "thread rng",
            Source::Os => "os rng",
            Source::Seeded(_) => "seeded",
        }
    }

    /// Build the generator for this source.
    pub fn rng(&self) -> Box<dyn RngCore> {
        match *self {
            Source::Thread => Box::new(rand::thread_rng()),
            Source::Os => Box::new(OsRng),
            Source::Seeded(seed) => Box::new(StdRng::seed_from_u64(seed)),
        }
    }
}
