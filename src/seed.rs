use log::warn;
use rand::{RngCore, SeedableRng, thread_rng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};

/// Environment variable consulted by [`Seed::from_env`].
pub const SEED_ENV: &str = "MORA_SEED";

/// Seed for random vector and matrix generation.
///
/// `Seed(0)` means unseeded: every generator it builds starts from fresh
/// entropy. Any other value reproduces the same stream on every call.
///
/// # Example
/// ```rust
/// use mora::{Matrix, Seed};
///
/// let a = Matrix::<f64>::rand(2, 2, &mut Seed(7).rng());
/// let b = Matrix::<f64>::rand(2, 2, &mut Seed(7).rng());
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(pub u64);

impl Seed {
    /// Non-deterministic generation.
    pub const UNSEEDED: Seed = Seed(0);

    /// Whether generators built from this seed are reproducible.
    pub fn is_deterministic(self) -> bool {
        self.0 != 0
    }

    /// Read the seed from `MORA_SEED`, falling back to [`Seed::UNSEEDED`].
    pub fn from_env() -> Self {
        Self::from_var(std::env::var(SEED_ENV).ok().as_deref())
    }

    fn from_var(raw: Option<&str>) -> Self {
        raw.map_or(Self::UNSEEDED, Self::parse)
    }

    fn parse(raw: &str) -> Self {
        raw.trim().parse().map(Seed).unwrap_or_else(|e| {
            warn!("ignoring {SEED_ENV}={raw:?}: {e}");
            Self::UNSEEDED
        })
    }

    /// Fast generator for this seed.
    pub fn rng(self) -> Xoshiro256PlusPlus {
        let state = if self.is_deterministic() {
            self.0
        } else {
            thread_rng().next_u64()
        };
        Xoshiro256PlusPlus::seed_from_u64(state)
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Seed(value)
    }
}
