//! CLI command implementations.

pub mod image;
pub mod list;
pub mod stream;

use std::time::{SystemTime, UNIX_EPOCH};

use clap::Args;
use prngzoo_core::{AnyGenerator, GeneratorKind};

/// How a generator's starting registers are chosen
#[derive(Args, Debug, Clone, Default)]
pub struct SeedArgs {
    /// Seed value (wrapped to the register width)
    #[arg(short, long, conflicts_with = "reference")]
    pub seed: Option<u64>,

    /// Start from the fixed reference registers instead of a seed
    #[arg(long)]
    pub reference: bool,
}

impl SeedArgs {
    /// Seed to use, or `None` for reference registers
    ///
    /// Falls back to the system clock and logs the value so the run can be
    /// repeated with `--seed`.
    pub fn resolve(&self) -> Option<u64> {
        if self.reference {
            return None;
        }
        Some(self.seed.unwrap_or_else(|| {
            let seed = clock_seed();
            tracing::info!(seed, "no seed given, using system clock");
            seed
        }))
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64
}

/// Build `kind` from a resolved seed
pub fn build_generator(kind: GeneratorKind, seed: Option<u64>) -> AnyGenerator {
    match seed {
        Some(seed) => AnyGenerator::seeded(kind, seed),
        None => AnyGenerator::reference(kind),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_has_no_seed() {
        let args = SeedArgs {
            seed: None,
            reference: true,
        };
        assert_eq!(args.resolve(), None);
    }

    #[test]
    fn test_explicit_seed_wins() {
        let args = SeedArgs {
            seed: Some(42),
            reference: false,
        };
        assert_eq!(args.resolve(), Some(42));
    }

    #[test]
    fn test_build_generator_matches_library() {
        let mut a = build_generator(GeneratorKind::Pcg32, Some(7));
        let mut b = AnyGenerator::seeded(GeneratorKind::Pcg32, 7);
        assert_eq!(a.next_u64(), b.next_u64());

        let c = build_generator(GeneratorKind::Pcg32, None);
        assert_eq!(c, AnyGenerator::reference(GeneratorKind::Pcg32));
    }
}
