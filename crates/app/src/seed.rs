use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn value(self) -> u64 {
        match self {
            Self::Cli(seed) | Self::Generated(seed) => seed,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeedArgError {
    #[error("missing value for --seed")]
    MissingValue,
    #[error("seed value '{0}' must be a number")]
    NotANumber(String),
    #[error("seed provided more than once")]
    Duplicate,
}

static RUNTIME_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn generate_runtime_seed() -> u64 {
    let nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |elapsed| elapsed.as_nanos());
    let counter = RUNTIME_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);
    let entropy = (nanos as u64)
        ^ ((nanos >> 64) as u64)
        ^ u64::from(process::id()).rotate_left(17)
        ^ counter.rotate_left(7);
    splitmix(entropy)
}

/// Picks the world seed from `--seed N` or `--seed=N`; anything else in argv is ignored.
pub fn resolve_seed_from_args(
    args: &[String],
    generated_seed: u64,
) -> Result<SeedChoice, SeedArgError> {
    let mut chosen = None;
    let mut rest = args.iter().skip(1);

    while let Some(argument) = rest.next() {
        let raw = if argument == "--seed" {
            rest.next().ok_or(SeedArgError::MissingValue)?.as_str()
        } else if let Some(inline) = argument.strip_prefix("--seed=") {
            inline
        } else {
            continue;
        };

        let seed = raw.parse::<u64>().map_err(|_| SeedArgError::NotANumber(raw.to_string()))?;
        if chosen.replace(seed).is_some() {
            return Err(SeedArgError::Duplicate);
        }
    }

    Ok(chosen.map_or(SeedChoice::Generated(generated_seed), SeedChoice::Cli))
}

fn splitmix(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|part| part.to_string()).collect()
    }

    #[test]
    fn falls_back_to_generated_seed() {
        let choice = resolve_seed_from_args(&argv(&["strata"]), 9_876_543).expect("no flag");
        assert_eq!(choice, SeedChoice::Generated(9_876_543));
        assert_eq!(choice.value(), 9_876_543);
    }

    #[test]
    fn accepts_separate_and_inline_values() {
        assert_eq!(
            resolve_seed_from_args(&argv(&["strata", "--seed", "4242"]), 1),
            Ok(SeedChoice::Cli(4_242))
        );
        assert_eq!(
            resolve_seed_from_args(&argv(&["strata", "--seed=2026"]), 1),
            Ok(SeedChoice::Cli(2_026))
        );
    }

    #[test]
    fn unrelated_arguments_are_ignored() {
        let choice = resolve_seed_from_args(&argv(&["strata", "--fullscreen", "--seed=7"]), 1);
        assert_eq!(choice, Ok(SeedChoice::Cli(7)));
    }

    #[test]
    fn rejects_bad_seed_arguments() {
        assert_eq!(
            resolve_seed_from_args(&argv(&["strata", "--seed"]), 1),
            Err(SeedArgError::MissingValue)
        );
        assert_eq!(
            resolve_seed_from_args(&argv(&["strata", "--seed=abc"]), 1),
            Err(SeedArgError::NotANumber("abc".to_string()))
        );
        assert_eq!(
            resolve_seed_from_args(&argv(&["strata", "--seed=1", "--seed", "2"]), 1),
            Err(SeedArgError::Duplicate)
        );
    }

    #[test]
    fn runtime_seeds_vary_per_call() {
        assert_ne!(generate_runtime_seed(), generate_runtime_seed());
    }
}
