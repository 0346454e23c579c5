//! Monte-Carlo permutation search over an instruction multiset.
//!
//! Shuffles a copy of the given program until some ordering reproduces the
//! target, or the configured attempt cap is hit. Kept outside the
//! deterministic core: `compile` never calls this, and determinism is only
//! available through an explicit seed.

use crate::config::CompileConfig;
use crate::error_codes;
use crate::executor;
use crate::script::Instruction;
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainOutcome {
    /// The first ordering found that maps `source` to `target`.
    pub order: Vec<Instruction>,
    /// Number of shuffles tried, the successful one included.
    pub attempts: u32,
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TrainError {
    #[error(
        "[TAILSCRIPT_TRAIN_001] no permutation reproduced the target within {attempts} attempts. Suggestion: raise `max_train_attempts` or check that the instruction multiset can realize the target at all."
    )]
    AttemptsExhausted { attempts: u32 },
}

impl TrainError {
    pub fn code(&self) -> &'static str {
        match self {
            TrainError::AttemptsExhausted { .. } => error_codes::TRAIN_ATTEMPTS_EXHAUSTED,
        }
    }
}

/// Search for an ordering of `instructions` that maps `source` to `target`.
pub fn train(
    instructions: &[Instruction],
    source: &str,
    target: &str,
    config: &CompileConfig,
) -> Result<TrainOutcome, TrainError> {
    let mut rng = match config.train_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut order: Vec<Instruction> = instructions.to_vec();
    for attempt in 1..=config.max_train_attempts {
        order.shuffle(&mut rng);
        if executor::run(source, &order) == target {
            debug!("training found an ordering after {attempt} attempts");
            return Ok(TrainOutcome {
                order,
                attempts: attempt,
            });
        }
    }

    Err(TrainError::AttemptsExhausted {
        attempts: config.max_train_attempts,
    })
}
