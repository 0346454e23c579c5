//! Edit operations, tail instructions, and the compiled script report.
//!
//! This module defines the data contract between the two halves of the
//! compiler:
//! - [`EditOp`]: a single abstract edit in original-string coordinates,
//!   produced by the alignment engine
//! - [`Instruction`]: a single tail-machine instruction, produced by the
//!   synthesizer
//! - [`Step`]: an instruction paired with the working string after it
//! - [`ScriptReport`]: a versioned envelope for a full compile run
//! - [`SynthesisError`] / [`CompileError`]: errors raised along the way

use crate::config::ConfigError;
use crate::error_codes;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single abstract edit operation in the coordinate space of the string it
/// was derived from: `Substitute`/`Delete` carry a **source** index,
/// `Insert` carries a **target** index. Indices count `char`s, not bytes.
///
/// `Match` is part of the closed enum so every consumer handles it, but the
/// alignment traceback never materializes it in emitted scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EditOp {
    Match,
    Substitute { index: u32, ch: char },
    Delete { index: u32 },
    Insert { index: u32, ch: char },
}

/// One instruction of the tail-only machine.
///
/// Length law: the working string grows by one after `Append`, shrinks by
/// one after `DeleteTail`, and keeps its length after `Rotate` and
/// `SubstituteTail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Instruction {
    Rotate,
    Append { ch: char },
    DeleteTail,
    SubstituteTail { ch: char },
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Instruction::Rotate => write!(f, "Rotate"),
            Instruction::Append { ch } => write!(f, "Append({ch})"),
            Instruction::DeleteTail => write!(f, "DeleteTail"),
            Instruction::SubstituteTail { ch } => write!(f, "SubstituteTail({ch})"),
        }
    }
}

/// An emitted instruction together with the working-string value *after*
/// applying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub instruction: Instruction,
    pub after: String,
}

impl Step {
    pub fn new(instruction: Instruction, after: impl Into<String>) -> Step {
        Step {
            instruction,
            after: after.into(),
        }
    }
}

/// Summary metadata about a streaming synthesis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthSummary {
    /// Total number of steps emitted, repair rotations included.
    pub step_count: usize,
    /// Number of trailing `Rotate` steps added by the repair pass
    /// (zero when the bracketed script landed on the target directly).
    pub corrective_rotations: u32,
}

/// Errors produced by the synthesizer.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SynthesisError {
    #[error(
        "[TAILSCRIPT_SYNTH_001] rotation repair exhausted after {attempts} attempts: '{working}' is not a rotation of '{target}'. Suggestion: the op sequence does not describe this source/target pair; recompute it with `align`."
    )]
    Unreachable {
        working: String,
        target: String,
        attempts: usize,
    },

    #[error("[TAILSCRIPT_SYNTH_002] sink error: {message}. Suggestion: check the step consumer and retry.")]
    SinkError { message: String },
}

impl SynthesisError {
    pub fn code(&self) -> &'static str {
        match self {
            SynthesisError::Unreachable { .. } => error_codes::SYNTH_UNREACHABLE,
            SynthesisError::SinkError { .. } => error_codes::SYNTH_SINK_ERROR,
        }
    }
}

/// Errors produced by the top-level compile entry points.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CompileError {
    #[error(
        "[TAILSCRIPT_COMPILE_001] alignment limit exceeded: source={source_len} chars, target={target_len} chars (limit: {max_len}). Suggestion: increase `max_align_len` or set `on_limit_exceeded` to `return_partial_result`."
    )]
    LimitsExceeded {
        source_len: usize,
        target_len: usize,
        max_len: u32,
    },

    #[error("[TAILSCRIPT_COMPILE_002] synthesis failed: {0}")]
    Synthesis(#[from] SynthesisError),

    #[error("[TAILSCRIPT_COMPILE_003] invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl CompileError {
    pub fn code(&self) -> &'static str {
        match self {
            CompileError::LimitsExceeded { .. } => error_codes::COMPILE_LIMITS_EXCEEDED,
            CompileError::Synthesis(_) => error_codes::COMPILE_SYNTHESIS,
            CompileError::Config(_) => error_codes::COMPILE_CONFIG,
        }
    }
}

/// A versioned record of one compile run.
///
/// The `version` field indicates the schema version for forwards
/// compatibility.
///
/// # Incomplete results
///
/// When input limits are exceeded under
/// [`LimitBehavior::ReturnPartialResult`](crate::LimitBehavior), the report
/// carries no ops or steps and:
///
/// - `complete == false`
/// - `warnings` contains at least one human-readable explanation
///
/// The CLI prints warnings to stderr as `Warning: ...`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptReport {
    /// Schema version (currently "1").
    pub version: String,
    pub source: String,
    pub target: String,
    /// Minimum edit distance between `source` and `target` (0 when the
    /// report is partial).
    pub distance: u32,
    /// The abstract edit script, in left-to-right application order.
    pub ops: Vec<EditOp>,
    /// The synthesized tail-machine program, one working-string snapshot per
    /// instruction.
    pub steps: Vec<Step>,
    #[serde(default = "default_complete")]
    pub complete: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

fn default_complete() -> bool {
    true
}

impl ScriptReport {
    pub const SCHEMA_VERSION: &'static str = "1";

    pub fn new(source: impl Into<String>, target: impl Into<String>) -> ScriptReport {
        ScriptReport {
            version: Self::SCHEMA_VERSION.to_string(),
            source: source.into(),
            target: target.into(),
            distance: 0,
            ops: Vec::new(),
            steps: Vec::new(),
            complete: true,
            warnings: Vec::new(),
        }
    }

    pub fn with_partial_result(
        source: impl Into<String>,
        target: impl Into<String>,
        warning: String,
    ) -> ScriptReport {
        let mut report = ScriptReport::new(source, target);
        report.complete = false;
        report.warnings = vec![warning];
        report
    }

    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    /// The working string after the last instruction (the source itself when
    /// the program is empty).
    pub fn final_string(&self) -> &str {
        self.steps
            .last()
            .map(|step| step.after.as_str())
            .unwrap_or(self.source.as_str())
    }

    pub fn instructions(&self) -> impl Iterator<Item = &Instruction> {
        self.steps.iter().map(|step| &step.instruction)
    }
}
