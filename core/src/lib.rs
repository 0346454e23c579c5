//! tailscript: compile string edits onto a tail-only instruction machine.
//!
//! This crate provides functionality for:
//! - Computing a minimal edit script between two strings (Levenshtein DP
//!   with a fixed, deterministic tie-break)
//! - Re-targeting that script onto four tail-only primitives (`Rotate`,
//!   `Append`, `DeleteTail`, `SubstituteTail`) via rotation bracketing
//! - Executing and replaying instruction programs, with the working string
//!   exposed after every step
//! - Serializing compile reports to JSON and rendering programs as
//!   GraphViz digraphs
//!
//! # Quick Start
//!
//! ```
//! use tailscript::{compile, CompileConfig};
//!
//! let report = compile("Haus", "Maus", &CompileConfig::default())?;
//! assert_eq!(report.distance, 1);
//! assert_eq!(report.final_string(), "Maus");
//!
//! for step in &report.steps {
//!     println!("{} -> {}", step.instruction, step.after);
//! }
//! # Ok::<(), tailscript::CompileError>(())
//! ```

mod align;
mod compile;
mod config;
pub(crate) mod error_codes;
pub mod executor;
mod output;
mod script;
mod sink;
mod synth;
mod training;

pub use align::{align, Alignment};
pub use compile::{compile, compile_streaming};
pub use config::{CompileConfig, CompileConfigBuilder, ConfigError, LimitBehavior};
pub use output::dot::instructions_to_dot;
pub use output::json::{serialize_script_report, serialize_script_report_pretty};
pub use script::{
    CompileError, EditOp, Instruction, ScriptReport, Step, SynthSummary, SynthesisError,
};
pub use sink::{CallbackSink, StepSink, VecSink};
pub use synth::{synthesize, synthesize_streaming, Synthesis};
pub use training::{train, TrainError, TrainOutcome};
