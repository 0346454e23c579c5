//! Top-level orchestration: align, then synthesize, then package the result.
//!
//! The two engines run in strict sequence and share nothing but the edit
//! script. This module adds the configured input rail and folds the
//! synthesizer's repair count into the report warnings.

use crate::align::align;
use crate::config::{CompileConfig, LimitBehavior};
use crate::script::{CompileError, ScriptReport};
use crate::sink::StepSink;
use crate::synth::{synthesize, synthesize_streaming};
use log::debug;

/// Compile `source` into `target`: a minimal edit script plus the tail
/// instruction program realizing it.
pub fn compile(
    source: &str,
    target: &str,
    config: &CompileConfig,
) -> Result<ScriptReport, CompileError> {
    config.validate()?;

    if let Some(partial) = check_limits(source, target, config)? {
        return Ok(partial);
    }

    let alignment = align(source, target);
    debug!(
        "compiling '{source}' -> '{target}': distance {}",
        alignment.distance
    );
    let synthesis = synthesize(source, target, &alignment.ops)?;

    let mut report = ScriptReport::new(source, target);
    report.distance = alignment.distance;
    report.ops = alignment.ops;
    report.steps = synthesis.steps;
    if synthesis.corrective_rotations > 0 {
        report.add_warning(format!(
            "edit script missed the target frame; applied {} corrective rotations",
            synthesis.corrective_rotations
        ));
    }
    Ok(report)
}

/// Streaming variant: synthesized steps flow through `sink` as they are
/// produced; the returned report carries everything but the steps.
pub fn compile_streaming<S: StepSink>(
    source: &str,
    target: &str,
    config: &CompileConfig,
    sink: &mut S,
) -> Result<ScriptReport, CompileError> {
    config.validate()?;

    if let Some(partial) = check_limits(source, target, config)? {
        return Ok(partial);
    }

    let alignment = align(source, target);
    let summary = synthesize_streaming(source, target, &alignment.ops, sink)?;

    let mut report = ScriptReport::new(source, target);
    report.distance = alignment.distance;
    report.ops = alignment.ops;
    if summary.corrective_rotations > 0 {
        report.add_warning(format!(
            "edit script missed the target frame; applied {} corrective rotations",
            summary.corrective_rotations
        ));
    }
    Ok(report)
}

fn check_limits(
    source: &str,
    target: &str,
    config: &CompileConfig,
) -> Result<Option<ScriptReport>, CompileError> {
    let source_len = source.chars().count();
    let target_len = target.chars().count();
    let max_len = config.max_align_len as usize;
    if source_len <= max_len && target_len <= max_len {
        return Ok(None);
    }

    match config.on_limit_exceeded {
        LimitBehavior::ReturnError => Err(CompileError::LimitsExceeded {
            source_len,
            target_len,
            max_len: config.max_align_len,
        }),
        LimitBehavior::ReturnPartialResult => Ok(Some(ScriptReport::with_partial_result(
            source,
            target,
            format!(
                "inputs exceed max_align_len ({} chars): source={source_len}, target={target_len}",
                config.max_align_len
            ),
        ))),
    }
}
