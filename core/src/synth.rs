//! Re-targets an abstract edit script onto the tail-only machine.
//!
//! Substitution and deletion act on a source index, insertion on a target
//! index, but the machine can only edit the last character. Each edit is
//! therefore bracketed in rotations: rotate until the indexed position sits
//! at the tail, apply the tail edit, rotate back to restore the relative
//! order of untouched characters. Indices are taken as recorded by the
//! alignment traceback and reduced modulo the live working-string length.
//!
//! After the last op a verification pass compares the working string with
//! the target; a residual mismatch is repaired by at most `len(working)`
//! further rotations. If no rotation matches, the op sequence cannot realize
//! the target under this instruction model and synthesis fails.

use crate::executor;
use crate::script::{EditOp, Instruction, Step, SynthSummary, SynthesisError};
use crate::sink::{StepSink, VecSink};
use log::warn;

/// The synthesized program together with the final working string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synthesis {
    pub steps: Vec<Step>,
    /// Equal to the target on success.
    pub final_string: String,
    /// Trailing repair rotations that were needed (0 when the bracketed
    /// script landed on the target directly).
    pub corrective_rotations: u32,
}

/// Synthesize tail instructions for `ops`, collecting every step.
pub fn synthesize(
    source: &str,
    target: &str,
    ops: &[EditOp],
) -> Result<Synthesis, SynthesisError> {
    let mut sink = VecSink::new();
    let summary = synthesize_streaming(source, target, ops, &mut sink)?;
    let steps = sink.into_steps();
    let final_string = steps
        .last()
        .map(|step| step.after.clone())
        .unwrap_or_else(|| source.to_string());
    Ok(Synthesis {
        steps,
        final_string,
        corrective_rotations: summary.corrective_rotations,
    })
}

/// Streaming variant of [`synthesize`]: every step flows through `sink` in
/// emission order, repair rotations included.
pub fn synthesize_streaming<S: StepSink>(
    source: &str,
    target: &str,
    ops: &[EditOp],
    sink: &mut S,
) -> Result<SynthSummary, SynthesisError> {
    sink.begin()?;

    let mut current: Vec<char> = source.chars().collect();
    let target_chars: Vec<char> = target.chars().collect();
    let mut step_count = 0usize;

    for op in ops {
        match *op {
            EditOp::Match => {}
            EditOp::Substitute { index, ch } => {
                bracketed_tail_edit(
                    sink,
                    &mut current,
                    &mut step_count,
                    index,
                    Instruction::SubstituteTail { ch },
                )?;
            }
            EditOp::Delete { index } => {
                bracketed_tail_edit(
                    sink,
                    &mut current,
                    &mut step_count,
                    index,
                    Instruction::DeleteTail,
                )?;
            }
            EditOp::Insert { index, ch } => {
                let len = current.len();
                let t = index as usize % (len + 1);
                for _ in 0..t {
                    emit(sink, &mut current, &mut step_count, Instruction::Rotate)?;
                }
                emit(sink, &mut current, &mut step_count, Instruction::Append { ch })?;
                let len_after = current.len();
                let back = (len_after - t) % len_after;
                for _ in 0..back {
                    emit(sink, &mut current, &mut step_count, Instruction::Rotate)?;
                }
            }
        }
    }

    let corrective_rotations = repair_by_rotation(
        sink,
        &mut current,
        &mut step_count,
        &target_chars,
        target,
    )?;
    if corrective_rotations > 0 {
        warn!(
            "edit script missed the target frame; repaired with {corrective_rotations} rotations"
        );
    }

    sink.finish()?;

    Ok(SynthSummary {
        step_count,
        corrective_rotations,
    })
}

/// Rotate `index` to the tail, apply `edit`, rotate back. Both rotation
/// counts are reduced modulo the live length; on an empty working string the
/// tail edit is emitted alone (the primitive is an identity there).
fn bracketed_tail_edit<S: StepSink>(
    sink: &mut S,
    current: &mut Vec<char>,
    step_count: &mut usize,
    index: u32,
    edit: Instruction,
) -> Result<(), SynthesisError> {
    let len = current.len();
    let t = if len == 0 { 0 } else { (index as usize + 1) % len };
    for _ in 0..t {
        emit(sink, current, step_count, Instruction::Rotate)?;
    }
    emit(sink, current, step_count, edit)?;
    let len_after = current.len();
    let back = if len_after == 0 { 0 } else { (len_after - t) % len_after };
    for _ in 0..back {
        emit(sink, current, step_count, Instruction::Rotate)?;
    }
    Ok(())
}

fn repair_by_rotation<S: StepSink>(
    sink: &mut S,
    current: &mut Vec<char>,
    step_count: &mut usize,
    target_chars: &[char],
    target: &str,
) -> Result<u32, SynthesisError> {
    if current.as_slice() == target_chars {
        return Ok(0);
    }

    let bound = current.len();
    let mut rotations = 0u32;
    for _ in 0..bound {
        emit(sink, current, step_count, Instruction::Rotate)?;
        rotations += 1;
        if current.as_slice() == target_chars {
            return Ok(rotations);
        }
    }

    Err(SynthesisError::Unreachable {
        working: current.iter().collect(),
        target: target.to_string(),
        attempts: bound,
    })
}

fn emit<S: StepSink>(
    sink: &mut S,
    current: &mut Vec<char>,
    step_count: &mut usize,
    instruction: Instruction,
) -> Result<(), SynthesisError> {
    executor::apply(&instruction, current);
    sink.emit(Step {
        instruction,
        after: current.iter().collect(),
    })?;
    *step_count += 1;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instructions(synthesis: &Synthesis) -> Vec<Instruction> {
        synthesis.steps.iter().map(|s| s.instruction).collect()
    }

    fn afters(synthesis: &Synthesis) -> Vec<&str> {
        synthesis.steps.iter().map(|s| s.after.as_str()).collect()
    }

    #[test]
    fn head_substitution_brackets_exactly() {
        let ops = [EditOp::Substitute { index: 0, ch: 'M' }];
        let synthesis = synthesize("Haus", "Maus", &ops).expect("synthesis succeeds");

        assert_eq!(
            instructions(&synthesis),
            vec![
                Instruction::Rotate,
                Instruction::SubstituteTail { ch: 'M' },
                Instruction::Rotate,
                Instruction::Rotate,
                Instruction::Rotate,
            ]
        );
        assert_eq!(afters(&synthesis), vec!["ausH", "ausM", "usMa", "sMau", "Maus"]);
        assert_eq!(synthesis.final_string, "Maus");
        assert_eq!(synthesis.corrective_rotations, 0);
    }

    #[test]
    fn head_deletion_brackets_exactly() {
        let ops = [EditOp::Delete { index: 0 }];
        let synthesis = synthesize("ab", "b", &ops).expect("synthesis succeeds");
        assert_eq!(
            instructions(&synthesis),
            vec![Instruction::Rotate, Instruction::DeleteTail]
        );
        assert_eq!(afters(&synthesis), vec!["ba", "b"]);
        assert_eq!(synthesis.corrective_rotations, 0);
    }

    #[test]
    fn deleting_everything_lands_on_empty() {
        let ops = [
            EditOp::Delete { index: 0 },
            EditOp::Delete { index: 1 },
            EditOp::Delete { index: 2 },
        ];
        let synthesis = synthesize("abc", "", &ops).expect("synthesis succeeds");
        assert_eq!(synthesis.final_string, "");
        assert_eq!(synthesis.corrective_rotations, 0);
        assert_eq!(
            afters(&synthesis),
            vec!["bca", "bc", "cb", "c", ""]
        );
    }

    #[test]
    fn single_append_from_empty_source() {
        let ops = [EditOp::Insert { index: 0, ch: 'a' }];
        let synthesis = synthesize("", "a", &ops).expect("synthesis succeeds");
        assert_eq!(instructions(&synthesis), vec![Instruction::Append { ch: 'a' }]);
        assert_eq!(synthesis.final_string, "a");
    }

    #[test]
    fn interior_insert_is_repaired_by_rotation() {
        // The insert bracket restores a frame one rotation off; the repair
        // pass walks the working string back onto the target.
        let ops = [EditOp::Insert { index: 1, ch: 'c' }];
        let synthesis = synthesize("ab", "acb", &ops).expect("synthesis succeeds");
        assert_eq!(synthesis.final_string, "acb");
        assert_eq!(synthesis.corrective_rotations, 2);
        assert_eq!(
            afters(&synthesis),
            vec!["ba", "bac", "acb", "cba", "bac", "acb"]
        );
    }

    #[test]
    fn match_ops_emit_nothing() {
        let ops = [EditOp::Match, EditOp::Match];
        let synthesis = synthesize("ab", "ab", &ops).expect("synthesis succeeds");
        assert!(synthesis.steps.is_empty());
        assert_eq!(synthesis.final_string, "ab");
    }

    #[test]
    fn empty_script_with_rotated_target_uses_repair_only() {
        let synthesis = synthesize("ab", "ba", &[]).expect("synthesis succeeds");
        assert_eq!(instructions(&synthesis), vec![Instruction::Rotate]);
        assert_eq!(synthesis.final_string, "ba");
        assert_eq!(synthesis.corrective_rotations, 1);
    }

    #[test]
    fn unreachable_when_target_is_not_a_rotation() {
        let err = synthesize("abc", "xyz", &[]).expect_err("must fail");
        match err {
            SynthesisError::Unreachable {
                working,
                target,
                attempts,
            } => {
                assert_eq!(working, "abc");
                assert_eq!(target, "xyz");
                assert_eq!(attempts, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn out_of_range_indices_reduce_modulo_length() {
        // Index 7 on a two-char string reduces to the tail position; the
        // result is a well-formed program that simply misses the target.
        let ops = [EditOp::Substitute { index: 7, ch: 'q' }];
        let err = synthesize("ab", "zz", &ops).expect_err("must fail");
        assert!(matches!(err, SynthesisError::Unreachable { .. }));
    }

    #[test]
    fn empty_working_string_never_divides_by_zero() {
        let ops = [EditOp::Delete { index: 0 }];
        let err = synthesize("", "x", &ops).expect_err("must fail");
        match err {
            SynthesisError::Unreachable { attempts, .. } => assert_eq!(attempts, 0),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn streaming_reports_step_count() {
        let ops = [EditOp::Substitute { index: 0, ch: 'M' }];
        let mut sink = VecSink::new();
        let summary =
            synthesize_streaming("Haus", "Maus", &ops, &mut sink).expect("synthesis succeeds");
        assert_eq!(summary.step_count, 5);
        assert_eq!(summary.corrective_rotations, 0);
        assert_eq!(sink.into_steps().len(), 5);
    }
}
