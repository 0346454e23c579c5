use crate::commands::compile::Verbosity;
use anyhow::Result;
use std::io::Write;
use tailscript::{EditOp, ScriptReport};

pub fn write_text_report<W: Write>(
    w: &mut W,
    report: &ScriptReport,
    verbosity: Verbosity,
    trace: bool,
) -> Result<()> {
    writeln!(w, "compile \"{}\" -> \"{}\"", report.source, report.target)?;
    writeln!(w, "distance: {}", report.distance)?;

    if !report.complete {
        writeln!(w, "result: incomplete (see warnings)")?;
        return Ok(());
    }

    if report.ops.is_empty() {
        writeln!(w, "No edits needed.")?;
        return Ok(());
    }

    if verbosity != Verbosity::Quiet {
        writeln!(w, "edit script ({} ops):", report.ops.len())?;
        for op in &report.ops {
            writeln!(w, "  {}", render_op(op))?;
        }

        writeln!(w, "instructions ({}):", report.steps.len())?;
        let show_trace = trace || verbosity == Verbosity::Verbose;
        for (idx, step) in report.steps.iter().enumerate() {
            if show_trace {
                writeln!(w, "  {:>4}. {:<20} {}", idx + 1, step.instruction.to_string(), step.after)?;
            } else {
                writeln!(w, "  {:>4}. {}", idx + 1, step.instruction)?;
            }
        }
    }

    writeln!(w, "final: \"{}\"", report.final_string())?;
    Ok(())
}

fn render_op(op: &EditOp) -> String {
    match op {
        EditOp::Match => "match".to_string(),
        EditOp::Substitute { index, ch } => {
            format!("substitute '{ch}' at source index {index}")
        }
        EditOp::Delete { index } => format!("delete at source index {index}"),
        EditOp::Insert { index, ch } => format!("insert '{ch}' at target index {index}"),
    }
}
