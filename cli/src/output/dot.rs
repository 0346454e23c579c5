use anyhow::Result;
use std::io::Write;
use tailscript::{instructions_to_dot, ScriptReport};

pub fn write_dot_report<W: Write>(w: &mut W, report: &ScriptReport) -> Result<()> {
    let dot = instructions_to_dot(&report.source, &report.steps);
    w.write_all(dot.as_bytes())?;
    Ok(())
}
