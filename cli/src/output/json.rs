use anyhow::Result;
use std::io::Write;
use tailscript::ScriptReport;

pub fn write_json_report<W: Write>(w: &mut W, report: &ScriptReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut *w, report)?;
    writeln!(w)?;
    Ok(())
}
