use crate::output::{dot, json, text};
use crate::OutputFormat;
use anyhow::{bail, Result};
use std::io;
use std::process::ExitCode;
use tailscript::{compile, CompileConfig, LimitBehavior, ScriptReport};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

#[allow(clippy::too_many_arguments)]
pub fn run(
    source: &str,
    target: &str,
    format: OutputFormat,
    trace: bool,
    quiet: bool,
    verbose: bool,
    max_len: Option<u32>,
    strict_limits: bool,
) -> Result<ExitCode> {
    if quiet && verbose {
        bail!("Cannot use both --quiet and --verbose flags together");
    }

    if trace && format != OutputFormat::Text {
        bail!("--trace only applies to --format=text");
    }

    let verbosity = if quiet {
        Verbosity::Quiet
    } else if verbose {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    };

    let config = build_config(max_len, strict_limits)?;
    let report = compile(source, target, &config)?;

    print_warnings_to_stderr(&report);

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Text => {
            text::write_text_report(&mut handle, &report, verbosity, trace)?;
        }
        OutputFormat::Json => {
            json::write_json_report(&mut handle, &report)?;
        }
        OutputFormat::Dot => {
            dot::write_dot_report(&mut handle, &report)?;
        }
    }

    Ok(exit_code_from_report(&report))
}

fn build_config(max_len: Option<u32>, strict_limits: bool) -> Result<CompileConfig> {
    let mut builder = CompileConfig::builder();
    if let Some(limit) = max_len {
        builder = builder.max_align_len(limit);
    }
    if strict_limits {
        builder = builder.on_limit_exceeded(LimitBehavior::ReturnError);
    }
    Ok(builder.build()?)
}

fn print_warnings_to_stderr(report: &ScriptReport) {
    for warning in &report.warnings {
        eprintln!("Warning: {}", warning);
    }
}

fn exit_code_from_report(report: &ScriptReport) -> ExitCode {
    if report.ops.is_empty() && report.complete {
        ExitCode::from(0)
    } else {
        ExitCode::from(1)
    }
}
