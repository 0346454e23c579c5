use anyhow::{bail, Result};
use std::process::ExitCode;
use tailscript::{compile, train, CompileConfig, Instruction};

pub fn run(
    source: &str,
    target: &str,
    attempts: Option<u32>,
    seed: Option<u64>,
) -> Result<ExitCode> {
    let mut builder = CompileConfig::builder().train_seed(seed);
    if let Some(cap) = attempts {
        builder = builder.max_train_attempts(cap);
    }
    let config = builder.build()?;

    let report = compile(source, target, &config)?;
    if !report.complete {
        bail!("Cannot train on a partial compile result; raise --max-len");
    }

    let instructions: Vec<Instruction> = report.instructions().copied().collect();
    let outcome = train(&instructions, source, target, &config)?;

    println!("found an ordering after {} attempts:", outcome.attempts);
    for instruction in &outcome.order {
        println!("  {}", instruction);
    }

    Ok(ExitCode::from(0))
}
