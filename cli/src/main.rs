mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use std::process::ExitCode;
use tailscript::{CompileError, SynthesisError};

#[derive(Parser)]
#[command(name = "tailscript")]
#[command(about = "Compile string edit scripts onto a tail-only instruction machine")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Compile a source string into a target string")]
    Compile {
        #[arg(help = "The string to start from")]
        source: String,
        #[arg(help = "The string to reach")]
        target: String,
        #[arg(long, short, value_enum, default_value = "text", help = "Output format")]
        format: OutputFormat,
        #[arg(long, help = "Show the working string after every instruction")]
        trace: bool,
        #[arg(long, short, help = "Quiet mode: only show summary")]
        quiet: bool,
        #[arg(long, short, help = "Verbose mode: show additional details")]
        verbose: bool,
        #[arg(long, value_name = "CHARS", help = "Maximum accepted input length in chars")]
        max_len: Option<u32>,
        #[arg(long, help = "Fail when inputs exceed the limit instead of returning a partial result")]
        strict_limits: bool,
    },
    #[command(about = "Print the edit distance between two strings")]
    Distance {
        source: String,
        target: String,
    },
    #[command(about = "Permutation-search the compiled instruction multiset")]
    Train {
        source: String,
        target: String,
        #[arg(long, value_name = "N", help = "Attempt cap for the random search")]
        attempts: Option<u32>,
        #[arg(long, value_name = "SEED", help = "RNG seed for a reproducible search")]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Dot,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compile {
            source,
            target,
            format,
            trace,
            quiet,
            verbose,
            max_len,
            strict_limits,
        } => commands::compile::run(
            &source,
            &target,
            format,
            trace,
            quiet,
            verbose,
            max_len,
            strict_limits,
        ),
        Commands::Distance { source, target } => commands::distance::run(&source, &target),
        Commands::Train {
            source,
            target,
            attempts,
            seed,
        } => commands::train::run(&source, &target, attempts, seed),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit_code_for_error(&e)
        }
    }
}

fn exit_code_for_error(err: &anyhow::Error) -> ExitCode {
    if is_internal_error(err) {
        ExitCode::from(3)
    } else {
        ExitCode::from(2)
    }
}

/// A synthesis failure on ops the compiler derived itself is an integration
/// bug, not a usage error; it gets its own exit code.
fn is_internal_error(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        if let Some(compile_err) = cause.downcast_ref::<CompileError>() {
            return matches!(compile_err, CompileError::Synthesis(_));
        }
        cause.is::<SynthesisError>()
    })
}
