use tailscript::{compile, CompileConfig};

fn usage() -> ! {
    eprintln!("Usage: basic_compile <SOURCE> <TARGET> [N]");
    eprintln!("  N: optionally print the first N steps (debug)");
    std::process::exit(2);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let source = args.next().unwrap_or_else(|| usage());
    let target = args.next().unwrap_or_else(|| usage());
    let show_n: Option<usize> = args.next().map(|s| s.parse()).transpose()?;

    let report = compile(&source, &target, &CompileConfig::default())?;

    println!("complete: {}", report.complete);
    println!("distance: {}", report.distance);
    println!("steps: {}", report.steps.len());
    println!("final: {}", report.final_string());

    if let Some(n) = show_n {
        for (i, step) in report.steps.iter().take(n).enumerate() {
            println!("{:>4}: {:<20} {}", i, step.instruction.to_string(), step.after);
        }
    }

    Ok(())
}
