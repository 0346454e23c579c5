use tailscript::{compile_streaming, CallbackSink, CompileConfig};

fn usage() -> ! {
    eprintln!("Usage: streaming <SOURCE> <TARGET>");
    std::process::exit(2);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let source = args.next().unwrap_or_else(|| usage());
    let target = args.next().unwrap_or_else(|| usage());

    let mut sink = CallbackSink::new(|step| {
        println!("{:<20} {}", step.instruction.to_string(), step.after);
    });

    let report = compile_streaming(&source, &target, &CompileConfig::default(), &mut sink)?;

    eprintln!(
        "complete={} distance={} warnings={}",
        report.complete,
        report.distance,
        report.warnings.len()
    );
    for warning in &report.warnings {
        eprintln!("warning: {}", warning);
    }

    Ok(())
}
