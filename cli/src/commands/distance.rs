use anyhow::Result;
use std::process::ExitCode;
use tailscript::align;

pub fn run(source: &str, target: &str) -> Result<ExitCode> {
    let alignment = align(source, target);
    println!("{}", alignment.distance);

    if alignment.distance == 0 {
        Ok(ExitCode::from(0))
    } else {
        Ok(ExitCode::from(1))
    }
}
