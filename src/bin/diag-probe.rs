#![deny(unsafe_code)]

#[path = "probe.rs"]
mod probe;

use std::{env, io, process::ExitCode};

fn main() -> ExitCode {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr();
    probe::run_with(env::args_os(), &mut stdout, &mut stderr)
}
