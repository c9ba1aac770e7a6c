//! ATM CLI
//!
//! Runs one ATM session on the terminal: the PIN is read from the first
//! line of stdin and the amount from the second.
//!
//! # Usage
//!
//! ```bash
//! printf '1234\n186\n' | cargo run -- --strategy greedy
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `info` to control logging verbosity

use atm_dispenser::{run_session, AtmConfig, Result, SharedWriter};
use std::env;
use std::io;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = AtmConfig::from_args(env::args().skip(1))?;

    let stdin = io::stdin();
    let input = stdin.lock();
    let output = SharedWriter::new(io::stdout());

    run_session(&config, input, output)?;

    Ok(())
}
