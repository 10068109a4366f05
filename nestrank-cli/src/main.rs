//! Entry point for the nestrank command-line interface.
#![forbid(unsafe_code)]

use std::process;

fn main() {
    if let Err(error) = nestrank_cli::run() {
        eprintln!("nestrank: {error}");
        process::exit(1);
    }
}
