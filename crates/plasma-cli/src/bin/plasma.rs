//! Plasma CLI Binary Entry Point

use std::process;

use clap::Parser;
use plasma_cli::{run, Cli};

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}
