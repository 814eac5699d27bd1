//! Waribiki - disability fare discount calculator for Japanese rail
//!
//! A CLI tool that computes 障害者割引 fares for the passenger and caregiver.

mod cli;
mod commands;
mod logger;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
