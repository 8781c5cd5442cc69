// src/main.rs
use clap::Parser;
use fcs_rs::cli::{self, Args};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level())),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(error) = cli::run(&args) {
        eprintln!("Error: {error:#}");
        process::exit(1);
    }
}
