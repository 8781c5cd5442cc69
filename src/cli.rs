// src/cli.rs
//! Command-line interface for converting FCS files to CSV.

use crate::{FcsReader, NameKind, Transform};
use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

/// CLI arguments for the FCS to CSV converter
#[derive(Debug, Clone, Parser)]
#[command(
    name = "fcs-rs",
    version,
    about = "Convert FCS files to CSV",
    long_about = "Convert Flow Cytometry Standard (FCS) files into CSV: one header row of \
                  channel names followed by one row per acquired event. Optionally applies \
                  the CyTOF arcsinh stabilizing transform while decoding."
)]
pub struct Args {
    /// Input FCS file to read from
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: PathBuf,

    /// Output CSV file to write to
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Use short channel names ($PnN) for the header row instead of
    /// display names ($PnS)
    #[arg(short = 's', long = "shortnames")]
    pub shortnames: bool,

    /// Apply the arcsinh stabilizing transform to the data (cofactor 0.2)
    #[arg(short = 't', long = "transform")]
    pub transform: bool,

    /// Print the channel names after decoding
    #[arg(short = 'n', long = "names")]
    pub names: bool,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Determine the appropriate log level based on verbosity flags
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    pub fn show_progress(&self) -> bool {
        !self.quiet
    }

    pub fn name_kind(&self) -> NameKind {
        if self.shortnames {
            NameKind::Short
        } else {
            NameKind::Display
        }
    }
}

/// Decode the input file and carry out the requested outputs
pub fn run(args: &Args) -> anyhow::Result<()> {
    let reader = FcsReader::open(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let progress = args.show_progress().then(|| {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(format!("decoding {}", args.input.display()));
        bar.enable_steady_tick(Duration::from_millis(100));
        bar
    });

    let document = reader
        .decode(Transform::from_flag(args.transform))
        .with_context(|| format!("failed to decode {}", args.input.display()))?;

    if let Some(bar) = progress {
        bar.finish_and_clear();
    }

    if !args.quiet {
        println!(
            "[ {} events x {} parameters ]",
            document.data.event_count(),
            document.data.parameter_count()
        );
    }

    if args.names {
        if args.shortnames {
            println!("{}", document.short_names().join(", "));
        } else {
            println!("{}", document.names().join(", "));
        }
    }

    if let Some(output) = &args.output {
        document
            .to_csv(output, args.name_kind())
            .with_context(|| format!("failed to write {}", output.display()))?;

        let size = std::fs::metadata(output)?.len();
        if !args.quiet {
            println!(
                "Output location: {} ({})",
                output.display(),
                human_readable_size(size)
            );
        }
    }

    Ok(())
}

/// Render a byte count with binary-unit suffixes, e.g. "3.42 MB"
pub fn human_readable_size(size: u64) -> String {
    const UNIT: u64 = 1024;
    if size < UNIT {
        return format!("{size} B");
    }
    let mut div = UNIT;
    let mut exp = 0;
    let mut n = size / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }
    const UNITS: [&str; 6] = ["KB", "MB", "GB", "TB", "PB", "EB"];
    format!("{:.2} {}", size as f64 / div as f64, UNITS[exp])
}
