//! Check capture files: report lines that do not parse as observations.
//!
//! Usage:
//!   wtrack_check [OPTIONS] [FILE ...]
//!   wtrack_check < capture.tsv
//!
//! Options:
//!   --strict, -s   Also reject lines with a bad timestamp, type or subtype
//!   --human, -H    Human-readable output
//!   --aps, -a      List distinct source addresses of beacon frames
//!   --verbose, -v  Debug logging (otherwise RUST_LOG, default warn)
//!
//! Exit code 1 if any line was rejected or a file could not be read.

use clap::Parser;
use std::collections::BTreeSet;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use wtrack_base::{scan_capture, CaptureScan, RejectedLine, ScanOptions};

#[derive(Parser)]
#[command(name = "wtrack_check", version, about = "Check 802.11 capture lines")]
struct Cli {
    /// Capture files; stdin when none are given.
    files: Vec<PathBuf>,

    /// Also reject lines whose timestamp, type or subtype do not parse.
    #[arg(short, long)]
    strict: bool,

    /// Human-readable output.
    #[arg(short = 'H', long)]
    human: bool,

    /// List distinct source addresses of beacon frames.
    #[arg(short, long)]
    aps: bool,

    /// Debug logging.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy)]
enum OutputStyle {
    Compact,
    Human,
}

fn print_rejected(path: &str, r: &RejectedLine, style: OutputStyle) {
    match style {
        OutputStyle::Compact => {
            println!("{}:{}: error: {}", path, r.line, r.reason);
        }
        OutputStyle::Human => {
            println!("  {}:{}: {}", path, r.line, r.reason);
            println!("    record: {:?}", r.record);
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(io::stderr))
        .init();

    let style = if cli.human { OutputStyle::Human } else { OutputStyle::Compact };
    let options = ScanOptions { strict: cli.strict };

    let mut scans: Vec<(String, CaptureScan)> = Vec::new();
    let mut has_error = false;

    if cli.files.is_empty() {
        let scan = scan_capture(io::stdin().lock(), options)?;
        scans.push(("<stdin>".to_string(), scan));
    } else {
        for path in &cli.files {
            let file = match std::fs::File::open(path) {
                Ok(f) => f,
                Err(e) => {
                    eprintln!("{}: {}", path.display(), e);
                    has_error = true;
                    continue;
                }
            };
            match scan_capture(BufReader::new(file), options) {
                Ok(scan) => scans.push((path.display().to_string(), scan)),
                Err(e) => {
                    eprintln!("{}: {}", path.display(), e);
                    has_error = true;
                }
            }
        }
    }

    let mut total_accepted = 0usize;
    let mut total_rejected = 0usize;
    let mut aps = BTreeSet::new();
    for (path, scan) in &scans {
        for r in &scan.rejected {
            print_rejected(path, r, style);
        }
        total_accepted += scan.observations.len();
        total_rejected += scan.rejected.len();
        aps.extend(scan.access_points().map(|o| o.src().to_string()));
    }

    if cli.aps {
        for src in &aps {
            println!("{}", src);
        }
    }

    eprintln!(
        "check: {} accepted, {} rejected",
        total_accepted, total_rejected
    );
    if has_error || total_rejected > 0 {
        std::process::exit(1);
    }
    Ok(())
}
