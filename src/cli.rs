//! CLI argument parsing for fsync-tester

use clap::Parser;

/// The benchmark itself takes no parameters; everything it measures is
/// driven by compiled-in constants so runs stay comparable. The only flag
/// is a diagnostics toggle.
#[derive(Parser, Debug)]
#[command(name = "fsync-tester")]
#[command(version)]
#[command(
    about = "Measure fsync latency under concurrent random-write pressure",
    long_about = None
)]
pub struct Cli {
    /// Enable debug logging to stderr
    #[arg(short, long)]
    pub debug: bool,
}
