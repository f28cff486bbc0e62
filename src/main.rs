//! CLI entry point for the Fry analysis pipeline

use clap::Parser;
use fryrose::io::cli::{AnalysisRunner, Cli};

fn main() -> fryrose::Result<()> {
    let cli = Cli::parse();
    let runner = AnalysisRunner::new(cli);
    runner.run()
}
