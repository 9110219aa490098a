// Cattle Health Assessment 🐄 AGPL-3.0 License

use clap::Parser;

use cattle_health::cli::analyze::run_analysis;
use cattle_health::cli::args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => run_analysis(&args),
    }
}
