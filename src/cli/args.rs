// Cattle Health Assessment 🐄 AGPL-3.0 License

use clap::{Args, Parser, Subcommand};

use crate::client::{DEFAULT_API_KEY, DEFAULT_ENDPOINT};

/// CLI arguments parser.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = r#"Analyze Options:
    --source, -s <SOURCE>   Path to the photo to assess (required)
    --endpoint <URL>        Keypoint detection API endpoint
    --api-key <KEY>         API key for the detection endpoint
    --report                Write a plain-text report
    --save                  Save an annotated copy of the image
    --output, -o <DIR>      Directory for report/annotated outputs [default: .]
    --verbose               Show verbose output

Examples:
    cattle-health analyze --source cow.jpg
    cattle-health analyze -s cow.jpg --report --save
    cattle-health analyze -s herd/042.jpg -o reports/ --report
    cattle-health analyze -s cow.jpg --endpoint https://example.com/model/1 --api-key KEY"#)]
pub struct Cli {
    #[command(subcommand)]
    /// Subcommand to execute.
    pub command: Commands,
}

/// Commands for the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assess cattle health from a photo
    Analyze(AnalyzeArgs),
}

/// Arguments for the analyze command.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Path to the photo to assess
    #[arg(short, long)]
    pub source: String,

    /// Keypoint detection API endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// API key for the detection endpoint
    #[arg(long, default_value = DEFAULT_API_KEY)]
    pub api_key: String,

    /// Write a plain-text report
    #[arg(long, default_value_t = false)]
    pub report: bool,

    /// Save an annotated copy of the image
    #[arg(long, default_value_t = false)]
    pub save: bool,

    /// Directory for report/annotated outputs
    #[arg(short, long, default_value = ".")]
    pub output: String,

    /// Show verbose output
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub verbose: bool,
}
