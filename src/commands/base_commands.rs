use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate a weighted grade from a JSON request file
    WeightedGrade {
        /// Input JSON file with the weighted grade request
        #[arg(short, long)]
        input: String,
        /// Optional output YAML file for the report
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Calculate a nearest-rank percentile from a JSON request file
    Percentile {
        /// Input JSON file with the percentile request
        #[arg(short, long)]
        input: String,
        /// Optional output YAML file for the report
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
