mod commands;
mod domain;
mod services;

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::percentile_cmd::percentile_command;
use crate::commands::weighted_grade_cmd::weighted_grade_command;
use clap::{CommandFactory, Parser};

fn main() {
    let args = CliArgs::parse();
    match args.command {
        cmd @ Commands::WeightedGrade { .. } => weighted_grade_command(cmd),
        cmd @ Commands::Percentile { .. } => percentile_command(cmd),
        Commands::Completions { shell } => {
            let mut command = CliArgs::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
        }
    }
}
