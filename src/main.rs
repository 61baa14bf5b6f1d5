mod commands;
mod domain;
mod services;
#[cfg(test)]
mod test_support;

use clap::{CommandFactory, Parser};

use crate::commands::analyze_cmd::analyze_command;
use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::simulate_cmd::simulate_command;

fn main() {
    let args = CliArgs::parse();
    match args.command {
        command @ Commands::Simulate { .. } => simulate_command(command),
        command @ Commands::Analyze { .. } => analyze_command(command),
        Commands::Completions { shell } => {
            let mut cmd = CliArgs::command();
            clap_complete::generate(shell, &mut cmd, "valuations", &mut std::io::stdout());
        }
    }
}
