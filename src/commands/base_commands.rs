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
    /// Run the Monte Carlo valuation for a model file
    Simulate {
        /// Model YAML or JSON file
        #[arg(short, long)]
        input: String,
        /// Output YAML file
        #[arg(short, long)]
        output: String,
        /// Number of simulation trials
        #[arg(short = 'n', long, default_value_t = 10000,
              value_parser = clap::value_parser!(u32).range(100..=10000))]
        iterations: u32,
        /// Number of histogram bins
        #[arg(short, long, default_value_t = 50)]
        bins: usize,
    },
    /// Compare a saved simulation result against a market value
    Analyze {
        /// Simulation result YAML file
        #[arg(short, long)]
        input: String,
        /// Reference market value
        #[arg(short, long)]
        market_value: f64,
        /// Risk-free rate in percent
        #[arg(short, long)]
        risk_free_rate: Option<f64>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
