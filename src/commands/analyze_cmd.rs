use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_investment_report;
use crate::services::histogram::write_histogram_png;
use crate::services::result_yaml::load_output_from_yaml_file;
use crate::services::statistics::analyze_investment;

/// Bin count for the upside/downside chart; coarser than the raw
/// distribution view.
const ANALYSIS_BINS: usize = 30;

pub fn analyze_command(cmd: Commands) {
    if let Commands::Analyze {
        input,
        market_value,
        risk_free_rate,
    } = cmd
    {
        let output = match load_output_from_yaml_file(&input) {
            Ok(output) => output,
            Err(e) => {
                eprintln!("Failed to read simulation result: {e:?}");
                return;
            }
        };

        let metrics = analyze_investment(&output.result.values, market_value, risk_free_rate);
        println!("{}", format_investment_report(&metrics, market_value));

        let histogram_path = format!("{input}.analysis.png");
        match write_histogram_png(
            &histogram_path,
            &output.result.values,
            ANALYSIS_BINS,
            Some(market_value),
        ) {
            Ok(()) => println!("Analysis histogram written to {histogram_path}"),
            Err(e) => eprintln!("Failed to write analysis histogram: {e:?}"),
        }
    }
}
