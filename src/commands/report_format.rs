use crate::services::simulation_types::{InvestmentMetrics, SimulationOutput};

pub fn format_simulation_report(output: &SimulationOutput) -> String {
    let statistics = &output.result.statistics;

    let mut lines = Vec::new();
    lines.push("Valuation Report".to_string());
    lines.push(format!("Data source: {}", output.report.data_source));
    lines.push(format!("Run date: {}", output.report.run_date));
    lines.push(format!("Iterations: {}", output.report.iterations));
    lines.push(format!(
        "Forecast period: {} years",
        output.report.forecast_period
    ));
    lines.push(String::new());
    lines.push("Enterprise value distribution:".to_string());
    lines.push("Statistic | Value".to_string());
    lines.push("----------|------".to_string());
    lines.push(format_row("Mean", statistics.mean));
    lines.push(format_row("Median", statistics.median));
    lines.push(format_row("Std dev", statistics.std_dev));
    lines.push(format_row("Min", statistics.min));
    lines.push(format_row("P25", statistics.percentile_25));
    lines.push(format_row("P75", statistics.percentile_75));
    lines.push(format_row("Max", statistics.max));

    lines.join("\n")
}

pub fn format_investment_report(metrics: &InvestmentMetrics, market_value: f64) -> String {
    let mut lines = Vec::new();
    lines.push("Investment Analysis".to_string());
    lines.push(format!("Market value: {market_value:.2}"));
    lines.push(String::new());
    lines.push("Metric | Value".to_string());
    lines.push("-------|------".to_string());
    lines.push(format_row("Expected return %", metrics.expected_return));
    lines.push(format_row("Upside probability %", metrics.upside_probability));
    lines.push(format_row(
        "Downside probability %",
        metrics.downside_probability,
    ));
    lines.push(format_row("Expected gain %", metrics.expected_gain));
    lines.push(format_row("Expected loss %", metrics.expected_loss));
    lines.push(format_row("Profit/loss ratio", metrics.profit_loss_ratio));
    lines.push(format_row("Sharpe ratio", metrics.sharpe_ratio));

    lines.join("\n")
}

fn format_row(label: &str, value: f64) -> String {
    format!("{label} | {value:.2}")
}
