use serde::{Deserialize, Serialize};

/// Summary statistics over the enterprise-value samples. All fields default
/// to zero when no finite samples exist.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ValuationStatistics {
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub percentile_25: f64,
    pub percentile_75: f64,
}

/// Fixed-bin-count histogram of the sample distribution. Labels carry the
/// lower bound of each bin.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct HistogramData {
    pub labels: Vec<String>,
    pub data: Vec<usize>,
}

/// What one simulation run produces: the raw sample vector plus its
/// post-processed views.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub values: Vec<f64>,
    pub statistics: ValuationStatistics,
    pub histogram: HistogramData,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub data_source: String,
    pub run_date: String,
    pub iterations: usize,
    pub forecast_period: u32,
}

/// The persisted result document: run metadata plus the simulation result.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SimulationOutput {
    pub report: SimulationReport,
    pub result: SimulationResult,
}

/// Comparison of the simulated distribution against a reference market
/// value. Probabilities and returns are percentages.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct InvestmentMetrics {
    pub expected_return: f64,
    pub upside_probability: f64,
    pub downside_probability: f64,
    pub expected_gain: f64,
    pub expected_loss: f64,
    pub profit_loss_ratio: f64,
    pub sharpe_ratio: f64,
}
