use crate::services::simulation_types::{HistogramData, InvestmentMetrics, ValuationStatistics};

/// Used by the Sharpe-like ratio when the caller supplies no rate.
pub const DEFAULT_RISK_FREE_RATE: f64 = 2.5;

fn finite_values(values: &[f64]) -> Vec<f64> {
    values.iter().copied().filter(|v| v.is_finite()).collect()
}

/// Nearest-rank percentile on an ascending slice: `sorted[floor(n * q)]`,
/// clamped into range. Deliberately not interpolated.
fn nearest_rank(sorted: &[f64], quantile: f64) -> f64 {
    let index = (sorted.len() as f64 * quantile).floor() as usize;
    sorted[index.min(sorted.len() - 1)]
}

/// Summary statistics over the sample vector. Non-finite samples are dropped
/// first; an empty remainder yields all zeros.
pub fn calculate_statistics(values: &[f64]) -> ValuationStatistics {
    let mut sorted = finite_values(values);
    if sorted.is_empty() {
        return ValuationStatistics::default();
    }
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = sorted.len();
    let mean = sorted.iter().sum::<f64>() / n as f64;
    let median = if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    };
    let variance = sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n as f64;

    ValuationStatistics {
        mean,
        median,
        std_dev: variance.sqrt(),
        min: sorted[0],
        max: sorted[n - 1],
        percentile_25: nearest_rank(&sorted, 0.25),
        percentile_75: nearest_rank(&sorted, 0.75),
    }
}

/// Bins the samples linearly between their min and max. The bin count is
/// caller-supplied: the distribution view and the investment view use
/// different defaults. The max sample is clamped into the last bin, and a
/// zero-width range collapses everything into the first.
pub fn generate_histogram_data(values: &[f64], bins: usize) -> HistogramData {
    let finite = finite_values(values);
    if finite.is_empty() {
        return HistogramData::default();
    }

    let bins = bins.max(1);
    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let bin_width = (max - min) / bins as f64;

    let labels = (0..bins)
        .map(|index| format!("{:.0}", min + index as f64 * bin_width))
        .collect();

    let mut data = vec![0usize; bins];
    for value in &finite {
        let index = if bin_width > 0.0 {
            (((value - min) / bin_width).floor() as usize).min(bins - 1)
        } else {
            0
        };
        data[index] += 1;
    }

    HistogramData { labels, data }
}

/// Investment metrics over the percent-return transform
/// `(value - market_value) / market_value * 100`.
///
/// A non-positive market value cannot anchor the transform, so it yields
/// zeroed metrics instead of dividing by zero.
pub fn analyze_investment(
    values: &[f64],
    market_value: f64,
    risk_free_rate: Option<f64>,
) -> InvestmentMetrics {
    let finite = finite_values(values);
    if finite.is_empty() || market_value <= 0.0 {
        return InvestmentMetrics::default();
    }

    let returns: Vec<f64> = finite
        .iter()
        .map(|value| (value - market_value) / market_value * 100.0)
        .collect();
    let n = returns.len() as f64;
    let mean_return = returns.iter().sum::<f64>() / n;

    let upside: Vec<f64> = returns.iter().copied().filter(|r| *r > 0.0).collect();
    let downside: Vec<f64> = returns.iter().copied().filter(|r| *r <= 0.0).collect();

    let expected_gain = if upside.is_empty() {
        0.0
    } else {
        upside.iter().sum::<f64>() / upside.len() as f64
    };
    let expected_loss = if downside.is_empty() {
        0.0
    } else {
        (downside.iter().sum::<f64>() / downside.len() as f64).abs()
    };
    let profit_loss_ratio = if expected_loss > 0.0 {
        expected_gain / expected_loss
    } else {
        0.0
    };

    let variance = returns.iter().map(|r| (r - mean_return).powi(2)).sum::<f64>() / n;
    let std_dev_return = variance.sqrt();
    let risk_free = risk_free_rate.unwrap_or(DEFAULT_RISK_FREE_RATE);
    let sharpe_ratio = if std_dev_return > 0.0 {
        (mean_return - risk_free) / std_dev_return
    } else {
        0.0
    };

    InvestmentMetrics {
        expected_return: mean_return,
        upside_probability: upside.len() as f64 / n * 100.0,
        downside_probability: downside.len() as f64 / n * 100.0,
        expected_gain,
        expected_loss,
        profit_loss_ratio,
        sharpe_ratio,
    }
}
