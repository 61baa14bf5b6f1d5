use rand::Rng;

use crate::domain::scenario::{GrowthModel, Scenario};
use crate::services::sampling::normal_sample;

/// Speed at which the converging model's sampled rate approaches the
/// terminal growth rate.
const CONVERGENCE_SPEED: f64 = 0.15;

/// Annual growth applied to segments that have no scenarios at all.
const DEFAULT_TREND_RATE: f64 = 2.0;

/// Floor for the logistic growth constant, also used outright when the TAM
/// does not exceed the segment's base revenue.
const MIN_GROWTH_CONSTANT: f64 = 0.01;

/// Revenue after `year` years of compounding a single constant rate.
pub fn cagr_revenue(initial_revenue: f64, rate: f64, year: u32) -> f64 {
    initial_revenue * (1.0 + rate / 100.0).powi(year as i32)
}

/// Revenue after `year` years of a rate that converges toward the terminal
/// growth rate. The effective rate changes every year, so this compounds
/// step by step rather than in closed form.
pub fn converging_revenue(
    initial_revenue: f64,
    rate: f64,
    terminal_growth_rate: f64,
    year: u32,
) -> f64 {
    let mut revenue = initial_revenue;
    for step in 1..=year {
        let convergence = 1.0 - (-CONVERGENCE_SPEED * step as f64).exp();
        let effective = rate * (1.0 - convergence) + terminal_growth_rate * convergence;
        revenue *= 1.0 + effective / 100.0;
    }
    revenue
}

/// Logistic growth constant `k = (1/t0) * ln((L - N0) / N0)`.
///
/// A TAM at or below the base revenue would make the log argument
/// non-positive; that degenerate input recovers to the floor value instead
/// of failing.
pub fn logistic_growth_constant(tam: f64, inflection_point: f64, initial_revenue: f64) -> f64 {
    if tam <= initial_revenue {
        return MIN_GROWTH_CONSTANT;
    }
    let k = (1.0 / inflection_point) * ((tam - initial_revenue) / initial_revenue).ln();
    k.max(MIN_GROWTH_CONSTANT)
}

/// Logistic revenue at `year`, evaluated against a ceiling that itself grows
/// at the terminal rate every year.
pub fn logistic_revenue(
    initial_revenue: f64,
    tam: f64,
    inflection_point: f64,
    terminal_growth_rate: f64,
    year: u32,
) -> f64 {
    let k = logistic_growth_constant(tam, inflection_point, initial_revenue);
    let ceiling = tam * (1.0 + terminal_growth_rate / 100.0).powi(year as i32 - 1);
    ceiling / (1.0 + (-k * (year as f64 - inflection_point)).exp())
}

/// One realized growth draw for a segment, fixed for the whole trial.
///
/// Rates are sampled once per trial and reused across every forecast year:
/// a trial represents a persistent growth regime, not independent yearly
/// draws. Sampling fresh rates per year would change the shape of the
/// output distribution.
#[derive(Debug, Clone, PartialEq)]
pub enum GrowthPath {
    Cagr { rate: f64 },
    Converging { rate: f64 },
    Logistic { tam: f64, inflection_point: f64 },
    /// Fallback for segments without scenarios.
    DefaultTrend,
}

impl GrowthPath {
    pub fn realize<R: Rng + ?Sized>(scenario: &Scenario, rng: &mut R) -> Self {
        match &scenario.growth_model {
            GrowthModel::Cagr(params) => GrowthPath::Cagr {
                rate: normal_sample(rng, params.mean_growth_rate, params.std_dev_growth_rate),
            },
            GrowthModel::Converging(params) => GrowthPath::Converging {
                rate: normal_sample(rng, params.mean_growth_rate, params.std_dev_growth_rate),
            },
            GrowthModel::Logistic(params) => GrowthPath::Logistic {
                tam: params.tam,
                inflection_point: params.inflection_point,
            },
        }
    }

    pub fn revenue_at(&self, initial_revenue: f64, terminal_growth_rate: f64, year: u32) -> f64 {
        match self {
            GrowthPath::Cagr { rate } => cagr_revenue(initial_revenue, *rate, year),
            GrowthPath::Converging { rate } => {
                converging_revenue(initial_revenue, *rate, terminal_growth_rate, year)
            }
            GrowthPath::Logistic {
                tam,
                inflection_point,
            } => logistic_revenue(
                initial_revenue,
                *tam,
                *inflection_point,
                terminal_growth_rate,
                year,
            ),
            GrowthPath::DefaultTrend => cagr_revenue(initial_revenue, DEFAULT_TREND_RATE, year),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cagr_revenue_compounds_exactly() {
        let revenue = cagr_revenue(100.0, 10.0, 3);
        assert!((revenue - 133.1).abs() < 1e-9);
    }

    #[test]
    fn cagr_revenue_with_zero_rate_stays_flat() {
        assert_eq!(cagr_revenue(250.0, 0.0, 7), 250.0);
    }

    #[test]
    fn converging_revenue_equals_cagr_when_rate_matches_terminal() {
        // With rate == terminal the effective rate never moves.
        let converging = converging_revenue(100.0, 5.0, 5.0, 7);
        let cagr = cagr_revenue(100.0, 5.0, 7);
        assert!((converging - cagr).abs() < 1e-9);
    }

    #[test]
    fn converging_revenue_first_year_blends_toward_terminal() {
        let convergence = 1.0 - (-CONVERGENCE_SPEED).exp();
        let effective = 20.0 * (1.0 - convergence) + 0.0 * convergence;
        let expected = 100.0 * (1.0 + effective / 100.0);

        let revenue = converging_revenue(100.0, 20.0, 0.0, 1);
        assert!((revenue - expected).abs() < 1e-9);
    }

    #[test]
    fn converging_revenue_grows_slower_than_raw_cagr_above_terminal() {
        let converging = converging_revenue(100.0, 20.0, 2.0, 10);
        let cagr = cagr_revenue(100.0, 20.0, 10);
        assert!(converging < cagr);
    }

    #[test]
    fn logistic_revenue_reaches_half_the_ceiling_at_the_inflection_point() {
        let revenue = logistic_revenue(10.0, 1000.0, 5.0, 0.0, 5);
        assert!((revenue - 500.0).abs() < 1e-9);
    }

    #[test]
    fn logistic_growth_constant_recovers_from_tam_below_base_revenue() {
        assert_eq!(logistic_growth_constant(5.0, 5.0, 10.0), MIN_GROWTH_CONSTANT);
        assert_eq!(logistic_growth_constant(10.0, 5.0, 10.0), MIN_GROWTH_CONSTANT);
    }

    #[test]
    fn logistic_ceiling_grows_at_the_terminal_rate() {
        let flat = logistic_revenue(10.0, 1000.0, 5.0, 0.0, 5);
        let growing = logistic_revenue(10.0, 1000.0, 5.0, 2.0, 5);
        let expected = flat * 1.02_f64.powi(4);
        assert!((growing - expected).abs() < 1e-9);
    }

    #[test]
    fn default_trend_compounds_two_percent() {
        let path = GrowthPath::DefaultTrend;
        let revenue = path.revenue_at(100.0, 2.5, 2);
        assert!((revenue - 100.0 * 1.02 * 1.02).abs() < 1e-9);
    }
}
