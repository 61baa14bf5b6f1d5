#[derive(Debug, Clone, PartialEq)]
pub struct RateParameters {
    pub mean_growth_rate: f64,
    pub std_dev_growth_rate: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogisticParameters {
    /// Total addressable market ceiling, in the same units as segment revenue.
    pub tam: f64,
    /// Years until the logistic curve reaches its midpoint.
    pub inflection_point: f64,
}

/// How a segment's revenue evolves under one scenario.
#[derive(Debug, Clone, PartialEq)]
pub enum GrowthModel {
    /// A single sampled rate compounded over the whole horizon.
    Cagr(RateParameters),
    /// A sampled rate that converges toward the terminal growth rate.
    Converging(RateParameters),
    /// TAM-bounded diffusion along a logistic curve.
    Logistic(LogisticParameters),
}

/// One weighted outcome for a segment. Probabilities are percent weights;
/// scenario sets that do not sum to 100 are tolerated by the selection
/// algorithm rather than rejected here.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub probability: f64,
    pub growth_model: GrowthModel,
}
