/// Base-year amount for one cost type, split into a variable portion that
/// scales with revenue and a fixed portion that compounds on its own.
///
/// Only the variable ratio is stored; the fixed ratio is derived so the two
/// always sum to 100.
#[derive(Debug, Clone, PartialEq)]
pub struct CostItem {
    pub amount: f64,
    pub variable_ratio: f64,
}

impl CostItem {
    pub fn fixed_ratio(&self) -> f64 {
        100.0 - self.variable_ratio
    }
}

/// Stochastic annual growth applied to a cost type's fixed portion,
/// in percent per year.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CostGrowth {
    pub mean: f64,
    pub std_dev: f64,
}
