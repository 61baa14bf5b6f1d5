use std::collections::BTreeMap;

use rand::Rng;

use crate::domain::costs::{CostGrowth, CostItem};
use crate::services::sampling::normal_sample;

/// Projects every cost type across the forecast horizon.
///
/// The variable portion scales with the ratio of the year's total revenue to
/// the first forecast year's; the fixed portion compounds at a growth rate
/// sampled once per cost type per trial. Cost types without growth
/// parameters compound at zero.
pub fn forecast_costs_with_rng<R: Rng + ?Sized>(
    revenue_forecast: &[f64],
    cost_structure: &BTreeMap<String, CostItem>,
    fixed_cost_growth: &BTreeMap<String, CostGrowth>,
    rng: &mut R,
) -> Vec<BTreeMap<String, f64>> {
    let growth_rates: BTreeMap<&str, f64> = cost_structure
        .keys()
        .map(|cost_type| {
            let growth = fixed_cost_growth
                .get(cost_type)
                .copied()
                .unwrap_or_default();
            (
                cost_type.as_str(),
                normal_sample(rng, growth.mean, growth.std_dev),
            )
        })
        .collect();
    let base_revenue = revenue_forecast.first().copied().unwrap_or(0.0);

    revenue_forecast
        .iter()
        .enumerate()
        .map(|(index, revenue)| {
            let year = index as u32 + 1;
            cost_structure
                .iter()
                .map(|(cost_type, item)| {
                    let variable =
                        item.amount * item.variable_ratio / 100.0 * (revenue / base_revenue);
                    let growth_rate = growth_rates[cost_type.as_str()];
                    let fixed = item.amount * item.fixed_ratio() / 100.0
                        * (1.0 + growth_rate / 100.0).powi(year as i32);
                    (cost_type.clone(), variable + fixed)
                })
                .collect()
        })
        .collect()
}
