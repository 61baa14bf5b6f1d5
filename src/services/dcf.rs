use std::collections::BTreeMap;

/// After-tax free cash flow per forecast year, approximated as taxed EBIT.
pub fn free_cash_flows(
    revenue_forecast: &[f64],
    cost_forecast: &[BTreeMap<String, f64>],
    tax_rate: f64,
) -> Vec<f64> {
    revenue_forecast
        .iter()
        .zip(cost_forecast)
        .map(|(revenue, costs)| {
            let total_costs: f64 = costs.values().sum();
            (revenue - total_costs) * (1.0 - tax_rate / 100.0)
        })
        .collect()
}

/// Enterprise value: the discounted explicit-period cash flows plus a Gordon
/// growth terminal value discounted back over the whole horizon.
///
/// The terminal denominator assumes the discount rate exceeds the terminal
/// growth rate; the simulation driver refuses models that violate this
/// before any trial runs.
pub fn enterprise_value(fcf_forecast: &[f64], discount_rate: f64, terminal_growth_rate: f64) -> f64 {
    let discount = discount_rate / 100.0;
    let terminal = terminal_growth_rate / 100.0;

    let explicit_value: f64 = fcf_forecast
        .iter()
        .enumerate()
        .map(|(index, fcf)| fcf / (1.0 + discount).powi(index as i32 + 1))
        .sum();

    let last_fcf = fcf_forecast.last().copied().unwrap_or(0.0);
    let terminal_value = last_fcf * (1.0 + terminal) / (discount - terminal);
    let terminal_value_pv = terminal_value / (1.0 + discount).powi(fcf_forecast.len() as i32);

    explicit_value + terminal_value_pv
}
