use std::collections::HashMap;

use rand::Rng;

use crate::domain::scenario::Scenario;
use crate::domain::segment::Segment;
use crate::services::growth_models::GrowthPath;
use crate::services::scenario_selection::select_scenario;

/// Projects total revenue for each forecast year.
///
/// Every segment gets exactly one realized growth path per trial: one
/// scenario selected by weight and one rate draw, reused across the whole
/// horizon. Segments with no scenario entry follow the default trend.
pub fn forecast_revenue_with_rng<R: Rng + ?Sized>(
    segments: &[Segment],
    segment_scenarios: &HashMap<String, Vec<Scenario>>,
    forecast_period: u32,
    terminal_growth_rate: f64,
    rng: &mut R,
) -> Vec<f64> {
    let paths: Vec<(f64, GrowthPath)> = segments
        .iter()
        .map(|segment| {
            let path = segment_scenarios
                .get(&segment.name)
                .and_then(|scenarios| select_scenario(scenarios, rng))
                .map(|scenario| GrowthPath::realize(scenario, rng))
                .unwrap_or(GrowthPath::DefaultTrend);
            (segment.revenue, path)
        })
        .collect();

    (1..=forecast_period)
        .map(|year| {
            paths
                .iter()
                .map(|(revenue, path)| path.revenue_at(*revenue, terminal_growth_rate, year))
                .sum()
        })
        .collect()
}
