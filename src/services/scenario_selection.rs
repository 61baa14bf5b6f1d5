use rand::Rng;

use crate::domain::scenario::Scenario;

/// Picks the scenario whose cumulative probability covers `point`, walking
/// the list in order over a fixed 0..100 weight space.
///
/// Probability totals other than 100 are tolerated: when the walk exhausts
/// the list without covering `point`, the last scenario is returned. That
/// exhaustion fallback is the defined behavior for malformed totals, so the
/// weights are deliberately not renormalized here.
pub fn select_scenario_at(scenarios: &[Scenario], point: f64) -> Option<&Scenario> {
    let mut cumulative = 0.0;
    for scenario in scenarios {
        cumulative += scenario.probability;
        if point <= cumulative {
            return Some(scenario);
        }
    }
    scenarios.last()
}

/// Draws a uniform point in [0, 100) and selects one scenario for the trial.
pub fn select_scenario<'a, R: Rng + ?Sized>(
    scenarios: &'a [Scenario],
    rng: &mut R,
) -> Option<&'a Scenario> {
    select_scenario_at(scenarios, rng.gen_range(0.0..100.0))
}
