use std::collections::{BTreeMap, HashMap};

use crate::domain::company::CompanyInfo;
use crate::domain::costs::CostItem;
use crate::domain::model::ValuationModel;
use crate::domain::scenario::{GrowthModel, RateParameters, Scenario};
use crate::domain::segment::Segment;

/// A model with no stochastic spread anywhere: one segment at 100 revenue
/// growing a certain 10 % per year over a 2-year horizon, one fully variable
/// cost of 50, 25 % tax, 10 % discount and 2 % terminal growth. Every trial
/// produces the same enterprise value.
pub fn build_deterministic_model() -> ValuationModel {
    ValuationModel {
        company: CompanyInfo {
            name: "Demo".to_string(),
            discount_rate: 10.0,
            tax_rate: 25.0,
            forecast_period: 2,
            terminal_growth_rate: 2.0,
            market_value: None,
        },
        segments: vec![Segment {
            name: "core".to_string(),
            revenue: 100.0,
        }],
        segment_scenarios: HashMap::from([(
            "core".to_string(),
            vec![Scenario {
                name: "base".to_string(),
                probability: 100.0,
                growth_model: GrowthModel::Cagr(RateParameters {
                    mean_growth_rate: 10.0,
                    std_dev_growth_rate: 0.0,
                }),
            }],
        )]),
        cost_structure: BTreeMap::from([(
            "cogs".to_string(),
            CostItem {
                amount: 50.0,
                variable_ratio: 100.0,
            },
        )]),
        fixed_cost_growth: BTreeMap::new(),
    }
}
