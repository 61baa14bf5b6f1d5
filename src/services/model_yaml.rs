use std::collections::{BTreeMap, HashMap};
use std::io;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::company::CompanyInfo;
use crate::domain::costs::{CostGrowth, CostItem};
use crate::domain::model::ValuationModel;
use crate::domain::scenario::{GrowthModel, LogisticParameters, RateParameters, Scenario};
use crate::domain::segment::Segment;

#[derive(Error, Debug)]
pub enum ModelYamlError {
    #[error("failed to read model file: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse model yaml: {0}")]
    ParseYaml(#[from] serde_yaml::Error),
    #[error("failed to parse model json: {0}")]
    ParseJson(#[from] serde_json::Error),
}

/// Monetary fields arrive either as plain numbers or as formatted strings
/// with grouping separators ("1,200"). This is the single place where they
/// are normalized; the domain types past this boundary are strictly numeric.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
enum AmountValue {
    Number(f64),
    Text(String),
}

fn parse_amount(value: Option<&AmountValue>) -> f64 {
    match value {
        None => 0.0,
        Some(AmountValue::Number(number)) => *number,
        Some(AmountValue::Text(text)) => text.replace(',', "").trim().parse().unwrap_or(0.0),
    }
}

// Record types mirror the persisted model envelope: a financial structure
// section and a scenario model section.

#[derive(Deserialize)]
struct ModelRecord {
    financial_structure: FinancialStructureRecord,
    #[serde(default)]
    scenario_model: ScenarioModelRecord,
}

#[derive(Deserialize)]
struct FinancialStructureRecord {
    company_info: CompanyInfoRecord,
    #[serde(default)]
    business_segments: Vec<SegmentRecord>,
    #[serde(default)]
    cost_structure: BTreeMap<String, CostItemRecord>,
}

#[derive(Deserialize, Default)]
struct ScenarioModelRecord {
    #[serde(default)]
    segment_scenarios: HashMap<String, Vec<ScenarioRecord>>,
    #[serde(default)]
    fixed_cost_growth: BTreeMap<String, CostGrowthRecord>,
}

#[derive(Deserialize)]
struct CompanyInfoRecord {
    #[serde(default)]
    name: String,
    discount_rate: f64,
    tax_rate: f64,
    forecast_period: u32,
    terminal_growth_rate: f64,
    market_value: Option<AmountValue>,
}

#[derive(Deserialize)]
struct SegmentRecord {
    name: String,
    revenue: Option<AmountValue>,
}

#[derive(Deserialize)]
struct ScenarioRecord {
    name: String,
    #[serde(default)]
    probability: f64,
    #[serde(default)]
    growth_model: String,
    #[serde(default)]
    mean_growth_rate: f64,
    #[serde(default)]
    std_dev_growth_rate: f64,
    tam: Option<AmountValue>,
    #[serde(default)]
    inflection_point: f64,
}

#[derive(Deserialize)]
struct CostItemRecord {
    amount: Option<AmountValue>,
    variable_ratio: Option<f64>,
    fixed_ratio: Option<f64>,
}

#[derive(Deserialize)]
struct CostGrowthRecord {
    #[serde(default)]
    mean: f64,
    #[serde(default)]
    std_dev: f64,
}

/// Loads a model snapshot from YAML, or from JSON when the file carries a
/// `.json` extension (the format the original data exports use).
pub fn load_model_from_file(path: &str) -> Result<ValuationModel, ModelYamlError> {
    let contents = std::fs::read_to_string(path)?;
    let is_json = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        deserialize_model_from_json_str(&contents)
    } else {
        deserialize_model_from_yaml_str(&contents)
    }
}

pub fn deserialize_model_from_yaml_str(input: &str) -> Result<ValuationModel, ModelYamlError> {
    let record: ModelRecord = serde_yaml::from_str(input)?;
    Ok(model_from_record(record))
}

pub fn deserialize_model_from_json_str(input: &str) -> Result<ValuationModel, ModelYamlError> {
    let record: ModelRecord = serde_json::from_str(input)?;
    Ok(model_from_record(record))
}

fn model_from_record(record: ModelRecord) -> ValuationModel {
    let company = record.financial_structure.company_info;
    let market_value = parse_amount(company.market_value.as_ref());

    let segments = record
        .financial_structure
        .business_segments
        .into_iter()
        .map(|segment| Segment {
            name: segment.name,
            revenue: parse_amount(segment.revenue.as_ref()),
        })
        .collect();

    let segment_scenarios = record
        .scenario_model
        .segment_scenarios
        .into_iter()
        .map(|(segment_name, scenarios)| {
            (
                segment_name,
                scenarios.into_iter().map(scenario_from_record).collect(),
            )
        })
        .collect();

    let cost_structure = record
        .financial_structure
        .cost_structure
        .into_iter()
        .map(|(cost_type, item)| {
            let variable_ratio = item
                .variable_ratio
                .unwrap_or_else(|| 100.0 - item.fixed_ratio.unwrap_or(100.0));
            (
                cost_type,
                CostItem {
                    amount: parse_amount(item.amount.as_ref()),
                    variable_ratio,
                },
            )
        })
        .collect();

    let fixed_cost_growth = record
        .scenario_model
        .fixed_cost_growth
        .into_iter()
        .map(|(cost_type, growth)| {
            (
                cost_type,
                CostGrowth {
                    mean: growth.mean,
                    std_dev: growth.std_dev,
                },
            )
        })
        .collect();

    ValuationModel {
        company: CompanyInfo {
            name: company.name,
            discount_rate: company.discount_rate,
            tax_rate: company.tax_rate,
            forecast_period: company.forecast_period,
            terminal_growth_rate: company.terminal_growth_rate,
            // A zero market value means "not entered" in the stored data.
            market_value: (market_value > 0.0).then_some(market_value),
        },
        segments,
        segment_scenarios,
        cost_structure,
        fixed_cost_growth,
    }
}

fn scenario_from_record(record: ScenarioRecord) -> Scenario {
    let growth_model = match record.growth_model.as_str() {
        "growth" => GrowthModel::Converging(RateParameters {
            mean_growth_rate: record.mean_growth_rate,
            std_dev_growth_rate: record.std_dev_growth_rate,
        }),
        "logistic" => GrowthModel::Logistic(LogisticParameters {
            tam: parse_amount(record.tam.as_ref()),
            inflection_point: record.inflection_point,
        }),
        // Unknown tags behave like CAGR, matching the stored data's default.
        _ => GrowthModel::Cagr(RateParameters {
            mean_growth_rate: record.mean_growth_rate,
            std_dev_growth_rate: record.std_dev_growth_rate,
        }),
    };

    Scenario {
        name: record.name,
        probability: record.probability,
        growth_model,
    }
}
