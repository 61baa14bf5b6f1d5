use std::collections::{BTreeMap, HashMap};

use crate::domain::company::CompanyInfo;
use crate::domain::costs::{CostGrowth, CostItem};
use crate::domain::scenario::Scenario;
use crate::domain::segment::Segment;

/// The complete input snapshot for a simulation run.
///
/// Built once during ingestion and treated as immutable for the duration of
/// the run; all monetary fields are already numeric.
#[derive(Debug, Clone, PartialEq)]
pub struct ValuationModel {
    pub company: CompanyInfo,
    pub segments: Vec<Segment>,
    /// Scenario sets keyed by segment name. Segments without an entry fall
    /// back to the default revenue trend.
    pub segment_scenarios: HashMap<String, Vec<Scenario>>,
    pub cost_structure: BTreeMap<String, CostItem>,
    pub fixed_cost_growth: BTreeMap<String, CostGrowth>,
}
