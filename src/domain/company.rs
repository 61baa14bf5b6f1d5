/// Scalar valuation parameters shared by every trial.
///
/// Rates are percentages (a `discount_rate` of 10 means 10 % per year).
/// `market_value` is the optional reference value the investment analysis
/// compares the simulated distribution against.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyInfo {
    pub name: String,
    pub discount_rate: f64,
    pub tax_rate: f64,
    pub forecast_period: u32,
    pub terminal_growth_rate: f64,
    pub market_value: Option<f64>,
}
