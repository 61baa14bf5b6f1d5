pub mod cost_forecast;
pub mod dcf;
pub mod growth_models;
pub mod histogram;
pub mod model_yaml;
pub mod result_yaml;
pub mod revenue_forecast;
pub mod sampling;
pub mod scenario_selection;
pub mod simulation;
pub mod simulation_types;
pub mod statistics;
