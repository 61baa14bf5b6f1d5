use std::sync::atomic::{AtomicBool, Ordering};

use rand::Rng;
use thiserror::Error;

use crate::domain::model::ValuationModel;
use crate::services::cost_forecast::forecast_costs_with_rng;
use crate::services::dcf::{enterprise_value, free_cash_flows};
use crate::services::histogram::{HistogramError, write_histogram_png};
use crate::services::model_yaml::{ModelYamlError, load_model_from_file};
use crate::services::revenue_forecast::forecast_revenue_with_rng;
use crate::services::simulation_types::{SimulationOutput, SimulationReport, SimulationResult};
use crate::services::statistics::{calculate_statistics, generate_histogram_data};

/// Trials per progress report and cancellation check. A trial in progress
/// always completes; the stop flag is only honored between batches.
pub const BATCH_SIZE: usize = 100;

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("failed to read model file: {0}")]
    ReadModel(#[from] ModelYamlError),
    #[error("iterations must be greater than zero")]
    InvalidIterations,
    #[error("forecast period must be greater than zero")]
    InvalidForecastPeriod,
    #[error("discount rate must exceed the terminal growth rate")]
    NonPositiveTerminalSpread,
    #[error("a simulation is already running")]
    AlreadyRunning,
    #[error("simulation was cancelled")]
    Cancelled,
    #[error("failed to render histogram: {0}")]
    Histogram(#[from] HistogramError),
}

/// Run-state shared between a simulation and whoever may cancel it.
///
/// At most one run can hold a control at a time; starting a second run on
/// the same control fails with `AlreadyRunning` without touching the active
/// run. Both flags reset when the run finishes, whatever the outcome.
#[derive(Debug, Default)]
pub struct SimulationControl {
    running: AtomicBool,
    stop: AtomicBool,
}

impl SimulationControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cooperative cancellation, honored at the next batch boundary.
    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::SeqCst);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    fn stop_requested(&self) -> bool {
        self.stop.load(Ordering::SeqCst)
    }
}

struct RunGuard<'a>(&'a SimulationControl);

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.0.stop.store(false, Ordering::SeqCst);
        self.0.running.store(false, Ordering::SeqCst);
    }
}

/// Loads a model file, runs the simulation, renders the histogram PNG and
/// wraps everything into the persisted result document.
pub fn simulate_from_model_file(
    model_path: &str,
    iterations: usize,
    bins: usize,
    histogram_path: &str,
    control: &SimulationControl,
    on_progress: impl FnMut(f64),
) -> Result<SimulationOutput, SimulationError> {
    let model = load_model_from_file(model_path)?;
    let result = run_simulation(&model, iterations, bins, control, on_progress)?;
    write_histogram_png(histogram_path, &result.values, bins, None)?;

    let report = SimulationReport {
        data_source: data_source_name(model_path),
        run_date: chrono::Local::now()
            .date_naive()
            .format("%Y-%m-%d")
            .to_string(),
        iterations,
        forecast_period: model.company.forecast_period,
    };
    Ok(SimulationOutput { report, result })
}

pub fn run_simulation(
    model: &ValuationModel,
    iterations: usize,
    bins: usize,
    control: &SimulationControl,
    on_progress: impl FnMut(f64),
) -> Result<SimulationResult, SimulationError> {
    let mut rng = rand::thread_rng();
    run_simulation_with_rng(model, iterations, bins, control, on_progress, &mut rng)
}

pub fn run_simulation_with_rng<R: Rng + ?Sized>(
    model: &ValuationModel,
    iterations: usize,
    bins: usize,
    control: &SimulationControl,
    mut on_progress: impl FnMut(f64),
    rng: &mut R,
) -> Result<SimulationResult, SimulationError> {
    if iterations == 0 {
        return Err(SimulationError::InvalidIterations);
    }
    if model.company.forecast_period == 0 {
        return Err(SimulationError::InvalidForecastPeriod);
    }
    if model.company.discount_rate <= model.company.terminal_growth_rate {
        return Err(SimulationError::NonPositiveTerminalSpread);
    }
    if control.running.swap(true, Ordering::SeqCst) {
        return Err(SimulationError::AlreadyRunning);
    }
    let _guard = RunGuard(control);
    // A stop requested between runs does not carry over into this one.
    control.stop.store(false, Ordering::SeqCst);

    let mut values = Vec::with_capacity(iterations);
    let mut completed = 0;
    while completed < iterations {
        if control.stop_requested() {
            return Err(SimulationError::Cancelled);
        }
        let batch = BATCH_SIZE.min(iterations - completed);
        for _ in 0..batch {
            values.push(run_single_trial(model, rng));
        }
        completed += batch;
        on_progress(completed as f64 / iterations as f64 * 100.0);
    }

    let statistics = calculate_statistics(&values);
    let histogram = generate_histogram_data(&values, bins);
    Ok(SimulationResult {
        values,
        statistics,
        histogram,
    })
}

/// One independent trial: fresh revenue and cost paths aggregated into a
/// single enterprise value. Trials share nothing but the random source.
fn run_single_trial<R: Rng + ?Sized>(model: &ValuationModel, rng: &mut R) -> f64 {
    let company = &model.company;
    let revenue_forecast = forecast_revenue_with_rng(
        &model.segments,
        &model.segment_scenarios,
        company.forecast_period,
        company.terminal_growth_rate,
        rng,
    );
    let cost_forecast = forecast_costs_with_rng(
        &revenue_forecast,
        &model.cost_structure,
        &model.fixed_cost_growth,
        rng,
    );
    let fcf_forecast = free_cash_flows(&revenue_forecast, &cost_forecast, company.tax_rate);
    enterprise_value(
        &fcf_forecast,
        company.discount_rate,
        company.terminal_growth_rate,
    )
}

fn data_source_name(path: &str) -> String {
    std::path::Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
        .to_string()
}
