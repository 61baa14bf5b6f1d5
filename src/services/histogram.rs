use plotters::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HistogramError {
    #[error("failed to render histogram: {0}")]
    Render(String),
}

/// Renders the enterprise-value distribution as a PNG bar chart.
///
/// When `market_value` is given, bins at or above it are colored as upside
/// and the rest as downside; without it all bars share one color.
pub fn write_histogram_png(
    output_path: &str,
    values: &[f64],
    bins: usize,
    market_value: Option<f64>,
) -> Result<(), HistogramError> {
    render_histogram_png(output_path, values, bins, market_value)
}

fn render_histogram_png(
    output_path: &str,
    values: &[f64],
    bins: usize,
    market_value: Option<f64>,
) -> Result<(), HistogramError> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return Ok(());
    }

    let bins = bins.max(1);
    let min_value = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max_value = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let bin_width = (max_value - min_value) / bins as f64;

    let mut counts = vec![0usize; bins];
    for value in &finite {
        let index = if bin_width > 0.0 {
            (((value - min_value) / bin_width).floor() as usize).min(bins - 1)
        } else {
            0
        };
        counts[index] += 1;
    }
    let max_count = counts.iter().copied().max().unwrap_or(1);

    let root = BitMapBackend::new(output_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    let max_x = if bin_width > 0.0 {
        max_value
    } else {
        min_value + 1.0
    };
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Enterprise Value Distribution", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(min_value..max_x, 0..(max_count + 1))
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Enterprise value")
        .y_desc("Frequency")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_label_formatter(&|value| format!("{value:.0}"))
        .draw()
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    let base_color = RGBColor(30, 122, 204);
    let upside_color = RGBColor(46, 139, 87);
    let downside_color = RGBColor(178, 34, 34);

    chart
        .draw_series(counts.iter().enumerate().map(|(index, count)| {
            let bin_start = min_value + index as f64 * bin_width;
            let bin_end = if bin_width > 0.0 {
                bin_start + bin_width
            } else {
                max_x
            };
            let color = match market_value {
                Some(reference) if bin_start >= reference => upside_color,
                Some(_) => downside_color,
                None => base_color,
            };
            Rectangle::new(
                [(bin_start, 0), (bin_end, *count)],
                ShapeStyle::from(&color).filled(),
            )
        }))
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| HistogramError::Render(e.to_string()))?;
    Ok(())
}
