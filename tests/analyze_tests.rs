use assert_fs::prelude::*;
use predicates::prelude::*;
use std::fs;

const RESULT_YAML: &str = r#"
report:
  data_source: model.yaml
  run_date: 2026-08-06
  iterations: 4
  forecast_period: 10
result:
  values: [1200.0, 900.0, 1500.0, 1100.0]
  statistics:
    mean: 1175.0
    median: 1150.0
    std_dev: 216.5
    min: 900.0
    max: 1500.0
    percentile_25: 1100.0
    percentile_75: 1500.0
  histogram:
    labels: ["900", "1200"]
    data: [1, 3]
"#;

#[test]
fn analyze_prints_metrics_and_writes_histogram() {
    let input_file = assert_fs::NamedTempFile::new("result.yaml").unwrap();
    input_file.write_str(RESULT_YAML).unwrap();
    let input_arg = input_file.path().to_str().unwrap().to_string();
    let histogram_path = format!("{input_arg}.analysis.png");

    let mut cmd = assert_cmd::cargo_bin_cmd!("valuations");
    cmd.args(["analyze", "-i", &input_arg, "-m", "1000"]);

    // Returns vs 1000: +20, -10, +50, +10 -> mean 17.5, upside 3 of 4.
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Investment Analysis"))
        .stdout(predicate::str::contains("Market value: 1000.00"))
        .stdout(predicate::str::contains("Expected return % | 17.50"))
        .stdout(predicate::str::contains("Upside probability % | 75.00"))
        .stdout(predicate::str::contains("Analysis histogram written to"));

    assert!(fs::metadata(&histogram_path).is_ok());
    fs::remove_file(&histogram_path).unwrap();
}

#[test]
fn analyze_reports_a_missing_input_file() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("valuations");
    cmd.args(["analyze", "-i", "does-not-exist.yaml", "-m", "1000"]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Failed to read simulation result"));
}
