use assert_fs::prelude::*;
use predicates::prelude::*;
use std::fs;

const MODEL_YAML: &str = r#"
financial_structure:
  company_info:
    name: Demo
    discount_rate: 10
    tax_rate: 25
    forecast_period: 5
    terminal_growth_rate: 2.5
    market_value: "1,500"
  business_segments:
    - name: Cloud
      revenue: "1,200"
    - name: Devices
      revenue: 800
  cost_structure:
    cogs:
      amount: 900
      variable_ratio: 80
      fixed_ratio: 20
    labor:
      amount: 300
      variable_ratio: 30
      fixed_ratio: 70
scenario_model:
  segment_scenarios:
    Cloud:
      - name: bull
        probability: 60
        growth_model: cagr
        mean_growth_rate: 12
        std_dev_growth_rate: 3
      - name: bear
        probability: 40
        growth_model: growth
        mean_growth_rate: 4
        std_dev_growth_rate: 2
  fixed_cost_growth:
    cogs:
      mean: 2
      std_dev: 0.5
    labor:
      mean: 4
      std_dev: 1
"#;

#[test]
fn simulate_writes_output_and_histogram() {
    let input_file = assert_fs::NamedTempFile::new("model.yaml").unwrap();
    input_file.write_str(MODEL_YAML).unwrap();
    let output_file = assert_fs::NamedTempFile::new("result.yaml").unwrap();

    let input_arg = input_file.path().to_str().unwrap().to_string();
    let output_arg = output_file.path().to_str().unwrap().to_string();
    let histogram_path = format!("{output_arg}.png");

    let mut cmd = assert_cmd::cargo_bin_cmd!("valuations");
    cmd.args(["simulate", "-i", &input_arg, "-o", &output_arg, "-n", "200", "-b", "20"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Valuation Report"))
        .stdout(predicate::str::contains("Simulation result written to"));

    let output = fs::read_to_string(output_file.path()).unwrap();
    assert!(output.contains("report:"));
    assert!(output.contains("data_source: model.yaml"));
    assert!(output.contains("iterations: 200"));
    assert!(output.contains("statistics:"));
    assert!(output.contains("histogram:"));

    assert!(fs::metadata(&histogram_path).is_ok());
    fs::remove_file(&histogram_path).unwrap();
}

#[test]
fn simulate_refuses_terminal_growth_at_the_discount_rate() {
    let model = r#"
financial_structure:
  company_info:
    discount_rate: 3
    tax_rate: 25
    forecast_period: 5
    terminal_growth_rate: 3
  business_segments:
    - name: Core
      revenue: 100
"#;
    let input_file = assert_fs::NamedTempFile::new("model.yaml").unwrap();
    input_file.write_str(model).unwrap();
    let output_file = assert_fs::NamedTempFile::new("result.yaml").unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("valuations");
    cmd.args([
        "simulate",
        "-i",
        input_file.path().to_str().unwrap(),
        "-o",
        output_file.path().to_str().unwrap(),
        "-n",
        "100",
    ]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Failed to run simulation"));
}
