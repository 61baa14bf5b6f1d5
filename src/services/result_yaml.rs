use std::io::{self, Write};

use thiserror::Error;

use crate::services::simulation_types::SimulationOutput;

#[derive(Error, Debug)]
pub enum ResultYamlError {
    #[error("failed to read result file: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse result yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
}

pub fn serialize_output_to_yaml<W: Write>(
    writer: &mut W,
    output: &SimulationOutput,
) -> io::Result<()> {
    let yaml =
        serde_yaml::to_string(output).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    writer.write_all(yaml.as_bytes())
}

pub fn load_output_from_yaml_file(path: &str) -> Result<SimulationOutput, ResultYamlError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&contents)?)
}
