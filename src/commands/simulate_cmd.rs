use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_simulation_report;
use crate::services::result_yaml::serialize_output_to_yaml;
use crate::services::simulation::{SimulationControl, simulate_from_model_file};

pub fn simulate_command(cmd: Commands) {
    if let Commands::Simulate {
        input,
        output,
        iterations,
        bins,
    } = cmd
    {
        let control = SimulationControl::new();
        let histogram_path = format!("{output}.png");

        let mut last_decile = 0u32;
        let simulation = match simulate_from_model_file(
            &input,
            iterations as usize,
            bins,
            &histogram_path,
            &control,
            |percent| {
                let decile = (percent / 10.0) as u32;
                if decile > last_decile {
                    last_decile = decile;
                    println!("progress: {percent:.0}%");
                }
            },
        ) {
            Ok(simulation) => simulation,
            Err(e) => {
                eprintln!("Failed to run simulation: {e:?}");
                return;
            }
        };

        let mut buffer = Vec::new();
        if let Err(e) = serialize_output_to_yaml(&mut buffer, &simulation) {
            eprintln!("Failed to serialize simulation output: {e:?}");
            return;
        }
        if let Err(e) = std::fs::write(&output, buffer) {
            eprintln!("Failed to write simulation output: {e:?}");
            return;
        }

        println!("{}", format_simulation_report(&simulation));
        println!("Simulation result written to {output}");
        println!("Simulation histogram written to {histogram_path}");
    }
}
