pub mod analyze_cmd;
pub mod base_commands;
pub mod report_format;
pub mod simulate_cmd;
