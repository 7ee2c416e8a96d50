use crate::commands::base_commands::Commands;
use crate::commands::report_format::{data_source_name, format_percentile_report, generation_date};
use crate::services::percentile::percentile;
use crate::services::percentile_request_json::parse_percentile_request;
use crate::services::report_types::PercentileReport;

pub fn percentile_command(cmd: Commands) {
    if let Commands::Percentile { input, output } = cmd {
        let request = match std::fs::read_to_string(&input) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to read request file: {e:?}");
                return;
            }
        };

        let request = match parse_percentile_request(&request) {
            Ok(request) => request,
            Err(e) => {
                eprintln!("Invalid percentile request ({}): {e}", e.kind().label());
                return;
            }
        };

        let value = match percentile(request.p, &request.values) {
            Ok(value) => value,
            Err(e) => {
                eprintln!("Failed to calculate percentile ({}): {e}", e.kind().label());
                return;
            }
        };

        let report = PercentileReport {
            data_source: data_source_name(&input),
            generated_at: generation_date(),
            percentile: request.p,
            value_count: request.values.len(),
            value,
        };
        println!("{}", format_percentile_report(&report));

        if let Some(output) = output {
            let yaml = match serde_yaml::to_string(&report) {
                Ok(contents) => contents,
                Err(e) => {
                    eprintln!("Failed to serialize percentile report: {e:?}");
                    return;
                }
            };
            if let Err(e) = std::fs::write(&output, yaml) {
                eprintln!("Failed to write percentile report: {e:?}");
            } else {
                println!("Percentile report written to {output}");
            }
        }
    }
}
