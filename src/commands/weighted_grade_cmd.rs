use crate::commands::base_commands::Commands;
use crate::commands::report_format::{data_source_name, format_grade_report, generation_date};
use crate::services::grade_request_json::parse_weighted_grade_request;
use crate::services::report_types::GradeReport;
use crate::services::weighted_grade::calc_weighted_grade;

pub fn weighted_grade_command(cmd: Commands) {
    if let Commands::WeightedGrade { input, output } = cmd {
        let request = match std::fs::read_to_string(&input) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to read request file: {e:?}");
                return;
            }
        };

        let items = match parse_weighted_grade_request(&request) {
            Ok(items) => items,
            Err(e) => {
                eprintln!("Invalid weighted grade request ({}): {e}", e.kind().label());
                return;
            }
        };

        let grade = match calc_weighted_grade(&items) {
            Ok(grade) => grade,
            Err(e) => {
                eprintln!(
                    "Failed to calculate weighted grade ({}): {e}",
                    e.kind().label()
                );
                return;
            }
        };

        let report = GradeReport {
            data_source: data_source_name(&input),
            generated_at: generation_date(),
            item_count: items.len(),
            grade,
        };
        println!("{}", format_grade_report(&report));

        if let Some(output) = output {
            let yaml = match serde_yaml::to_string(&report) {
                Ok(contents) => contents,
                Err(e) => {
                    eprintln!("Failed to serialize grade report: {e:?}");
                    return;
                }
            };
            if let Err(e) = std::fs::write(&output, yaml) {
                eprintln!("Failed to write grade report: {e:?}");
            } else {
                println!("Grade report written to {output}");
            }
        }
    }
}
