use chrono::Local;

use crate::services::report_types::{GradeReport, PercentileReport};

pub fn format_grade_report(report: &GradeReport) -> String {
    let mut lines = Vec::new();
    lines.push("Weighted Grade Report".to_string());
    lines.push(format!("Data source: {}", report.data_source));
    lines.push(format!("Generated: {}", report.generated_at));
    lines.push(format!("Items: {}", report.item_count));
    lines.push(format!("Grade: {:.2}", report.grade));
    lines.join("\n")
}

pub fn format_percentile_report(report: &PercentileReport) -> String {
    let mut lines = Vec::new();
    lines.push("Percentile Report".to_string());
    lines.push(format!("Data source: {}", report.data_source));
    lines.push(format!("Generated: {}", report.generated_at));
    lines.push(format!("Percentile: {}", report.percentile));
    lines.push(format!("Values: {}", report.value_count));
    lines.push(format!("Value: {:.2}", report.value));
    lines.join("\n")
}

pub fn data_source_name(path: &str) -> String {
    std::path::Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
        .to_string()
}

pub fn generation_date() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}
