pub mod base_commands;
pub mod percentile_cmd;
pub mod report_format;
pub mod weighted_grade_cmd;
