pub mod grade_request_json;
pub mod percentile;
pub mod percentile_request_json;
pub mod report_types;
pub mod rounding;
pub mod weighted_grade;
