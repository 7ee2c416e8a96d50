use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct GradeReport {
    pub data_source: String,
    pub generated_at: String,
    pub item_count: usize,
    pub grade: f64,
}

#[derive(Serialize, Debug, Clone)]
pub struct PercentileReport {
    pub data_source: String,
    pub generated_at: String,
    pub percentile: f64,
    pub value_count: usize,
    pub value: f64,
}
