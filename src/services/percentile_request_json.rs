use serde_json::Value;
use thiserror::Error;

use crate::domain::validation::ViolationKind;

#[derive(Debug, Clone, PartialEq)]
pub struct PercentileRequest {
    pub p: f64,
    pub values: Vec<f64>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PercentileRequestError {
    #[error("failed to parse request json: {0}")]
    Parse(String),
    #[error("p debe ser un número")]
    NonNumericPercentile,
    #[error("values debe ser un arreglo")]
    ValuesNotAnArray,
    #[error("Todos los elementos de values deben ser números")]
    NonNumericElement,
}

impl PercentileRequestError {
    /// Every request-shape violation is a type violation.
    pub fn kind(&self) -> ViolationKind {
        ViolationKind::Type
    }
}

/// Parses a percentile request document, `{"p": number, "values": [...]}`.
/// `p` is checked before `values`; element checks are fail-fast in
/// document order.
pub fn parse_percentile_request(input: &str) -> Result<PercentileRequest, PercentileRequestError> {
    let document: Value = serde_json::from_str(input)
        .map_err(|source| PercentileRequestError::Parse(source.to_string()))?;
    request_from_document(&document)
}

fn request_from_document(document: &Value) -> Result<PercentileRequest, PercentileRequestError> {
    let p = document
        .get("p")
        .and_then(Value::as_f64)
        .ok_or(PercentileRequestError::NonNumericPercentile)?;

    let values = document
        .get("values")
        .and_then(Value::as_array)
        .ok_or(PercentileRequestError::ValuesNotAnArray)?;
    let values = values
        .iter()
        .map(|value| {
            value
                .as_f64()
                .ok_or(PercentileRequestError::NonNumericElement)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PercentileRequest { p, values })
}
