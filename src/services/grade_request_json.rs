use serde_json::Value;
use thiserror::Error;

use crate::domain::grade::WeightedItem;
use crate::domain::validation::ViolationKind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GradeRequestError {
    #[error("failed to parse request json: {0}")]
    Parse(String),
    #[error("items debe ser un arreglo")]
    ItemsNotAnArray,
    #[error("Cada item debe ser un objeto")]
    ItemNotAnObject,
    #[error("Cada item debe tener las propiedades score y weight")]
    MissingItemFields,
    #[error("score y weight deben ser números")]
    NonNumericItemField,
}

impl GradeRequestError {
    /// Every request-shape violation is a type violation.
    pub fn kind(&self) -> ViolationKind {
        ViolationKind::Type
    }
}

/// Parses a weighted grade request document, `{"items": [{"score": s,
/// "weight": w}, ...]}`, into the typed items the calculator takes.
/// Shape checks are fail-fast in document order.
pub fn parse_weighted_grade_request(input: &str) -> Result<Vec<WeightedItem>, GradeRequestError> {
    let document: Value = serde_json::from_str(input)
        .map_err(|source| GradeRequestError::Parse(source.to_string()))?;
    items_from_document(&document)
}

fn items_from_document(document: &Value) -> Result<Vec<WeightedItem>, GradeRequestError> {
    let items = document
        .get("items")
        .and_then(Value::as_array)
        .ok_or(GradeRequestError::ItemsNotAnArray)?;

    items.iter().map(weighted_item_from_value).collect()
}

fn weighted_item_from_value(value: &Value) -> Result<WeightedItem, GradeRequestError> {
    let object = value.as_object().ok_or(GradeRequestError::ItemNotAnObject)?;
    let (score, weight) = match (object.get("score"), object.get("weight")) {
        (Some(score), Some(weight)) => (score, weight),
        _ => return Err(GradeRequestError::MissingItemFields),
    };

    let score = score.as_f64().ok_or(GradeRequestError::NonNumericItemField)?;
    let weight = weight
        .as_f64()
        .ok_or(GradeRequestError::NonNumericItemField)?;
    Ok(WeightedItem { score, weight })
}
