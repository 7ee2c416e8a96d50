use thiserror::Error;

use crate::domain::grade::WeightedItem;
use crate::domain::validation::ViolationKind;
use crate::services::rounding::round2;

/// Maximum absolute deviation of the weight sum from 1 before the input is rejected.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.001;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WeightedGradeError {
    #[error("items no puede estar vacío")]
    EmptyItems,
    #[error("score y weight no pueden ser NaN")]
    NanScoreOrWeight,
    #[error("score debe estar entre 0 y 100")]
    ScoreOutOfRange,
    #[error("weight debe estar entre 0 y 1")]
    WeightOutOfRange,
    #[error("La suma de los weights debe ser 1 (tolerancia ±0.001)")]
    WeightSumNotOne,
}

impl WeightedGradeError {
    pub fn kind(&self) -> ViolationKind {
        match self {
            WeightedGradeError::NanScoreOrWeight => ViolationKind::Type,
            WeightedGradeError::EmptyItems
            | WeightedGradeError::ScoreOutOfRange
            | WeightedGradeError::WeightOutOfRange
            | WeightedGradeError::WeightSumNotOne => ViolationKind::Range,
        }
    }
}

/// Reduces `(score, weight)` pairs to a single grade rounded to two decimals.
///
/// Validation is fail-fast in item order: scores must lie in `[0, 100]`,
/// weights in `[0, 1]`, and the weight sum must equal 1 within
/// [`WEIGHT_SUM_TOLERANCE`]. The slice is never mutated.
pub fn calc_weighted_grade(items: &[WeightedItem]) -> Result<f64, WeightedGradeError> {
    if items.is_empty() {
        return Err(WeightedGradeError::EmptyItems);
    }

    let mut total_weight = 0.0;
    let mut weighted_sum = 0.0;
    for item in items {
        if item.score.is_nan() || item.weight.is_nan() {
            return Err(WeightedGradeError::NanScoreOrWeight);
        }
        if item.score < 0.0 || item.score > 100.0 {
            return Err(WeightedGradeError::ScoreOutOfRange);
        }
        if item.weight < 0.0 || item.weight > 1.0 {
            return Err(WeightedGradeError::WeightOutOfRange);
        }

        total_weight += item.weight;
        weighted_sum += item.score * item.weight;
    }

    if (total_weight - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(WeightedGradeError::WeightSumNotOne);
    }

    Ok(round2(weighted_sum))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;

    fn item(score: f64, weight: f64) -> WeightedItem {
        WeightedItem { score, weight }
    }

    #[test]
    fn calculates_the_reference_grade() {
        let items = vec![item(80.0, 0.4), item(90.0, 0.6)];
        assert_eq!(calc_weighted_grade(&items), Ok(86.0));
    }

    #[test]
    fn single_item_with_full_weight_returns_its_score() {
        let items = vec![item(75.0, 1.0)];
        assert_eq!(calc_weighted_grade(&items), Ok(75.0));
    }

    #[test]
    fn averages_equal_weights() {
        let items = vec![
            item(100.0, 0.25),
            item(80.0, 0.25),
            item(60.0, 0.25),
            item(40.0, 0.25),
        ];
        assert_eq!(calc_weighted_grade(&items), Ok(70.0));
    }

    #[test]
    fn rounds_fractional_results_to_two_decimals() {
        let items = vec![item(85.5, 0.4), item(92.3, 0.6)];
        assert_eq!(calc_weighted_grade(&items), Ok(89.58));
    }

    #[test]
    fn accepts_boundary_scores() {
        assert_eq!(calc_weighted_grade(&[item(0.0, 1.0)]), Ok(0.0));
        assert_eq!(calc_weighted_grade(&[item(100.0, 1.0)]), Ok(100.0));
    }

    #[test]
    fn zero_weight_item_does_not_affect_the_grade() {
        let items = vec![item(100.0, 1.0), item(0.0, 0.0)];
        assert_eq!(calc_weighted_grade(&items), Ok(100.0));
    }

    #[test]
    fn accepts_weight_sums_inside_the_tolerance() {
        // Sums of 0.9995 and 1.001 both stay within ±0.001 of 1.
        let low = vec![item(50.0, 0.4995), item(50.0, 0.5)];
        assert_eq!(calc_weighted_grade(&low), Ok(49.98));

        let high = vec![item(80.0, 0.501), item(80.0, 0.5)];
        assert_eq!(calc_weighted_grade(&high), Ok(80.08));
    }

    #[test]
    fn many_small_weights_summing_to_one_are_accepted() {
        let items: Vec<WeightedItem> = (0..10).map(|_| item(80.0, 0.1)).collect();
        assert_eq!(calc_weighted_grade(&items), Ok(80.0));
    }

    #[test]
    fn grade_is_invariant_to_item_order() {
        let mut items = vec![
            item(80.0, 0.4),
            item(90.0, 0.3),
            item(70.0, 0.2),
            item(60.0, 0.1),
        ];
        let expected = calc_weighted_grade(&items).unwrap();

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            items.shuffle(&mut rng);
            assert_eq!(calc_weighted_grade(&items), Ok(expected));
        }
    }

    #[test]
    fn rejects_empty_items() {
        assert_eq!(
            calc_weighted_grade(&[]),
            Err(WeightedGradeError::EmptyItems)
        );
    }

    #[test]
    fn rejects_nan_score_or_weight() {
        let nan_score = vec![item(f64::NAN, 1.0)];
        assert_eq!(
            calc_weighted_grade(&nan_score),
            Err(WeightedGradeError::NanScoreOrWeight)
        );

        let nan_weight = vec![item(80.0, f64::NAN)];
        assert_eq!(
            calc_weighted_grade(&nan_weight),
            Err(WeightedGradeError::NanScoreOrWeight)
        );
    }

    #[test]
    fn rejects_scores_outside_zero_to_one_hundred() {
        assert_eq!(
            calc_weighted_grade(&[item(-1.0, 1.0)]),
            Err(WeightedGradeError::ScoreOutOfRange)
        );
        assert_eq!(
            calc_weighted_grade(&[item(101.0, 1.0)]),
            Err(WeightedGradeError::ScoreOutOfRange)
        );
    }

    #[test]
    fn rejects_weights_outside_zero_to_one() {
        assert_eq!(
            calc_weighted_grade(&[item(80.0, -0.1)]),
            Err(WeightedGradeError::WeightOutOfRange)
        );
        assert_eq!(
            calc_weighted_grade(&[item(80.0, 1.5)]),
            Err(WeightedGradeError::WeightOutOfRange)
        );
    }

    #[test]
    fn rejects_weight_sums_outside_the_tolerance() {
        let low = vec![item(80.0, 0.4), item(90.0, 0.5)];
        assert_eq!(
            calc_weighted_grade(&low),
            Err(WeightedGradeError::WeightSumNotOne)
        );

        let high = vec![item(80.0, 0.6), item(90.0, 0.5)];
        assert_eq!(
            calc_weighted_grade(&high),
            Err(WeightedGradeError::WeightSumNotOne)
        );
    }

    #[test]
    fn first_violation_in_item_order_wins() {
        let items = vec![item(-1.0, 1.0), item(80.0, 1.5)];
        assert_eq!(
            calc_weighted_grade(&items),
            Err(WeightedGradeError::ScoreOutOfRange)
        );
    }

    #[test]
    fn classifies_violations() {
        assert_eq!(
            WeightedGradeError::NanScoreOrWeight.kind(),
            ViolationKind::Type
        );
        assert_eq!(WeightedGradeError::EmptyItems.kind(), ViolationKind::Range);
        assert_eq!(
            WeightedGradeError::ScoreOutOfRange.kind(),
            ViolationKind::Range
        );
        assert_eq!(
            WeightedGradeError::WeightSumNotOne.kind(),
            ViolationKind::Range
        );
    }

    #[test]
    fn reports_the_fixed_diagnostics() {
        assert_eq!(
            WeightedGradeError::EmptyItems.to_string(),
            "items no puede estar vacío"
        );
        assert_eq!(
            WeightedGradeError::WeightSumNotOne.to_string(),
            "La suma de los weights debe ser 1 (tolerancia ±0.001)"
        );
    }
}
