use crate::common::*;
use crate::error::RollError;
use serde::{Deserialize, Serialize};

/// One resolved dice term.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RollDetail {
    /// The term exactly as written, e.g. `3d6` or `1D20`.
    pub notation: String,
    /// One face per die, in the order drawn.
    pub rolls: NonEmpty<UInt>,
    pub sum: u64,
}

impl RollDetail {
    pub(crate) fn new(notation: &str, rolls: NonEmpty<UInt>) -> Self {
        let sum = rolls.iter().map(|&x| u64::from(x)).sum();
        Self {
            notation: notation.to_owned(),
            rolls,
            sum,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollResult {
    /// The input with whitespace removed.
    pub expression: String,
    /// `expression` with each dice term replaced by its sum.
    pub evaluated: String,
    pub details: Vec<RollDetail>,
    /// The total, truncated to two decimal places.
    pub result: Float,
}

/// The result of evaluating one expression.
pub type Outcome = Result<RollResult, RollError>;

/// `floor(x * 100) / 100`, never negative zero.
pub(crate) fn truncate(x: Float) -> Float {
    let t = (x * 100.0).floor() / 100.0;
    if !t.is_finite() {
        // Only reachable for magnitudes where every float is an integer.
        x
    } else if t == 0.0 {
        0.0
    } else {
        t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_sum() {
        let detail = RollDetail::new("3d6", vec1![1, 5, 6]);
        assert_eq!(detail.sum, 12);
        assert_eq!(detail.notation, "3d6");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate(10.0), 10.0);
        assert_eq!(truncate(2.5), 2.5);
        assert_eq!(truncate(1.0 / 3.0), 0.33);
        assert_eq!(truncate(2.0 / 3.0), 0.66);
        assert_eq!(truncate(-1.0 / 3.0), -0.34);
        assert_eq!(truncate(0.1 + 0.2), 0.3);
        assert!(truncate(-0.0).is_sign_positive());
        assert!(truncate(-0.001).is_sign_negative());
        assert_eq!(truncate(1e307), 1e307);
    }

    #[test]
    fn test_serialized_shape() {
        let result = RollResult {
            expression: "2d6+3".into(),
            evaluated: "7+3".into(),
            details: vec![RollDetail::new("2d6", vec1![3, 4])],
            result: 10.0,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "expression": "2d6+3",
                "evaluated": "7+3",
                "details": [{ "notation": "2d6", "rolls": [3, 4], "sum": 7 }],
                "result": 10.0,
            })
        );
    }

    #[test]
    fn test_error_serialized_shape() {
        let json = serde_json::to_value(RollError::bad_dice(Some("0d6"))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "kind": "InvalidDiceFormat", "notation": "0d6" })
        );
        let json = serde_json::to_value(RollError::DivisionByZero).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "DivisionByZero" }));
    }
}
