//! Derived columns: SQL expressions and aggregates.

use serde_json::Value;
use serde_json::json;

use crate::error::Result;
use crate::error::VisError;
use crate::stats::z_score;

/// A derived column used in place of a plain column reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform(Value);

impl Transform {
    pub(crate) fn into_value(self) -> Value {
        self.0
    }
}

/// A SQL expression evaluated by the engine's query layer.
pub fn sql(expression: impl Into<String>) -> Transform {
    Transform(json!({ "sql": expression.into() }))
}

/// The average of a column.
pub fn avg(column: &str) -> Transform {
    aggregate("avg", column)
}

/// The smallest value of a column.
pub fn min(column: &str) -> Transform {
    aggregate("min", column)
}

/// The largest value of a column.
pub fn max(column: &str) -> Transform {
    aggregate("max", column)
}

/// The sum of a column.
pub fn sum(column: &str) -> Transform {
    aggregate("sum", column)
}

/// The number of values of a column.
pub fn count(column: &str) -> Transform {
    aggregate("count", column)
}

/// The first value of a column.
pub fn first(column: &str) -> Transform {
    aggregate("first", column)
}

fn aggregate(kind: &str, column: &str) -> Transform {
    Transform(json!({ kind: column }))
}

/// The column(s) supplying the standard error for [ci_bounds].
#[derive(Debug, Clone)]
pub enum Stderr {
    /// A single column used for both bounds.
    Column(String),
    /// Distinct columns for the lower and upper bounds.
    Bounds(String, String),
}

impl From<&str> for Stderr {
    fn from(column: &str) -> Self {
        Stderr::Column(column.to_owned())
    }
}

impl From<(&str, &str)> for Stderr {
    fn from((lower, upper): (&str, &str)) -> Self {
        Stderr::Bounds(lower.to_owned(), upper.to_owned())
    }
}

/// The lower and upper bounds of a confidence interval around a score
/// column, as a pair of SQL transforms `score ∓ z * stderr`.
///
/// The level must be strictly between 0 and 1 and one of the levels
/// tabulated by [z_score](crate::stats::z_score).
pub fn ci_bounds(level: f64, score: &str, stderr: impl Into<Stderr>) -> Result<(Transform, Transform)> {
    if !(level > 0.0 && level < 1.0) {
        return Err(VisError::ConfidenceLevel(level));
    }

    let z = z_score(level)?;
    let (lower, upper) = match stderr.into() {
        Stderr::Column(column) => (column.clone(), column),
        Stderr::Bounds(lower, upper) => (lower, upper),
    };

    let bound = |sign: char, column: &str| sql(format!("{score} {sign} ({z} * {column})"));

    Ok((bound('-', &lower), bound('+', &upper)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sql_wraps_the_expression() {
        let transform = sql("score - 1");

        assert_eq!(transform.into_value(), json!({ "sql": "score - 1" }));
    }

    #[test]
    fn aggregates_name_the_column() {
        assert_eq!(avg("score").into_value(), json!({ "avg": "score" }));
        assert_eq!(count("model").into_value(), json!({ "count": "model" }));
    }

    #[test]
    fn ci_bounds_expand_to_sql() {
        let (lower, upper) = ci_bounds(0.95, "score", "stderr").unwrap();

        assert_eq!(
            lower.into_value(),
            json!({ "sql": "score - (1.96 * stderr)" })
        );
        assert_eq!(
            upper.into_value(),
            json!({ "sql": "score + (1.96 * stderr)" })
        );
    }

    #[test]
    fn ci_bounds_use_distinct_stderr_columns() {
        let (lower, upper) = ci_bounds(0.90, "score", ("lo", "hi")).unwrap();

        assert_eq!(lower.into_value(), json!({ "sql": "score - (1.645 * lo)" }));
        assert_eq!(upper.into_value(), json!({ "sql": "score + (1.645 * hi)" }));
    }

    #[test]
    fn out_of_range_levels_fail() {
        assert!(ci_bounds(0.0, "score", "stderr").is_err());
        assert!(ci_bounds(1.0, "score", "stderr").is_err());
        assert!(ci_bounds(0.42, "score", "stderr").is_err());
    }
}
