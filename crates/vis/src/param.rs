//! Reactive params shared between components.

use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::Value;
use serde_json::json;

use crate::id::Id;

/// A scalar value assignable to a [Param] or used as a component option.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// A boolean value.
    Bool(bool),
    /// A numeric value.
    Number(f64),
    /// A string value.
    String(String),
    /// A calendar date, serialized as ISO-8601 (`YYYY-MM-DD`).
    Date(NaiveDate),
    /// An array of values.
    Array(Vec<ParamValue>),
}

impl ParamValue {
    pub(crate) fn to_value(&self) -> Value {
        match self {
            ParamValue::Bool(value) => json!(value),
            ParamValue::Number(value) => json!(value),
            ParamValue::String(value) => json!(value),
            ParamValue::Date(value) => json!(value.format("%Y-%m-%d").to_string()),
            ParamValue::Array(values) => {
                Value::Array(values.iter().map(ParamValue::to_value).collect())
            }
        }
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Number(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Number(value as f64)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::String(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::String(value)
    }
}

impl From<NaiveDate> for ParamValue {
    fn from(value: NaiveDate) -> Self {
        ParamValue::Date(value)
    }
}

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(values: Vec<T>) -> Self {
        ParamValue::Array(values.into_iter().map(Into::into).collect())
    }
}

/// A named reactive variable.
///
/// Components reference a param as `$name` in their configs; the param
/// definition itself is collected into the top-level `params` section
/// of the generated spec.
#[derive(Debug, Clone)]
pub struct Param {
    name: Arc<str>,
    value: ParamValue,
}

impl Param {
    /// Creates a param with a generated unique name and the given
    /// default value.
    pub fn new(value: impl Into<ParamValue>) -> Param {
        Self {
            name: Arc::from(Id::name("param")),
            value: value.into(),
        }
    }

    /// The generated name of the param.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The default value of the param.
    pub fn value(&self) -> &ParamValue {
        &self.value
    }

    /// The `$name` reference embedded into component configs.
    pub(crate) fn reference(&self) -> Value {
        Value::String(format!("${}", self.name))
    }

    /// The definition collected into the `params` section.
    pub(crate) fn definition(&self) -> Value {
        self.value.to_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn param_reference_is_prefixed() {
        let param = Param::new(0.95);

        let reference = param.reference();

        assert_eq!(reference, json!(format!("${}", param.name())));
    }

    #[test]
    fn date_values_serialize_as_iso() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 13).unwrap();
        let value = ParamValue::from(date);

        assert_eq!(value.to_value(), json!("2024-05-13"));
    }

    #[test]
    fn array_values_serialize_elementwise() {
        let value = ParamValue::from(vec!["a", "b"]);

        assert_eq!(value.to_value(), json!(["a", "b"]));
    }
}
