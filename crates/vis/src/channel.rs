//! Values bound to mark and plot options.

use serde_json::Value;
use serde_json::json;

use crate::param::Param;
use crate::transform::Transform;

/// The value bound to a mark or plot option: a column name, a
/// constant, a literal array of values, a param reference, or a
/// derived column.
#[derive(Debug, Clone)]
pub enum Channel {
    /// A column name (or a constant string such as a CSS color when
    /// the option does not read from the data source).
    Column(String),
    /// A constant number.
    Number(f64),
    /// A constant boolean.
    Bool(bool),
    /// A literal array of values, e.g. computed coordinates.
    Values(Vec<Value>),
    /// A reference to a [Param].
    Param(Param),
    /// A derived column.
    Transform(Transform),
}

impl Channel {
    pub(crate) fn into_value(self) -> Value {
        match self {
            Channel::Column(name) => Value::String(name),
            Channel::Number(value) => json!(value),
            Channel::Bool(value) => Value::Bool(value),
            Channel::Values(values) => Value::Array(values),
            Channel::Param(param) => param.reference(),
            Channel::Transform(transform) => transform.into_value(),
        }
    }

    pub(crate) fn param(&self) -> Option<&Param> {
        match self {
            Channel::Param(param) => Some(param),
            _ => None,
        }
    }
}

impl From<&str> for Channel {
    fn from(name: &str) -> Self {
        Channel::Column(name.to_owned())
    }
}

impl From<String> for Channel {
    fn from(name: String) -> Self {
        Channel::Column(name)
    }
}

impl From<f64> for Channel {
    fn from(value: f64) -> Self {
        Channel::Number(value)
    }
}

impl From<i64> for Channel {
    fn from(value: i64) -> Self {
        Channel::Number(value as f64)
    }
}

impl From<bool> for Channel {
    fn from(value: bool) -> Self {
        Channel::Bool(value)
    }
}

impl From<Vec<f64>> for Channel {
    fn from(values: Vec<f64>) -> Self {
        Channel::Values(values.into_iter().map(|value| json!(value)).collect())
    }
}

impl From<Vec<String>> for Channel {
    fn from(values: Vec<String>) -> Self {
        Channel::Values(values.into_iter().map(Value::String).collect())
    }
}

impl From<Vec<Value>> for Channel {
    fn from(values: Vec<Value>) -> Self {
        Channel::Values(values)
    }
}

impl From<Param> for Channel {
    fn from(param: Param) -> Self {
        Channel::Param(param)
    }
}

impl From<&Param> for Channel {
    fn from(param: &Param) -> Self {
        Channel::Param(param.clone())
    }
}

impl From<Transform> for Channel {
    fn from(transform: Transform) -> Self {
        Channel::Transform(transform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::sql;

    #[test]
    fn columns_stay_plain_strings() {
        let channel = Channel::from("score");

        assert_eq!(channel.into_value(), json!("score"));
    }

    #[test]
    fn params_become_references() {
        let param = Param::new(700.0);
        let channel = Channel::from(&param);

        assert_eq!(channel.into_value(), json!(format!("${}", param.name())));
    }

    #[test]
    fn transforms_keep_their_config() {
        let channel = Channel::from(sql("score + 1"));

        assert_eq!(channel.into_value(), json!({ "sql": "score + 1" }));
    }

    #[test]
    fn value_arrays_pass_through() {
        let channel = Channel::from(vec![0.0, 0.5, 1.0]);

        assert_eq!(channel.into_value(), json!([0.0, 0.5, 1.0]));
    }
}
