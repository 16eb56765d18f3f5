use serde_json::Map;
use serde_json::Value;
use serde_json::json;

use crate::component::Component;
use crate::data::Data;
use crate::error::Result;
use crate::error::VisError;
use crate::input::Target;
use crate::selection::Selection;

/// A slider input under construction.
#[derive(Debug, Clone)]
pub struct Slider {
    data: Data,
    column: Option<String>,
    filter_by: Option<Selection>,
    target: Option<Target>,
    field: Option<String>,
    label: Option<String>,
    value: Option<f64>,
    min: Option<f64>,
    max: Option<f64>,
    step: Option<f64>,
    width: Option<f64>,
}

/// A slider over the numeric range of a data column.
///
/// The range defaults to the column's min/max; explicit
/// [min](Slider::min)/[max](Slider::max) override it.
pub fn slider(data: &Data) -> Slider {
    Slider {
        data: data.clone(),
        column: None,
        filter_by: None,
        target: None,
        field: None,
        label: None,
        value: None,
        min: None,
        max: None,
        step: None,
        width: None,
    }
}

impl Slider {
    /// The column the slider ranges over.
    pub fn column(mut self, column: &str) -> Slider {
        self.column = Some(column.to_owned());
        self
    }

    /// A selection to filter the data source by.
    pub fn filter_by(mut self, selection: &Selection) -> Slider {
        self.filter_by = Some(selection.clone());
        self
    }

    /// The param or selection updated with the slider value.
    pub fn target(mut self, target: impl Into<Target>) -> Slider {
        self.target = Some(target.into());
        self
    }

    /// The column name used in generated selection predicates
    /// (defaults to the slider column).
    pub fn field(mut self, field: &str) -> Slider {
        self.field = Some(field.to_owned());
        self
    }

    /// A text label for the input (defaults to the column name).
    pub fn label(mut self, label: &str) -> Slider {
        self.label = Some(label.to_owned());
        self
    }

    /// The initial slider value.
    pub fn value(mut self, value: f64) -> Slider {
        self.value = Some(value);
        self
    }

    /// The lower bound of the slider.
    pub fn min(mut self, min: f64) -> Slider {
        self.min = Some(min);
        self
    }

    /// The upper bound of the slider.
    pub fn max(mut self, max: f64) -> Slider {
        self.max = Some(max);
        self
    }

    /// The slider step size.
    pub fn step(mut self, step: f64) -> Slider {
        self.step = Some(step);
        self
    }

    /// Width of the input, in pixels.
    pub fn width(mut self, width: f64) -> Slider {
        self.width = Some(width);
        self
    }

    /// Builds the slider component, validating the column.
    pub fn build(self) -> Result<Component> {
        let column = self.column.as_deref().ok_or_else(|| {
            VisError::InputConfig("a slider requires a column".to_owned())
        })?;
        self.data.validate_column(column)?;

        let mut config = Map::new();
        config.insert("input".to_owned(), json!("slider"));
        config.insert("from".to_owned(), json!(self.data.table()));
        config.insert("column".to_owned(), json!(column));

        let mut component = Component::new(Value::Null);
        component.register_data(&self.data);

        if let Some(filter_by) = &self.filter_by {
            config.insert("filterBy".to_owned(), filter_by.reference());
            component.register_selection(filter_by);
        }

        let target = self
            .target
            .unwrap_or_else(|| Target::Selection(self.data.selection().clone()));
        config.insert("as".to_owned(), target.reference());
        target.register(&mut component);

        if target.is_selection() {
            let field = self.field.as_deref().unwrap_or(column);
            config.insert("field".to_owned(), json!(field));
        }

        let label = self.label.as_deref().unwrap_or(column);
        config.insert("label".to_owned(), json!(label));

        for (key, option) in [
            ("value", self.value),
            ("min", self.min),
            ("max", self.max),
            ("step", self.step),
            ("width", self.width),
        ] {
            if let Some(value) = option {
                config.insert(key.to_owned(), json!(value));
            }
        }

        Ok(component.with_config(Value::Object(config)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Frame;

    #[test]
    fn sliders_carry_their_range() {
        let frame = Frame::from_columns([(
            "score",
            vec![json!(0.1), json!(0.9)],
        )])
        .unwrap();
        let data = Data::new("evals", frame);

        let component = slider(&data)
            .column("score")
            .min(0.0)
            .max(1.0)
            .step(0.05)
            .value(0.5)
            .width(200.0)
            .build()
            .unwrap();

        let config = component.config();
        assert_eq!(config["input"], json!("slider"));
        assert_eq!(config["min"], json!(0.0));
        assert_eq!(config["max"], json!(1.0));
        assert_eq!(config["step"], json!(0.05));
        assert_eq!(config["value"], json!(0.5));
        assert_eq!(config["label"], json!("score"));
    }

    #[test]
    fn unknown_columns_fail() {
        let frame = Frame::from_columns([("score", vec![json!(0.1)])]).unwrap();
        let data = Data::new("evals", frame);

        let result = slider(&data).column("stderr").build();

        assert!(matches!(result, Err(VisError::MissingColumn { .. })));
    }
}
