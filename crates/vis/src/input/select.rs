use serde_json::Map;
use serde_json::Value;
use serde_json::json;

use crate::component::Component;
use crate::data::Data;
use crate::error::Result;
use crate::error::VisError;
use crate::input::Target;
use crate::param::ParamValue;
use crate::selection::Selection;

/// A select input under construction.
///
/// Options come either from the unique values of a data column
/// ([select]) or from a static list ([select_values]).
#[derive(Debug, Clone)]
pub struct Select {
    data: Option<Data>,
    column: Option<String>,
    options: Option<Value>,
    filter_by: Option<Selection>,
    target: Option<Target>,
    field: Option<String>,
    label: Option<String>,
    value: Option<ParamValue>,
    multiple: bool,
    width: Option<f64>,
}

/// A select input populated from the unique values of a data column.
///
/// The target defaults to the data source's selection; each selected
/// value contributes a `column = value` predicate.
pub fn select(data: &Data) -> Select {
    Select::new(Some(data.clone()), None)
}

/// A select input over a static list of options.
///
/// A [target](Select::target) must be provided since there is no data
/// source to fall back to.
pub fn select_values(options: impl IntoIterator<Item = ParamValue>) -> Select {
    let options = options
        .into_iter()
        .map(|option| option.to_value())
        .collect();
    Select::new(None, Some(Value::Array(options)))
}

impl Select {
    fn new(data: Option<Data>, options: Option<Value>) -> Select {
        Self {
            data,
            column: None,
            options,
            filter_by: None,
            target: None,
            field: None,
            label: None,
            value: None,
            multiple: false,
            width: None,
        }
    }

    /// The column whose unique values populate the options.
    pub fn column(mut self, column: &str) -> Select {
        self.column = Some(column.to_owned());
        self
    }

    /// Maps option values to alternate display labels.
    pub fn labeled_options<I, S>(mut self, options: I) -> Select
    where
        I: IntoIterator<Item = (S, ParamValue)>,
        S: Into<String>,
    {
        let options: Vec<Value> = options
            .into_iter()
            .map(|(label, value)| {
                json!({ "label": label.into(), "value": value.to_value() })
            })
            .collect();
        self.options = Some(Value::Array(options));
        self
    }

    /// A selection to filter the data source by.
    pub fn filter_by(mut self, selection: &Selection) -> Select {
        self.filter_by = Some(selection.clone());
        self
    }

    /// The param or selection updated with the selected value.
    pub fn target(mut self, target: impl Into<Target>) -> Select {
        self.target = Some(target.into());
        self
    }

    /// The column name used in generated selection predicates
    /// (defaults to the option column).
    pub fn field(mut self, field: &str) -> Select {
        self.field = Some(field.to_owned());
        self
    }

    /// A text label for the input (defaults to the column name).
    pub fn label(mut self, label: &str) -> Select {
        self.label = Some(label.to_owned());
        self
    }

    /// The initially selected value.
    pub fn value(mut self, value: impl Into<ParamValue>) -> Select {
        self.value = Some(value.into());
        self
    }

    /// Enables selection of multiple values.
    pub fn multiple(mut self, multiple: bool) -> Select {
        self.multiple = multiple;
        self
    }

    /// Width of the input, in pixels.
    pub fn width(mut self, width: f64) -> Select {
        self.width = Some(width);
        self
    }

    /// Builds the select component, validating the option source.
    pub fn build(self) -> Result<Component> {
        let mut config = Map::new();
        config.insert("input".to_owned(), json!("select"));

        let mut component = Component::new(Value::Null);

        let target = match (&self.data, &self.target) {
            (_, Some(target)) => target.clone(),
            (Some(data), None) => Target::Selection(data.selection().clone()),
            (None, None) => {
                return Err(VisError::InputConfig(
                    "a select input over static options requires a target".to_owned(),
                ));
            }
        };

        match (&self.data, &self.options) {
            (Some(data), None) => {
                let column = self.column.as_deref().ok_or_else(|| {
                    VisError::InputConfig(
                        "a select input over a data source requires a column".to_owned(),
                    )
                })?;
                data.validate_column(column)?;

                config.insert("from".to_owned(), json!(data.table()));
                config.insert("column".to_owned(), json!(column));
                if let Some(filter_by) = &self.filter_by {
                    config.insert("filterBy".to_owned(), filter_by.reference());
                    component.register_selection(filter_by);
                }
                component.register_data(data);
            }
            (None, Some(options)) => {
                config.insert("options".to_owned(), options.clone());
            }
            (Some(_), Some(_)) => {
                return Err(VisError::InputConfig(
                    "a select input takes a data column or static options, not both".to_owned(),
                ));
            }
            (None, None) => {
                return Err(VisError::InputConfig(
                    "a select input requires a data column or static options".to_owned(),
                ));
            }
        }

        config.insert("as".to_owned(), target.reference());
        target.register(&mut component);

        if target.is_selection()
            && let Some(field) = self.field.as_deref().or(self.column.as_deref())
        {
            config.insert("field".to_owned(), json!(field));
        }

        if let Some(label) = self.label.as_deref().or(self.column.as_deref()) {
            config.insert("label".to_owned(), json!(label));
        }
        if let Some(value) = &self.value {
            config.insert("value".to_owned(), value.to_value());
        }
        if self.multiple {
            config.insert("multiple".to_owned(), json!(true));
        }
        if let Some(width) = self.width {
            config.insert("width".to_owned(), json!(width));
        }

        Ok(component.with_config(Value::Object(config)))
    }
}
