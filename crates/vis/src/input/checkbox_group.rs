use serde_json::Map;
use serde_json::Value;
use serde_json::json;

use crate::component::Component;
use crate::data::Data;
use crate::error::Result;
use crate::input::Target;
use crate::selection::Selection;

/// A checkbox group under construction: one checkbox per unique
/// column value.
#[derive(Debug, Clone)]
pub struct CheckboxGroup {
    data: Data,
    column: Option<String>,
    options: Option<Vec<String>>,
    filter_by: Option<Selection>,
    target: Option<Target>,
    field: Option<String>,
    label: Option<String>,
}

/// A checkbox group over the unique values of a data column.
///
/// Checked values contribute `column = value` predicates to the
/// target selection (the data source's selection by default).
pub fn checkbox_group(data: &Data) -> CheckboxGroup {
    CheckboxGroup {
        data: data.clone(),
        column: None,
        options: None,
        filter_by: None,
        target: None,
        field: None,
        label: None,
    }
}

impl CheckboxGroup {
    /// The column whose unique values become checkboxes.
    pub fn column(mut self, column: &str) -> CheckboxGroup {
        self.column = Some(column.to_owned());
        self
    }

    /// An explicit list of options, in presentation order.
    pub fn options<I, S>(mut self, options: I) -> CheckboxGroup
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    /// A selection to filter the data source by.
    pub fn filter_by(mut self, selection: &Selection) -> CheckboxGroup {
        self.filter_by = Some(selection.clone());
        self
    }

    /// The param or selection updated with the checked values.
    pub fn target(mut self, target: impl Into<Target>) -> CheckboxGroup {
        self.target = Some(target.into());
        self
    }

    /// The column name used in generated selection predicates
    /// (defaults to the option column).
    pub fn field(mut self, field: &str) -> CheckboxGroup {
        self.field = Some(field.to_owned());
        self
    }

    /// A text label for the group.
    pub fn label(mut self, label: &str) -> CheckboxGroup {
        self.label = Some(label.to_owned());
        self
    }

    /// Builds the checkbox group component, validating the column.
    pub fn build(self) -> Result<Component> {
        let column = self.column.as_deref().ok_or_else(|| {
            crate::error::VisError::InputConfig(
                "a checkbox group requires a column".to_owned(),
            )
        })?;
        self.data.validate_column(column)?;

        let mut config = Map::new();
        config.insert("input".to_owned(), json!("checkbox_group"));
        config.insert("from".to_owned(), json!(self.data.table()));
        config.insert("column".to_owned(), json!(column));

        let mut component = Component::new(Value::Null);
        component.register_data(&self.data);

        if let Some(options) = &self.options {
            config.insert("options".to_owned(), json!(options));
        }
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
        if let Some(label) = &self.label {
            config.insert("label".to_owned(), json!(label));
        }

        Ok(component.with_config(Value::Object(config)))
    }
}
