use serde_json::Map;
use serde_json::Value;
use serde_json::json;

use crate::component::Component;
use crate::data::Data;
use crate::error::Result;
use crate::error::VisError;
use crate::input::Target;
use crate::selection::Selection;

/// How a search input matches the text of its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Substring match (the default).
    Contains,
    /// Match at the start of the value.
    Prefix,
    /// Match at the end of the value.
    Suffix,
    /// Regular expression match.
    Regexp,
}

impl SearchType {
    fn as_str(self) -> &'static str {
        match self {
            SearchType::Contains => "contains",
            SearchType::Prefix => "prefix",
            SearchType::Suffix => "suffix",
            SearchType::Regexp => "regexp",
        }
    }
}

/// A text search input under construction.
#[derive(Debug, Clone)]
pub struct Search {
    data: Data,
    column: Option<String>,
    search_type: SearchType,
    filter_by: Option<Selection>,
    target: Option<Target>,
    field: Option<String>,
    label: Option<String>,
    width: Option<f64>,
}

/// A text search over a data column.
pub fn search(data: &Data) -> Search {
    Search {
        data: data.clone(),
        column: None,
        search_type: SearchType::Contains,
        filter_by: None,
        target: None,
        field: None,
        label: None,
        width: None,
    }
}

impl Search {
    /// The column the search matches against.
    pub fn column(mut self, column: &str) -> Search {
        self.column = Some(column.to_owned());
        self
    }

    /// How the search text is matched.
    pub fn search_type(mut self, search_type: SearchType) -> Search {
        self.search_type = search_type;
        self
    }

    /// A selection to filter the data source by.
    pub fn filter_by(mut self, selection: &Selection) -> Search {
        self.filter_by = Some(selection.clone());
        self
    }

    /// The param or selection updated with the search predicate.
    pub fn target(mut self, target: impl Into<Target>) -> Search {
        self.target = Some(target.into());
        self
    }

    /// The column name used in generated selection predicates
    /// (defaults to the search column).
    pub fn field(mut self, field: &str) -> Search {
        self.field = Some(field.to_owned());
        self
    }

    /// A text label for the input (defaults to the column name).
    pub fn label(mut self, label: &str) -> Search {
        self.label = Some(label.to_owned());
        self
    }

    /// Width of the input, in pixels.
    pub fn width(mut self, width: f64) -> Search {
        self.width = Some(width);
        self
    }

    /// Builds the search component, validating the column.
    pub fn build(self) -> Result<Component> {
        let column = self.column.as_deref().ok_or_else(|| {
            VisError::InputConfig("a search input requires a column".to_owned())
        })?;
        self.data.validate_column(column)?;

        let mut config = Map::new();
        config.insert("input".to_owned(), json!("search"));
        config.insert("from".to_owned(), json!(self.data.table()));
        config.insert("column".to_owned(), json!(column));
        config.insert("type".to_owned(), json!(self.search_type.as_str()));

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

        if let Some(width) = self.width {
            config.insert("width".to_owned(), json!(width));
        }

        Ok(component.with_config(Value::Object(config)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Frame;

    #[test]
    fn searches_name_their_match_type() {
        let frame = Frame::from_columns([(
            "model",
            vec![json!("gpt-4o"), json!("claude-3-5-sonnet")],
        )])
        .unwrap();
        let data = Data::new("evals", frame);

        let component = search(&data)
            .column("model")
            .search_type(SearchType::Regexp)
            .label("Model")
            .build()
            .unwrap();

        let config = component.config();
        assert_eq!(config["input"], json!("search"));
        assert_eq!(config["type"], json!("regexp"));
        assert_eq!(config["label"], json!("Model"));
        assert_eq!(config["field"], json!("model"));
    }
}
