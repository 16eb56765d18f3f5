//! Tabular display of a data source.

use serde::Serialize;
use serde_json::Map;
use serde_json::Value;
use serde_json::json;

use crate::component::Component;
use crate::data::Data;
use crate::error::Result;
use crate::selection::Selection;

/// Text alignment of a table column or header.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left aligned.
    Left,
    /// Right aligned.
    Right,
    /// Centered.
    Center,
    /// Justified.
    Justify,
}

/// Configuration of a single table column.
///
/// Create with [column] and refine with the builder methods; a bare
/// `column("model")` displays the column with its defaults.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TableColumn {
    name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    align: Option<Align>,

    /// d3-format (numbers) or d3-time-format (dates) format string.
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    width: Option<f64>,

    /// Flex weight; takes precedence over a fixed width.
    #[serde(skip_serializing_if = "Option::is_none")]
    flex: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    min_width: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    max_width: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    sortable: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    filterable: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    resizable: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    auto_height: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    wrap_text: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    header_align: Option<Align>,

    #[serde(skip_serializing_if = "Option::is_none")]
    header_auto_height: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    header_wrap_text: Option<bool>,
}

/// A column configuration displaying the named data column.
pub fn column(name: &str) -> TableColumn {
    TableColumn {
        name: name.to_owned(),
        label: None,
        align: None,
        format: None,
        width: None,
        flex: None,
        min_width: None,
        max_width: None,
        sortable: None,
        filterable: None,
        resizable: None,
        auto_height: None,
        wrap_text: None,
        header_align: None,
        header_auto_height: None,
        header_wrap_text: None,
    }
}

impl TableColumn {
    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    /// The header label (defaults to the column name).
    pub fn label(mut self, label: &str) -> TableColumn {
        self.label = Some(label.to_owned());
        self
    }

    /// Cell text alignment.
    pub fn align(mut self, align: Align) -> TableColumn {
        self.align = Some(align);
        self
    }

    /// Format string for cell values.
    pub fn format(mut self, format: &str) -> TableColumn {
        self.format = Some(format.to_owned());
        self
    }

    /// Fixed column width, in pixels.
    pub fn width(mut self, width: f64) -> TableColumn {
        self.width = Some(width);
        self
    }

    /// Flex weight relative to the other columns.
    pub fn flex(mut self, flex: f64) -> TableColumn {
        self.flex = Some(flex);
        self
    }

    /// Minimum column width, in pixels.
    pub fn min_width(mut self, width: f64) -> TableColumn {
        self.min_width = Some(width);
        self
    }

    /// Maximum column width, in pixels.
    pub fn max_width(mut self, width: f64) -> TableColumn {
        self.max_width = Some(width);
        self
    }

    /// Whether the column is sortable.
    pub fn sortable(mut self, sortable: bool) -> TableColumn {
        self.sortable = Some(sortable);
        self
    }

    /// Whether the column is filterable.
    pub fn filterable(mut self, filterable: bool) -> TableColumn {
        self.filterable = Some(filterable);
        self
    }

    /// Whether the user can resize the column.
    pub fn resizable(mut self, resizable: bool) -> TableColumn {
        self.resizable = Some(resizable);
        self
    }

    /// Whether cell height adjusts to content.
    pub fn auto_height(mut self, auto_height: bool) -> TableColumn {
        self.auto_height = Some(auto_height);
        self
    }

    /// Whether cell text wraps.
    pub fn wrap_text(mut self, wrap_text: bool) -> TableColumn {
        self.wrap_text = Some(wrap_text);
        self
    }

    /// Header text alignment.
    pub fn header_align(mut self, align: Align) -> TableColumn {
        self.header_align = Some(align);
        self
    }

    /// Whether header height adjusts to content.
    pub fn header_auto_height(mut self, auto_height: bool) -> TableColumn {
        self.header_auto_height = Some(auto_height);
        self
    }

    /// Whether header text wraps.
    pub fn header_wrap_text(mut self, wrap_text: bool) -> TableColumn {
        self.header_wrap_text = Some(wrap_text);
        self
    }
}

impl From<&str> for TableColumn {
    fn from(name: &str) -> Self {
        column(name)
    }
}

/// Pagination configuration of a table.
#[derive(Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Rows loaded per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    /// Page sizes offered by the selector; `None` keeps the default
    /// selector.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size_selector: Option<Vec<u32>>,

    /// Whether the page size adjusts to fill the table area.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_page_size: Option<bool>,
}

/// Where a filter control is shown.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Filtering {
    /// A filter button in the column header.
    Header,
    /// A filter row beneath the header.
    Row,
}

/// The row-selection mode of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowSelection {
    /// Select the hovered row (the default).
    Hover,
    /// Select a single row by clicking.
    SingleRow,
    /// Select multiple rows by clicking.
    MultipleRow,
    /// Select a single row by checkbox.
    SingleCheckbox,
    /// Select multiple rows by checkbox.
    MultipleCheckbox,
    /// Disable row selection.
    Disabled,
}

impl RowSelection {
    fn as_str(self) -> &'static str {
        match self {
            RowSelection::Hover => "hover",
            RowSelection::SingleRow => "single_row",
            RowSelection::MultipleRow => "multiple_row",
            RowSelection::SingleCheckbox => "single_checkbox",
            RowSelection::MultipleCheckbox => "multiple_checkbox",
            RowSelection::Disabled => "none",
        }
    }
}

/// The scope of the select-all control of a multi-select table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAllScope {
    /// All rows.
    All,
    /// The filtered rows.
    Filtered,
    /// The rows of the current page.
    CurrentPage,
}

impl SelectAllScope {
    fn as_str(self) -> &'static str {
        match self {
            SelectAllScope::All => "all",
            SelectAllScope::Filtered => "filtered",
            SelectAllScope::CurrentPage => "currentPage",
        }
    }
}

/// A table component under construction.
#[derive(Debug, Clone)]
pub struct Table {
    data: Data,
    columns: Option<Vec<TableColumn>>,
    filter_by: Option<Selection>,
    target: Option<Selection>,
    width: Option<f64>,
    max_width: Option<f64>,
    height: Option<f64>,
    sorting: Option<bool>,
    filtering: Option<Filtering>,
    pagination: Option<Pagination>,
    header_height: Option<f64>,
    row_height: Option<f64>,
    select: Option<RowSelection>,
    select_all_scope: Option<SelectAllScope>,
}

/// A tabular display of a data source.
///
/// All columns are included unless a subset is configured with
/// [columns](Table::columns).
pub fn table(data: &Data) -> Table {
    Table {
        data: data.clone(),
        columns: None,
        filter_by: None,
        target: None,
        width: None,
        max_width: None,
        height: None,
        sorting: None,
        filtering: None,
        pagination: None,
        header_height: None,
        row_height: None,
        select: None,
        select_all_scope: None,
    }
}

impl Table {
    /// The columns to display, in order.
    pub fn columns<I, C>(mut self, columns: I) -> Table
    where
        I: IntoIterator<Item = C>,
        C: Into<TableColumn>,
    {
        self.columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    /// A selection to filter the rows by (defaults to the data
    /// source's selection).
    pub fn filter_by(mut self, selection: &Selection) -> Table {
        self.filter_by = Some(selection.clone());
        self
    }

    /// A selection receiving a `column IN (rows)` clause for the
    /// selected rows.
    pub fn target(mut self, selection: &Selection) -> Table {
        self.target = Some(selection.clone());
        self
    }

    /// The total width of the table, in pixels.
    pub fn width(mut self, width: f64) -> Table {
        self.width = Some(width);
        self
    }

    /// The maximum width of the table, in pixels.
    pub fn max_width(mut self, width: f64) -> Table {
        self.max_width = Some(width);
        self
    }

    /// The height of the table, in pixels.
    pub fn height(mut self, height: f64) -> Table {
        self.height = Some(height);
        self
    }

    /// Enables or disables column sorting.
    pub fn sorting(mut self, sorting: bool) -> Table {
        self.sorting = Some(sorting);
        self
    }

    /// Enables filtering with the given control placement.
    pub fn filtering(mut self, filtering: Filtering) -> Table {
        self.filtering = Some(filtering);
        self
    }

    /// Enables pagination with default settings.
    pub fn pagination(mut self) -> Table {
        self.pagination = Some(Pagination::default());
        self
    }

    /// Enables pagination with explicit settings.
    pub fn pagination_config(mut self, pagination: Pagination) -> Table {
        self.pagination = Some(pagination);
        self
    }

    /// The header height, in pixels.
    pub fn header_height(mut self, height: f64) -> Table {
        self.header_height = Some(height);
        self
    }

    /// The row height, in pixels.
    pub fn row_height(mut self, height: f64) -> Table {
        self.row_height = Some(height);
        self
    }

    /// The row-selection mode.
    pub fn select(mut self, select: RowSelection) -> Table {
        self.select = Some(select);
        self
    }

    /// The scope of the select-all control.
    pub fn select_all_scope(mut self, scope: SelectAllScope) -> Table {
        self.select_all_scope = Some(scope);
        self
    }

    /// Builds the table component, validating every referenced
    /// column.
    pub fn build(self) -> Result<Component> {
        if let Some(columns) = &self.columns {
            for column in columns {
                self.data.validate_column(column.name())?;
            }
        }

        let mut config = Map::new();
        config.insert("input".to_owned(), json!("table"));
        config.insert("from".to_owned(), json!(self.data.table()));

        let mut component = Component::new(Value::Null);
        component.register_data(&self.data);

        let filter_by = self
            .filter_by
            .unwrap_or_else(|| self.data.selection().clone());
        config.insert("filterBy".to_owned(), filter_by.reference());
        component.register_selection(&filter_by);

        if let Some(columns) = &self.columns {
            config.insert("columns".to_owned(), serde_json::to_value(columns)?);
        }
        if let Some(target) = &self.target {
            config.insert("as".to_owned(), target.reference());
            component.register_selection(target);
        }

        for (key, option) in [
            ("width", self.width),
            ("maxWidth", self.max_width),
            ("height", self.height),
            ("headerHeight", self.header_height),
            ("rowHeight", self.row_height),
        ] {
            if let Some(value) = option {
                config.insert(key.to_owned(), json!(value));
            }
        }

        if let Some(sorting) = self.sorting {
            config.insert("sorting".to_owned(), json!(sorting));
        }
        if let Some(filtering) = &self.filtering {
            config.insert("filtering".to_owned(), serde_json::to_value(filtering)?);
        }
        if let Some(pagination) = &self.pagination {
            config.insert("pagination".to_owned(), serde_json::to_value(pagination)?);
        }
        if let Some(select) = self.select {
            config.insert("select".to_owned(), json!(select.as_str()));
        }
        if let Some(scope) = self.select_all_scope {
            config.insert("selectAllScope".to_owned(), json!(scope.as_str()));
        }

        Ok(component.with_config(Value::Object(config)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Frame;
    use crate::error::VisError;

    fn evals() -> Data {
        let frame = Frame::from_columns([
            ("model", vec![json!("m1")]),
            ("score", vec![json!(0.5)]),
        ])
        .unwrap();
        Data::new("evals", frame)
    }

    #[test]
    fn tables_reference_their_source() {
        let data = evals();

        let component = table(&data)
            .columns([column("model").label("Model"), column("score").align(Align::Center)])
            .height(380.0)
            .build()
            .unwrap();

        let config = component.config();
        assert_eq!(config["input"], json!("table"));
        assert_eq!(config["from"], json!("evals"));
        assert_eq!(
            config["columns"],
            json!([
                { "name": "model", "label": "Model" },
                { "name": "score", "align": "center" }
            ])
        );
        assert_eq!(config["height"], json!(380.0));
    }

    #[test]
    fn unknown_columns_fail() {
        let data = evals();

        let result = table(&data).columns(["stderr"]).build();

        assert!(matches!(
            result,
            Err(VisError::MissingColumn { column, .. }) if column == "stderr"
        ));
    }

    #[test]
    fn pagination_defaults_are_empty() {
        let data = evals();

        let component = table(&data).pagination().build().unwrap();

        assert_eq!(component.config()["pagination"], json!({}));
    }

    #[test]
    fn selection_modes_use_snake_names() {
        let data = evals();

        let component = table(&data)
            .select(RowSelection::MultipleCheckbox)
            .select_all_scope(SelectAllScope::CurrentPage)
            .build()
            .unwrap();

        let config = component.config();
        assert_eq!(config["select"], json!("multiple_checkbox"));
        assert_eq!(config["selectAllScope"], json!("currentPage"));
    }
}
