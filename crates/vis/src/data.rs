//! Tabular data sources backing plots, inputs and tables.

use std::sync::Arc;

use serde_json::Map;
use serde_json::Value;

use crate::error::Result;
use crate::error::VisError;
use crate::selection::Selection;

/// A column-major table of JSON values.
///
/// All columns have the same length; the first column added
/// establishes the row count.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    columns: Vec<Column>,
    rows: usize,
}

#[derive(Debug, Clone)]
struct Column {
    name: String,
    values: Vec<Value>,
}

impl Frame {
    /// Creates a frame from an ordered set of named columns.
    pub fn from_columns<I, S>(columns: I) -> Result<Frame>
    where
        I: IntoIterator<Item = (S, Vec<Value>)>,
        S: Into<String>,
    {
        let mut frame = Frame::default();

        for (name, values) in columns {
            let name = name.into();

            if frame.columns.is_empty() {
                frame.rows = values.len();
            } else if values.len() != frame.rows {
                return Err(VisError::ColumnLength {
                    column: name,
                    expected: frame.rows,
                    actual: values.len(),
                });
            }

            frame.columns.push(Column { name, values });
        }

        Ok(frame)
    }

    /// The number of rows in the frame.
    pub fn len(&self) -> usize {
        self.rows
    }

    /// Whether the frame holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// The column names, in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.name.as_str())
    }

    /// Whether a column with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column.name == name)
    }

    /// The values of a column.
    pub fn values(&self, name: &str) -> Option<&[Value]> {
        self.columns
            .iter()
            .find(|column| column.name == name)
            .map(|column| column.values.as_slice())
    }

    /// The distinct values of a column, in first-occurrence order.
    pub fn unique(&self, name: &str) -> Vec<Value> {
        let mut unique: Vec<Value> = Vec::new();

        for value in self.values(name).unwrap_or_default() {
            if !unique.contains(value) {
                unique.push(value.clone());
            }
        }

        unique
    }

    /// The smallest numeric value of a column.
    pub fn min(&self, name: &str) -> Option<f64> {
        self.fold_numeric(name, f64::min)
    }

    /// The largest numeric value of a column.
    pub fn max(&self, name: &str) -> Option<f64> {
        self.fold_numeric(name, f64::max)
    }

    fn fold_numeric(&self, name: &str, fold: fn(f64, f64) -> f64) -> Option<f64> {
        self.values(name)?
            .iter()
            .filter_map(Value::as_f64)
            .reduce(fold)
    }

    /// The frame as an array of row objects.
    pub fn to_rows(&self) -> Value {
        let mut rows = Vec::with_capacity(self.rows);

        for index in 0..self.rows {
            let mut row = Map::with_capacity(self.columns.len());
            for column in &self.columns {
                row.insert(column.name.clone(), column.values[index].clone());
            }
            rows.push(Value::Object(row));
        }

        Value::Array(rows)
    }
}

/// A named data source.
///
/// Components built from a `Data` reference its table by name and are
/// filtered by its selection unless told otherwise. Cloning is cheap;
/// the underlying frame is shared.
#[derive(Debug, Clone)]
pub struct Data {
    inner: Arc<DataInner>,
}

#[derive(Debug)]
struct DataInner {
    table: String,
    selection: Selection,
    frame: Frame,
}

impl Data {
    /// Creates a data source from a frame.
    pub fn new(table: impl Into<String>, frame: Frame) -> Data {
        Self {
            inner: Arc::new(DataInner {
                table: table.into(),
                selection: Selection::intersect(),
                frame,
            }),
        }
    }

    /// Creates a data source from a JSON array of row objects.
    ///
    /// The column order is taken from the first row; cells missing
    /// from later rows are filled with `null`.
    pub fn from_json(table: impl Into<String>, rows: Value) -> Result<Data> {
        let rows = match rows {
            Value::Array(rows) => rows,
            other => {
                return Err(VisError::InvalidRows(format!(
                    "expected an array of objects, got {other}"
                )));
            }
        };

        let mut columns: Vec<(String, Vec<Value>)> = Vec::new();

        for row in &rows {
            let row = row.as_object().ok_or_else(|| {
                VisError::InvalidRows(format!("expected an object row, got {row}"))
            })?;

            for name in row.keys() {
                if !columns.iter().any(|(column, _)| column == name) {
                    columns.push((name.clone(), vec![Value::Null; rows.len()]));
                }
            }
        }

        for (index, row) in rows.iter().enumerate() {
            let row = row.as_object().expect("checked above");
            for (name, values) in columns.iter_mut() {
                if let Some(value) = row.get(name) {
                    values[index] = value.clone();
                }
            }
        }

        Ok(Data::new(table, Frame::from_columns(columns)?))
    }

    /// The table name of the data source.
    pub fn table(&self) -> &str {
        &self.inner.table
    }

    /// The selection that components built from this data source
    /// filter by and write into by default.
    pub fn selection(&self) -> &Selection {
        &self.inner.selection
    }

    /// The underlying frame.
    pub fn frame(&self) -> &Frame {
        &self.inner.frame
    }

    /// The column names of the data source.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.inner.frame.names()
    }

    /// Whether a column with the given name exists.
    pub fn contains_column(&self, name: &str) -> bool {
        self.inner.frame.contains(name)
    }

    /// Errors with [VisError::MissingColumn] unless the column exists.
    pub(crate) fn validate_column(&self, name: &str) -> Result<()> {
        if self.contains_column(name) {
            Ok(())
        } else {
            Err(VisError::MissingColumn {
                column: name.to_owned(),
                table: self.table().to_owned(),
            })
        }
    }

    /// The distinct values of a column, in first-occurrence order.
    pub fn column_unique(&self, name: &str) -> Vec<Value> {
        self.inner.frame.unique(name)
    }

    /// The smallest numeric value of a column.
    pub fn column_min(&self, name: &str) -> Option<f64> {
        self.inner.frame.min(name)
    }

    /// The largest numeric value of a column.
    pub fn column_max(&self, name: &str) -> Option<f64> {
        self.inner.frame.max(name)
    }

    /// The rows embedded into the `data` section of a spec.
    pub(crate) fn rows(&self) -> Value {
        self.inner.frame.to_rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn frame() -> Frame {
        Frame::from_columns([
            ("model", vec![json!("m1"), json!("m2"), json!("m1")]),
            ("score", vec![json!(0.5), json!(0.8), json!(0.3)]),
        ])
        .unwrap()
    }

    #[test]
    fn mismatched_column_lengths_fail() {
        let result = Frame::from_columns([
            ("model", vec![json!("m1")]),
            ("score", vec![json!(0.5), json!(0.8)]),
        ]);

        assert!(matches!(
            result,
            Err(VisError::ColumnLength { expected: 1, actual: 2, .. })
        ));
    }

    #[test]
    fn unique_preserves_first_occurrence_order() {
        assert_eq!(frame().unique("model"), vec![json!("m1"), json!("m2")]);
    }

    #[test]
    fn min_and_max_scan_numeric_values() {
        let frame = frame();

        assert_eq!(frame.min("score"), Some(0.3));
        assert_eq!(frame.max("score"), Some(0.8));
        assert_eq!(frame.min("model"), None);
    }

    #[test]
    fn rows_round_trip_through_json() {
        let data = Data::from_json(
            "evals",
            json!([
                { "model": "m1", "score": 0.5 },
                { "model": "m2" }
            ]),
        )
        .unwrap();

        assert_eq!(
            data.rows(),
            json!([
                { "model": "m1", "score": 0.5 },
                { "model": "m2", "score": null }
            ])
        );
    }

    #[test]
    fn from_json_rejects_scalars() {
        let result = Data::from_json("evals", json!(42));

        assert!(matches!(result, Err(VisError::InvalidRows(_))));
    }
}
