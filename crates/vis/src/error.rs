//! Defines the `Error` and `Result` types that this crate uses.

use std::error::Error;
use std::fmt::Display;
use std::io::Error as IoError;

use serde_json::Error as JsonError;
use tinytemplate::error::Error as TinyTemplateError;

/// The result type that uses [VisError] as the error type.
pub type Result<T> = std::result::Result<T, VisError>;

/// The error type for building and rendering visualization components.
#[derive(Debug)]
pub enum VisError {
    /// A column referenced by a component is not present in its data source.
    MissingColumn {
        /// The missing column name.
        column: String,
        /// The table of the data source that was searched.
        table: String,
    },

    /// Columns required by a frame operation are not present.
    MissingFrameColumns(Vec<String>),

    /// A column passed to a frame does not match the frame's row count.
    ColumnLength {
        /// The offending column name.
        column: String,
        /// The row count established by the first column.
        expected: usize,
        /// The length of the offending column.
        actual: usize,
    },

    /// A column holds a non-numeric value where a number is required.
    NonNumericColumn(String),

    /// The rows passed to a data source are not an array of objects.
    InvalidRows(String),

    /// An input widget is missing a source for its options.
    InputConfig(String),

    /// A confidence level outside the supported set.
    ConfidenceLevel(f64),

    /// No metric columns exist for the requested scorer.
    NoMetricColumns(String),

    /// More than one row per model where exactly one is expected.
    DuplicateModel(String),

    /// A frame operation produced no rows.
    EmptyFrame,

    /// A bitmap was created with a pixel count that does not match
    /// its dimensions.
    BitmapSize {
        /// `width * height` of the bitmap.
        expected: usize,
        /// The number of pixels provided.
        actual: usize,
    },

    /// A [std::io::Error] encountered while writing output files.
    Io(IoError),

    /// A [serde_json::Error] encountered while assembling a spec.
    Json(JsonError),

    /// A [tinytemplate::error::Error] encountered while rendering
    /// the HTML template.
    Template(TinyTemplateError),
}

impl Error for VisError {}

impl Display for VisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let vis_error = "vis error:";

        match self {
            VisError::MissingColumn { column, table } => {
                write!(f, "{vis_error} column `{column}` was not found in the `{table}` data source")
            }
            VisError::MissingFrameColumns(columns) => {
                write!(f, "{vis_error} required columns not found in the frame: {}", columns.join(", "))
            }
            VisError::ColumnLength { column, expected, actual } => {
                write!(f, "{vis_error} column `{column}` has {actual} values, expected {expected}")
            }
            VisError::NonNumericColumn(column) => {
                write!(f, "{vis_error} column `{column}` holds a non-numeric value")
            }
            VisError::InvalidRows(reason) => {
                write!(f, "{vis_error} invalid rows: {reason}")
            }
            VisError::InputConfig(reason) => {
                write!(f, "{vis_error} invalid input: {reason}")
            }
            VisError::ConfidenceLevel(level) => {
                write!(f, "{vis_error} unsupported confidence level {level}; use one of 0.8, 0.85, 0.9, 0.95, 0.975, 0.99, 0.995, 0.999")
            }
            VisError::NoMetricColumns(scorer) => {
                write!(f, "{vis_error} no metric columns found starting with `score_{scorer}_`")
            }
            VisError::DuplicateModel(model) => {
                write!(f, "{vis_error} multiple rows found for model `{model}`, expected exactly one row per model")
            }
            VisError::EmptyFrame => {
                write!(f, "{vis_error} no rows left after processing")
            }
            VisError::BitmapSize { expected, actual } => {
                write!(f, "{vis_error} bitmap holds {actual} pixels, dimensions require {expected}")
            }
            VisError::Io(error) => write!(f, "{vis_error} I/O error: {error}"),
            VisError::Json(error) => write!(f, "{vis_error} JSON error: {error}"),
            VisError::Template(error) => write!(f, "{vis_error} template error: {error}"),
        }
    }
}

impl From<IoError> for VisError {
    fn from(error: IoError) -> Self {
        VisError::Io(error)
    }
}

impl From<JsonError> for VisError {
    fn from(error: JsonError) -> Self {
        VisError::Json(error)
    }
}

impl From<TinyTemplateError> for VisError {
    fn from(error: TinyTemplateError) -> Self {
        VisError::Template(error)
    }
}
