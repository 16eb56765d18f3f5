use std::fmt::Display;
use std::io::Error as IoError;

use evalplot_vis::VisError;
use serde_json::Error as JsonError;

#[derive(Debug)]
pub(crate) enum CliError {
    Vis(VisError),
    Json(JsonError),
    Io(IoError),
    Path(String),
    Data(String),
}

impl From<VisError> for CliError {
    fn from(error: VisError) -> Self {
        CliError::Vis(error)
    }
}

impl From<JsonError> for CliError {
    fn from(error: JsonError) -> Self {
        CliError::Json(error)
    }
}

impl From<IoError> for CliError {
    fn from(error: IoError) -> Self {
        CliError::Io(error)
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cli_error = "CLI error:";

        match self {
            CliError::Vis(error) => write!(f, "{cli_error} {error}"),
            CliError::Json(error) => write!(f, "{cli_error} {error}"),
            CliError::Io(error) => write!(f, "{cli_error} {error}"),
            CliError::Path(error) => write!(f, "{cli_error} {error}"),
            CliError::Data(error) => write!(f, "{cli_error} {error}"),
        }
    }
}
