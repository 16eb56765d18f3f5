use std::env;
use std::path::PathBuf;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

use crate::error::CliError;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Render a visualization of eval score data to an HTML page.
    Render(RenderArgs),
}

#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Specify the path of the eval records to visualize.
    /// The path must exist and it must point to a JSON file holding
    /// an array of row objects.
    #[arg(short, long, value_parser(parse_file))]
    pub(crate) data: PathBuf,

    /// Specify the view to render.
    #[arg(short, long, value_enum)]
    pub(crate) view: View,

    /// Specify the path where the generated output will be created.
    /// If the output path is not specified then the current working
    /// directory is used.
    #[arg(short, long, value_parser(parse_dir))]
    pub(crate) output_path: Option<PathBuf>,

    /// Specify the title of the generated page.
    #[arg(short, long)]
    pub(crate) title: Option<String>,

    /// Specify the scorer whose metrics the radar view plots.
    /// Required for the `scores-radar` view.
    #[arg(short, long)]
    pub(crate) scorer: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum View {
    ScoresByTask,
    ScoresTimeline,
    ScoresHeatmap,
    ScoresRadar,
    Table,
}

impl View {
    pub(crate) fn file_stem(self) -> &'static str {
        match self {
            View::ScoresByTask => "scores-by-task",
            View::ScoresTimeline => "scores-timeline",
            View::ScoresHeatmap => "scores-heatmap",
            View::ScoresRadar => "scores-radar",
            View::Table => "table",
        }
    }

    pub(crate) fn title(self) -> &'static str {
        match self {
            View::ScoresByTask => "Scores by Task",
            View::ScoresTimeline => "Scores Timeline",
            View::ScoresHeatmap => "Scores Heatmap",
            View::ScoresRadar => "Scores Radar",
            View::Table => "Evals",
        }
    }
}

fn parse_file(path: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path);

    if !path.exists() {
        return Err(format!("The `{}` path does not exist.", path.display()));
    }

    if !path.is_file() {
        return Err(format!(
            "The `{}` path must point to a file.",
            path.display()
        ));
    }

    Ok(path)
}

fn parse_dir(path: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path);

    if !path.exists() {
        return Err(format!("The `{}` path does not exist.", path.display()));
    }

    if !path.is_dir() {
        return Err(format!(
            "The `{}` path must point to a directory.",
            path.display()
        ));
    }

    Ok(path)
}

pub(crate) trait PathExt {
    fn or_current_dir(self) -> Result<PathBuf, CliError>;
}

impl PathExt for Option<PathBuf> {
    fn or_current_dir(self) -> Result<PathBuf, CliError> {
        if let Some(path) = self {
            Ok(path)
        } else {
            env::current_dir().map_err(|e| CliError::Path(e.to_string()))
        }
    }
}
