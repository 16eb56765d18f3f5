use std::fs::File;
use std::io::BufReader;

use evalplot_vis::Data;
use evalplot_vis::render::write_html;
use evalplot_vis::view::evals_table;
use evalplot_vis::view::radar_frame;
use evalplot_vis::view::scores_by_task;
use evalplot_vis::view::scores_heatmap;
use evalplot_vis::view::scores_radar;
use evalplot_vis::view::scores_timeline;
use serde_json::Value;

use crate::cli::PathExt;
use crate::cli::RenderArgs;
use crate::cli::View;
use crate::error::CliError;

const EVALS_TABLE: &str = "evals";
const RADAR_TABLE: &str = "radar";

pub(crate) fn render(args: RenderArgs) -> Result<(), CliError> {
    let output_path = args.output_path.or_current_dir()?;

    println!(
        "evalplot renders the `{}` view from `{}` into `{}`",
        args.view.file_stem(),
        args.data.display(),
        output_path.display()
    );

    let file = File::open(&args.data)?;
    let rows: Value = serde_json::from_reader(BufReader::new(file))?;
    let data = Data::from_json(EVALS_TABLE, rows)?;

    let component = match args.view {
        View::ScoresByTask => scores_by_task(&data).build()?,
        View::ScoresTimeline => scores_timeline(&data).build()?,
        View::ScoresHeatmap => scores_heatmap(&data).build()?,
        View::ScoresRadar => {
            let scorer = args.scorer.as_deref().ok_or_else(|| {
                CliError::Data("The `scores-radar` view requires `--scorer`.".to_owned())
            })?;
            let frame = radar_frame(data.frame(), scorer, None, &[])?;
            scores_radar(&Data::new(RADAR_TABLE, frame)).build()?
        }
        View::Table => evals_table(&data, None)?,
    };

    let title = args.title.as_deref().unwrap_or_else(|| args.view.title());
    let page = output_path.join(format!("{}.html", args.view.file_stem()));
    write_html(&page, &component, title)?;

    println!("evalplot wrote `{}`", page.display());

    Ok(())
}
