//! Prebuilt views over eval score data.
//!
//! Each view is an opinionated composition of marks, inputs and
//! legends over an "evals" data source with one row per model and
//! task. The builders expose the same knobs as the underlying plot
//! layer, pre-set to sensible defaults.

mod evals_table;
mod model;
mod scores_by_task;
mod scores_heatmap;
mod scores_radar;
mod scores_timeline;

pub use evals_table::evals_table;
pub use model::log_viewer_channel;
pub use model::model_display_name;
pub use scores_by_task::ScoresByTask;
pub use scores_by_task::scores_by_task;
pub use scores_heatmap::CellOptions;
pub use scores_heatmap::ScoresHeatmap;
pub use scores_heatmap::scores_heatmap;
pub use scores_radar::ScoresRadar;
pub use scores_radar::axes_coordinates;
pub use scores_radar::compute_angles;
pub use scores_radar::grid_circles;
pub use scores_radar::labels_coordinates;
pub use scores_radar::radar_frame;
pub use scores_radar::scores_radar;
pub use scores_timeline::ScoresTimeline;
pub use scores_timeline::scores_timeline;
