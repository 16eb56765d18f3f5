//! Radar chart of model scores across metrics.
//!
//! The chart works in two steps: [radar_frame] turns an evals frame
//! (one row per model) into polygon coordinates on percentile-ranked
//! axes, and [scores_radar] layers the polygons over a polar grid.

use std::f64::consts::PI;

use serde_json::Value;
use serde_json::json;

use crate::component::Component;
use crate::data::Data;
use crate::data::Frame;
use crate::error::Result;
use crate::error::VisError;
use crate::mark::Mark;
use crate::mark::circle;
use crate::mark::line;
use crate::mark::line_values;
use crate::mark::text_values;
use crate::plot::Legend;
use crate::plot::LegendKind;
use crate::plot::PlotAttributes;
use crate::plot::legend;
use crate::plot::plot;
use crate::selection::Selection;
use crate::view::model::log_viewer_channel;

const GRID_CIRCLE_COLOR: &str = "#e0e0e0";
const BOUNDARY_CIRCLE_COLOR: &str = "#999";
const AXES_COLOR: &str = "#ddd";

// Metric labels sit just outside the unit boundary circle.
const LABEL_RADIUS: f64 = 1.24;

const GRID_RADII: [f64; 5] = [0.2, 0.4, 0.6, 0.8, 1.0];
const GRID_SAMPLES: usize = 100;

const DEFAULT_WIDTH: f64 = 400.0;

/// Angles equally spaced over `[0, 2π]`, with or without the
/// endpoint.
///
/// Polygon vertices and axis spokes exclude the endpoint (the first
/// vertex is repeated separately to close polygons); grid circles
/// include it so the circle visually closes.
pub fn compute_angles(num_axes: usize, endpoint: bool) -> Vec<f64> {
    if num_axes == 0 {
        return Vec::new();
    }
    if endpoint && num_axes == 1 {
        return vec![0.0];
    }

    let step = if endpoint {
        2.0 * PI / (num_axes - 1) as f64
    } else {
        2.0 * PI / num_axes as f64
    };

    (0..num_axes).map(|index| index as f64 * step).collect()
}

/// Label positions for the metric axes, placed at a fixed radius
/// outside the boundary circle.
pub fn labels_coordinates(metrics: &[String]) -> (Vec<String>, Vec<f64>, Vec<f64>) {
    let angles = compute_angles(metrics.len(), false);
    (
        metrics.to_vec(),
        angles.iter().map(|angle| LABEL_RADIUS * angle.cos()).collect(),
        angles.iter().map(|angle| LABEL_RADIUS * angle.sin()).collect(),
    )
}

/// Spoke coordinates for the metric axes: a segment from the origin
/// to the boundary circle per axis, interleaved as (0, cos θ) pairs.
pub fn axes_coordinates(num_axes: usize) -> (Vec<f64>, Vec<f64>) {
    let angles = compute_angles(num_axes, false);
    let mut x = Vec::with_capacity(num_axes * 2);
    let mut y = Vec::with_capacity(num_axes * 2);

    for angle in angles {
        x.push(0.0);
        x.push(angle.cos());
        y.push(0.0);
        y.push(angle.sin());
    }

    (x, y)
}

/// Coordinates of the concentric grid circles, innermost first.
pub fn grid_circles() -> Vec<(Vec<f64>, Vec<f64>)> {
    let angles = compute_angles(GRID_SAMPLES, true);

    GRID_RADII
        .iter()
        .map(|radius| {
            (
                angles.iter().map(|angle| radius * angle.cos()).collect(),
                angles.iter().map(|angle| radius * angle.sin()).collect(),
            )
        })
        .collect()
}

/// Prepares an evals frame for a radar chart.
///
/// The frame must hold exactly one row per model, with metric columns
/// named `score_{scorer}_{metric}`. Each metric is ranked across
/// models as an average-tie percentile rank in `(0, 1]`; metrics
/// listed in `invert` are ranked with lower scores first. The output
/// holds one row per model and metric plus a closing row repeating
/// the first vertex, with polar coordinates `x = r cos θ`,
/// `y = r sin θ`.
pub fn radar_frame(
    frame: &Frame,
    scorer: &str,
    metrics: Option<&[&str]>,
    invert: &[&str],
) -> Result<Frame> {
    let prefix = format!("score_{scorer}_");

    let (metrics, metric_cols): (Vec<String>, Vec<String>) = match metrics {
        Some(metrics) => (
            metrics.iter().map(|metric| (*metric).to_owned()).collect(),
            metrics
                .iter()
                .map(|metric| format!("{prefix}{metric}"))
                .collect(),
        ),
        None => {
            let metric_cols: Vec<String> = frame
                .names()
                .filter(|name| name.starts_with(&prefix))
                .map(str::to_owned)
                .collect();
            if metric_cols.is_empty() {
                return Err(VisError::NoMetricColumns(scorer.to_owned()));
            }
            let metrics = metric_cols
                .iter()
                .map(|col| col[prefix.len()..].to_owned())
                .collect();
            (metrics, metric_cols)
        }
    };

    if metrics.is_empty() {
        return Err(VisError::NoMetricColumns(scorer.to_owned()));
    }

    let mut required = vec!["model".to_owned(), "task_id".to_owned()];
    required.extend(metric_cols.iter().cloned());
    let missing: Vec<String> = required
        .iter()
        .filter(|column| !frame.contains(column))
        .cloned()
        .collect();
    if !missing.is_empty() {
        return Err(VisError::MissingFrameColumns(missing));
    }

    if frame.is_empty() {
        return Err(VisError::EmptyFrame);
    }

    let models = frame.values("model").unwrap_or_default();
    let duplicates = duplicate_models(models);
    if !duplicates.is_empty() {
        return Err(VisError::DuplicateModel(duplicates.join(", ")));
    }

    // raw metric values per column, rank inputs inverted where lower
    // scores are better
    let mut raw: Vec<Vec<f64>> = Vec::with_capacity(metric_cols.len());
    let mut ranks: Vec<Vec<f64>> = Vec::with_capacity(metric_cols.len());
    for (metric, col) in metrics.iter().zip(&metric_cols) {
        let values = numeric_column(frame, col)?;

        let ranked = if invert.contains(&metric.as_str()) {
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let inverted: Vec<f64> = values.iter().map(|value| max - value).collect();
            percentile_ranks(&inverted)
        } else {
            percentile_ranks(&values)
        };

        raw.push(values);
        ranks.push(ranked);
    }

    let num_axes = metrics.len();
    let angles = compute_angles(num_axes, false);
    let mut angles_closed = angles;
    angles_closed.push(angles_closed[0]);

    let task_ids = frame.values("task_id").unwrap_or_default();
    let logs = frame.values("log");

    let mut task_id_col = Vec::new();
    let mut model_col = Vec::new();
    let mut log_col = Vec::new();
    let mut metric_col = Vec::new();
    let mut value_col = Vec::new();
    let mut x_col = Vec::new();
    let mut y_col = Vec::new();

    for (row, model) in models.iter().enumerate() {
        // closed vertex indices: every metric, then the first again
        let closed = (0..num_axes).chain([0]);

        for (vertex, axis) in closed.enumerate() {
            task_id_col.push(task_ids[row].clone());
            model_col.push(model.clone());
            log_col.push(logs.map_or_else(|| json!(""), |logs| logs[row].clone()));
            metric_col.push(json!(metrics[axis]));
            value_col.push(json!(raw[axis][row]));

            let radius = ranks[axis][row];
            let angle = angles_closed[vertex];
            x_col.push(json!(radius * angle.cos()));
            y_col.push(json!(radius * angle.sin()));
        }
    }

    Frame::from_columns([
        ("task_id", task_id_col),
        ("model", model_col),
        ("log", log_col),
        ("metric", metric_col),
        ("value", value_col),
        ("x", x_col),
        ("y", y_col),
    ])
}

fn numeric_column(frame: &Frame, column: &str) -> Result<Vec<f64>> {
    frame
        .values(column)
        .unwrap_or_default()
        .iter()
        .map(|value| {
            value
                .as_f64()
                .ok_or_else(|| VisError::NonNumericColumn(column.to_owned()))
        })
        .collect()
}

// Average-tie percentile ranks scaled to (0, 1].
fn percentile_ranks(values: &[f64]) -> Vec<f64> {
    let count = values.len() as f64;

    values
        .iter()
        .map(|value| {
            let less = values.iter().filter(|other| *other < value).count() as f64;
            let equal = values.iter().filter(|other| *other == value).count() as f64;
            (less + (equal + 1.0) / 2.0) / count
        })
        .collect()
}

fn duplicate_models(models: &[Value]) -> Vec<String> {
    let mut duplicates = Vec::new();

    for (index, model) in models.iter().enumerate() {
        let repeated = models.iter().filter(|other| *other == model).count() > 1;
        let first = models.iter().position(|other| other == model) == Some(index);
        if repeated && first {
            duplicates.push(model.as_str().map_or_else(|| model.to_string(), str::to_owned));
        }
    }

    duplicates
}

/// A radar chart under construction.
#[derive(Debug, Clone)]
pub struct ScoresRadar {
    data: Data,
    model: Option<String>,
    width: f64,
    legend: Option<Option<Legend>>,
    attributes: Option<PlotAttributes>,
}

/// A radar chart of scores prepared with [radar_frame]: per-model
/// polygons over a polar grid, filtered by a single-select selection
/// so the legend highlights one model at a time.
pub fn scores_radar(data: &Data) -> ScoresRadar {
    ScoresRadar {
        data: data.clone(),
        model: None,
        width: DEFAULT_WIDTH,
        legend: None,
        attributes: None,
    }
}

impl ScoresRadar {
    /// The column holding the model name (defaults to
    /// `model_display_name` when present, `model` otherwise).
    pub fn model(mut self, model: &str) -> ScoresRadar {
        self.model = Some(model.to_owned());
        self
    }

    /// The outer width of the plot, in pixels; the height matches it
    /// to keep the chart square.
    pub fn width(mut self, width: f64) -> ScoresRadar {
        self.width = width;
        self
    }

    /// Replaces the default color legend.
    pub fn legend(mut self, legend: Legend) -> ScoresRadar {
        self.legend = Some(Some(legend));
        self
    }

    /// Disables the legend.
    pub fn no_legend(mut self) -> ScoresRadar {
        self.legend = Some(None);
        self
    }

    /// Additional plot attributes, overriding the view's defaults.
    pub fn attributes(mut self, attributes: PlotAttributes) -> ScoresRadar {
        self.attributes = Some(attributes);
        self
    }

    /// Builds the view.
    pub fn build(self) -> Result<Component> {
        let model = match &self.model {
            Some(model) => model.clone(),
            None if self.data.contains_column("model_display_name") => {
                "model_display_name".to_owned()
            }
            None => "model".to_owned(),
        };

        let required = [
            model.as_str(),
            "task_id",
            "log",
            "metric",
            "value",
            "x",
            "y",
        ];
        let missing: Vec<String> = required
            .iter()
            .filter(|column| !self.data.contains_column(column))
            .map(|column| (*column).to_owned())
            .collect();
        if !missing.is_empty() {
            return Err(VisError::MissingFrameColumns(missing));
        }

        let metrics: Vec<String> = self
            .data
            .column_unique("metric")
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_owned)
            .collect();

        let (labels, label_x, label_y) = labels_coordinates(&metrics);
        let (axes_x, axes_y) = axes_coordinates(metrics.len());
        let circles = grid_circles();

        let model_selection = Selection::single();

        let mut channels: Vec<(String, String)> = vec![
            ("Model".to_owned(), model.clone()),
            ("Metric".to_owned(), "metric".to_owned()),
            ("Score".to_owned(), "value".to_owned()),
        ];
        log_viewer_channel(&self.data, &mut channels);

        let mut marks: Vec<Mark> = Vec::new();

        for (index, (x, y)) in circles.iter().enumerate() {
            let color = if index == GRID_RADII.len() - 1 {
                BOUNDARY_CIRCLE_COLOR
            } else {
                GRID_CIRCLE_COLOR
            };
            marks.push(line_values().x(x.clone()).y(y.clone()).stroke(color));
        }
        marks.push(line_values().x(axes_x).y(axes_y).stroke(AXES_COLOR));

        marks.push(
            line(&self.data)
                .x("x")
                .y("y")
                .fill(model.as_str())
                .fill_opacity(0.1)
                .curve("linear-closed")
                .filter_by(&model_selection),
        );
        marks.push(
            line(&self.data)
                .x("x")
                .y("y")
                .stroke(model.as_str())
                .filter_by(&model_selection)
                .tip(true)
                .channels(channels),
        );
        marks.push(
            line(&self.data)
                .x("x")
                .y("y")
                .stroke(model.as_str())
                .stroke_opacity(0.4)
                .tip(false),
        );
        marks.push(
            circle(&self.data)
                .x("x")
                .y("y")
                .r(4.0)
                .fill(model.as_str())
                .stroke("white")
                .filter_by(&model_selection)
                .tip(false),
        );
        marks.push(
            text_values()
                .x(label_x)
                .y(label_y)
                .text(labels.into_iter().map(Value::String).collect::<Vec<_>>()),
        );

        let defaults = PlotAttributes {
            margin: Some(f64::max(30.0, (self.width * 0.12).floor())),
            x_axis: Some(false),
            y_axis: Some(false),
            ..Default::default()
        };

        let mut chart = plot()
            .marks(marks)
            .width(self.width)
            .height(self.width)
            .attributes(&defaults);
        if let Some(attributes) = &self.attributes {
            chart = chart.attributes(attributes);
        }

        let legend = match self.legend {
            Some(legend) => legend,
            None => Some(legend_for(&model_selection)),
        };
        if let Some(legend) = legend {
            chart = chart.legend(legend);
        }

        Ok(chart.build())
    }
}

fn legend_for(selection: &Selection) -> Legend {
    legend(LegendKind::Color).target(selection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn assert_close(actual: &Value, expected: f64) {
        let actual = actual.as_f64().unwrap();
        assert!(
            (actual - expected).abs() < 1e-10,
            "{actual} != {expected}"
        );
    }

    fn evals() -> Frame {
        Frame::from_columns([
            ("model", vec![json!("model1"), json!("model2")]),
            ("task_id", vec![json!("task1"), json!("task2")]),
            ("log", vec![json!("path1"), json!("path2")]),
            ("score_myscorer_mymetric1", vec![json!(1), json!(2)]),
            ("score_myscorer_mymetric2", vec![json!(2), json!(1)]),
        ])
        .unwrap()
    }

    #[test]
    fn radar_frames_rank_and_close_polygons() {
        let frame = radar_frame(&evals(), "myscorer", None, &[]).unwrap();

        assert_eq!(frame.len(), 6);
        assert_eq!(
            frame.values("metric").unwrap(),
            &[
                json!("mymetric1"),
                json!("mymetric2"),
                json!("mymetric1"),
                json!("mymetric1"),
                json!("mymetric2"),
                json!("mymetric1"),
            ]
        );
        assert_eq!(
            frame.values("value").unwrap(),
            &[json!(1.0), json!(2.0), json!(1.0), json!(2.0), json!(1.0), json!(2.0)]
        );

        // model1 ranks [0.5, 1.0], model2 ranks [1.0, 0.5]; the second
        // axis points at angle pi
        let x = frame.values("x").unwrap();
        let y = frame.values("y").unwrap();
        for (index, expected) in [0.5, -1.0, 0.5, 1.0, -0.5, 1.0].iter().enumerate() {
            assert_close(&x[index], *expected);
            assert_close(&y[index], 0.0);
        }
    }

    #[test]
    fn inverted_metrics_rank_lower_scores_first() {
        let frame =
            radar_frame(&evals(), "myscorer", None, &["mymetric1"]).unwrap();

        // after inversion model1 holds the higher mymetric1 rank
        let x = frame.values("x").unwrap();
        assert_close(&x[0], 1.0);
        assert_close(&x[3], 0.5);
        // raw values are reported unchanged
        assert_eq!(frame.values("value").unwrap()[0], json!(1.0));
    }

    #[test]
    fn missing_metric_columns_fail() {
        let result = radar_frame(&evals(), "other", None, &[]);

        assert!(matches!(result, Err(VisError::NoMetricColumns(scorer)) if scorer == "other"));
    }

    #[test]
    fn duplicate_models_fail() {
        let frame = Frame::from_columns([
            ("model", vec![json!("m1"), json!("m1")]),
            ("task_id", vec![json!("t1"), json!("t2")]),
            ("score_s_a", vec![json!(1), json!(2)]),
        ])
        .unwrap();

        let result = radar_frame(&frame, "s", None, &[]);

        assert!(matches!(result, Err(VisError::DuplicateModel(model)) if model == "m1"));
    }

    #[test]
    fn empty_frames_fail() {
        let frame = Frame::from_columns([
            ("model", Vec::new()),
            ("task_id", Vec::new()),
            ("score_s_a", Vec::new()),
        ])
        .unwrap();

        let result = radar_frame(&frame, "s", None, &[]);

        assert!(matches!(result, Err(VisError::EmptyFrame)));
    }

    #[test]
    fn angles_include_the_endpoint_only_for_circles() {
        let open = compute_angles(4, false);
        let closed = compute_angles(5, true);

        assert_eq!(open.len(), 4);
        assert!((open[3] - 3.0 * PI / 2.0).abs() < 1e-12);
        assert!((closed[4] - 2.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn axes_interleave_origin_and_boundary() {
        let (x, y) = axes_coordinates(2);

        assert_eq!(x.len(), 4);
        assert_eq!(x[0], 0.0);
        assert!((x[1] - 1.0).abs() < 1e-12);
        assert_eq!(x[2], 0.0);
        assert!((x[3] + 1.0).abs() < 1e-12);
        assert_eq!(y[0], 0.0);
    }

    #[test]
    fn the_chart_is_square_with_hidden_axes() {
        let frame = radar_frame(&evals(), "myscorer", None, &[]).unwrap();
        let data = Data::new("radar", frame);

        let view = scores_radar(&data).build().unwrap();

        let chart = &view.config()["hconcat"][0];
        assert_eq!(chart["width"], json!(400.0));
        assert_eq!(chart["height"], json!(400.0));
        assert_eq!(chart["xAxis"], json!(false));
        assert_eq!(chart["yAxis"], json!(false));
        assert_eq!(chart["margin"], json!(48.0));

        // 4 grid circles, boundary, spokes, 3 polygon lines, vertex
        // circles and labels
        let marks = chart["plot"].as_array().unwrap();
        assert_eq!(marks.len(), 11);
        assert_eq!(marks[10]["mark"], json!("text"));
    }

    #[test]
    fn polygon_marks_filter_by_a_single_selection() {
        let frame = radar_frame(&evals(), "myscorer", None, &[]).unwrap();
        let data = Data::new("radar", frame);

        let view = scores_radar(&data).build().unwrap();

        let chart = &view.config()["hconcat"][0];
        let filled = &chart["plot"][6];
        assert_eq!(filled["curve"], json!("linear-closed"));
        assert_eq!(filled["fillOpacity"], json!(0.1));

        let filter = filled["data"]["filterBy"].as_str().unwrap();
        let legend = &view.config()["hconcat"][1];
        assert_eq!(legend["as"].as_str().unwrap(), filter);
    }
}
