use crate::component::Component;
use crate::data::Data;
use crate::error::Result;
use crate::mark::bar_y;
use crate::mark::rule_x;
use crate::plot::Legend;
use crate::plot::LegendKind;
use crate::plot::Location;
use crate::plot::PlotAttributes;
use crate::plot::legend;
use crate::plot::plot;
use crate::transform::ci_bounds;
use crate::view::model::log_viewer_channel;

const X_DEFAULT: &str = "model";
const X_CHANNEL_LABEL: &str = "Model";
const FX_DEFAULT: &str = "task_name";
const FX_CHANNEL_LABEL: &str = "Task";
const Y_DEFAULT: &str = "score_headline_value";
const Y_CHANNEL_LABEL: &str = "Score";

/// A bar plot of scores by task under construction.
#[derive(Debug, Clone)]
pub struct ScoresByTask {
    data: Data,
    x: String,
    fx: String,
    y: String,
    y_stderr: String,
    ci: Option<f64>,
    y_label: Option<Option<String>>,
    width: Option<f64>,
    height: Option<f64>,
    attributes: Option<PlotAttributes>,
}

/// A faceted bar plot comparing eval scores.
///
/// Scores are plotted by task (facet) and model by default, with 95%
/// confidence whiskers and a bottom color legend.
pub fn scores_by_task(data: &Data) -> ScoresByTask {
    ScoresByTask {
        data: data.clone(),
        x: X_DEFAULT.to_owned(),
        fx: FX_DEFAULT.to_owned(),
        y: Y_DEFAULT.to_owned(),
        y_stderr: "score_headline_stderr".to_owned(),
        ci: Some(0.95),
        y_label: None,
        width: None,
        height: None,
        attributes: None,
    }
}

impl ScoresByTask {
    /// The column plotted on the x axis.
    pub fn x(mut self, x: &str) -> ScoresByTask {
        self.x = x.to_owned();
        self
    }

    /// The column used for the x facet.
    pub fn fx(mut self, fx: &str) -> ScoresByTask {
        self.fx = fx.to_owned();
        self
    }

    /// The column plotted on the y axis.
    pub fn y(mut self, y: &str) -> ScoresByTask {
        self.y = y.to_owned();
        self
    }

    /// The column holding the standard error of the score.
    pub fn y_stderr(mut self, y_stderr: &str) -> ScoresByTask {
        self.y_stderr = y_stderr.to_owned();
        self
    }

    /// The confidence level of the whiskers, or `None` to disable
    /// them.
    pub fn ci(mut self, ci: Option<f64>) -> ScoresByTask {
        self.ci = ci;
        self
    }

    /// The y axis label; pass `None` to suppress the inferred label.
    pub fn y_label(mut self, label: Option<&str>) -> ScoresByTask {
        self.y_label = Some(label.map(str::to_owned));
        self
    }

    /// The outer width of the plot, in pixels.
    pub fn width(mut self, width: f64) -> ScoresByTask {
        self.width = Some(width);
        self
    }

    /// The outer height of the plot, in pixels.
    pub fn height(mut self, height: f64) -> ScoresByTask {
        self.height = Some(height);
        self
    }

    /// Additional plot attributes, overriding the view's defaults.
    pub fn attributes(mut self, attributes: PlotAttributes) -> ScoresByTask {
        self.attributes = Some(attributes);
        self
    }

    /// Builds the view.
    pub fn build(self) -> Result<Component> {
        let mut channels: Vec<(String, String)> = Vec::new();
        if self.fx == FX_DEFAULT {
            channels.push((FX_CHANNEL_LABEL.to_owned(), self.fx.clone()));
        }
        if self.x == X_DEFAULT {
            channels.push((X_CHANNEL_LABEL.to_owned(), self.x.clone()));
        }
        if self.y == Y_DEFAULT {
            channels.push((Y_CHANNEL_LABEL.to_owned(), self.y.clone()));
        }
        log_viewer_channel(&self.data, &mut channels);

        let bars = bar_y(&self.data)
            .x(self.x.as_str())
            .fx(self.fx.as_str())
            .y(self.y.as_str())
            .fill(self.x.as_str())
            .channels(channels)
            .tip(true);

        let mut chart = plot().mark(bars);

        if let Some(level) = self.ci {
            let (lower, upper) = ci_bounds(level, &self.y, self.y_stderr.as_str())?;
            chart = chart.mark(
                rule_x(&self.data)
                    .x(self.x.as_str())
                    .fx(self.fx.as_str())
                    .y1(lower)
                    .y2(upper)
                    .stroke("black")
                    .marker("tick-x"),
            );
        }

        let defaults = PlotAttributes {
            y_inset_top: Some(10.0),
            margin_bottom: Some(10.0),
            x_ticks: Some(Vec::new()),
            ..Default::default()
        };
        chart = chart.attributes(&defaults);
        if let Some(attributes) = &self.attributes {
            chart = chart.attributes(attributes);
        }

        chart = chart
            .legend(bottom_legend())
            .x_label(None)
            .fx_label(None);
        if let Some(label) = &self.y_label {
            chart = chart.y_label(label.as_deref());
        }
        if let Some(width) = self.width {
            chart = chart.width(width);
        }
        if let Some(height) = self.height {
            chart = chart.height(height);
        }

        Ok(chart.build())
    }
}

fn bottom_legend() -> Legend {
    legend(LegendKind::Color).location(Location::Bottom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Frame;
    use serde_json::Value;
    use serde_json::json;

    fn evals() -> Data {
        let frame = Frame::from_columns([
            ("model", vec![json!("m1"), json!("m2")]),
            ("task_name", vec![json!("t1"), json!("t1")]),
            ("score_headline_value", vec![json!(0.7), json!(0.4)]),
            ("score_headline_stderr", vec![json!(0.02), json!(0.03)]),
        ])
        .unwrap();
        Data::new("evals", frame)
    }

    #[test]
    fn bars_and_whiskers_share_the_axes() {
        let view = scores_by_task(&evals()).build().unwrap();

        let chart = &view.config()["vconcat"][0];
        let marks = chart["plot"].as_array().unwrap();
        assert_eq!(marks.len(), 2);
        assert_eq!(marks[0]["mark"], json!("barY"));
        assert_eq!(marks[0]["fill"], json!("model"));
        assert_eq!(
            marks[1]["y1"],
            json!({ "sql": "score_headline_value - (1.96 * score_headline_stderr)" })
        );
        assert_eq!(marks[1]["marker"], json!("tick-x"));
    }

    #[test]
    fn the_legend_sits_below_the_plot() {
        let view = scores_by_task(&evals()).build().unwrap();

        let column = view.config()["vconcat"].as_array().unwrap();
        assert_eq!(column.len(), 2);
        assert_eq!(column[1]["legend"], json!("color"));
    }

    #[test]
    fn axis_defaults_suppress_clutter() {
        let view = scores_by_task(&evals()).build().unwrap();

        let chart = &view.config()["vconcat"][0];
        assert_eq!(chart["xLabel"], Value::Null);
        assert_eq!(chart["fxLabel"], Value::Null);
        assert_eq!(chart["xTicks"], json!([]));
        assert_eq!(chart["yInsetTop"], json!(10.0));
        assert_eq!(chart["marginBottom"], json!(10.0));
    }

    #[test]
    fn whiskers_can_be_disabled() {
        let view = scores_by_task(&evals()).ci(None).build().unwrap();

        let marks = view.config()["vconcat"][0]["plot"].as_array().unwrap();
        assert_eq!(marks.len(), 1);
    }

    #[test]
    fn default_channels_follow_the_default_columns() {
        let view = scores_by_task(&evals()).x("scorer").build().unwrap();

        let channels = &view.config()["vconcat"][0]["plot"][0]["channels"];
        assert_eq!(channels.get("Model"), None);
        assert_eq!(channels["Task"], json!("task_name"));
        assert_eq!(channels["Score"], json!("score_headline_value"));
    }
}
