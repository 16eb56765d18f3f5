use serde_json::json;

use crate::component::Component;
use crate::data::Data;
use crate::error::Result;
use crate::mark::cell;
use crate::mark::text;
use crate::plot::Domain;
use crate::plot::Legend;
use crate::plot::LegendKind;
use crate::plot::Location;
use crate::plot::PlotAttributes;
use crate::plot::legend;
use crate::plot::plot;
use crate::transform::avg;
use crate::view::model::log_viewer_channel;

const X_DEFAULT: &str = "task_name";
const X_CHANNEL_LABEL: &str = "Task";
const Y_DEFAULT: &str = "model";
const Y_CHANNEL_LABEL: &str = "Model";
const FILL_DEFAULT: &str = "score_headline_value";
const FILL_CHANNEL_LABEL: &str = "Score";

// Bottom legends line up with the plot area, which starts after the
// 220 pixel row-label margin.
const LEGEND_MARGIN_LEFT: f64 = 222.0;
const LEGEND_WIDTH: f64 = 370.0;

/// In-cell rendering options of a heatmap.
#[derive(Debug, Clone)]
pub struct CellOptions {
    /// Inset of the cell marks, in pixels.
    pub inset: f64,
    /// Color of the in-cell value text; `None` disables the text.
    pub text: Option<String>,
}

impl Default for CellOptions {
    fn default() -> Self {
        Self {
            inset: 1.0,
            text: Some("white".to_owned()),
        }
    }
}

/// A task-by-model heatmap under construction.
#[derive(Debug, Clone)]
pub struct ScoresHeatmap {
    data: Data,
    x: String,
    y: String,
    fill: String,
    cell: CellOptions,
    tip: bool,
    ascending: bool,
    width: Option<f64>,
    height: Option<f64>,
    x_label: Option<String>,
    y_label: Option<String>,
    legend: Option<Option<Legend>>,
    attributes: Option<PlotAttributes>,
}

/// A heatmap of scores: one cell per task and model, filled by the
/// average score and sorted by summed fill.
pub fn scores_heatmap(data: &Data) -> ScoresHeatmap {
    ScoresHeatmap {
        data: data.clone(),
        x: X_DEFAULT.to_owned(),
        y: Y_DEFAULT.to_owned(),
        fill: FILL_DEFAULT.to_owned(),
        cell: CellOptions::default(),
        tip: true,
        ascending: true,
        width: None,
        height: None,
        x_label: None,
        y_label: None,
        legend: None,
        attributes: None,
    }
}

impl ScoresHeatmap {
    /// The column used for the heatmap columns.
    pub fn x(mut self, x: &str) -> ScoresHeatmap {
        self.x = x.to_owned();
        self
    }

    /// The column used for the heatmap rows.
    pub fn y(mut self, y: &str) -> ScoresHeatmap {
        self.y = y.to_owned();
        self
    }

    /// The column whose values determine the cell color.
    pub fn fill(mut self, fill: &str) -> ScoresHeatmap {
        self.fill = fill.to_owned();
        self
    }

    /// In-cell rendering options.
    pub fn cell(mut self, cell: CellOptions) -> ScoresHeatmap {
        self.cell = cell;
        self
    }

    /// Whether cells show a tooltip on hover.
    pub fn tip(mut self, tip: bool) -> ScoresHeatmap {
        self.tip = tip;
        self
    }

    /// The sort order of the rows and columns.
    pub fn ascending(mut self, ascending: bool) -> ScoresHeatmap {
        self.ascending = ascending;
        self
    }

    /// The outer width of the plot, in pixels.
    pub fn width(mut self, width: f64) -> ScoresHeatmap {
        self.width = Some(width);
        self
    }

    /// The outer height of the plot, in pixels.
    pub fn height(mut self, height: f64) -> ScoresHeatmap {
        self.height = Some(height);
        self
    }

    /// The x axis label (suppressed by default).
    pub fn x_label(mut self, label: &str) -> ScoresHeatmap {
        self.x_label = Some(label.to_owned());
        self
    }

    /// The y axis label (suppressed by default).
    pub fn y_label(mut self, label: &str) -> ScoresHeatmap {
        self.y_label = Some(label.to_owned());
        self
    }

    /// Replaces the default bottom color legend.
    pub fn legend(mut self, legend: Legend) -> ScoresHeatmap {
        self.legend = Some(Some(legend));
        self
    }

    /// Disables the legend.
    pub fn no_legend(mut self) -> ScoresHeatmap {
        self.legend = Some(None);
        self
    }

    /// Additional plot attributes, overriding the view's defaults.
    pub fn attributes(mut self, attributes: PlotAttributes) -> ScoresHeatmap {
        self.attributes = Some(attributes);
        self
    }

    /// Builds the view.
    pub fn build(self) -> Result<Component> {
        self.data.validate_column(&self.x)?;
        self.data.validate_column(&self.y)?;
        self.data.validate_column(&self.fill)?;

        let mut channels: Vec<(String, String)> = Vec::new();
        if self.x == X_DEFAULT {
            channels.push((X_CHANNEL_LABEL.to_owned(), self.x.clone()));
        }
        if self.y == Y_DEFAULT {
            channels.push((Y_CHANNEL_LABEL.to_owned(), self.y.clone()));
        }
        if self.fill == FILL_DEFAULT {
            channels.push((FILL_CHANNEL_LABEL.to_owned(), self.fill.clone()));
        }
        log_viewer_channel(&self.data, &mut channels);

        let cells = cell(&self.data)
            .x(self.x.as_str())
            .y(self.y.as_str())
            .fill(avg(&self.fill))
            .tip(self.tip)
            .inset(self.cell.inset)
            .sort(json!({
                "y": { "value": "fill", "reduce": "sum", "reverse": self.ascending },
                "x": { "value": "fill", "reduce": "sum", "reverse": !self.ascending },
            }))
            .channels(channels);

        let mut chart = plot().mark(cells);

        if let Some(color) = &self.cell.text {
            chart = chart.mark(
                text(&self.data)
                    .x(self.x.as_str())
                    .y(self.y.as_str())
                    .text(self.fill.as_str())
                    .fill(color.as_str())
                    .font_weight(600),
            );
        }

        let defaults = PlotAttributes {
            margin_left: Some(220.0),
            x_tick_rotate: Some(45.0),
            margin_bottom: Some(75.0),
            color_scale: Some("linear".to_owned()),
            padding: Some(0.0),
            color_scheme: Some("viridis".to_owned()),
            color_domain: Some(self.color_domain()),
            ..Default::default()
        };
        chart = chart.attributes(&defaults);
        if let Some(attributes) = &self.attributes {
            chart = chart.attributes(attributes);
        }

        let legend = match self.legend {
            Some(legend) => legend,
            None => Some(bottom_legend()),
        };
        if let Some(legend) = legend {
            chart = chart.legend(legend);
        }

        chart = chart
            .x_label(self.x_label.as_deref())
            .y_label(self.y_label.as_deref());
        if let Some(width) = self.width {
            chart = chart.width(width);
        }
        if let Some(height) = self.height {
            chart = chart.height(height);
        }

        Ok(chart.build())
    }

    // [0, 1] when the scores lie within it, otherwise the data range.
    fn color_domain(&self) -> Domain {
        let min = self.data.column_min(&self.fill).unwrap_or(0.0);
        let max = self.data.column_max(&self.fill).unwrap_or(1.0);

        if min >= 0.0 && max <= 1.0 {
            Domain::from(vec![0.0, 1.0])
        } else {
            Domain::from(vec![min, max])
        }
    }
}

fn bottom_legend() -> Legend {
    legend(LegendKind::Color)
        .location(Location::Bottom)
        .margin_left(LEGEND_MARGIN_LEFT)
        .width(LEGEND_WIDTH)
}
