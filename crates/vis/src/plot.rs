//! Plot building: marks, attributes and legends composed into a
//! component.

mod attributes;
mod legend;

pub use attributes::Domain;
pub use attributes::PlotAttributes;
pub use legend::Legend;
pub use legend::LegendKind;
pub use legend::Location;
pub use legend::legend;

use serde_json::Map;
use serde_json::Value;
use serde_json::json;

use crate::channel::Channel;
use crate::component::Component;
use crate::id::Id;
use crate::layout::hconcat;
use crate::layout::vconcat;
use crate::mark::Mark;

// The outer plot width when neither the caller nor the attributes
// specify one.
const DEFAULT_WIDTH: f64 = 700.0;

/// A plot under construction.
#[derive(Debug, Default)]
pub struct Plot {
    marks: Vec<Mark>,
    config: Map<String, Value>,
    attributes: Map<String, Value>,
    legend: Option<Legend>,
    width: Option<f64>,
    height: Option<f64>,
}

/// Creates an empty plot builder.
pub fn plot() -> Plot {
    Plot::default()
}

impl Plot {
    /// Layers a mark into the plot.
    pub fn mark(mut self, mark: Mark) -> Plot {
        self.marks.push(mark);
        self
    }

    /// Layers several marks into the plot, in order.
    pub fn marks(mut self, marks: impl IntoIterator<Item = Mark>) -> Plot {
        self.marks.extend(marks);
        self
    }

    /// The x axis label; pass `None` to suppress the inferred label.
    pub fn x_label(mut self, label: Option<&str>) -> Plot {
        self.config.insert("xLabel".to_owned(), label_value(label));
        self
    }

    /// The y axis label; pass `None` to suppress the inferred label.
    pub fn y_label(mut self, label: Option<&str>) -> Plot {
        self.config.insert("yLabel".to_owned(), label_value(label));
        self
    }

    /// The x facet label; pass `None` to suppress the inferred label.
    pub fn fx_label(mut self, label: Option<&str>) -> Plot {
        self.config.insert("fxLabel".to_owned(), label_value(label));
        self
    }

    /// Whether to show a grid aligned with both scales' ticks.
    pub fn grid(mut self, grid: bool) -> Plot {
        self.config.insert("grid".to_owned(), json!(grid));
        self
    }

    /// The x grid: a flag, a stroke color, or explicit tick values.
    pub fn x_grid(mut self, grid: impl Into<Channel>) -> Plot {
        self.config.insert("xGrid".to_owned(), grid.into().into_value());
        self
    }

    /// The y grid: a flag, a stroke color, or explicit tick values.
    pub fn y_grid(mut self, grid: impl Into<Channel>) -> Plot {
        self.config.insert("yGrid".to_owned(), grid.into().into_value());
        self
    }

    /// The outer width of the plot in pixels, including margins.
    pub fn width(mut self, width: f64) -> Plot {
        self.width = Some(width);
        self
    }

    /// The outer height of the plot in pixels, including margins.
    pub fn height(mut self, height: f64) -> Plot {
        self.height = Some(height);
        self
    }

    /// A unique name for the plot, used by standalone legends to look
    /// up its scales.
    pub fn name(mut self, name: &str) -> Plot {
        self.config.insert("name".to_owned(), json!(name));
        self
    }

    /// Attaches a legend; the built component composes the plot and
    /// the legend according to the legend location.
    pub fn legend(mut self, legend: Legend) -> Plot {
        self.legend = Some(legend);
        self
    }

    /// Merges plot attributes into the config. Later calls override
    /// earlier ones key by key, so defaults can be applied first.
    pub fn attributes(mut self, attributes: &PlotAttributes) -> Plot {
        self.attributes.extend(attributes.to_config());
        self
    }

    /// Builds the plot component, wiring up marks, data sources and
    /// the legend.
    pub fn build(self) -> Component {
        let mut mark_configs = Vec::with_capacity(self.marks.len());
        let mut registry = Component::new(Value::Null);

        for mark in self.marks {
            let parts = mark.into_parts();
            mark_configs.push(parts.config);

            if let Some(data) = &parts.data {
                registry.register_data(data);
            }
            if let Some(filter_by) = &parts.filter_by {
                registry.register_selection(filter_by);
            }
            for param in &parts.params {
                registry.register_param(param);
            }
        }

        let mut config = Map::new();
        config.insert("plot".to_owned(), Value::Array(mark_configs));

        for (key, value) in self.config {
            config.insert(key, value);
        }

        config.insert(
            "width".to_owned(),
            json!(self.width.unwrap_or(DEFAULT_WIDTH)),
        );
        if let Some(height) = self.height {
            config.insert("height".to_owned(), json!(height));
        }

        for (key, value) in self.attributes {
            config.insert(key, value);
        }

        match self.legend {
            Some(legend) => {
                // A legend needs a plot name to look up scale mappings.
                let name = Id::name("plot");
                config.insert("name".to_owned(), json!(name.clone()));

                let mut chart = Component::new(Value::Object(config));
                chart.absorb(&registry);
                let location = legend.placement();
                let legend = legend.into_component(&name);

                match location {
                    Location::Left => hconcat([legend, chart]),
                    Location::Right => hconcat([chart, legend]),
                    Location::Top => vconcat([legend, chart]),
                    Location::Bottom => vconcat([chart, legend]),
                }
            }
            None => {
                let mut chart = Component::new(Value::Object(config));
                chart.absorb(&registry);
                hconcat([chart])
            }
        }
    }
}

fn label_value(label: Option<&str>) -> Value {
    match label {
        Some(label) => json!(label),
        None => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Data;
    use crate::data::Frame;
    use crate::mark::dot;
    use crate::selection::Selection;

    fn points() -> Data {
        let frame = Frame::from_columns([
            ("x", vec![json!(1), json!(2)]),
            ("y", vec![json!(3), json!(4)]),
        ])
        .unwrap();
        Data::new("points", frame)
    }

    #[test]
    fn bare_plots_are_wrapped_in_hconcat() {
        let data = points();

        let chart = plot().mark(dot(&data).x("x").y("y")).build();

        let config = chart.config();
        assert_eq!(config["hconcat"][0]["plot"][0]["mark"], json!("dot"));
        assert_eq!(config["hconcat"][0]["width"], json!(DEFAULT_WIDTH));
    }

    #[test]
    fn null_labels_suppress_inference() {
        let data = points();

        let chart = plot()
            .mark(dot(&data).x("x").y("y"))
            .x_label(None)
            .y_label(Some("Score"))
            .build();

        let config = &chart.config()["hconcat"][0];
        assert_eq!(config["xLabel"], Value::Null);
        assert_eq!(config["yLabel"], json!("Score"));
    }

    #[test]
    fn attributes_override_in_call_order() {
        let data = points();
        let defaults = PlotAttributes {
            margin_bottom: Some(10.0),
            padding: Some(0.0),
            ..Default::default()
        };
        let overrides = PlotAttributes {
            margin_bottom: Some(75.0),
            ..Default::default()
        };

        let chart = plot()
            .mark(dot(&data).x("x"))
            .attributes(&defaults)
            .attributes(&overrides)
            .build();

        let config = &chart.config()["hconcat"][0];
        assert_eq!(config["marginBottom"], json!(75.0));
        assert_eq!(config["padding"], json!(0.0));
    }

    #[test]
    fn side_legends_sit_next_to_the_plot() {
        let data = points();
        let selection = Selection::single();

        let chart = plot()
            .mark(dot(&data).x("x").y("y").fill("x"))
            .legend(legend(LegendKind::Color).target(&selection))
            .build();

        let config = chart.config();
        let row = config["hconcat"].as_array().unwrap();
        assert_eq!(row.len(), 2);
        assert_eq!(row[1]["legend"], json!("color"));
        assert_eq!(row[0]["name"], row[1]["for"]);
    }

    #[test]
    fn bottom_legends_stack_under_the_plot() {
        let data = points();

        let chart = plot()
            .mark(dot(&data).x("x").y("y").fill("x"))
            .legend(legend(LegendKind::Color).location(Location::Bottom))
            .build();

        let column = chart.config()["vconcat"].as_array().unwrap().to_vec();
        assert_eq!(column.len(), 2);
        assert!(column[0].get("plot").is_some());
        assert_eq!(column[1]["legend"], json!("color"));
    }
}
