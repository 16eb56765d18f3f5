//! Plot-level display attributes.

use serde::Serialize;
use serde::Serializer;
use serde_json::Map;
use serde_json::Value;
use serde_json::json;

/// A scale domain: either fixed by the engine or an explicit list of
/// values.
#[derive(Debug, Clone, PartialEq)]
pub enum Domain {
    /// The engine freezes the domain over all data, ignoring filters.
    Fixed,
    /// An explicit list of domain values.
    Values(Vec<Value>),
}

impl Serialize for Domain {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Domain::Fixed => serializer.serialize_str("fixed"),
            Domain::Values(values) => values.serialize(serializer),
        }
    }
}

impl From<Vec<f64>> for Domain {
    fn from(values: Vec<f64>) -> Self {
        Domain::Values(values.into_iter().map(|value| json!(value)).collect())
    }
}

impl From<Vec<String>> for Domain {
    fn from(values: Vec<String>) -> Self {
        Domain::Values(values.into_iter().map(Value::String).collect())
    }
}

impl From<Vec<&str>> for Domain {
    fn from(values: Vec<&str>) -> Self {
        Domain::Values(values.into_iter().map(|value| json!(value)).collect())
    }
}

/// Optional plot-level attributes merged into the plot config after
/// the builder's own options.
///
/// Construct with struct update syntax:
///
/// ```
/// use evalplot_vis::plot::PlotAttributes;
///
/// let attributes = PlotAttributes {
///     margin_left: Some(220.0),
///     ..Default::default()
/// };
/// ```
#[derive(Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlotAttributes {
    /// Shorthand for the four margins, in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<f64>,

    /// The left margin, in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<f64>,

    /// The right margin, in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<f64>,

    /// The top margin, in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<f64>,

    /// The bottom margin, in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<f64>,

    /// Padding between facets, between 0 and 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,

    /// The desired aspect ratio of the x and y scales.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<f64>,

    /// Shorthand for the four insets, in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inset: Option<f64>,

    /// Horizontal inset of the plot area, in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_inset: Option<f64>,

    /// Vertical inset of the plot area, in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_inset: Option<f64>,

    /// Inset above the plot area, in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_inset_top: Option<f64>,

    /// Inset below the plot area, in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_inset_bottom: Option<f64>,

    /// Whether to draw the x axis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<bool>,

    /// Whether to draw the y axis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<bool>,

    /// Explicit x axis tick values; an empty list hides the ticks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_ticks: Option<Vec<Value>>,

    /// Explicit y axis tick values; an empty list hides the ticks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_ticks: Option<Vec<Value>>,

    /// Rotation of the x axis tick labels, in degrees clockwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_tick_rotate: Option<f64>,

    /// Rotation of the y axis tick labels, in degrees clockwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_tick_rotate: Option<f64>,

    /// The x scale domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_domain: Option<Domain>,

    /// The y scale domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_domain: Option<Domain>,

    /// The label of the color legend.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_label: Option<String>,

    /// The color scale domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_domain: Option<Domain>,

    /// The color scheme name, e.g. `viridis`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_scheme: Option<String>,

    /// The color scale type, e.g. `linear` or `ordinal`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_scale: Option<String>,
}

impl PlotAttributes {
    /// The attributes as camelCase config entries, omitting unset
    /// fields.
    pub(crate) fn to_config(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(config)) => config,
            _ => Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_attributes_are_omitted() {
        let attributes = PlotAttributes::default();

        assert!(attributes.to_config().is_empty());
    }

    #[test]
    fn keys_are_camel_cased() {
        let attributes = PlotAttributes {
            margin_left: Some(220.0),
            x_tick_rotate: Some(45.0),
            ..Default::default()
        };

        let config = attributes.to_config();

        assert_eq!(config["marginLeft"], json!(220.0));
        assert_eq!(config["xTickRotate"], json!(45.0));
    }

    #[test]
    fn domains_serialize_fixed_or_values() {
        let attributes = PlotAttributes {
            x_domain: Some(Domain::Fixed),
            y_domain: Some(Domain::from(vec![0.0, 1.0])),
            ..Default::default()
        };

        let config = attributes.to_config();

        assert_eq!(config["xDomain"], json!("fixed"));
        assert_eq!(config["yDomain"], json!([0.0, 1.0]));
    }
}
