//! Legends attached to plots.

use serde_json::Map;
use serde_json::Value;
use serde_json::json;

use crate::component::Component;
use crate::selection::Selection;

/// The scale a legend describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendKind {
    /// A color scale legend.
    Color,
    /// An opacity scale legend.
    Opacity,
    /// A symbol scale legend.
    Symbol,
}

impl LegendKind {
    fn as_str(self) -> &'static str {
        match self {
            LegendKind::Color => "color",
            LegendKind::Opacity => "opacity",
            LegendKind::Symbol => "symbol",
        }
    }
}

/// Where a legend is placed relative to its plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// Left of the plot.
    Left,
    /// Right of the plot (the default).
    Right,
    /// Above the plot.
    Top,
    /// Below the plot.
    Bottom,
}

impl Location {
    /// Whether the legend sits beside the plot rather than above or
    /// below it.
    pub(crate) fn is_side(self) -> bool {
        matches!(self, Location::Left | Location::Right)
    }
}

// Side legends default to a narrow fixed width so the plot keeps most
// of the row.
const SIDE_WIDTH: f64 = 80.0;

/// A plot legend under construction.
///
/// Attach it to a plot with [Plot::legend](crate::plot::Plot::legend);
/// the plot binds the legend to itself and composes the two according
/// to the legend location.
#[derive(Debug, Clone)]
pub struct Legend {
    kind: LegendKind,
    location: Location,
    config: Map<String, Value>,
    target: Option<Selection>,
}

/// A legend for the given scale, placed to the right of the plot by
/// default.
pub fn legend(kind: LegendKind) -> Legend {
    Legend {
        kind,
        location: Location::Right,
        config: Map::new(),
        target: None,
    }
}

impl Legend {
    /// A header label for the legend.
    pub fn label(mut self, label: &str) -> Legend {
        self.config.insert("label".to_owned(), json!(label));
        self
    }

    /// Where to place the legend relative to the plot.
    pub fn location(mut self, location: Location) -> Legend {
        self.location = location;
        self
    }

    /// A selection updated when legend entries are clicked.
    pub fn target(mut self, selection: &Selection) -> Legend {
        self.target = Some(selection.clone());
        self
    }

    /// The data column written into the target selection's clauses.
    pub fn field(mut self, field: &str) -> Legend {
        self.config.insert("field".to_owned(), json!(field));
        self
    }

    /// The number of columns of legend entries.
    pub fn columns(mut self, columns: u32) -> Legend {
        self.config.insert("columns".to_owned(), json!(columns));
        self
    }

    /// The width of the legend, in pixels.
    pub fn width(mut self, width: f64) -> Legend {
        self.config.insert("width".to_owned(), json!(width));
        self
    }

    /// The height of the legend, in pixels.
    pub fn height(mut self, height: f64) -> Legend {
        self.config.insert("height".to_owned(), json!(height));
        self
    }

    /// The tick size of a continuous legend, in pixels.
    pub fn tick_size(mut self, size: f64) -> Legend {
        self.config.insert("tickSize".to_owned(), json!(size));
        self
    }

    /// The left margin, in pixels.
    pub fn margin_left(mut self, margin: f64) -> Legend {
        self.config.insert("marginLeft".to_owned(), json!(margin));
        self
    }

    /// The right margin, in pixels.
    pub fn margin_right(mut self, margin: f64) -> Legend {
        self.config.insert("marginRight".to_owned(), json!(margin));
        self
    }

    /// The top margin, in pixels.
    pub fn margin_top(mut self, margin: f64) -> Legend {
        self.config.insert("marginTop".to_owned(), json!(margin));
        self
    }

    /// The bottom margin, in pixels.
    pub fn margin_bottom(mut self, margin: f64) -> Legend {
        self.config.insert("marginBottom".to_owned(), json!(margin));
        self
    }

    pub(crate) fn placement(&self) -> Location {
        self.location
    }

    /// The legend as a component bound to the named plot.
    pub(crate) fn into_component(self, for_plot: &str) -> Component {
        let mut config = Map::new();
        config.insert("legend".to_owned(), json!(self.kind.as_str()));

        for (key, value) in self.config {
            config.insert(key, value);
        }

        if self.location.is_side() && !config.contains_key("width") {
            config.insert("width".to_owned(), json!(SIDE_WIDTH));
        }

        if let Some(target) = &self.target {
            config.insert("as".to_owned(), target.reference());
        }
        config.insert("for".to_owned(), json!(for_plot));

        let mut component = Component::new(Value::Object(config));
        if let Some(target) = &self.target {
            component.register_selection(target);
        }
        component
    }
}
