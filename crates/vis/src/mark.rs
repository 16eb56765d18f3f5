//! Plot marks: the graphical elements layered inside a plot.

use serde_json::Map;
use serde_json::Value;
use serde_json::json;

use crate::channel::Channel;
use crate::data::Data;
use crate::param::Param;
use crate::selection::Selection;

// Effectively disables tooltip line wrapping, which the engine would
// otherwise apply to long model names.
const TIP_LINE_WIDTH: u64 = 1_000_000_000;

/// A plot mark under construction.
///
/// Create marks with the mark functions ([dot], [bar_y], [line], ...)
/// and layer them into a plot with
/// [Plot::mark](crate::plot::Plot::mark).
#[derive(Debug, Clone)]
pub struct Mark {
    config: Map<String, Value>,
    data: Option<Data>,
    filter_by: Option<Selection>,
    params: Vec<Param>,
}

/// A dot mark backed by a data source.
pub fn dot(data: &Data) -> Mark {
    Mark::new("dot", Some(data))
}

/// A circle mark backed by a data source.
pub fn circle(data: &Data) -> Mark {
    Mark::new("circle", Some(data))
}

/// A line mark backed by a data source.
pub fn line(data: &Data) -> Mark {
    Mark::new("line", Some(data))
}

/// A text mark backed by a data source.
pub fn text(data: &Data) -> Mark {
    Mark::new("text", Some(data))
}

/// A vertical bar mark backed by a data source.
pub fn bar_y(data: &Data) -> Mark {
    Mark::new("barY", Some(data))
}

/// A vertical rule mark backed by a data source.
pub fn rule_x(data: &Data) -> Mark {
    Mark::new("ruleX", Some(data))
}

/// A cell mark backed by a data source.
pub fn cell(data: &Data) -> Mark {
    Mark::new("cell", Some(data))
}

/// A line mark over literal coordinate arrays instead of a data
/// source, e.g. for computed geometry such as radar grids.
pub fn line_values() -> Mark {
    Mark::new("line", None)
}

/// A text mark over literal coordinate arrays instead of a data
/// source, e.g. for computed label positions.
pub fn text_values() -> Mark {
    Mark::new("text", None)
}

impl Mark {
    fn new(kind: &str, data: Option<&Data>) -> Mark {
        let mut config = Map::new();
        config.insert("mark".to_owned(), json!(kind));

        Self {
            config,
            data: data.cloned(),
            filter_by: None,
            params: Vec::new(),
        }
    }

    fn bind(mut self, key: &str, channel: impl Into<Channel>) -> Mark {
        let channel = channel.into();
        if let Some(param) = channel.param() {
            self.params.push(param.clone());
        }
        self.config.insert(key.to_owned(), channel.into_value());
        self
    }

    /// The horizontal position channel.
    pub fn x(self, channel: impl Into<Channel>) -> Mark {
        self.bind("x", channel)
    }

    /// The vertical position channel.
    pub fn y(self, channel: impl Into<Channel>) -> Mark {
        self.bind("y", channel)
    }

    /// The starting vertical position channel.
    pub fn y1(self, channel: impl Into<Channel>) -> Mark {
        self.bind("y1", channel)
    }

    /// The ending vertical position channel.
    pub fn y2(self, channel: impl Into<Channel>) -> Mark {
        self.bind("y2", channel)
    }

    /// The horizontal facet channel.
    pub fn fx(self, channel: impl Into<Channel>) -> Mark {
        self.bind("fx", channel)
    }

    /// The radius channel, in pixels.
    pub fn r(self, channel: impl Into<Channel>) -> Mark {
        self.bind("r", channel)
    }

    /// The fill color channel.
    pub fn fill(self, channel: impl Into<Channel>) -> Mark {
        self.bind("fill", channel)
    }

    /// The stroke color channel.
    pub fn stroke(self, channel: impl Into<Channel>) -> Mark {
        self.bind("stroke", channel)
    }

    /// The fill opacity, between 0 and 1.
    pub fn fill_opacity(self, opacity: f64) -> Mark {
        self.bind("fillOpacity", opacity)
    }

    /// The stroke opacity, between 0 and 1.
    pub fn stroke_opacity(self, opacity: f64) -> Mark {
        self.bind("strokeOpacity", opacity)
    }

    /// The text channel of a text mark.
    pub fn text(self, channel: impl Into<Channel>) -> Mark {
        self.bind("text", channel)
    }

    /// The curve interpolation, e.g. `linear-closed` for polygons.
    pub fn curve(self, curve: &str) -> Mark {
        self.bind("curve", curve)
    }

    /// The end-point marker, e.g. `tick-x` for interval whiskers.
    pub fn marker(self, marker: &str) -> Mark {
        self.bind("marker", marker)
    }

    /// Inset of the mark area, in pixels.
    pub fn inset(self, inset: f64) -> Mark {
        self.bind("inset", inset)
    }

    /// The font weight of a text mark.
    pub fn font_weight(mut self, weight: u32) -> Mark {
        self.config
            .insert("styles".to_owned(), json!({ "fontWeight": weight }));
        self
    }

    /// An imposed ordering of the mark's scale domains.
    pub fn sort(mut self, sort: Value) -> Mark {
        self.config.insert("sort".to_owned(), sort);
        self
    }

    /// Enables or disables the tooltip.
    pub fn tip(mut self, tip: bool) -> Mark {
        let value = if tip {
            json!({ "lineWidth": TIP_LINE_WIDTH })
        } else {
            Value::Bool(false)
        };
        self.config.insert("tip".to_owned(), value);
        self
    }

    /// Adds a named tooltip channel.
    pub fn channel(mut self, label: &str, column: &str) -> Mark {
        let channels = self
            .config
            .entry("channels".to_owned())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(channels) = channels {
            channels.insert(label.to_owned(), json!(column));
        }
        self
    }

    /// Adds named tooltip channels from (label, column) pairs.
    pub fn channels<I, L, C>(mut self, channels: I) -> Mark
    where
        I: IntoIterator<Item = (L, C)>,
        L: AsRef<str>,
        C: AsRef<str>,
    {
        for (label, column) in channels {
            self = self.channel(label.as_ref(), column.as_ref());
        }
        self
    }

    /// Filters the mark by a selection other than the default
    /// selection of its data source.
    pub fn filter_by(mut self, selection: &Selection) -> Mark {
        self.filter_by = Some(selection.clone());
        self
    }

    /// The final mark config plus the data source, filter selection
    /// and params it references.
    pub(crate) fn into_parts(self) -> MarkParts {
        let mut config = self.config;
        let mut filter = self.filter_by;

        if let Some(data) = &self.data {
            let filter_by = filter.get_or_insert_with(|| data.selection().clone());
            config.insert(
                "data".to_owned(),
                json!({ "from": data.table(), "filterBy": filter_by.reference() }),
            );
        }

        MarkParts {
            config: Value::Object(config),
            data: self.data,
            filter_by: filter,
            params: self.params,
        }
    }
}

pub(crate) struct MarkParts {
    pub(crate) config: Value,
    pub(crate) data: Option<Data>,
    pub(crate) filter_by: Option<Selection>,
    pub(crate) params: Vec<Param>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Frame;

    fn penguins() -> Data {
        let frame = Frame::from_columns([
            ("species", vec![json!("Adelie"), json!("Gentoo")]),
            ("mass", vec![json!(3700), json!(5000)]),
        ])
        .unwrap();
        Data::new("penguins", frame)
    }

    #[test]
    fn marks_reference_their_data_source() {
        let data = penguins();

        let parts = dot(&data).x("species").y("mass").into_parts();

        assert_eq!(parts.config["mark"], json!("dot"));
        assert_eq!(parts.config["data"]["from"], json!("penguins"));
        assert_eq!(
            parts.config["data"]["filterBy"],
            json!(format!("${}", data.selection().name()))
        );
    }

    #[test]
    fn explicit_filter_overrides_the_default() {
        let data = penguins();
        let selection = Selection::single();

        let parts = dot(&data).filter_by(&selection).into_parts();

        assert_eq!(
            parts.config["data"]["filterBy"],
            json!(format!("${}", selection.name()))
        );
    }

    #[test]
    fn value_marks_carry_no_data_section() {
        let parts = line_values()
            .x(vec![0.0, 1.0])
            .y(vec![0.0, 1.0])
            .stroke("#999")
            .into_parts();

        assert_eq!(parts.config.get("data"), None);
        assert_eq!(parts.config["x"], json!([0.0, 1.0]));
    }

    #[test]
    fn tip_disables_line_wrapping() {
        let data = penguins();

        let parts = dot(&data).tip(true).into_parts();

        assert_eq!(parts.config["tip"], json!({ "lineWidth": 1_000_000_000u64 }));
    }

    #[test]
    fn channels_accumulate() {
        let data = penguins();

        let parts = dot(&data)
            .channel("Species", "species")
            .channel("Mass", "mass")
            .into_parts();

        assert_eq!(
            parts.config["channels"],
            json!({ "Species": "species", "Mass": "mass" })
        );
    }
}
