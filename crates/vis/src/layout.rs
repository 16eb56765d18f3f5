//! Composition of components into layout trees.

use serde_json::Value;
use serde_json::json;

use crate::component::Component;

/// Horizontally concatenates components.
pub fn hconcat(components: impl IntoIterator<Item = Component>) -> Component {
    concat("hconcat", components)
}

/// Vertically concatenates components.
pub fn vconcat(components: impl IntoIterator<Item = Component>) -> Component {
    concat("vconcat", components)
}

fn concat(key: &str, components: impl IntoIterator<Item = Component>) -> Component {
    let mut children = Vec::new();
    let mut configs = Vec::new();

    for component in components {
        configs.push(component.config().clone());
        children.push(component);
    }

    let mut layout = Component::new(json!({ key: Value::Array(configs) }));
    for child in &children {
        layout.absorb(child);
    }

    layout
}

/// Horizontal space between components, in pixels.
pub fn hspace(pixels: f64) -> Component {
    Component::new(json!({ "hspace": pixels }))
}

/// Vertical space between components, in pixels.
pub fn vspace(pixels: f64) -> Component {
    Component::new(json!({ "vspace": pixels }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Data;
    use crate::data::Frame;
    use crate::mark::dot;
    use crate::plot::plot;

    #[test]
    fn concat_nests_child_configs() {
        let layout = vconcat([hspace(10.0), vspace(15.0)]);

        assert_eq!(
            layout.config(),
            &json!({ "vconcat": [{ "hspace": 10.0 }, { "vspace": 15.0 }] })
        );
    }

    #[test]
    fn empty_concat_is_legal() {
        let layout = hconcat([]);

        assert_eq!(layout.config(), &json!({ "hconcat": [] }));
    }

    #[test]
    fn concat_merges_child_tables() {
        let frame = Frame::from_columns([("x", vec![json!(1)])]).unwrap();
        let data = Data::new("points", frame);
        let chart = plot().mark(dot(&data).x("x")).build();

        let layout = vconcat([vspace(15.0), chart]);

        assert_eq!(
            layout.spec()["data"]["points"],
            json!({ "type": "json", "data": [{ "x": 1 }] })
        );
    }
}
