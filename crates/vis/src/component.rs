//! Finished pieces of UI and their assembled specs.

use std::collections::BTreeMap;

use serde_json::Map;
use serde_json::Value;
use serde_json::json;

use crate::data::Data;
use crate::param::Param;
use crate::selection::Selection;

/// A finished piece of UI: a plot, input, table or layout.
///
/// A component carries its engine config together with the data tables
/// and param definitions it references, so composed layouts can merge
/// everything into a single spec.
#[derive(Debug, Clone)]
pub struct Component {
    config: Value,
    tables: BTreeMap<String, Value>,
    params: BTreeMap<String, Value>,
}

impl Component {
    pub(crate) fn new(config: Value) -> Component {
        Self {
            config,
            tables: BTreeMap::new(),
            params: BTreeMap::new(),
        }
    }

    /// Replaces the config while keeping the registries, for builders
    /// that register context before the config is final.
    pub(crate) fn with_config(mut self, config: Value) -> Component {
        self.config = config;
        self
    }

    /// The engine config of this component.
    pub fn config(&self) -> &Value {
        &self.config
    }

    /// Records the table of a data source for embedding into the spec.
    pub(crate) fn register_data(&mut self, data: &Data) {
        self.tables
            .entry(data.table().to_owned())
            .or_insert_with(|| data.rows());
        self.register_selection(data.selection());
    }

    pub(crate) fn register_param(&mut self, param: &Param) {
        self.params
            .entry(param.name().to_owned())
            .or_insert_with(|| param.definition());
    }

    pub(crate) fn register_selection(&mut self, selection: &Selection) {
        self.params
            .entry(selection.name().to_owned())
            .or_insert_with(|| selection.definition());
    }

    /// Merges the table and param registries of another component,
    /// e.g. when concatenating layouts.
    pub(crate) fn absorb(&mut self, other: &Component) {
        for (table, rows) in &other.tables {
            self.tables.entry(table.clone()).or_insert_with(|| rows.clone());
        }
        for (name, definition) in &other.params {
            self.params
                .entry(name.clone())
                .or_insert_with(|| definition.clone());
        }
    }

    /// The complete spec for the rendering engine: the referenced
    /// tables embedded as JSON rows, the param definitions, and the
    /// component config itself.
    pub fn spec(&self) -> Value {
        let mut spec = Map::new();

        if !self.tables.is_empty() {
            let mut data = Map::new();
            for (table, rows) in &self.tables {
                data.insert(table.clone(), json!({ "type": "json", "data": rows }));
            }
            spec.insert("data".to_owned(), Value::Object(data));
        }

        if !self.params.is_empty() {
            let mut params = Map::new();
            for (name, definition) in &self.params {
                params.insert(name.clone(), definition.clone());
            }
            spec.insert("params".to_owned(), Value::Object(params));
        }

        if let Value::Object(config) = &self.config {
            for (key, value) in config {
                spec.insert(key.clone(), value.clone());
            }
        }

        Value::Object(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Frame;

    #[test]
    fn spec_embeds_tables_and_params() {
        let frame = Frame::from_columns([("x", vec![json!(1)])]).unwrap();
        let data = Data::new("points", frame);

        let mut component = Component::new(json!({ "plot": [] }));
        component.register_data(&data);

        let spec = component.spec();

        assert_eq!(
            spec["data"]["points"],
            json!({ "type": "json", "data": [{ "x": 1 }] })
        );
        assert_eq!(
            spec["params"][data.selection().name()],
            json!({ "select": "intersect" })
        );
        assert_eq!(spec["plot"], json!([]));
    }

    #[test]
    fn absorb_keeps_the_first_registration() {
        let frame = Frame::from_columns([("x", vec![json!(1)])]).unwrap();
        let data = Data::new("points", frame);

        let mut first = Component::new(json!({}));
        first.register_data(&data);
        let mut second = Component::new(json!({}));
        second.register_data(&data);

        first.absorb(&second);

        assert_eq!(first.spec()["data"]["points"]["data"], json!([{ "x": 1 }]));
    }
}
