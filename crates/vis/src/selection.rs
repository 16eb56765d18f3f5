//! Named predicate sets that link inputs, legends and marks.

use std::sync::Arc;

use serde_json::Value;
use serde_json::json;

use crate::id::Id;

/// The strategy used to resolve the clauses of a [Selection].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    /// The intersection of all clauses.
    Intersect,
    /// The union of all clauses.
    Union,
    /// Only the most recent clause.
    Single,
    /// Like intersect, but each client is not filtered by its own clause.
    Crossfilter,
}

impl SelectionKind {
    fn as_str(self) -> &'static str {
        match self {
            SelectionKind::Intersect => "intersect",
            SelectionKind::Union => "union",
            SelectionKind::Single => "single",
            SelectionKind::Crossfilter => "crossfilter",
        }
    }
}

/// A named set of predicates that inputs and interactors write into
/// and marks filter by.
///
/// Like a [Param](crate::param::Param), a selection is referenced as
/// `$name` and defined in the `params` section of the generated spec.
#[derive(Debug, Clone)]
pub struct Selection {
    name: Arc<str>,
    kind: SelectionKind,
}

impl Selection {
    /// Creates a selection of the given kind with a generated
    /// unique name.
    pub fn new(kind: SelectionKind) -> Selection {
        Self {
            name: Arc::from(Id::name("selection")),
            kind,
        }
    }

    /// A selection resolving to the intersection of its clauses.
    pub fn intersect() -> Selection {
        Selection::new(SelectionKind::Intersect)
    }

    /// A selection resolving to the union of its clauses.
    pub fn union() -> Selection {
        Selection::new(SelectionKind::Union)
    }

    /// A selection holding only the most recent clause.
    pub fn single() -> Selection {
        Selection::new(SelectionKind::Single)
    }

    /// A cross-filtering selection.
    pub fn crossfilter() -> Selection {
        Selection::new(SelectionKind::Crossfilter)
    }

    /// The generated name of the selection.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The resolution strategy of the selection.
    pub fn kind(&self) -> SelectionKind {
        self.kind
    }

    /// The `$name` reference embedded into component configs.
    pub(crate) fn reference(&self) -> Value {
        Value::String(format!("${}", self.name))
    }

    /// The definition collected into the `params` section.
    pub(crate) fn definition(&self) -> Value {
        json!({ "select": self.kind.as_str() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definition_names_the_strategy() {
        let selection = Selection::single();

        assert_eq!(selection.definition(), json!({ "select": "single" }));
    }

    #[test]
    fn selections_get_distinct_names() {
        let first = Selection::intersect();
        let second = Selection::intersect();

        assert_ne!(first.name(), second.name());
    }
}
