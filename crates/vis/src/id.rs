use std::fmt::Display;
use std::fmt::Formatter;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use serde::Serialize;

/// Process-unique id used to name generated params, selections and plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
#[repr(transparent)]
pub(crate) struct Id(u64);

impl Id {
    pub(crate) fn next() -> Id {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);

        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// A generated name such as `param_42`.
    pub(crate) fn name(prefix: &str) -> String {
        format!("{prefix}_{}", Id::next())
    }
}

impl Display for Id {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_increasing() {
        let first = Id::next();
        let second = Id::next();

        assert!(second > first);
    }

    #[test]
    fn names_carry_the_prefix() {
        let name = Id::name("selection");

        assert!(name.starts_with("selection_"));
    }
}
