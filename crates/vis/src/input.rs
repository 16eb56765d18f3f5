//! Input widgets: selects, sliders, search boxes and checkbox groups.

mod checkbox_group;
mod search;
mod select;
mod slider;

pub use checkbox_group::CheckboxGroup;
pub use checkbox_group::checkbox_group;
pub use search::Search;
pub use search::SearchType;
pub use search::search;
pub use select::Select;
pub use select::select;
pub use select::select_values;
pub use slider::Slider;
pub use slider::slider;

use serde_json::Value;

use crate::component::Component;
use crate::param::Param;
use crate::selection::Selection;

/// The param or selection an input writes its value into.
///
/// For a param, the input sets the new param value; for a selection,
/// the input adds a predicate over its field.
#[derive(Debug, Clone)]
pub enum Target {
    /// A param target.
    Param(Param),
    /// A selection target.
    Selection(Selection),
}

impl Target {
    pub(crate) fn reference(&self) -> Value {
        match self {
            Target::Param(param) => param.reference(),
            Target::Selection(selection) => selection.reference(),
        }
    }

    pub(crate) fn register(&self, component: &mut Component) {
        match self {
            Target::Param(param) => component.register_param(param),
            Target::Selection(selection) => component.register_selection(selection),
        }
    }

    pub(crate) fn is_selection(&self) -> bool {
        matches!(self, Target::Selection(_))
    }
}

impl From<&Param> for Target {
    fn from(param: &Param) -> Self {
        Target::Param(param.clone())
    }
}

impl From<&Selection> for Target {
    fn from(selection: &Selection) -> Self {
        Target::Selection(selection.clone())
    }
}
