//! [evalplot]'s visualization library.
//!
//! [evalplot]: https://github.com/evalplot/evalplot
//!
//! Declarative building blocks for eval-score visualizations. Marks,
//! inputs, tables, and layouts assemble a JSON spec that an external
//! JavaScript plotting engine interprets; [render::write_html] embeds
//! the spec into a self-contained HTML page.

#![warn(missing_docs)]

pub(crate) mod id;

pub mod channel;
pub mod component;
pub mod data;
pub mod error;
pub mod input;
pub mod layout;
pub mod mark;
pub mod param;
pub mod plot;
pub mod render;
pub mod selection;
pub mod stats;
pub mod table;
pub mod transform;
pub mod view;

pub use crate::component::Component;
pub use crate::data::Data;
pub use crate::data::Frame;
pub use crate::error::Result;
pub use crate::error::VisError;
pub use crate::param::Param;
pub use crate::param::ParamValue;
pub use crate::selection::Selection;
