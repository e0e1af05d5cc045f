//! Line rendering: placeholder templates, level tags, and the assembled log line
//! with its `Data:` and `Stack:` continuation blocks.

mod line;
mod tag;
mod template;

pub use line::LineFormatter;
pub use tag::{Alignment, TagConfig, Transform};
pub use template::{FormatSegment, FormatTemplate, FormatValues, Placeholder};
