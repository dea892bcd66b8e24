//! Building blocks for reading values out of HTML pages that have no API.
//!
//! - [`clean_number`] strips currency symbols and separators from a cell's text
//! - [`CellLocator`] addresses a single node of a parsed document

mod cleaner;
mod locator;

pub use cleaner::clean_number;
pub use locator::{CellLocator, NodePath};
