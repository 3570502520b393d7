mod escape;
mod hal;
mod markdown;

use crate::core::model::Representation;
use crate::Result;

pub use escape::{escape_table_cell, table_cell_link};
pub use hal::HalRenderer;
pub use markdown::MarkdownRenderer;

pub trait Renderer {
    fn render(&self, repr: &Representation) -> Result<String>;
}
