// Presentation: stateless rendering of the board's cards.

pub mod render;

pub use render::{render, OutputFormat, DEFAULT_PAGE_TITLE};
