//! Turning tokens into highlighted output

mod html;
mod renderer;
mod terminal;

pub use html::Html;
pub use renderer::{render, Identity, Render};
pub use terminal::Terminal;
