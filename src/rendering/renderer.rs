//! The rendering trait and the passthrough implementation of it

use crate::language::Category;
use crate::tokenizing::Token;

/// Trait for different rendering backends (the no-op no-markup one, HTML
/// spans for web pages, ANSI escapes for terminal colouring)
pub trait Render {
    /// Apply styling to content of the given category
    fn style(&self, category: Category, content: &str) -> String;
}

/// Returns content unchanged, with no markup applied
pub struct Identity;

impl Render for Identity {
    fn style(&self, _category: Category, content: &str) -> String {
        content.to_string()
    }
}

/// Apply the renderer to each token in turn and join the results.
pub fn render(renderer: &impl Render, tokens: &[Token<'_>]) -> String {
    let mut output = String::with_capacity(
        tokens
            .last()
            .map(|token| token.end())
            .unwrap_or(0),
    );

    for token in tokens {
        let rendered = renderer.style(token.category, token.text);
        output.push_str(&rendered);
    }

    output
}
