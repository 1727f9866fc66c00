//! Classification of source text into offset-tagged tokens

mod buffer;
mod engine;

pub use buffer::MASK;
pub use engine::tokenize;

use crate::language::Category;

/// A classified span of the original text. `offset` is the byte position
/// of `text` in the input it was cut from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'i> {
    pub category: Category,
    pub text: &'i str,
    pub offset: usize,
}

impl<'i> Token<'i> {
    pub fn end(&self) -> usize {
        self.offset + self
            .text
            .len()
    }
}

/// Put the input back together from its tokens.
pub fn reconstruct(tokens: &[Token<'_>]) -> String {
    tokens
        .iter()
        .map(|token| token.text)
        .collect()
}
