// Errors raised while loading, tokenizing, or configuring

use std::path::Path;

use thiserror::Error;

use crate::language::Category;

mod display;

pub use display::*;

/// Failures of the highlighting library itself. Only `MaskedOverlap`,
/// `Overlap`, and `Gap` come out of tokenizing, and all three mean that a
/// language definition's patterns interact badly, not that the input text
/// is wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HighlightError {
    #[error("invalid {category} pattern {pattern:?}: {reason}")]
    InvalidPattern {
        category: Category,
        pattern: String,
        reason: String,
    },
    #[error("{category} match covers text already claimed by an earlier pass")]
    MaskedOverlap { category: Category, offset: usize },
    #[error("tokens overlap")]
    Overlap { offset: usize },
    #[error("no token covers this text")]
    Gap { offset: usize },
    #[error("{problem}")]
    Configuration { problem: String },
}

impl HighlightError {
    /// Where in the input the problem was detected, if it concerns a
    /// position in the input at all.
    pub fn offset(&self) -> Option<usize> {
        match self {
            HighlightError::InvalidPattern { .. } => None,
            HighlightError::MaskedOverlap { offset, .. } => Some(*offset),
            HighlightError::Overlap { offset } => Some(*offset),
            HighlightError::Gap { offset } => Some(*offset),
            HighlightError::Configuration { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{problem}: {details}")]
pub struct LoadingError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
}
