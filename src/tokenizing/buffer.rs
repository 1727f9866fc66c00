//! Scratch copy of the input that spans are masked out of

use std::ops::Range;

/// Filler written over masked spans. It is one byte wide so a span of `n`
/// bytes is replaced by `n` fillers and no offset ever moves.
pub const MASK: char = '\0';

/// The working buffer. It always has exactly the length of the original
/// text; `masked` remembers which bytes have been claimed so that a NUL
/// that was in the input all along is not mistaken for filler.
pub(crate) struct Buffer {
    text: String,
    masked: Vec<bool>,
}

impl Buffer {
    pub(crate) fn new(original: &str) -> Buffer {
        Buffer {
            text: original.to_string(),
            masked: vec![false; original.len()],
        }
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether any byte in the range has already been claimed.
    pub(crate) fn is_masked(&self, range: &Range<usize>) -> bool {
        self.masked[range.clone()]
            .iter()
            .any(|&b| b)
    }

    pub(crate) fn mask(&mut self, range: Range<usize>) {
        let filler: String = std::iter::repeat(MASK)
            .take(range.len())
            .collect();
        self.text
            .replace_range(range.clone(), &filler);
        self.masked[range]
            .iter_mut()
            .for_each(|b| *b = true);
    }

    /// Maximal runs of bytes not yet claimed by any pass.
    pub(crate) fn unmasked(&self) -> Vec<Range<usize>> {
        let mut runs = Vec::new();
        let mut start = None;

        for (i, &masked) in self
            .masked
            .iter()
            .enumerate()
        {
            match (masked, start) {
                (false, None) => start = Some(i),
                (true, Some(s)) => {
                    runs.push(s..i);
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            runs.push(s..self.masked.len());
        }

        runs
    }
}
