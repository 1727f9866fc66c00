//! The multi-pass, mask-as-you-go tokenizer

use std::ops::Range;

use tracing::{debug, warn};

use super::buffer::Buffer;
use super::Token;
use crate::error::HighlightError;
use crate::language::{Category, LanguageDefinition, Matcher};

/// Split text into classified tokens covering every byte of it exactly
/// once, returned in order of offset.
///
/// Each declared category is run in `Category::PRIORITY` order against a
/// working copy of the text. Every match becomes a token and is then
/// overwritten in the working copy with filler of the same byte length, so
/// later patterns can't see it and no offset ever moves. Whatever is left
/// at the end becomes newline, whitespace, or character tokens.
pub fn tokenize<'i>(
    text: &'i str,
    definition: &LanguageDefinition,
) -> Result<Vec<Token<'i>>, HighlightError> {
    let mut buffer = Buffer::new(text);
    let mut tokens = Vec::new();

    for category in Category::PRIORITY {
        for matcher in definition.matchers(category) {
            let found = scan(text, &mut buffer, category, matcher.as_ref(), &mut tokens)?;
            debug!("{} pass found {} match{}", category, found, if found == 1 { "" } else { "es" });
        }
    }

    scan(text, &mut buffer, Category::Newline, crate::compile!(r"\r\n|\r|\n"), &mut tokens)?;
    scan(text, &mut buffer, Category::Whitespace, crate::compile!(r"\s+"), &mut tokens)?;

    let mut residue = 0;
    for range in buffer.unmasked() {
        residue += 1;
        tokens.push(Token {
            category: Category::Character,
            text: &text[range.clone()],
            offset: range.start,
        });
        buffer.mask(range);
    }
    if residue > 0 {
        warn!(
            "{} span{} of input not recognized by the language definition",
            residue,
            if residue == 1 { "" } else { "s" }
        );
    }

    tokens.sort_by_key(|token| token.offset);
    verify(text, &tokens)?;

    Ok(tokens)
}

/// Run one matcher over the current working buffer, recording and masking
/// everything it finds. Returns the number of tokens produced.
fn scan<'i>(
    text: &'i str,
    buffer: &mut Buffer,
    category: Category,
    matcher: &dyn Matcher,
    tokens: &mut Vec<Token<'i>>,
) -> Result<usize, HighlightError> {
    let ranges: Vec<Range<usize>> = matcher.find_all(buffer.as_str());
    let mut count = 0;

    for range in ranges {
        if range.is_empty() {
            debug!("Ignoring empty {} match at {}", category, range.start);
            continue;
        }

        if range.end > text.len() {
            warn!(
                "Ignoring {} match {:?} which runs past the end of the input",
                category, range
            );
            continue;
        }

        if buffer.is_masked(&range) {
            return Err(HighlightError::MaskedOverlap {
                category,
                offset: range.start,
            });
        }

        let content = match text.get(range.clone()) {
            Some(content) => content,
            None => {
                warn!(
                    "Ignoring {} match {:?} which is not a valid span of the input",
                    category, range
                );
                continue;
            }
        };

        tokens.push(Token {
            category,
            text: content,
            offset: range.start,
        });
        buffer.mask(range);
        count += 1;
    }

    Ok(count)
}

/// Confirm the sorted tokens tile the input with no gaps or overlaps.
fn verify(text: &str, tokens: &[Token<'_>]) -> Result<(), HighlightError> {
    let mut expected = 0;

    for token in tokens {
        if token.offset < expected {
            return Err(HighlightError::Overlap {
                offset: token.offset,
            });
        }
        if token.offset > expected {
            return Err(HighlightError::Gap { offset: expected });
        }
        expected = token.end();
    }

    if expected != text.len() {
        return Err(HighlightError::Gap { offset: expected });
    }

    Ok(())
}
