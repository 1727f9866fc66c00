//! Syntax highlighting of source code into HTML.
//!
//! Text is split into classified tokens by masking out matches of a
//! language's patterns one category at a time, then each token is wrapped
//! in markup coloured for its category.

use tracing::debug;

pub mod error;
pub mod language;
pub mod loading;
pub mod options;
pub mod output;
pub mod regex;
pub mod rendering;
pub mod tokenizing;

use error::HighlightError;
use language::Registry;
use options::Options;
use rendering::Html;

/// Highlight code as HTML: look up the language named in the options,
/// tokenize against it, and render each token as a coloured span.
pub fn highlight(registry: &Registry, code: &str, options: &Options) -> Result<String, HighlightError> {
    let definition = registry.resolve(&options.language);
    let tokens = tokenizing::tokenize(code, &definition)?;

    debug!(
        "Rendering {} token{} as {:?} HTML",
        tokens.len(),
        if tokens.len() == 1 { "" } else { "s" },
        options.mode
    );

    let renderer = Html::new(options.mode, options.colors.clone());
    Ok(rendering::render(&renderer, &tokens))
}
