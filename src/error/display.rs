use std::path::Path;

use owo_colors::OwoColorize;

use super::{HighlightError, LoadingError};

/// Format a highlighting error for a human, pointing at the offending line
/// and column when the error has a position.
pub fn full_highlight_error(error: &HighlightError, filename: &Path, source: &str) -> String {
    let offset = match error.offset() {
        Some(offset) if offset <= source.len() => offset,
        _ => {
            return format!(
                "{}: {}: {}",
                "error".bright_red(),
                filename.to_string_lossy(),
                error
                    .to_string()
                    .bold()
            );
        }
    };

    let i = calculate_line_number(source, offset);
    let j = calculate_column_number(source, offset);

    let code = source
        .lines()
        .nth(i)
        .unwrap_or("");
    let line = i + 1;
    let column = j + 1;
    let width = 3.max(
        line.to_string()
            .len(),
    );

    format!(
        r#"
{}: {}:{}:{} {}

{:width$} {}
{:width$} {} {}
{:width$} {} {:>column$}

This is a problem with the language definition's patterns rather than with
the input; try reordering or tightening them.
        "#,
        "error".bright_red(),
        filename.to_string_lossy(),
        line,
        column,
        error
            .to_string()
            .bold(),
        ' ',
        '|'.bright_blue(),
        line.bright_blue(),
        '|'.bright_blue(),
        code,
        ' ',
        '|'.bright_blue(),
        '^'.bright_red(),
    )
    .trim_ascii()
    .to_string()
}

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error(error: &LoadingError<'_>) -> String {
    let problem = if error
        .details
        .is_empty()
    {
        error
            .problem
            .clone()
    } else {
        error.to_string()
    };

    format!(
        "{}: {}: {}",
        "error".bright_red(),
        error
            .filename
            .display(),
        problem.bold()
    )
}

// This returns a zero-origin result so that it can subsequently be used for
// splitting; for display to humans you'll have to add 1.
fn calculate_line_number(content: &str, offset: usize) -> usize {
    content[..offset]
        .bytes()
        .filter(|&b| b == b'\n')
        .count()
}

// Zero-origin as well, counted in characters.
fn calculate_column_number(content: &str, offset: usize) -> usize {
    let before = &content[..offset];
    match before.rfind('\n') {
        Some(start) => content[start + 1..offset]
            .chars()
            .count(),
        None => before
            .chars()
            .count(),
    }
}
