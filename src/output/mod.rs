//! Standalone HTML pages around highlighted markup

use serde::Serialize;
use tinytemplate::TinyTemplate;
use tracing::debug;

use crate::error::HighlightError;

static TEMPLATE: &'static str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
body \{ background: #1e1e1e; color: #d4d4d4; }
pre \{ font-family: "Inconsolata", monospace; white-space: pre-wrap; }
</style>
</head>
<body>
<pre><code>{code | unescaped}</code></pre>
</body>
</html>
"#;

#[derive(Serialize)]
struct Context<'a> {
    title: &'a str,
    code: &'a str,
}

/// Wrap already-rendered markup in a complete HTML document. The title is
/// escaped; the markup is inserted as is.
pub fn page(title: &str, markup: &str) -> Result<String, HighlightError> {
    let mut tt = TinyTemplate::new();
    tt.add_template("page", TEMPLATE)
        .map_err(|error| HighlightError::Configuration {
            problem: error.to_string(),
        })?;

    let context = Context {
        title,
        code: markup,
    };

    let rendered = tt
        .render("page", &context)
        .map_err(|error| HighlightError::Configuration {
            problem: error.to_string(),
        })?;

    debug!("Rendered page of {} bytes", rendered.len());
    Ok(rendered)
}
