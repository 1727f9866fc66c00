//! HTML markup for highlighted code

use std::borrow::Cow;

use crate::language::Category;
use crate::options::{ColorMode, Colors};

use super::renderer::Render;

/// Wrap classified spans in `<span>` elements coloured per category, either
/// with an inline style or with a utility class. Every token's text is
/// escaped here, at render time, so tokenizing always works on (and reports
/// offsets into) the raw input.
#[derive(Default)]
pub struct Html {
    pub mode: ColorMode,
    pub colors: Colors,
}

impl Html {
    pub fn new(mode: ColorMode, colors: Colors) -> Html {
        Html { mode, colors }
    }
}

impl Render for Html {
    fn style(&self, category: Category, content: &str) -> String {
        let content = escape_html(content);
        match category {
            Category::Newline => "<br>".to_string(),
            _ if category.is_fallback() => content.into_owned(),
            _ => match self
                .colors
                .of(category)
            {
                Some(color) => markup(self.mode, color, &content),
                None => content.into_owned(),
            },
        }
    }
}

fn escape_html(content: &str) -> Cow<'_, str> {
    if !content.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(content);
    }

    let mut result = String::with_capacity(content.len() + 8);
    for c in content.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Utility class for a colour: `text-[#7e43d1]` for hex values, which need
/// the arbitrary-value form, `text-red-500` for named ones.
fn class_name(color: &str) -> String {
    if color.starts_with('#') {
        format!("text-[{}]", color)
    } else {
        format!("text-{}", color)
    }
}

fn markup(mode: ColorMode, color: &str, content: &str) -> String {
    let color = escape_html(color);
    match mode {
        ColorMode::Inline => format!("<span style=\"color: {};\">{}</span>", color, content),
        ColorMode::Class => format!("<span class=\"{}\">{}</span>", class_name(&color), content),
    }
}
