//! Renderers for colourizing code on a terminal

use owo_colors::OwoColorize;

use crate::language::Category;
use crate::options::Colors;

use super::renderer::Render;

/// Embellish tokens with ANSI escapes to create syntax highlighting in
/// terminal output. Only `#rrggbb` colours can be shown; anything else
/// (a utility class name, say) leaves the token uncoloured.
#[derive(Default)]
pub struct Terminal {
    pub colors: Colors,
}

impl Render for Terminal {
    fn style(&self, category: Category, content: &str) -> String {
        match category {
            Category::Newline => "\n".to_string(),
            Category::Whitespace => content.to_string(),
            Category::Character => content.to_string(),
            Category::Comment => match self.rgb(category) {
                Some(rgb) => content
                    .color(rgb)
                    .italic()
                    .to_string(),
                None => content.to_string(),
            },
            Category::Keyword => match self.rgb(category) {
                Some(rgb) => content
                    .color(rgb)
                    .bold()
                    .to_string(),
                None => content.to_string(),
            },
            _ => match self.rgb(category) {
                Some(rgb) => content
                    .color(rgb)
                    .to_string(),
                None => content.to_string(),
            },
        }
    }
}

impl Terminal {
    fn rgb(&self, category: Category) -> Option<owo_colors::Rgb> {
        self.colors
            .of(category)
            .and_then(parse_hex)
    }
}

fn parse_hex(color: &str) -> Option<owo_colors::Rgb> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
    Some(owo_colors::Rgb(r, g, b))
}
