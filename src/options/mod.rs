//! Caller-facing configuration: which language, and how to colour it

use serde::{Deserialize, Serialize};

use crate::error::HighlightError;
use crate::language::Category;

/// Whether spans carry an inline `style` attribute or a utility `class`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Inline,
    Class,
}

impl std::str::FromStr for ColorMode {
    type Err = HighlightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inline" => Ok(ColorMode::Inline),
            "class" => Ok(ColorMode::Class),
            _ => Err(HighlightError::Configuration {
                problem: format!("unknown colour mode \"{}\", expected inline or class", s),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LiteralColors {
    pub boolean: String,
    pub number: String,
    pub string: String,
    pub null: String,
}

impl Default for LiteralColors {
    fn default() -> Self {
        LiteralColors {
            boolean: "#1a12b3".to_string(),
            number: "#3d73f2".to_string(),
            string: "#f5a973".to_string(),
            null: "#1a12b3".to_string(),
        }
    }
}

/// Colour for each declared category. Values are whatever CSS accepts in
/// inline mode; in class mode a hex value becomes an arbitrary-value class
/// and anything else is taken to be a utility colour name like `red-500`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Colors {
    pub identifier: String,
    pub keyword: String,
    pub separator: String,
    pub operator: String,
    pub literals: LiteralColors,
    pub comment: String,
}

impl Default for Colors {
    fn default() -> Self {
        Colors {
            identifier: "#80dbdd".to_string(),
            keyword: "#7e43d1".to_string(),
            separator: "#d4d4d4".to_string(),
            operator: "#7ce6ba".to_string(),
            literals: LiteralColors::default(),
            comment: "#0f4503".to_string(),
        }
    }
}

impl Colors {
    /// The colour configured for a category, or None for the fallbacks,
    /// which are never coloured.
    pub fn of(&self, category: Category) -> Option<&str> {
        match category {
            Category::Identifier => Some(&self.identifier),
            Category::Keyword => Some(&self.keyword),
            Category::Separator => Some(&self.separator),
            Category::Operator => Some(&self.operator),
            Category::Boolean => Some(&self.literals.boolean),
            Category::Number => Some(&self.literals.number),
            Category::String => Some(&self.literals.string),
            Category::Null => Some(&self.literals.null),
            Category::Comment => Some(&self.comment),
            Category::Newline | Category::Whitespace | Category::Character => None,
        }
    }

    pub fn from_toml(content: &str) -> Result<Colors, HighlightError> {
        toml::from_str(content).map_err(|error| HighlightError::Configuration {
            problem: format!("invalid colours: {}", error.message()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Options {
    pub language: String,
    pub mode: ColorMode,
    pub colors: Colors,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            language: "javascript".to_string(),
            mode: ColorMode::default(),
            colors: Colors::default(),
        }
    }
}

impl Options {
    pub fn from_toml(content: &str) -> Result<Options, HighlightError> {
        toml::from_str(content).map_err(|error| HighlightError::Configuration {
            problem: format!("invalid options: {}", error.message()),
        })
    }
}
