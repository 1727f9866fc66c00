//! Language definitions written as documents of regular expressions

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::{Category, LanguageDefinition};
use crate::error::HighlightError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LiteralSource {
    pub boolean: Vec<String>,
    pub number: Vec<String>,
    pub string: Vec<String>,
    pub null: Vec<String>,
}

/// The serialized form of a `LanguageDefinition`: for each category, the
/// list of patterns in the order they are to be tried. Missing categories
/// are empty. In TOML this looks like
///
/// ```toml
/// keyword = ['\bfn\b', '\blet\b']
/// identifier = ['[A-Za-z_][A-Za-z0-9_]*']
///
/// [literals]
/// number = ['[0-9]+']
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DefinitionSource {
    pub identifier: Vec<String>,
    pub keyword: Vec<String>,
    pub separator: Vec<String>,
    pub operator: Vec<String>,
    pub literals: LiteralSource,
    pub comment: Vec<String>,
}

impl DefinitionSource {
    pub fn from_toml(content: &str) -> Result<DefinitionSource, HighlightError> {
        toml::from_str(content).map_err(|error| HighlightError::Configuration {
            problem: format!("invalid language definition: {}", error.message()),
        })
    }

    fn patterns(&self, category: Category) -> &[String] {
        match category {
            Category::Identifier => &self.identifier,
            Category::Keyword => &self.keyword,
            Category::Separator => &self.separator,
            Category::Operator => &self.operator,
            Category::Boolean => &self
                .literals
                .boolean,
            Category::Number => &self
                .literals
                .number,
            Category::String => &self
                .literals
                .string,
            Category::Null => &self
                .literals
                .null,
            Category::Comment => &self.comment,
            Category::Newline | Category::Whitespace | Category::Character => &[],
        }
    }

    /// Compile every pattern, failing on the first one that isn't a valid
    /// regular expression.
    pub fn compile(&self) -> Result<LanguageDefinition, HighlightError> {
        let mut definition = LanguageDefinition::default();

        for category in Category::PRIORITY {
            for pattern in self.patterns(category) {
                let regex = Regex::new(pattern).map_err(|error| HighlightError::InvalidPattern {
                    category,
                    pattern: pattern.clone(),
                    reason: error.to_string(),
                })?;
                definition = definition.with(category, regex);
            }
        }

        debug!(
            "Compiled definition with {} pattern{}",
            self.len(),
            if self.len() == 1 { "" } else { "s" }
        );
        Ok(definition)
    }

    pub fn len(&self) -> usize {
        Category::PRIORITY
            .iter()
            .map(|category| {
                self.patterns(*category)
                    .len()
            })
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
