//! Types describing the lexical rules of a language

use std::fmt;
use std::ops::Range;

use regex::Regex;

/// Lexical classification of a span of source text. The first nine are the
/// categories a language definition can declare; the last three are the
/// fallbacks the tokenizer synthesizes for whatever is left over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Identifier,
    Keyword,
    Separator,
    Operator,
    Boolean,
    Number,
    String,
    Null,
    Comment,
    Newline,
    Whitespace,
    Character,
}

impl Category {
    /// The declared categories in the order the tokenizer masks them.
    /// Strings and comments go first so nothing inside them is picked up
    /// by a later pass; keywords go before identifiers so that reserved
    /// words are not reclassified as names.
    pub const PRIORITY: [Category; 9] = [
        Category::String,
        Category::Comment,
        Category::Keyword,
        Category::Identifier,
        Category::Number,
        Category::Boolean,
        Category::Null,
        Category::Operator,
        Category::Separator,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Identifier => "identifier",
            Category::Keyword => "keyword",
            Category::Separator => "separator",
            Category::Operator => "operator",
            Category::Boolean => "boolean",
            Category::Number => "number",
            Category::String => "string",
            Category::Null => "null",
            Category::Comment => "comment",
            Category::Newline => "newline",
            Category::Whitespace => "whitespace",
            Category::Character => "character",
        }
    }

    /// True for the synthetic categories that are never wrapped in markup.
    pub fn is_fallback(&self) -> bool {
        matches!(
            self,
            Category::Newline | Category::Whitespace | Category::Character
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Anything able to find all non-overlapping occurrences of something in a
/// string. Ranges are byte offsets into the haystack, in ascending order.
pub trait Matcher: fmt::Debug + Send + Sync {
    fn find_all(&self, haystack: &str) -> Vec<Range<usize>>;
}

impl Matcher for Regex {
    fn find_all(&self, haystack: &str) -> Vec<Range<usize>> {
        self.find_iter(haystack)
            .map(|m| m.range())
            .collect()
    }
}

pub type Matchers = Vec<Box<dyn Matcher>>;

#[derive(Debug, Default)]
pub struct Literals {
    pub boolean: Matchers,
    pub number: Matchers,
    pub string: Matchers,
    pub null: Matchers,
}

/// The full set of matchers, grouped by category, describing one
/// language's lexical rules. The default value is the empty definition,
/// against which every input tokenizes to fallbacks only.
#[derive(Debug, Default)]
pub struct LanguageDefinition {
    pub identifier: Matchers,
    pub keyword: Matchers,
    pub separator: Matchers,
    pub operator: Matchers,
    pub literals: Literals,
    pub comment: Matchers,
}

impl LanguageDefinition {
    /// The matchers declared for a category, in declaration order. The
    /// fallback categories never have any.
    pub fn matchers(&self, category: Category) -> &[Box<dyn Matcher>] {
        match category {
            Category::Identifier => &self.identifier,
            Category::Keyword => &self.keyword,
            Category::Separator => &self.separator,
            Category::Operator => &self.operator,
            Category::Boolean => &self.literals.boolean,
            Category::Number => &self.literals.number,
            Category::String => &self.literals.string,
            Category::Null => &self.literals.null,
            Category::Comment => &self.comment,
            Category::Newline | Category::Whitespace | Category::Character => &[],
        }
    }

    pub(crate) fn matchers_mut(&mut self, category: Category) -> Option<&mut Matchers> {
        match category {
            Category::Identifier => Some(&mut self.identifier),
            Category::Keyword => Some(&mut self.keyword),
            Category::Separator => Some(&mut self.separator),
            Category::Operator => Some(&mut self.operator),
            Category::Boolean => Some(&mut self.literals.boolean),
            Category::Number => Some(&mut self.literals.number),
            Category::String => Some(&mut self.literals.string),
            Category::Null => Some(&mut self.literals.null),
            Category::Comment => Some(&mut self.comment),
            Category::Newline | Category::Whitespace | Category::Character => None,
        }
    }

    /// Append a matcher to a declared category. Asking to add one to a
    /// fallback category is ignored.
    pub fn with(mut self, category: Category, matcher: impl Matcher + 'static) -> Self {
        if let Some(list) = self.matchers_mut(category) {
            list.push(Box::new(matcher));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        Category::PRIORITY
            .iter()
            .all(|category| {
                self.matchers(*category)
                    .is_empty()
            })
    }
}
