//! Lexical rules for JavaScript, also used for TypeScript

use std::sync::Arc;

use regex::Regex;

use super::registry::Registry;
use super::types::{Category, LanguageDefinition};

// Patterns with open-ended repetition exclude NUL so they stop at text an
// earlier pass has already masked instead of running over it.
//
// Strings are masked before comments, so a quote inside a comment opens a
// string: `/* it's */ x = 'a';` gives the string `'s */ x = '` and leaves
// the final `'` as an unrecognized character.

static STRINGS: &[&str] = &[
    r"`[^`\x00]*`",
    r#"'(?:[^'\\\x00\n]|\\[^\x00\n])*'"#,
    r#""(?:[^"\\\x00\n]|\\[^\x00\n])*""#,
];

static COMMENTS: &[&str] = &[r"/\*[^\x00]*?\*/", r"//[^\x00\r\n]*"];

static KEYWORDS: &[&str] = &[
    "abstract",
    "async",
    "await",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "double",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "final",
    "finally",
    "float",
    "for",
    "function",
    "goto",
    "if",
    "implements",
    "import",
    "in",
    "instanceof",
    "int",
    "interface",
    "let",
    "long",
    "native",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
];

static IDENTIFIERS: &[&str] = &[r"[$_\p{XID_Start}][$\x{200C}\x{200D}\p{XID_Continue}]*"];

static NUMBERS: &[&str] = &[r"[0-9]+(?:\.[0-9]+)?"];

static BOOLEANS: &[&str] = &[r"\btrue\b", r"\bfalse\b"];

static NULLS: &[&str] = &[r"\bnull\b"];

// Longest first, so that `===` is not taken apart by `=`.
static OPERATORS: &[&str] = &[
    r">>>=", r"===", r"!==", r"\*\*=", r">>>", r"<<=", r">>=", r"=>", r"\*\*", r"\+\+", r"--",
    r"\+=", r"-=", r"\*=", r"/=", r"%=", r"==", r"!=", r">=", r"<=", r"&&", r"\|\|", r"\?\?",
    r"<<", r">>", r"\+", r"-", r"\*", r"/", r"%", r"=", r">", r"<", r"\?", r":", r"!", r"&",
    r"\|", r"~", r"\^",
];

static SEPARATORS: &[&str] = &[r"\}", r"\]", r"\)", r";", r"\{", r"\[", r"\(", r",", r"\."];

fn pattern(p: &str) -> Regex {
    Regex::new(p).unwrap_or_else(|e| panic!("{}", e))
}

fn add(mut definition: LanguageDefinition, category: Category, patterns: &[&str]) -> LanguageDefinition {
    for p in patterns {
        definition = definition.with(category, pattern(p));
    }
    definition
}

pub fn definition() -> LanguageDefinition {
    let keywords = format!(r"\b(?:{})\b", KEYWORDS.join("|"));

    let definition = LanguageDefinition::default().with(Category::Keyword, pattern(&keywords));
    let definition = add(definition, Category::String, STRINGS);
    let definition = add(definition, Category::Comment, COMMENTS);
    let definition = add(definition, Category::Identifier, IDENTIFIERS);
    let definition = add(definition, Category::Number, NUMBERS);
    let definition = add(definition, Category::Boolean, BOOLEANS);
    let definition = add(definition, Category::Null, NULLS);
    let definition = add(definition, Category::Operator, OPERATORS);
    add(definition, Category::Separator, SEPARATORS)
}

/// The rules don't differ between JavaScript and TypeScript, so one
/// definition is shared by all four names.
pub(crate) fn register(registry: &Registry) {
    let shared = Arc::new(definition());

    for name in ["JS", "JavaScript", "TS", "TypeScript"] {
        registry.register(name, Arc::clone(&shared));
    }
}
