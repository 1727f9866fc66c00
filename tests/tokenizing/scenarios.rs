#[cfg(test)]
mod verify {
    use std::sync::Arc;

    use highlighter::language::{Category, LanguageDefinition, Registry};
    use highlighter::options::Options;
    use highlighter::rendering::{render, Html};
    use highlighter::tokenizing::{tokenize, Token};
    use regex::Regex;

    fn re(pattern: &str) -> Regex {
        Regex::new(pattern).unwrap()
    }

    fn scenario() -> LanguageDefinition {
        LanguageDefinition::default()
            .with(Category::Comment, re(r"//[^\n]*"))
            .with(Category::Keyword, re(r"\bconst\b"))
            .with(Category::Identifier, re(r"[A-Za-z_][A-Za-z0-9_]*"))
            .with(Category::Number, re(r"[0-9]+"))
            .with(Category::Operator, re(r"="))
    }

    fn token(category: Category, text: &'static str, offset: usize) -> Token<'static> {
        Token {
            category,
            text,
            offset,
        }
    }

    #[test]
    fn declaration_with_comment() {
        let tokens = tokenize("const a = 1 // note", &scenario()).unwrap();

        assert_eq!(
            tokens,
            vec![
                token(Category::Keyword, "const", 0),
                token(Category::Whitespace, " ", 5),
                token(Category::Identifier, "a", 6),
                token(Category::Whitespace, " ", 7),
                token(Category::Operator, "=", 8),
                token(Category::Whitespace, " ", 9),
                token(Category::Number, "1", 10),
                token(Category::Whitespace, " ", 11),
                token(Category::Comment, "// note", 12),
            ]
        );
    }

    #[test]
    fn declaration_with_comment_rendered_inline() {
        let tokens = tokenize("const a = 1 // note", &scenario()).unwrap();
        let output = render(&Html::default(), &tokens);

        assert_eq!(
            output,
            concat!(
                "<span style=\"color: #7e43d1;\">const</span> ",
                "<span style=\"color: #80dbdd;\">a</span> ",
                "<span style=\"color: #7ce6ba;\">=</span> ",
                "<span style=\"color: #3d73f2;\">1</span> ",
                "<span style=\"color: #0f4503;\">// note</span>"
            )
        );
    }

    #[test]
    fn lone_boolean() {
        let definition = LanguageDefinition::default().with(Category::Boolean, re("true"));

        let tokens = tokenize("true", &definition).unwrap();
        assert_eq!(tokens, vec![token(Category::Boolean, "true", 0)]);
    }

    #[test]
    fn duplicate_registration_resolves_to_first() {
        let registry = Registry::new();
        let first = Arc::new(LanguageDefinition::default().with(Category::Keyword, re(r"\bone\b")));
        let second = Arc::new(LanguageDefinition::default().with(Category::Keyword, re(r"\btwo\b")));

        registry.register("Twice", Arc::clone(&first));
        registry.register("twice", Arc::clone(&second));

        let resolved = registry.resolve("TWICE");
        assert!(Arc::ptr_eq(&resolved, &first));

        let tokens = tokenize("one two", &resolved).unwrap();
        assert_eq!(tokens[0].category, Category::Keyword);
        assert_eq!(tokens[2].category, Category::Character);
    }

    #[test]
    fn unknown_language_highlights_nothing() {
        let registry = Registry::with_builtins();
        let options = Options {
            language: "COBOL".to_string(),
            ..Default::default()
        };

        let output = highlighter::highlight(&registry, "MOVE A TO B.\n", &options).unwrap();
        assert_eq!(output, "MOVE A TO B.<br>");
    }

    #[test]
    fn empty_input() {
        let registry = Registry::with_builtins();
        let output = highlighter::highlight(&registry, "", &Options::default()).unwrap();
        assert_eq!(output, "");
    }
}
