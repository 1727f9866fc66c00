#[cfg(test)]
mod verify {
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    use highlighter::language::{Category, LanguageDefinition, Registry};
    use highlighter::tokenizing::tokenize;
    use regex::Regex;
    use tracing::Level;

    /// Collects whatever the fmt subscriber writes so it can be inspected.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0
                .lock()
                .unwrap()
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn logged(f: impl FnOnce()) -> String {
        let captured = Captured::default();
        let writer = captured.clone();

        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(Level::WARN)
            .finish();

        tracing::subscriber::with_default(subscriber, f);

        let bytes = captured
            .0
            .lock()
            .unwrap()
            .clone();
        String::from_utf8(bytes).unwrap()
    }

    fn keyword(word: &str) -> LanguageDefinition {
        LanguageDefinition::default().with(Category::Keyword, Regex::new(word).unwrap())
    }

    #[test]
    fn duplicate_name_is_warned_about() {
        let registry = Registry::new();
        registry.register("Twice", keyword("one"));
        registry.register("twice", keyword("two"));

        let output = logged(|| {
            registry.resolve("Twice");
        });

        assert!(output.contains("WARN"), "{}", output);
        assert!(
            output.contains("Language \"Twice\" is registered 2 times, using the first"),
            "{}",
            output
        );
    }

    #[test]
    fn unknown_name_is_warned_about() {
        let registry = Registry::with_builtins();

        let output = logged(|| {
            let definition = registry.resolve("COBOL");
            assert!(definition.is_empty());
        });

        assert!(
            output.contains("No language named \"COBOL\" is registered"),
            "{}",
            output
        );
    }

    #[test]
    fn single_registration_is_quiet() {
        let registry = Registry::new();
        registry.register("Once", keyword("one"));

        let output = logged(|| {
            registry.resolve("once");
        });

        assert!(output.is_empty(), "{}", output);
    }

    #[test]
    fn residue_is_warned_about() {
        let definition = keyword(r"\blet\b");

        let output = logged(|| {
            tokenize("let @ #", &definition).unwrap();
        });

        assert!(
            output.contains("2 spans of input not recognized by the language definition"),
            "{}",
            output
        );
    }

    #[test]
    fn fully_classified_input_is_quiet() {
        let definition = keyword(r"\blet\b");

        let output = logged(|| {
            tokenize("let let\n", &definition).unwrap();
        });

        assert!(output.is_empty(), "{}", output);
    }
}
