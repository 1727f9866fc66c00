#[cfg(test)]
mod verify {
    use highlighter::language::Registry;
    use highlighter::options::{ColorMode, Colors, Options};
    use highlighter::output;
    use highlighter::rendering::{render, Identity};
    use highlighter::tokenizing::tokenize;

    fn options(mode: ColorMode) -> Options {
        Options {
            language: "JS".to_string(),
            mode,
            colors: Colors::default(),
        }
    }

    #[test]
    fn comparison_is_escaped() {
        let registry = Registry::with_builtins();
        let output = highlighter::highlight(&registry, "a<b", &options(ColorMode::Inline)).unwrap();

        assert_eq!(
            output,
            concat!(
                "<span style=\"color: #80dbdd;\">a</span>",
                "<span style=\"color: #7ce6ba;\">&lt;</span>",
                "<span style=\"color: #80dbdd;\">b</span>"
            )
        );
    }

    #[test]
    fn class_mode_uses_utility_classes() {
        let registry = Registry::with_builtins();
        let mut options = options(ColorMode::Class);
        options
            .colors
            .keyword = "purple-600".to_string();

        let output = highlighter::highlight(&registry, "return x;", &options).unwrap();

        assert_eq!(
            output,
            concat!(
                "<span class=\"text-purple-600\">return</span> ",
                "<span class=\"text-[#80dbdd]\">x</span>",
                "<span class=\"text-[#d4d4d4]\">;</span>"
            )
        );
    }

    #[test]
    fn newlines_become_line_breaks() {
        let registry = Registry::with_builtins();
        let output = highlighter::highlight(&registry, "1\n\n2\r\n", &options(ColorMode::Inline)).unwrap();

        assert_eq!(
            output,
            concat!(
                "<span style=\"color: #3d73f2;\">1</span>",
                "<br><br>",
                "<span style=\"color: #3d73f2;\">2</span>",
                "<br>"
            )
        );
    }

    #[test]
    fn string_contents_are_escaped_inside_one_span() {
        let registry = Registry::with_builtins();
        let output =
            highlighter::highlight(&registry, "'<b> & if'", &options(ColorMode::Inline)).unwrap();

        assert_eq!(
            output,
            "<span style=\"color: #f5a973;\">'&lt;b&gt; &amp; if'</span>"
        );
    }

    #[test]
    fn unrecognized_characters_pass_through() {
        let registry = Registry::with_builtins();
        let output = highlighter::highlight(&registry, "@ #", &options(ColorMode::Inline)).unwrap();

        assert_eq!(output, "@ #");
    }

    #[test]
    fn identity_render_of_builtin_tokens() {
        let registry = Registry::with_builtins();
        let definition = registry.resolve("typescript");
        let code = "export function add(a: number, b: number): number {\n    return a + b; // sum\n}\n";

        let tokens = tokenize(code, &definition).unwrap();
        assert_eq!(render(&Identity, &tokens), code);
    }

    #[test]
    fn full_page() {
        let registry = Registry::with_builtins();
        let markup = highlighter::highlight(&registry, "let x;", &options(ColorMode::Inline)).unwrap();
        let page = output::page("x.js", &markup).unwrap();

        assert!(page.contains("<title>x.js</title>"));
        assert!(page.contains(&format!("<pre><code>{}</code></pre>", markup)));
    }
}
