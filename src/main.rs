use std::path::Path;

use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing::{debug, info, Level};

use highlighter::error::{concise_loading_error, full_highlight_error, HighlightError};
use highlighter::language::{DefinitionSource, Registry};
use highlighter::loading;
use highlighter::options::{ColorMode, Colors, Options};
use highlighter::output;
use highlighter::rendering::{self, Terminal};
use highlighter::tokenizing;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let language = Arg::new("language")
        .short('l')
        .long("language")
        .default_value("javascript")
        .help("Name of the language to highlight the code as. Case is ignored.");

    let definition = Arg::new("definition")
        .long("definition")
        .value_name("TOML")
        .help("A file of patterns defining a language; it is registered under the --language name, which must not already be taken.");

    let matches = Command::new("highlighter")
        .version(VERSION)
        .propagate_version(true)
        .about("Syntax highlighting of source code into HTML.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log what the highlighter is doing to standard error."),
        )
        .subcommand(
            Command::new("highlight")
                .about("Highlight the given source file")
                .arg(language.clone())
                .arg(definition.clone())
                .arg(
                    Arg::new("mode")
                        .long("mode")
                        .value_parser(["inline", "class"])
                        .default_value("inline")
                        .help("Colour spans with inline style attributes or with utility classes."),
                )
                .arg(
                    Arg::new("colors")
                        .long("colors")
                        .value_name("TOML")
                        .help("A file of colours per category, overriding the defaults."),
                )
                .arg(
                    Arg::new("page")
                        .long("page")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("terminal")
                        .help("Emit a complete HTML document rather than a fragment."),
                )
                .arg(
                    Arg::new("terminal")
                        .long("terminal")
                        .action(ArgAction::SetTrue)
                        .help("Emit ANSI escape codes for a terminal instead of HTML."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the code to highlight, or - for standard input."),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("List the tokens the given source file is split into")
                .arg(language)
                .arg(definition)
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the code to tokenize, or - for standard input."),
                ),
        )
        .subcommand(Command::new("languages").about("List the languages that can be highlighted"))
        .get_matches();

    let level = if matches.get_flag("verbose") {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let registry = Registry::with_builtins();

    match matches.subcommand() {
        Some(("highlight", submatches)) => highlight(&registry, submatches),
        Some(("tokens", submatches)) => tokens(&registry, submatches),
        Some(("languages", _)) => {
            for name in registry.languages() {
                println!("{}", name);
            }
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: highlighter [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn highlight(registry: &Registry, submatches: &ArgMatches) {
    let filename = filename(submatches);
    let language = language(submatches);
    register_definition(registry, submatches, &language);

    let colors = match submatches.get_one::<String>("colors") {
        Some(file) => {
            let path = Path::new(file);
            let content = read(path);
            Colors::from_toml(&content).unwrap_or_else(|error| fail(&error, path, &content))
        }
        None => Colors::default(),
    };

    let mode = submatches
        .get_one::<String>("mode")
        .and_then(|mode| {
            mode.parse::<ColorMode>()
                .ok()
        })
        .unwrap_or_default();

    let options = Options {
        language,
        mode,
        colors,
    };

    let content = read(filename);
    info!("Highlighting {} as {}", filename.display(), options.language);

    let result = if submatches.get_flag("terminal") {
        let definition = registry.resolve(&options.language);
        tokenizing::tokenize(&content, &definition).map(|tokens| {
            let terminal = Terminal {
                colors: options.colors,
            };
            rendering::render(&terminal, &tokens)
        })
    } else {
        highlighter::highlight(registry, &content, &options)
    };

    let markup = result.unwrap_or_else(|error| fail(&error, filename, &content));

    if submatches.get_flag("page") {
        let title = filename
            .file_name()
            .map(|name| {
                name.to_string_lossy()
                    .to_string()
            })
            .unwrap_or_else(|| "stdin".to_string());
        let page = output::page(&title, &markup).unwrap_or_else(|error| fail(&error, filename, &content));
        print!("{}", page);
    } else {
        print!("{}", markup);
        if submatches.get_flag("terminal") && !markup.ends_with('\n') {
            println!();
        }
    }
}

fn tokens(registry: &Registry, submatches: &ArgMatches) {
    let filename = filename(submatches);
    let language = language(submatches);
    register_definition(registry, submatches, &language);

    let content = read(filename);
    let definition = registry.resolve(&language);

    let tokens =
        tokenizing::tokenize(&content, &definition).unwrap_or_else(|error| fail(&error, filename, &content));

    debug!("Found {} tokens", tokens.len());
    for token in tokens {
        println!(
            "{:>6} {:<10} {:?}",
            token.offset,
            token.category.name(),
            token.text
        );
    }
}

fn filename(submatches: &ArgMatches) -> &Path {
    let filename = submatches
        .get_one::<String>("filename")
        .map(String::as_str)
        .unwrap_or("-");
    Path::new(filename)
}

fn language(submatches: &ArgMatches) -> String {
    submatches
        .get_one::<String>("language")
        .cloned()
        .unwrap_or_else(|| "javascript".to_string())
}

/// Load a definition document, if one was given, and register it ahead of
/// resolving. Registration appends and the first registration of a name
/// wins, so the name must not already be taken.
fn register_definition(registry: &Registry, submatches: &ArgMatches, language: &str) {
    if let Some(file) = submatches.get_one::<String>("definition") {
        let path = Path::new(file);
        check_definition_name(registry, language).unwrap_or_else(|error| fail(&error, path, ""));
        let content = read(path);
        let definition = DefinitionSource::from_toml(&content)
            .and_then(|source| source.compile())
            .unwrap_or_else(|error| fail(&error, path, &content));
        registry.register(language, definition);
    }
}

fn check_definition_name(registry: &Registry, language: &str) -> Result<(), HighlightError> {
    if registry.contains(language) {
        return Err(HighlightError::Configuration {
            problem: format!(
                "a language named \"{}\" is already registered and would be used instead of this definition; choose another name with --language",
                language
            ),
        });
    }
    Ok(())
}

fn read(filename: &Path) -> String {
    match loading::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", concise_loading_error(&error));
            std::process::exit(1);
        }
    }
}

fn fail(error: &HighlightError, filename: &Path, source: &str) -> ! {
    eprintln!("{}", full_highlight_error(error, filename, source));
    std::process::exit(1);
}
