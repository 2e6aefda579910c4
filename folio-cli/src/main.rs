// Command-line interface for folio
//
// This binary renders the Markdown pages and news digests of a folio site into HTML
// fragments, either one file at a time or as a whole content catalog.
//
// Converting:
//
// The source format is auto-detected from the file name (`news-*` files are news digests,
// `.md` files are Markdown) and can be overridden with an explicit --from flag.
// Usage:
//  folio <input> [--from <format>] [--output <file>]          - Render a single file (default)
//  folio convert <input> [--from <format>] [--output <file>]  - Same as above (explicit)
//  folio catalog [--root <dir>] [--mode <m>] [--lang <l>]      - Load the content catalog
//  folio --list-formats                                        - List available formats
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix. `list-wrap` and `layout` adjust the loaded
// configuration; anything else is handed to the format as a render option.
// Example:
//  folio convert about.md --extra-list-wrap every-run

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use folio_config::{FolioConfig, Loader};
use folio_render::formats::{ListWrap, RecordLayout};
use folio_render::{ContentCatalog, FsStore};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const SUBCOMMANDS: &[&str] = &["convert", "catalog", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            let has_value = args.get(i + 1).is_some_and(|next| !next.starts_with('-'));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("folio")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render folio site content into HTML fragments")
        .long_about(
            "folio renders the Markdown pages and news digests of a personal site\n\
            into HTML fragments ready to be placed into a page.\n\n\
            Commands:\n  \
            - convert: Render a single file (default command)\n  \
            - catalog: Load every page of a content root and print it as JSON\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            folio about.md                              # Render Markdown to stdout\n  \
            folio news-work-de.md                       # Render a news digest\n  \
            folio about.md --extra-list-wrap every-run  # Wrap every bullet run\n  \
            folio catalog --root site                   # Whole catalog as JSON",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a folio.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Enable debug logging")
                .action(ArgAction::SetTrue)
                .conflicts_with("quiet")
                .global(true),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Only log warnings and errors")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Render a single file (default command)")
                .long_about(
                    "Render a Markdown page or a news digest into an HTML fragment.\n\n\
                    Supported formats:\n  \
                    - markdown: Markdown subset (.md, .markdown)\n  \
                    - news:     Date/title news digest (news-*, .news)\n\n\
                    The source format is auto-detected from the file name.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    folio convert about.md                   # Render to stdout\n  \
                    folio convert notes.txt --from markdown  # Explicit format\n  \
                    folio about.md -o about.html             # 'convert' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from the file name if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("catalog")
                .about("Load the content catalog of a site")
                .long_about(
                    "Load every content page, news digest and imprint below a content root.\n\n\
                    Missing or unreadable files are replaced by the configured fallback\n\
                    message, so the catalog is always complete.\n\n\
                    With both --mode and --lang the fragments of that single page are\n\
                    printed instead of the JSON catalog.\n\n\
                    Examples:\n  \
                    folio catalog --root site                     # Whole catalog as JSON\n  \
                    folio catalog --root site --lang en           # English pages only\n  \
                    folio catalog --root site --mode work --lang de",
                )
                .arg(
                    Arg::new("root")
                        .long("root")
                        .value_name("DIR")
                        .help("Content root (defaults to content.root from the configuration)")
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("mode")
                        .long("mode")
                        .help("Restrict the catalog to one site mode")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("lang")
                        .long("lang")
                        .help("Restrict the catalog to one language")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    // If no subcommand is provided, retry with "convert" injected
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && !SUBCOMMANDS.contains(&cleaned_args[1].as_str())
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    init_logging(matches.get_flag("verbose"), matches.get_flag("quiet"));

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&config);
        return;
    }

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            handle_convert_command(sub_matches, &extra_params, &config);
        }
        Some(("catalog", sub_matches)) => {
            handle_catalog_command(sub_matches, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Install the tracing subscriber. `RUST_LOG` wins over the command-line flags.
fn init_logging(verbose: bool, quiet: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if quiet {
        EnvFilter::new("warn")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // stdout carries rendered output
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Handle the convert command
fn handle_convert_command(
    sub_matches: &ArgMatches,
    extra_params: &HashMap<String, String>,
    config: &FolioConfig,
) {
    let input = sub_matches
        .get_one::<String>("input")
        .expect("input is required");
    let registry = config.registry();

    let from = match sub_matches.get_one::<String>("from") {
        Some(from) => from.to_string(),
        None => match registry.detect_format_from_filename(input) {
            Some(detected) => detected,
            None => {
                eprintln!("Error: Could not detect format from filename '{input}'");
                eprintln!("Please specify --from explicitly");
                std::process::exit(1);
            }
        },
    };
    debug!(input = %input, format = %from, "converting");

    if let Err(e) = registry.get(&from) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let html = registry
        .render_with_options(&source, &from, extra_params)
        .unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        });

    write_output(sub_matches.get_one::<String>("output"), &html);
}

/// Handle the catalog command
fn handle_catalog_command(sub_matches: &ArgMatches, config: &FolioConfig) {
    let root = sub_matches
        .get_one::<String>("root")
        .map(PathBuf::from)
        .unwrap_or_else(|| config.content.root.clone());
    let mode = sub_matches.get_one::<String>("mode");
    let lang = sub_matches.get_one::<String>("lang");

    let modes = restrict(&config.content.modes, mode);
    let languages = restrict(&config.content.languages, lang);

    info!(root = %root.display(), "loading content catalog");
    let loader = config.content_loader(FsStore::new(root));
    let catalog = loader.load_catalog(&modes, &languages);

    let rendered = match (mode, lang) {
        (Some(mode), Some(lang)) => render_page(&catalog, mode, lang),
        _ => serde_json::to_string_pretty(&catalog).unwrap_or_else(|e| {
            eprintln!("Error: could not serialize catalog: {e}");
            std::process::exit(1);
        }) + "\n",
    };

    write_output(sub_matches.get_one::<String>("output"), &rendered);
}

/// Handle the list-formats command
fn handle_list_formats_command(config: &FolioConfig) {
    println!("Available formats:\n");
    let registry = config.registry();
    for name in registry.list_formats() {
        match registry.get(&name) {
            Ok(format) => println!("  {:<10} {}", name, format.description()),
            Err(_) => println!("  {name}"),
        }
    }
}

fn write_output(path: Option<&String>, text: &str) {
    match path {
        Some(path) => {
            fs::write(path, text).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{text}"),
    }
}

/// Narrow a configured list to a single requested entry, which need not be configured.
fn restrict(configured: &[String], requested: Option<&String>) -> Vec<String> {
    match requested {
        Some(one) => vec![one.clone()],
        None => configured.to_vec(),
    }
}

/// The fragments of one `(mode, lang)` page, each introduced by an HTML comment.
fn render_page(catalog: &ContentCatalog, mode: &str, lang: &str) -> String {
    let sections = [
        ("content", catalog.content(mode, lang)),
        ("news", catalog.news(mode, lang)),
        ("imprint", catalog.imprint(lang)),
    ];

    let mut page = String::new();
    for (name, html) in sections {
        page.push_str(&format!("<!-- {name} -->\n"));
        page.push_str(html.unwrap_or_default());
        if !page.ends_with('\n') {
            page.push('\n');
        }
    }
    page
}

fn load_cli_config(explicit_path: Option<&str>) -> FolioConfig {
    let loader = Loader::new().with_optional_file("folio.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_config_overrides(config: &mut FolioConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extra_params, &["list-wrap", "list_wrap"]) {
        config.markdown.list_wrap = raw.parse::<ListWrap>().unwrap_or_else(|e| {
            eprintln!("Invalid value for --extra-list-wrap: {e}");
            std::process::exit(1);
        });
    }

    if let Some(raw) = take_override(extra_params, &["layout", "news-layout"]) {
        config.news.layout = raw.parse::<RecordLayout>().unwrap_or_else(|e| {
            eprintln!("Invalid value for --extra-layout: {e}");
            std::process::exit(1);
        });
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}
