//! glint - heuristic syntax highlighter for the terminal and the web

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use glint::config::Config;
use glint::error::Result;
use glint::output::{
    Appearance, FormatKind, HtmlOutputFormat, TerminalOutputFormat, Theme, TokenListOutputFormat,
};
use glint::syntax::{GrammarRegistry, Highlighter, Language};

#[derive(Parser)]
#[command(name = "glint")]
#[command(about = "Highlight source code for the terminal or the web", long_about = None)]
#[command(version)]
struct Cli {
    /// File to highlight; standard input when omitted
    file: Option<PathBuf>,

    /// Language name, overriding detection by extension
    #[arg(short, long)]
    language: Option<String>,

    /// Colour theme (Xcode, "VS Code")
    #[arg(short, long)]
    theme: Option<String>,

    /// Colour variant: light or dark
    #[arg(short, long)]
    appearance: Option<String>,

    /// Output format: terminal, html or tokens
    #[arg(short, long)]
    format: Option<String>,

    /// Configuration file instead of ~/.glint.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// List supported languages and exit
    #[arg(long)]
    list_languages: bool,

    /// Log more (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("glint={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    debug!("glint v{} starting", env!("CARGO_PKG_VERSION"));

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };

    let mut registry = GrammarRegistry::new();
    config.apply_extensions(&mut registry)?;

    if cli.list_languages {
        print_languages(&registry)?;
        return Ok(());
    }

    let language = select_language(&cli, &config, &registry)?;
    let grammar = registry.grammar(language)?;
    info!(language = %language, "selected grammar");

    let source = read_input(cli.file.as_ref())?;
    let highlighter = Highlighter::new(grammar);

    let format = match &cli.format {
        Some(name) => name.parse::<FormatKind>()?,
        None => config.format,
    };

    let rendered = match format {
        FormatKind::Terminal => {
            let theme = Theme::named(cli.theme.as_deref().unwrap_or(&config.theme))?;
            let appearance = match &cli.appearance {
                Some(name) => name.parse::<Appearance>()?,
                None => config.appearance,
            };
            highlighter.render(&source, &TerminalOutputFormat::new(theme, appearance))
        }
        FormatKind::Html => highlighter.render(&source, &HtmlOutputFormat::default()),
        FormatKind::Tokens => highlighter.render(&source, &TokenListOutputFormat),
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;

    Ok(())
}

/// Explicit flag, then file extension, then configuration, then Rust
fn select_language(cli: &Cli, config: &Config, registry: &GrammarRegistry) -> Result<Language> {
    if let Some(name) = &cli.language {
        return GrammarRegistry::resolve(name);
    }

    if let Some(language) = cli
        .file
        .as_deref()
        .and_then(|path| registry.detect_language(path))
    {
        return Ok(language);
    }

    match &config.language {
        Some(name) => GrammarRegistry::resolve(name),
        None => Ok(Language::default()),
    }
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn print_languages(registry: &GrammarRegistry) -> Result<()> {
    let mut stdout = io::stdout().lock();
    for name in registry.list_languages() {
        let extensions = GrammarRegistry::resolve(name)
            .map(|language| registry.extensions_for(language).join(", "))?;
        writeln!(stdout, "{:<12} {}", name, extensions)?;
    }
    Ok(())
}
