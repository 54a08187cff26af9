use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use golex_common::config::{self, ConfigError, GolexConfig, OutputFormat};
use golex_common::Diagnostic;
use golex_lexer::lexer::{Lexer, Token};

/// golex tokenizer.
///
/// Reads a source file (or standard input) and prints its token stream.
#[derive(Parser)]
#[command(
    name = "golex",
    version,
    about,
    long_about = "golex tokenizer.\n\nReads a source file, or standard input when no file (or '-') is given,\nand prints one token per line.\n\nExamples:\n  golex main.go                 Print the token stream\n  golex main.go --format json   Print tokens as a JSON array\n  golex main.go --check         Report illegal tokens only\n  cat main.go | golex           Tokenize standard input"
)]
struct Cli {
    /// Input source file ('-' or omitted for stdin).
    input: Option<PathBuf>,

    /// Output format: text or json (default from Golex.toml, else text).
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Report diagnostics without printing tokens.
    #[arg(long)]
    check: bool,

    /// Omit the trailing end-of-input token.
    #[arg(long = "no-eof")]
    no_eof: bool,

    /// Suppress warning output.
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long)]
    verbose: bool,

    /// Path to a Golex.toml (default: searched upward from the input).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("could not read '{path}': {source}")]
    Read { path: String, source: io::Error },
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("failed to initialize logging: {0}")]
    Logging(String),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
    #[error("failed to serialize tokens: {0}")]
    Json(#[from] serde_json::Error),
}

/// Outcome of a successful run.
#[derive(Debug, PartialEq, Eq)]
enum Status {
    Clean,
    IllegalTokens,
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(Status::Clean) => {}
        Ok(Status::IllegalTokens) => process::exit(1),
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<Status, CliError> {
    let input = cli.input.as_deref().filter(|p| *p != Path::new("-"));

    let config = load_config(cli.config.as_deref(), input)?;
    init_logging(cli.verbose, &config.log.level)?;
    if let Some(ref root) = config.root_dir {
        debug!(root = %root.display(), "loaded Golex.toml");
    }

    let source = read_source(input)?;
    info!(bytes = source.len(), "read source");

    let (tokens, diags) = Lexer::new(&source).tokenize();

    for diag in diags.diagnostics() {
        if diag.is_error() || !cli.quiet {
            print_diagnostic(diag);
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.check {
        if diags.is_empty() {
            writeln!(out, "No illegal tokens.")?;
        } else {
            let errors = diags.error_count();
            let warnings = diags.diagnostics().len() - errors;
            writeln!(
                out,
                "{} illegal token(s), {} warning(s) found.",
                errors, warnings
            )?;
        }
    } else {
        let format = cli.format.unwrap_or(config.output.format);
        let show_eof = config.output.show_eof && !cli.no_eof;
        let shown: Vec<&Token> = tokens
            .iter()
            .filter(|t| show_eof || !t.is_eof())
            .collect();
        write_tokens(&mut out, &shown, format)?;
    }
    out.flush()?;

    if config.check.deny_illegal && diags.has_errors() {
        Ok(Status::IllegalTokens)
    } else {
        Ok(Status::Clean)
    }
}

/// Use the explicit `--config` path, else search upward from the input's
/// directory (or the working directory for stdin). No file means defaults.
fn load_config(explicit: Option<&Path>, input: Option<&Path>) -> Result<GolexConfig, CliError> {
    if let Some(path) = explicit {
        return Ok(config::load_config(path)?);
    }

    let start_dir = match input {
        Some(path) => fs::canonicalize(path)
            .ok()
            .and_then(|p| p.parent().map(Path::to_path_buf)),
        None => std::env::current_dir().ok(),
    };
    let Some(start_dir) = start_dir else {
        return Ok(GolexConfig::default());
    };

    match config::find_and_load_config(&start_dir) {
        Ok(config) => Ok(config),
        Err(ConfigError::NotFound(_)) => Ok(GolexConfig::default()),
        Err(e) => Err(e.into()),
    }
}

fn init_logging(verbose: bool, configured: &str) -> Result<(), CliError> {
    let filter = match std::env::var("RUST_LOG") {
        Ok(directive) if !directive.is_empty() => EnvFilter::try_new(directive),
        _ if verbose => EnvFilter::try_new("debug"),
        _ => EnvFilter::try_new(configured),
    }
    .map_err(|e| CliError::Logging(e.to_string()))?;

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}

fn read_source(input: Option<&Path>) -> Result<String, CliError> {
    match input {
        Some(path) => fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.display().to_string(),
            source,
        }),
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .map_err(|source| CliError::Read {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            Ok(source)
        }
    }
}

fn write_tokens(out: &mut impl Write, tokens: &[&Token], format: OutputFormat) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => {
            for token in tokens {
                let kind = format!("{:?}", token.kind);
                writeln!(out, "{:<16} {:?}", kind, token.literal)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, tokens)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn print_diagnostic(diag: &Diagnostic) {
    eprintln!("{}", diag);
}
