//! Command-line driver: reads team-language source from a file or the
//! console and prints its token stream, one `KIND('lexeme')@line:col` per line.
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::unwrap_used,
)]
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::{ExitCode, Termination};

use clap::{Parser, Subcommand};
use tracing::info;

use teamlex::{EngineError, LexerConfig, PunctuationPolicy, tokenize_with};

/// The line that ends console input.
const END_OF_CONSOLE_INPUT: &str = "END";

/// Installs a stderr log subscriber, but only when `RUST_LOG` asks for one.
///
/// Enable with e.g. `RUST_LOG=teamlex=debug` or `RUST_LOG=teamlex=trace`.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

/// Load a whole source file.
fn read_file(path: PathBuf) -> Result<String, EngineError> {
    info!(path = %path.display(), "reading source file");
    fs::read_to_string(&path).map_err(|err| EngineError::file(path, err))
}

/// Read source lines from the console until a line reading `END` or end of input.
fn read_console() -> Result<String, EngineError> {
    eprintln!("Enter source code (type '{END_OF_CONSOLE_INPUT}' on a separate line to finish):");

    let mut source = String::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        if line == END_OF_CONSOLE_INPUT {
            break;
        }
        source.push_str(&line);
        source.push('\n');
    }
    Ok(source)
}

/// Tokenize `source` and print the stream.
///
/// In strict mode, any `ERROR` token turns into a failing exit code after
/// the whole stream has been printed.
fn run(source: &str, config: LexerConfig, strict: bool) -> Result<(), EngineError> {
    let tokens = tokenize_with(source, config);
    let errors = tokens.iter().filter(|token| token.is_error()).count();

    let mut out = io::stdout().lock();
    writeln!(out, "=== TOKENS ===")?;
    for token in &tokens {
        writeln!(out, "{token}")?;
    }
    out.flush()?;

    if strict && errors > 0 {
        return Err(EngineError::LexingErrors(errors));
    }
    Ok(())
}

/// Isomorphic to `Result<T, EngineError>`,
/// this allows for overriding the [Termination]
/// trait impl and report custom exit codes instead.
///
/// As this is only supposed to be used on the very
/// outer shell, T defaults to `()`.
#[derive(Debug)]
enum EngineResult<T = ()> {
    /// Ok variant.
    Ok(T),
    /// Error variant
    Err(EngineError),
}

impl Termination for EngineResult {
    fn report(self) -> ExitCode {
        if let EngineResult::Err(err) = self {
            eprintln!("{err}");
            err.into()
        } else {
            ExitCode::SUCCESS
        }
    }
}

impl<T, E> From<Result<T, E>> for EngineResult<T>
where
    EngineError: From<E>,
{
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(value) => EngineResult::Ok(value),
            Err(err) => EngineResult::Err(err.into()),
        }
    }
}

/// teamlex tokenizes source code of the team-prefix teaching language and
/// prints one token per line. Malformed input is reported as ERROR tokens
/// without stopping the scan.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct LexArgs {
    /// Subcommands; without one, [`source_file`] is tokenized, or the
    /// console is read if no file is given either.
    #[command(subcommand)]
    command: Option<LexCommands>,

    /// Source file for the program
    source_file: Option<PathBuf>,

    /// Silently skip `( ) { } [ ] , ; :` instead of reporting each as an error.
    #[arg(long, global = true, env = "TEAMLEX_SKIP_PUNCTUATION")]
    skip_punctuation: bool,

    /// Exit with status 65 if any ERROR token was produced.
    #[arg(long, global = true)]
    strict: bool,
}

/// Available commands in teamlex
#[derive(Subcommand, Debug)]
enum LexCommands {
    /// tokenize the given file and print its tokens.
    Tokenize {
        source_file: PathBuf,
    },
    /// read source from the console until a line reading `END`, then tokenize it.
    #[command(visible_alias = "c")]
    Console,
}

fn main() -> EngineResult {
    init_tracing();

    let LexArgs {
        command,
        source_file,
        skip_punctuation,
        strict,
    } = LexArgs::parse();

    let config = LexerConfig::default().with_punctuation(if skip_punctuation {
        PunctuationPolicy::Skip
    } else {
        PunctuationPolicy::Error
    });

    let source = match (command, source_file) {
        (Some(LexCommands::Tokenize { source_file }), _)
        | (None, Some(source_file)) => read_file(source_file),

        (Some(LexCommands::Console), _)
        | (None, None) => read_console(),
    };

    source
        .and_then(|source| run(&source, config, strict))
        .into()
}
