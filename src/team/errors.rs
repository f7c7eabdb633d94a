//! Errors that can occur during the lifetime of the tool.
//!
//! Malformed source code is *not* among them: the lexer reports it in-band
//! as `ERROR` tokens. These are the failures around it, like unreadable
//! input or a strict run that saw such tokens.
use std::io::Error as IOError;
use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;

/// An error that occurred while running the lexer as a tool.
///
/// To report exit codes as specified by the
/// [`<sysexits.h>`](https://man.freebsd.org/cgi/man.cgi?query=sysexits&apropos=0&sektion=0&manpath=FreeBSD+4.3-RELEASE&format=html)
/// header, a `From<EngineError> for ExitCode` implementation is provided.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EngineError {
    /// The source file could not be read.
    #[error("Error reading source file '{}': {source}", path.display())]
    FileError {
        /// File that was requested.
        path: PathBuf,
        /// Underlying cause.
        #[source]
        source: IOError,
    },
    /// Reading source code from the console failed.
    #[error("Error reading source from the console: {0}")]
    ConsoleError(#[from] IOError),
    /// Strict mode only: the token stream contained `ERROR` tokens.
    #[error("Lexing produced {0} error token(s)")]
    LexingErrors(usize),
}

impl EngineError {
    /// Wraps an I/O error that happened while reading `path`.
    #[must_use]
    #[inline]
    pub fn file(path: impl Into<PathBuf>, source: IOError) -> Self {
        EngineError::FileError {
            path: path.into(),
            source,
        }
    }

    /// The process exit code this error is reported with.
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> u8 {
        match *self {
            // Technically, 66 only specifies missing or unreadable files;
            // console failures are presented as 74, EX_IOERR.
            EngineError::FileError { .. } => 66, // EX_NOINPUT
            EngineError::ConsoleError(_) => 74,  // EX_IOERR
            EngineError::LexingErrors(_) => 65,  // EX_DATAERR
        }
    }
}

impl From<EngineError> for ExitCode {
    fn from(value: EngineError) -> Self {
        ExitCode::from(value.exit_code())
    }
}
