//! This is the Lexing or Tokenization module, split into four parts.
//!
//! - [tokens] specifies the data types making up the tokens of the team language.
//! - [cursor] tracks the scan position and classifies single characters.
//! - [scan] holds one sub-scanner per lexical category.
//! - [lexer] dispatches to the sub-scanners and defines the errors that can
//!   be reported in-band during this phase.
pub mod cursor;
pub mod lexer;
pub mod scan;
pub mod tokens;
