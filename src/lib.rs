//! # teamlex - A lexer for the team-prefix teaching language
//!
//! The language is deliberately tiny: five keywords, identifiers that must open
//! with one of the team prefixes `134`, `104` or `199`, integers and floats with
//! scientific notation, `$`-delimited strings, a handful of arithmetic and
//! comparison operators, and both line and (nestable) block comments.
//!
//! The crate turns a complete source buffer into a finite sequence of
//! [`Tokens`](team::token::tokens::Token), each carrying its kind, its exact
//! lexeme and the 1-based line/column of its first character. Malformed input
//! never aborts scanning: it is reported in-band as `ERROR` tokens, and the
//! lexer resumes at a deterministic recovery point.
//!
//! ```rust
//! use teamlex::tokenize;
//!
//! let rendered = tokenize("if 134Alamin <> 3.5e2")
//!     .iter()
//!     .map(ToString::to_string)
//!     .collect::<Vec<_>>();
//! assert_eq!(rendered, [
//!     "KEYWORD('if')@1:1",
//!     "IDENTIFIER('134Alamin')@1:4",
//!     "OPERATOR('<>')@1:14",
//!     "NUMBER('3.5e2')@1:17",
//!     "EOF('<EOF>')@1:22",
//! ]);
//! ```
//!
//! ## Extensions
//!
//! - Unsupported punctuation can be skipped instead of reported, see
//!   [`LexerConfig`](team::config::LexerConfig).
//! - [`Lexer`](team::token::lexer::Lexer) is an [`Iterator`] that yields the
//!   terminal `EOF` token exactly once, so it can be collected directly.
#![deny(
    future_incompatible,
    keyword_idents,
    let_underscore,
    nonstandard_style,
    refining_impl_trait,
)]
#![deny(
    rust_2018_compatibility,
    rust_2021_compatibility,
)]
#![deny(
    clippy::all,
    clippy::pedantic,
)]
#![deny(
    clippy::allow_attributes_without_reason,
    clippy::arithmetic_side_effects,
    clippy::as_conversions,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::empty_structs_with_brackets,
    clippy::exhaustive_enums,
    clippy::exhaustive_structs,
    clippy::exit,
    clippy::get_unwrap,
    clippy::indexing_slicing,
    clippy::let_underscore_must_use,
    clippy::missing_docs_in_private_items,
    clippy::panic,
    clippy::redundant_type_annotations,
    clippy::str_to_string,
    clippy::string_slice,
    clippy::string_to_string,
    clippy::todo,
    clippy::try_err,
    clippy::unimplemented,
    clippy::unreachable,
    clippy::unwrap_in_result,
    clippy::unwrap_used,
)]
#![warn(unused)]
pub mod team;

pub use team::config::{LexerConfig, PunctuationPolicy};
pub use team::errors::EngineError;
pub use team::token::lexer::{LexError, Lexer, tokenize, tokenize_with};
pub use team::token::tokens::{Keyword, Token, TokenKind};
pub use team::types::Location;
