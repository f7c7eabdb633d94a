//! Operators, including the compounds `==`, `!=`, `<=`, `<>` and `>=`.
use tracing::debug;

use crate::team::token::cursor::Cursor;
use crate::team::token::lexer::LexError;
use crate::team::token::tokens::{Token, TokenKind};
use crate::team::types::Location;

/// Scans one of `+ - = * < > !` and, where it forms a compound, the character after it.
///
/// A bare `!` is not an operator and yields an error.
#[must_use]
pub fn scan_operator(cursor: &mut Cursor, start: Location) -> Token {
    let first = cursor.advance();
    let second = match first {
        '=' | '>' => cursor.eat('=').then_some('='),
        '!' => {
            if !cursor.eat('=') {
                debug!(%start, "bang without '='");
                return LexError::BareBang.into_token(start);
            }
            Some('=')
        }
        '<' => {
            if cursor.eat('=') {
                Some('=')
            } else if cursor.eat('>') {
                Some('>')
            } else {
                None
            }
        }
        _ => None,
    };

    let mut op = String::from(first);
    op.extend(second);
    Token::new(TokenKind::Operator, op, start)
}
