//! Line comments (`// ...`), nestable block comments (`/* ... */`) and the
//! division operator they share a leading `/` with.
use tracing::debug;

use crate::team::token::cursor::Cursor;
use crate::team::token::lexer::LexError;
use crate::team::token::scan::Slash;
use crate::team::token::tokens::{Token, TokenKind};
use crate::team::types::Location;

/// Scans input starting with `/`.
///
/// Comments never produce a token. The dispatcher is expected to retry after
/// [`Slash::Comment`] so that runs of comments cost no stack depth.
#[must_use]
pub fn scan_slash(cursor: &mut Cursor, start: Location) -> Slash {
    cursor.advance();

    if cursor.eat('/') {
        cursor.eat_while(|c| c != '\n');
        cursor.eat('\n');
        Slash::Comment
    } else if cursor.eat('*') {
        if skip_block_comment(cursor) {
            Slash::Comment
        } else {
            debug!(%start, "block comment runs into end of input");
            Slash::Token(LexError::UnterminatedComment.into_token(start))
        }
    } else {
        Slash::Token(Token::new(TokenKind::Operator, "/", start))
    }
}

/// Skips the body of a block comment whose opener was already consumed.
///
/// Returns whether every opener, nested ones included, found its closer.
/// A run of `*` before `/` counts as a single closer.
fn skip_block_comment(cursor: &mut Cursor) -> bool {
    let mut depth = 1usize;
    while !cursor.at_end() {
        match cursor.advance() {
            '/' if cursor.eat('*') => depth = depth.saturating_add(1),
            '*' => {
                cursor.eat_while(|c| c == '*');
                if cursor.eat('/') {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return true;
                    }
                }
            }
            _ => {}
        }
    }
    false
}
