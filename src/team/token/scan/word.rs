//! Letter runs: keywords, or errors for everything else.
//!
//! Names always carry a team prefix and are handled by the
//! [identifier scanner](super::identifier), so a bare word is either reserved or wrong.
use tracing::debug;

use crate::team::token::cursor::{Cursor, is_letter};
use crate::team::token::lexer::LexError;
use crate::team::token::tokens::{Keyword, Token, TokenKind};
use crate::team::types::Location;

/// Scans a maximal run of ASCII letters.
#[must_use]
pub fn scan_word(cursor: &mut Cursor, start: Location) -> Token {
    let begin = cursor.position();
    cursor.eat_while(is_letter);
    let word = cursor.text_since(begin);

    if Keyword::from_word(&word).is_some() {
        Token::new(TokenKind::Keyword, word, start)
    } else {
        debug!(%start, %word, "unknown word");
        LexError::UnknownWord(word).into_token(start)
    }
}
