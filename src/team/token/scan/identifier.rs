//! Team-prefixed identifiers such as `134Alamin`, `104_var` or `199x2`.
//!
//! Identifiers and integers both start with a `1`, and the difference only
//! shows *after* the prefix. This is the one scanner that backtracks.
use tracing::trace;

use crate::team::token::cursor::{Cursor, is_letter_digit_or_underscore, is_letter_or_underscore};
use crate::team::token::scan::Attempt;
use crate::team::token::tokens::{Token, TokenKind};
use crate::team::types::Location;

/// Every identifier opens with one of these.
pub const TEAM_PREFIXES: [&str; 3] = ["134", "104", "199"];

/// Tries to scan an identifier at the cursor.
///
/// Without a team prefix followed by a letter or underscore, the cursor is
/// left exactly where it was and [`Attempt::NotApplicable`] is returned, so
/// the input can be rescanned as a number.
#[must_use]
pub fn try_scan_identifier(cursor: &mut Cursor, start: Location) -> Attempt {
    let Some(prefix) = TEAM_PREFIXES.iter().find(|prefix| {
        prefix
            .chars()
            .enumerate()
            .all(|(k, c)| cursor.peek_at(k) == c)
    }) else {
        return Attempt::NotApplicable;
    };

    let saved = cursor.position();
    for _ in prefix.chars() {
        cursor.advance();
    }

    if !is_letter_or_underscore(cursor.peek()) {
        trace!(%start, %prefix, "team prefix without a body, rescanning as number");
        cursor.restore(saved);
        return Attempt::NotApplicable;
    }

    cursor.eat_while(is_letter_digit_or_underscore);
    Attempt::Matched(Token::new(
        TokenKind::Identifier,
        cursor.text_since(saved),
        start,
    ))
}
