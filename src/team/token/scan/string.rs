//! `$`-delimited string literals.
//!
//! Strings never span a line. The two-character sequence `\n` is forbidden
//! inside them; any other backslash is plain content.
use tracing::debug;

use crate::team::token::cursor::Cursor;
use crate::team::token::lexer::LexError;
use crate::team::token::tokens::{Token, TokenKind};
use crate::team::types::Location;

/// The delimiter on both ends of a string.
const DELIMITER: char = '$';

/// Scans a string whose opening `$` is the current character.
///
/// The token's lexeme is the content without delimiters. On error the cursor
/// is moved past the next `$` on the same line, or onto the next newline.
#[must_use]
pub fn scan_string(cursor: &mut Cursor, start: Location) -> Token {
    cursor.advance();

    let mut content = String::new();
    while !cursor.at_end() {
        match cursor.advance() {
            DELIMITER => return Token::new(TokenKind::String, content, start),
            '\\' if cursor.eat('n') => {
                debug!(%start, "string contains a forbidden escape");
                skip_rest_of_string(cursor);
                return LexError::ForbiddenEscape.into_token(start);
            }
            '\n' => {
                debug!(%start, "string interrupted by a newline");
                skip_rest_of_string(cursor);
                return LexError::UnterminatedString.into_token(start);
            }
            c => content.push(c),
        }
    }
    LexError::UnterminatedString.into_token(start)
}

/// Recovery: skip to the next delimiter, consuming it, but never past a newline.
fn skip_rest_of_string(cursor: &mut Cursor) {
    cursor.eat_while(|c| c != DELIMITER && c != '\n');
    cursor.eat(DELIMITER);
}

#[cfg(test)]
mod test {
    use super::scan_string;
    use crate::team::token::cursor::Cursor;
    use crate::team::types::Location;
    use pretty_assertions::assert_eq;

    /// Scans `source` and returns the rendered token plus the next character.
    fn scan(source: &str) -> (String, char) {
        let mut cursor = Cursor::new(source);
        let token = scan_string(&mut cursor, Location::START);
        (token.to_string(), cursor.peek())
    }

    #[test]
    fn plain_strings() {
        assert_eq!(scan("$hello world$+"), ("STRING('hello world')@1:1".to_owned(), '+'));
        assert_eq!(scan("$$"), ("STRING('')@1:1".to_owned(), '\0'));
        assert_eq!(scan("$if 134x 1.2$"), ("STRING('if 134x 1.2')@1:1".to_owned(), '\0'));
    }

    #[test]
    fn other_backslashes_are_content() {
        assert_eq!(scan(r"$a\tb$"), (r"STRING('a\tb')@1:1".to_owned(), '\0'));
        assert_eq!(scan(r"$a\$ x"), (r"STRING('a\')@1:1".to_owned(), ' '));
    }

    #[test]
    fn forbidden_escape_skips_past_the_closing_delimiter() {
        assert_eq!(
            scan(r"$bad\nrest$ 5"),
            (r"ERROR('string contains forbidden \n')@1:1".to_owned(), ' ')
        );
        assert_eq!(
            scan("$bad\\nrest\n5"),
            (r"ERROR('string contains forbidden \n')@1:1".to_owned(), '\n')
        );
    }

    #[test]
    fn newline_terminates_and_recovers_on_the_next_line() {
        // Recovery looks for the next `$`, but stops at a second newline.
        assert_eq!(scan("$abc\ndef$ 1"), ("ERROR('unterminated string')@1:1".to_owned(), ' '));
        assert_eq!(scan("$abc\ndef\n$"), ("ERROR('unterminated string')@1:1".to_owned(), '\n'));
    }

    #[test]
    fn end_of_input_inside_string() {
        assert_eq!(scan("$abc"), ("ERROR('unterminated string')@1:1".to_owned(), '\0'));
        assert_eq!(scan("$"), ("ERROR('unterminated string')@1:1".to_owned(), '\0'));
    }
}
