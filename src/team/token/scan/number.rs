//! Numeric literals: integers (`42`), floats (`3.14`, `.5`) and scientific
//! notation (`2.5e10`, `.5e+7`).
//!
//! A dot must always be followed by fraction digits, so `5.` and `10.e5` are
//! malformed, as is a second dot (`12..3`) or an exponent without digits.
//! Error lexemes quote the whole span that was consumed.
use tracing::debug;

use crate::team::token::cursor::{Cursor, Position, is_digit, is_letter};
use crate::team::token::lexer::LexError;
use crate::team::token::tokens::{Token, TokenKind};
use crate::team::types::Location;

/// Signs allowed right after an exponent marker.
const EXPONENT_SIGNS: [char; 2] = ['+', '-'];

/// Which parts of a number have been consumed so far.
#[derive(Copy, Clone, Debug, Default)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "these are four independent observations, not a state machine."
)]
struct Shape {
    /// Digits before the dot (or without any dot).
    int_digits: bool,
    /// A decimal point.
    dot: bool,
    /// At least one digit after the decimal point.
    fraction_digits: bool,
    /// An exponent marker with its digits.
    exponent: bool,
}

impl Shape {
    /// Classifies the complete span `lexeme` of a number with this shape.
    fn classify(self, lexeme: String, start: Location) -> Token {
        debug_assert!(self.int_digits || self.dot, "a number starts with a digit or a dot");
        if self.dot && !self.fraction_digits {
            LexError::MalformedFloat(lexeme).into_token(start)
        } else if self.dot || self.exponent {
            Token::new(TokenKind::Number, lexeme, start)
        } else {
            Token::new(TokenKind::Integer, lexeme, start)
        }
    }
}

/// Whether `c` opens an exponent.
fn is_exponent_marker(c: char) -> bool {
    matches!(c, 'e' | 'E')
}

/// Consumes an exponent marker, an optional sign and any digits after it.
fn eat_exponent(cursor: &mut Cursor) {
    cursor.advance();
    cursor.eat_any(&EXPONENT_SIGNS);
    cursor.eat_while(is_digit);
}

/// Scans a number starting at a digit or a dot.
#[must_use]
pub fn scan_number(cursor: &mut Cursor, start: Location) -> Token {
    let begin = cursor.position();
    let mut shape = Shape::default();

    if cursor.peek() == '.' {
        cursor.advance();
        shape.dot = true;
        if is_digit(cursor.peek()) {
            cursor.eat_while(is_digit);
            shape.fraction_digits = true;
        } else if is_exponent_marker(cursor.peek()) {
            eat_exponent(cursor);
            return bad_exponent(cursor, begin, start);
        } else {
            // A lone dot is an error of its own, not the start of a span.
            cursor.restore(begin);
            cursor.advance();
            debug!(%start, "bare dot");
            return LexError::BareDot.into_token(start);
        }
    } else if is_digit(cursor.peek()) {
        cursor.eat_while(is_digit);
        shape.int_digits = true;
        if cursor.eat('.') {
            shape.dot = true;
            if cursor.eat('.') {
                cursor.eat_while(is_digit);
                let span = cursor.text_since(begin);
                debug!(%start, %span, "number with two dots");
                return LexError::MalformedNumber(span).into_token(start);
            }
            shape.fraction_digits = cursor.eat_while(is_digit) > 0;
        }
    } else {
        let c = cursor.advance();
        debug!(%start, ?c, "unknown character");
        return LexError::UnknownCharacter(c).into_token(start);
    }

    if is_exponent_marker(cursor.peek()) {
        if shape.dot && !shape.fraction_digits {
            eat_exponent(cursor);
            let span = cursor.text_since(begin);
            debug!(%start, %span, "exponent after a dot without fraction");
            return LexError::MalformedFloat(span).into_token(start);
        }
        shape.exponent = true;
        cursor.advance();
        cursor.eat_any(&EXPONENT_SIGNS);
        if !is_digit(cursor.peek()) {
            // Take one offending letter along so `1ex` is reported as a whole.
            if is_letter(cursor.peek()) {
                cursor.advance();
            }
            return bad_exponent(cursor, begin, start);
        }
        cursor.eat_while(is_digit);
    }

    shape.classify(cursor.text_since(begin), start)
}

/// Reports everything consumed since `begin` as a bad exponent.
fn bad_exponent(cursor: &Cursor, begin: Position, start: Location) -> Token {
    let span = cursor.text_since(begin);
    debug!(%start, %span, "exponent without digits");
    LexError::BadExponent(span).into_token(start)
}

#[cfg(test)]
mod test {
    use super::scan_number;
    use crate::team::token::cursor::Cursor;
    use crate::team::types::Location;
    use pretty_assertions::assert_eq;

    /// Scans `source` and returns the rendered token plus the next character.
    fn scan(source: &str) -> (String, char) {
        let mut cursor = Cursor::new(source);
        let token = scan_number(&mut cursor, Location::START);
        (token.to_string(), cursor.peek())
    }

    #[test]
    fn integers() {
        assert_eq!(scan("42 "), ("INTEGER('42')@1:1".to_owned(), ' '));
        assert_eq!(scan("0"), ("INTEGER('0')@1:1".to_owned(), '\0'));
        assert_eq!(scan("134"), ("INTEGER('134')@1:1".to_owned(), '\0'));
        assert_eq!(scan("1999x"), ("INTEGER('1999')@1:1".to_owned(), 'x'));
    }

    #[test]
    fn floats() {
        assert_eq!(scan("3.14+"), ("NUMBER('3.14')@1:1".to_owned(), '+'));
        assert_eq!(scan(".5"), ("NUMBER('.5')@1:1".to_owned(), '\0'));
        assert_eq!(scan("2.5e10"), ("NUMBER('2.5e10')@1:1".to_owned(), '\0'));
        assert_eq!(scan(".5e+7"), ("NUMBER('.5e+7')@1:1".to_owned(), '\0'));
        assert_eq!(scan("12E-3;"), ("NUMBER('12E-3')@1:1".to_owned(), ';'));
        assert_eq!(scan("1.5.2"), ("NUMBER('1.5')@1:1".to_owned(), '.'));
    }

    #[test]
    fn dot_without_fraction() {
        assert_eq!(scan("5."), ("ERROR('malformed float: 5.')@1:1".to_owned(), '\0'));
        assert_eq!(scan("5.x"), ("ERROR('malformed float: 5.')@1:1".to_owned(), 'x'));
        assert_eq!(
            scan("5.e+7 "),
            ("ERROR('malformed float: 5.e+7')@1:1".to_owned(), ' ')
        );
        assert_eq!(
            scan("10.e5"),
            ("ERROR('malformed float: 10.e5')@1:1".to_owned(), '\0')
        );
    }

    #[test]
    fn double_dot() {
        assert_eq!(
            scan("12..3+"),
            ("ERROR('malformed number: 12..3')@1:1".to_owned(), '+')
        );
        assert_eq!(scan("1..x"), ("ERROR('malformed number: 1..')@1:1".to_owned(), 'x'));
    }

    #[test]
    fn bad_exponents() {
        assert_eq!(scan("1e"), ("ERROR('bad exponent: 1e')@1:1".to_owned(), '\0'));
        assert_eq!(scan("1e+ "), ("ERROR('bad exponent: 1e+')@1:1".to_owned(), ' '));
        assert_eq!(scan("2ex1"), ("ERROR('bad exponent: 2ex')@1:1".to_owned(), '1'));
        assert_eq!(scan(".e5 "), ("ERROR('bad exponent: .e5')@1:1".to_owned(), ' '));
        assert_eq!(scan(".E"), ("ERROR('bad exponent: .E')@1:1".to_owned(), '\0'));
    }

    #[test]
    fn bare_dot_consumes_only_the_dot() {
        let mut cursor = Cursor::new(". 1");
        let token = scan_number(&mut cursor, Location::START);
        assert_eq!(token.to_string(), "ERROR('.')@1:1");
        assert_eq!(cursor.location(), Location::new(1, 2));
        assert_eq!(cursor.peek(), ' ');
    }
}
