//! Property-based tests for the lexer.
//!
//! Arbitrary input must always produce a finite stream ending in exactly one
//! `EOF`, with token locations that never move backwards. For well-formed
//! input, whitespace and comments between tokens must not change what the
//! tokens are.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use proptest::prelude::*;
use teamlex::{Lexer, Location, Token, TokenKind, tokenize};

/// Drops locations, keeping what a parser would look at.
fn kinds_and_lexemes(tokens: &[Token]) -> Vec<(TokenKind, String)> {
    tokens
        .iter()
        .map(|token| (token.kind(), token.lexeme().to_owned()))
        .collect()
}

/// Any text, biased towards characters the lexer cares about.
fn source_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            prop::sample::select(vec![
                '1', '3', '4', '0', '9', '.', 'e', 'E', '+', '-', '*', '/', '$', '\\', 'n', '!',
                '=', '<', '>', '_', 'a', 'Z', ' ', '\t', '\r', '\n', '(', '#', '\0',
            ]),
            any::<char>(),
        ],
        0..64,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

/// A single well-formed token, as source text.
fn valid_token_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec!["if", "else", "while", "return", "func"]).prop_map(str::to_owned),
        (
            prop::sample::select(vec!["134", "104", "199"]),
            "[A-Za-z_][A-Za-z0-9_]{0,8}"
        )
            .prop_map(|(prefix, body)| format!("{prefix}{body}")),
        "[0-9]{1,6}",
        "[0-9]{0,3}\\.[0-9]{1,3}([eE][+-]?[0-9]{1,2})?",
        "\\$[a-z 0-9]{0,8}\\$",
        prop::sample::select(vec!["+", "-", "*", "/", "=", "==", "!=", "<", "<=", "<>", ">", ">="])
            .prop_map(str::to_owned),
    ]
}

/// Separators that may sit between two tokens without changing them.
fn separator_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(" ".to_owned()),
        "[ \t\r\n]{1,4}",
        Just(" /* note /* nested */ */ ".to_owned()),
        Just(" // line comment\n".to_owned()),
        Just(" /**/".to_owned()),
    ]
}

/// Joins tokens with the given separators, falling back to a single space.
fn join(tokens: &[String], separators: &[String]) -> String {
    let mut source = String::new();
    for (idx, token) in tokens.iter().enumerate() {
        if idx > 0 {
            source.push_str(separators.get(idx - 1).map_or(" ", String::as_str));
        }
        source.push_str(token);
    }
    source
}

proptest! {
    #[test]
    fn stream_ends_in_exactly_one_eof(source in source_strategy()) {
        let tokens = tokenize(&source);
        prop_assert!(!tokens.is_empty());
        let eofs = tokens.iter().filter(|token| token.is_end_of_input()).count();
        prop_assert_eq!(eofs, 1);
        prop_assert!(tokens.last().unwrap().is_end_of_input());
        // Bounded by the input: every token but EOF consumes at least one character.
        prop_assert!(tokens.len() <= source.chars().count() + 1);
    }

    #[test]
    fn eof_is_a_fixed_point(source in source_strategy()) {
        let mut lexer = Lexer::new(&source);
        let eof = loop {
            let token = lexer.next_token();
            if token.is_end_of_input() {
                break token;
            }
        };
        let location = lexer.location();
        for _ in 0..3 {
            prop_assert_eq!(lexer.next_token(), eof.clone());
            prop_assert_eq!(lexer.location(), location);
        }
    }

    #[test]
    fn locations_never_move_backwards(source in source_strategy()) {
        let tokens = tokenize(&source);
        let mut previous = Location::START;
        for token in &tokens {
            prop_assert!(token.location() >= previous, "{} after {}", token, previous);
            previous = token.location();
        }
    }

    #[test]
    fn separators_do_not_change_tokens(
        tokens in prop::collection::vec(valid_token_strategy(), 1..12),
        separators in prop::collection::vec(separator_strategy(), 12),
    ) {
        let spaced = tokenize(join(&tokens, &[]));
        let loose = tokenize(join(&tokens, &separators));
        prop_assert_eq!(kinds_and_lexemes(&spaced), kinds_and_lexemes(&loose));
        prop_assert!(spaced.iter().all(|token| !token.is_error()), "{:?}", spaced);
    }

    #[test]
    fn columns_match_the_consumed_spans(
        tokens in prop::collection::vec(valid_token_strategy(), 1..12),
        separators in prop::collection::vec("[ \t]{1,4}", 12),
    ) {
        let source = join(&tokens, &separators);
        let lexed = tokenize(&source);
        prop_assert_eq!(lexed.len(), tokens.len() + 1);

        // One line only: each column is the previous one plus the source
        // text of the previous token and the separator after it.
        let mut column = 1;
        for (idx, (token, text)) in lexed.iter().zip(&tokens).enumerate() {
            if idx > 0 {
                column += separators.get(idx - 1).map_or(1, |sep| sep.chars().count());
            }
            prop_assert_eq!(token.location(), Location::new(1, column), "{}", token);
            column += text.chars().count();
        }
        prop_assert_eq!(lexed.last().unwrap().location(), Location::new(1, column));
    }

    #[test]
    fn valid_lexemes_rebuild_the_meaningful_input(
        tokens in prop::collection::vec(valid_token_strategy(), 1..12),
    ) {
        let source = join(&tokens, &[]);
        let rebuilt = tokenize(&source)
            .iter()
            .filter(|token| !token.is_end_of_input())
            .map(|token| match token.kind() {
                TokenKind::String => format!("${}$", token.lexeme()),
                _ => token.lexeme().to_owned(),
            })
            .collect::<Vec<_>>();
        prop_assert_eq!(rebuilt, tokens);
    }
}
