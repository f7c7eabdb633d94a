//! Knobs that change how the lexer treats input outside the core language.
//!
//! Everything defaults to the strict behaviour: unsupported characters are
//! always reported as `ERROR` tokens.

/// What to do with punctuation the language reserves but does not use yet.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[expect(
    clippy::exhaustive_enums,
    reason = "adding a new policy MUST be handled by the dispatcher and is a breaking change."
)]
pub enum PunctuationPolicy {
    /// Report each unsupported punctuation character as an `ERROR` token.
    #[default]
    Error,
    /// Consume unsupported punctuation silently, as if it were whitespace.
    Skip,
}

impl PunctuationPolicy {
    /// The characters this policy applies to. Other unknown characters are
    /// always errors.
    pub const PUNCTUATION: [char; 9] = ['(', ')', '{', '}', '[', ']', ',', ';', ':'];

    /// Whether the lexer should swallow `c` without producing a token.
    #[must_use]
    #[inline]
    pub fn skips(self, c: char) -> bool {
        self == PunctuationPolicy::Skip && Self::PUNCTUATION.contains(&c)
    }
}

/// Configuration of a single [`Lexer`](crate::team::token::lexer::Lexer) run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct LexerConfig {
    /// Handling of unsupported punctuation.
    pub punctuation: PunctuationPolicy,
}

impl LexerConfig {
    /// Returns this configuration with the given punctuation policy.
    #[must_use]
    #[inline]
    pub const fn with_punctuation(mut self, punctuation: PunctuationPolicy) -> Self {
        self.punctuation = punctuation;
        self
    }
}

#[cfg(test)]
mod test {
    use super::{LexerConfig, PunctuationPolicy};

    #[test]
    fn default_reports_punctuation() {
        let config = LexerConfig::default();
        assert_eq!(config.punctuation, PunctuationPolicy::Error);
        assert!(!config.punctuation.skips('('));
    }

    #[test]
    fn skip_only_applies_to_reserved_punctuation() {
        let policy = LexerConfig::default()
            .with_punctuation(PunctuationPolicy::Skip)
            .punctuation;
        for c in PunctuationPolicy::PUNCTUATION {
            assert!(policy.skips(c), "{c:?} should be skipped");
        }
        assert!(!policy.skips('#'));
        assert!(!policy.skips('@'));
    }
}
