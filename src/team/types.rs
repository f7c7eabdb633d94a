//! Types used through multiple parts of the lexer, mostly to pin tokens
//! and diagnostics to a place in the source code.

use core::cmp::Ordering;
use core::fmt::{Display, Formatter};

/// A Location simply consists of a line and column position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[expect(
    clippy::exhaustive_structs,
    reason = "Locations are always line+col - if we ever switch to offset-based locations, this is a breaking change."
)]
pub struct Location {
    /// Line of the location, 1-indexed.
    pub line: usize,
    /// Column of the location, 1-indexed.
    pub col: usize,
}

impl Location {
    /// The location of the very first character of any source buffer.
    pub const START: Location = Location { line: 1, col: 1 };

    /// Construct a location from a line and column pair.
    #[must_use]
    #[inline]
    pub const fn new(line: usize, col: usize) -> Self {
        Location { line, col }
    }
}

impl Default for Location {
    #[inline]
    fn default() -> Self {
        Location::START
    }
}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Location {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line.cmp(&other.line).then(self.col.cmp(&other.col))
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}
