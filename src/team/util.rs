//! Miscellaneous utility functionality.
//!
//! Nothing in here is specific to the team language, even though
//! it is only used by the lexer so far.
use macro_pub::macro_pub;

/// Creates a simple `HashMap` from the given key-value expressions.
///
/// The type of the map is inferred from the call site, so it can be
/// used directly as the initializer of a `LazyLock` table.
#[macro_pub]
macro_rules! map {
    ($($key:expr => $value:expr),* $(,)?) => {{
        let mut map = ::std::collections::HashMap::new();
        $(map.insert($key, $value);)*
        map
    }}
}
