//! JavaScript identifier checks.

use regex::Regex;
use std::sync::OnceLock;

fn identifier() -> &'static Regex {
    static IDENTIFIER: OnceLock<Regex> = OnceLock::new();
    IDENTIFIER.get_or_init(|| {
        Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("identifier pattern is valid")
    })
}

/// Whether `name` can be used as a JavaScript identifier.
pub fn is_identifier(name: &str) -> bool {
    identifier().is_match(name)
}
