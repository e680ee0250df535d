//! Display glyphs for category folders.

use std::collections::BTreeMap;

/// Glyphs for the well-known topic folder names. Anything else gets
/// [`FALLBACK_GLYPH`]; the config file's `[glyphs]` table can override or
/// extend this set.
const BUILTIN_GLYPHS: &[(&str, &str)] = &[
    ("array", "🔢"),
    ("linked-list", "🔗"),
    ("stack", "📚"),
    ("queue", "🚶"),
    ("tree", "🌳"),
    ("graph", "🗺️"),
    ("dynamic-programming", "🧠"),
    ("greedy", "💡"),
    ("backtracking", "🔄"),
    ("binary-search", "🔍"),
    ("sorting", "📊"),
    ("string", "📝"),
    ("hash-table", "🗂️"),
    ("two-pointers", "👆"),
    ("sliding-window", "🪟"),
    ("substring", "👦"),
];

pub const FALLBACK_GLYPH: &str = "📁";

/// Glyph for a category from the built-in table, if it is a known name.
pub fn builtin_glyph(name: &str) -> Option<&'static str> {
    BUILTIN_GLYPHS.iter().find(|(n, _)| *n == name).map(|(_, g)| *g)
}

/// Glyph for a category: overrides first, then the built-in table, then the
/// fallback. Total over all names.
pub fn category_glyph<'a>(name: &str, overrides: &'a BTreeMap<String, String>) -> &'a str {
    overrides
        .get(name)
        .map(String::as_str)
        .or_else(|| builtin_glyph(name))
        .unwrap_or(FALLBACK_GLYPH)
}
