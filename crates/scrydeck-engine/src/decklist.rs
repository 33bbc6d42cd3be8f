//! Deck-list parsing.
//!
//! A deck list is plain text with one card per line. Lines may carry a
//! leading quantity and a trailing set/collector annotation, both of which
//! are stripped:
//!
//! ```text
//! 4 Lightning Bolt
//! 2x Counterspell
//! Brainstorm (MH2) 123
//! ```
//!
//! Quantities are not expanded: `4 Lightning Bolt` yields one identifier.
//! Input order is preserved and duplicate names are kept.
//!
//! # Example
//!
//! ```
//! use scrydeck_engine::decklist::parse_decklist;
//!
//! let ids = parse_decklist("3 Lightning Bolt (2XM) 123\n\nCounterspell");
//! assert_eq!(ids.len(), 2);
//! assert_eq!(ids[0].name, "Lightning Bolt");
//! assert_eq!(ids[1].name, "Counterspell");
//! ```

use scrydeck::Identifier;
use tracing::debug;

/// Parse a full deck list into lookup identifiers.
///
/// Blank lines are skipped, as are lines left without a card name after
/// quantity stripping (e.g. a stray `4x`), so every returned identifier is a
/// usable lookup key.
pub fn parse_decklist(text: &str) -> Vec<Identifier> {
    let mut identifiers = Vec::new();
    let mut dropped = 0usize;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_line(line) {
            Some(identifier) => identifiers.push(identifier),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!(dropped, "deck-list lines had no card name after stripping");
    }
    identifiers
}

/// Parse one trimmed, non-blank line into an identifier.
///
/// Strips an optional leading quantity token, then truncates the name at a
/// `" ("` set annotation if one occurs. Returns `None` when nothing remains.
pub fn parse_line(line: &str) -> Option<Identifier> {
    let rest = strip_quantity(line);
    let name = match rest.find(" (") {
        Some(index) => rest[..index].trim_end(),
        None => rest,
    };

    if name.is_empty() {
        None
    } else {
        Some(Identifier::name(name))
    }
}

/// Strip a leading quantity token: one or more digits, optional whitespace,
/// an optional lowercase `x` marker, optional whitespace.
fn strip_quantity(line: &str) -> &str {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == line.len() {
        // No leading digits, so no quantity to strip.
        return line;
    }
    let rest = rest.trim_start();
    let rest = rest.strip_prefix('x').unwrap_or(rest);
    rest.trim_start()
}
