//! Card record types.

use serde::{Deserialize, Serialize};

/// A card record as returned by the collection endpoint.
///
/// Only the printed/rules fields this toolkit consumes are modeled; the API
/// returns many more, which deserialization ignores. All fields except `name`
/// and `type_line` may be absent (lands have no mana cost, vanilla creatures
/// no oracle text, non-creatures no power or toughness).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// The card's full name.
    pub name: String,
    /// The mana cost, in `{W}{U}{B}{R}{G}` symbol notation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mana_cost: Option<String>,
    /// The type line, e.g. `Instant` or `Legendary Creature — Human Wizard`.
    pub type_line: String,
    /// The rules text. Line breaks separate paragraphs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oracle_text: Option<String>,
    /// The flavor text of this printing, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavor_text: Option<String>,
    /// Power, present on creatures. Kept as a string (`"*"` is a legal value).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<String>,
    /// Toughness, present on creatures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toughness: Option<String>,
}
