//! Lookup keys for the collection endpoint.

use serde::{Deserialize, Serialize};

/// A card lookup key, serialized as `{"name": "..."}`.
///
/// Identifiers keep their input order through a collection request;
/// duplicates are allowed and resolved independently.
///
/// # Example
///
/// ```
/// use scrydeck::Identifier;
///
/// let id = Identifier::name("Lightning Bolt");
/// assert_eq!(id.name, "Lightning Bolt");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    /// The exact card name to look up.
    pub name: String,
}

impl Identifier {
    /// Create a name identifier.
    pub fn name(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
