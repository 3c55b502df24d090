//! Wire model and stored record for the card resource.
//!
//! The `content` field is an arbitrary JSON tree
//! (null/bool/number/string/ordered-list/ordered-map-with-string-keys).
//! Its canonical form, the compact JSON rendering, is used both for equality
//! comparison and as input to the id fingerprint.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// Card as it crosses the wire. The id is absent until the service assigns
/// one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub heading: String,
    pub label: String,
    pub sublabel: String,
    #[serde(default)]
    pub content: Value,
}

impl Card {
    /// Deterministic digest over (heading, label, sublabel, canonical content).
    ///
    /// The assigned id is excluded: the fingerprint seeds id derivation and
    /// must not depend on its own output.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.heading.hash(&mut hasher);
        self.label.hash(&mut hasher);
        self.sublabel.hash(&mut hasher);
        canonical_content(&self.content).hash(&mut hasher);
        hasher.finish()
    }
}

/// Card as the store keeps it. The id is assigned exactly once and never
/// mutated thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardRecord {
    pub id: Uuid,
    pub heading: String,
    pub label: String,
    pub sublabel: String,
    #[serde(default)]
    pub content: Value,
}

impl CardRecord {
    /// Maps the wire model onto a stored record under the assigned id.
    pub fn from_wire(id: Uuid, card: Card) -> Self {
        Self {
            id,
            heading: card.heading,
            label: card.label,
            sublabel: card.sublabel,
            content: card.content,
        }
    }

    pub fn canonical_content(&self) -> String {
        canonical_content(&self.content)
    }
}

impl PartialEq for CardRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.heading == other.heading
            && self.label == other.label
            && self.sublabel == other.sublabel
            && self.canonical_content() == other.canonical_content()
    }
}

impl Eq for CardRecord {}

/// Stable serialization of the content tree. `Value` keeps map keys in
/// insertion order, so two trees built the same way render identically.
pub fn canonical_content(content: &Value) -> String {
    content.to_string()
}
