use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One of the three editable fields of a recipe card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Category,
    Link,
}

/// Stable order used when flushing a whole card's pending edits.
pub const FIELDS: [Field; 3] = [Field::Name, Field::Category, Field::Link];

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Category => "type",
            Field::Link => "link",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "name" => Ok(Field::Name),
            "type" | "category" => Ok(Field::Category),
            "link" => Ok(Field::Link),
            other => Err(format!("Unknown field: {}", other)),
        }
    }
}

/// A stored recipe bookmark.
///
/// The category is serialized as `type` to keep the on-disk format
/// compatible with older data: a JSON array of
/// `{"id", "name", "type", "link"}` objects under a single storage key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub category: String,
    pub link: String,
}

impl Recipe {
    /// Build a record with a fresh id. Inputs are expected to be trimmed
    /// and link-normalized already; see `RecipeStore::create`.
    pub fn new(name: String, category: String, link: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            category,
            link,
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Category => &self.category,
            Field::Link => &self.link,
        }
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Category => self.category = value,
            Field::Link => self.link = value,
        }
    }
}
