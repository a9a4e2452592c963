use super::DataStore;
use crate::error::Result;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    entries: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::link;
    use crate::model::Recipe;
    use crate::store::RECIPES_KEY;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        recipes: Vec<Recipe>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                recipes: Vec::new(),
            }
        }

        /// Seed one recipe; the link is normalized the way create would.
        pub fn with_recipe(mut self, name: &str, category: &str, link: &str) -> Self {
            self.recipes.push(Recipe::new(
                name.to_string(),
                category.to_string(),
                link::normalize(link),
            ));
            self.persist();
            self
        }

        pub fn ids(&self) -> Vec<uuid::Uuid> {
            self.recipes.iter().map(|r| r.id).collect()
        }

        fn persist(&mut self) {
            let payload = serde_json::to_string(&self.recipes).unwrap();
            self.store.set(RECIPES_KEY, &payload).unwrap();
        }
    }
}
