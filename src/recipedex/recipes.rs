//! The recipe store: sole owner of the in-memory collection.
//!
//! Every mutating operation follows one policy: mutate the in-memory
//! collection, then immediately persist the entire collection under the
//! single storage key. Partial state is never written. Reloading from
//! storage is the only read path and replaces the collection wholesale.

use crate::error::{RecipedexError, Result};
use crate::link;
use crate::model::{Field, Recipe};
use crate::store::{DataStore, RECIPES_KEY};
use uuid::Uuid;

/// What happened to an `update_field` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Value applied and persisted.
    Updated,
    /// Trimmed value was empty; nothing persisted, caller should restore
    /// the prior displayed value.
    Reverted,
    /// No record with that id; collection left unchanged.
    NotFound,
}

pub struct RecipeStore<S: DataStore> {
    store: S,
    recipes: Vec<Recipe>,
}

impl<S: DataStore> RecipeStore<S> {
    /// Wrap a backend with an empty collection; call `reload` to pick up
    /// previously persisted data.
    pub fn new(store: S) -> Self {
        Self {
            store,
            recipes: Vec::new(),
        }
    }

    /// Convenience: wrap and immediately reload.
    pub fn load(store: S) -> Result<Self> {
        let mut recipes = Self::new(store);
        recipes.reload()?;
        Ok(recipes)
    }

    /// Replace the in-memory collection from storage (last writer wins).
    /// Absent or malformed data means "no data yet": the current
    /// collection is left as-is.
    pub fn reload(&mut self) -> Result<()> {
        if let Some(payload) = self.store.get(RECIPES_KEY)? {
            if let Ok(recipes) = serde_json::from_str::<Vec<Recipe>>(&payload) {
                self.recipes = recipes;
            }
        }
        Ok(())
    }

    /// Append a new record and persist. Rejects empty name or link after
    /// trimming; the link is stored with an explicit scheme.
    pub fn create(&mut self, name: &str, category: &str, raw_link: &str) -> Result<Recipe> {
        let name = name.trim();
        let raw_link = raw_link.trim();
        if name.is_empty() || raw_link.is_empty() {
            return Err(RecipedexError::Validation(
                "One or more fields are left empty. Please fill out the form.".to_string(),
            ));
        }

        let recipe = Recipe::new(
            name.to_string(),
            category.trim().to_string(),
            link::normalize(raw_link),
        );
        self.recipes.push(recipe.clone());
        self.persist()?;
        Ok(recipe)
    }

    /// Apply a single-field edit. Empty values signal a revert instead of
    /// persisting; unknown ids leave the collection unchanged.
    pub fn update_field(&mut self, id: Uuid, field: Field, raw_value: &str) -> Result<UpdateOutcome> {
        let value = raw_value.trim();
        if value.is_empty() {
            return Ok(UpdateOutcome::Reverted);
        }

        let Some(recipe) = self.recipes.iter_mut().find(|r| r.id == id) else {
            return Ok(UpdateOutcome::NotFound);
        };

        let value = match field {
            Field::Link => link::normalize(value),
            _ => value.to_string(),
        };
        recipe.set_field(field, value);
        self.persist()?;
        Ok(UpdateOutcome::Updated)
    }

    /// Remove the record with this id, if present. Returns whether a
    /// record was removed; removing an absent id is a no-op.
    pub fn remove(&mut self, id: Uuid) -> Result<bool> {
        let before = self.recipes.len();
        self.recipes.retain(|r| r.id != id);
        if self.recipes.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: Uuid) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Last-persisted value of one field, used for escape-key reverts.
    pub fn field_value(&self, id: Uuid, field: Field) -> Option<&str> {
        self.get(id).map(|r| r.field(field))
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    fn persist(&mut self) -> Result<()> {
        let payload = serde_json::to_string(&self.recipes)?;
        self.store.set(RECIPES_KEY, &payload)
    }
}
