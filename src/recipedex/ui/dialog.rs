//! Dialog flows: the two-step delete confirmation and the add-recipe
//! form. Both are plain state machines; showing/closing the actual widget
//! is the caller's concern.

use crate::error::{RecipedexError, Result};
use crate::link;
use crate::model::Recipe;
use crate::recipes::RecipeStore;
use crate::store::DataStore;
use uuid::Uuid;

/// Delete-confirmation dialog: remembers which recipe is pending and the
/// message to show. Confirming with nothing pending is a defensive branch
/// surfaced as an explicit error, not a silent close.
#[derive(Debug, Default)]
pub struct DeleteDialog {
    pending: Option<Uuid>,
    message: Option<String>,
}

impl DeleteDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the pending target and build the confirmation message,
    /// labeling the recipe by its link's domain (raw link as fallback).
    pub fn open(&mut self, recipe: &Recipe) -> &str {
        self.pending = Some(recipe.id);
        self.message = Some(format!(
            "Are you sure you want to delete the recipe \"{}\"? [Recipe from {}]",
            recipe.name,
            link::short_label(&recipe.link)
        ));
        self.message.as_deref().unwrap_or("")
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Take the pending id for deletion and close the dialog.
    pub fn confirm(&mut self) -> Result<Uuid> {
        self.message = None;
        self.pending.take().ok_or(RecipedexError::NoPendingDelete)
    }

    /// Close without deleting; the pending id is cleared.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.message = None;
    }
}

/// The add-recipe form: three fields submitted as one unit. Validation
/// and link normalization happen in the recipe store; on success the
/// fields are cleared so the dialog resets.
#[derive(Debug, Default)]
pub struct AddForm {
    pub name: String,
    pub category: String,
    pub link: String,
}

impl AddForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill(&mut self, name: &str, category: &str, link: &str) {
        self.name = name.to_string();
        self.category = category.to_string();
        self.link = link.to_string();
    }

    pub fn submit<S: DataStore>(&mut self, recipes: &mut RecipeStore<S>) -> Result<Recipe> {
        let recipe = recipes.create(&self.name, &self.category, &self.link)?;
        self.clear();
        Ok(recipe)
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.category.clear();
        self.link.clear();
    }
}
