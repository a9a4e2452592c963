//! The app controller: one struct owning the collection and all transient
//! UI state, so nothing lives in ambient scope.
//!
//! Every user action follows the same loop: mutate through the recipe
//! store (which persists immediately), then rebuild the card list from
//! the current filtered/sorted view. Renders never fire over unflushed
//! edit state; `render` first drains the edit session so keystrokes from
//! one card survive a rebuild triggered by another card's action.

use crate::error::Result;
use crate::model::{Field, Recipe};
use crate::recipes::{RecipeStore, UpdateOutcome};
use crate::store::DataStore;
use crate::ui::dialog::{AddForm, DeleteDialog};
use crate::ui::render::{build_cards, CardView};
use crate::ui::session::{Commit, EditKey, EditSession};
use crate::view::{self, SortKey};
use std::time::{Duration, Instant};
use uuid::Uuid;

pub struct App<S: DataStore> {
    recipes: RecipeStore<S>,
    session: EditSession,
    delete_dialog: DeleteDialog,
    add_form: AddForm,
    category_filter: String,
    sort: SortKey,
}

impl<S: DataStore> App<S> {
    /// Load persisted state and start with clean transient UI state.
    pub fn new(store: S) -> Result<Self> {
        Self::with_debounce(store, crate::debounce::EDIT_DEBOUNCE)
    }

    pub fn with_debounce(store: S, delay: Duration) -> Result<Self> {
        Ok(Self {
            recipes: RecipeStore::load(store)?,
            session: EditSession::with_delay(delay),
            delete_dialog: DeleteDialog::new(),
            add_form: AddForm::new(),
            category_filter: String::new(),
            sort: SortKey::None,
        })
    }

    // --- Rendering ---

    /// Full teardown/rebuild of the card list. The dirty-edits guard runs
    /// first: pending debounced updates are flushed and applied, so no
    /// in-progress edit is lost to the rebuild.
    pub fn render(&mut self) -> Result<Vec<CardView>> {
        let commits = self.session.flush_all();
        self.apply(commits)?;
        let view = view::view(self.recipes.recipes(), &self.category_filter, self.sort);
        Ok(build_cards(&view, &self.session))
    }

    // --- Add flow ---

    pub fn add_form_mut(&mut self) -> &mut AddForm {
        &mut self.add_form
    }

    /// Submit the add form; on success the form resets.
    pub fn submit_add(&mut self) -> Result<Recipe> {
        self.add_form.submit(&mut self.recipes)
    }

    // --- Filter / sort ---

    pub fn set_category_filter(&mut self, filter: &str) {
        self.category_filter = filter.to_string();
        self.sort = view::retained_sort(&self.category_filter, self.sort);
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = view::retained_sort(&self.category_filter, sort);
    }

    pub fn category_filter(&self) -> &str {
        &self.category_filter
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn categories(&self) -> Vec<String> {
        view::categories(self.recipes.recipes())
    }

    // --- Inline editing events ---

    pub fn focus_field(&mut self, id: Uuid, field: Field) {
        self.session.focus(id, field);
    }

    pub fn input(&mut self, id: Uuid, field: Field, value: &str, now: Instant) {
        self.session.input(id, field, value, now);
    }

    pub fn blur(&mut self, id: Uuid, field: Field, next_focus: Option<(Uuid, Field)>) -> Result<()> {
        let commit = self.session.blur(id, field, next_focus);
        self.apply(commit.into_iter().collect())
    }

    pub fn key(&mut self, id: Uuid, field: Field, key: EditKey) -> Result<()> {
        let commit = self.session.key(id, field, key);
        self.apply(commit.into_iter().collect())
    }

    pub fn save_card(&mut self, id: Uuid) -> Result<()> {
        let commits = self.session.save(id);
        self.apply(commits)
    }

    /// Advance the debounce clock; due updates are committed.
    pub fn tick(&mut self, now: Instant) -> Result<()> {
        let commits = self.session.tick(now);
        self.apply(commits)
    }

    // --- Delete flow ---

    /// Open the confirmation dialog for a card's delete button, returning
    /// the message to show.
    pub fn request_delete(&mut self, id: Uuid) -> Result<String> {
        let recipe = self
            .recipes
            .get(id)
            .ok_or(crate::error::RecipedexError::RecipeNotFound(id))?
            .clone();
        Ok(self.delete_dialog.open(&recipe).to_string())
    }

    /// Confirm the pending deletion. Confirming with no pending target is
    /// an explicit error (the dialog closed underneath us).
    pub fn confirm_delete(&mut self) -> Result<bool> {
        let id = self.delete_dialog.confirm()?;
        self.recipes.remove(id)
    }

    pub fn cancel_delete(&mut self) {
        self.delete_dialog.cancel();
    }

    pub fn delete_dialog(&self) -> &DeleteDialog {
        &self.delete_dialog
    }

    // --- Accessors ---

    pub fn recipes(&self) -> &RecipeStore<S> {
        &self.recipes
    }

    pub fn recipes_mut(&mut self) -> &mut RecipeStore<S> {
        &mut self.recipes
    }

    fn apply(&mut self, commits: Vec<Commit>) -> Result<()> {
        for commit in commits {
            let outcome = self
                .recipes
                .update_field(commit.id, commit.field, &commit.value)?;
            if outcome == UpdateOutcome::Reverted {
                // Blank edit: drop the draft so the display falls back to
                // the last-persisted value.
                self.session.clear_draft(commit.id, commit.field);
            }
        }
        Ok(())
    }
}
