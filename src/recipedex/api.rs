//! # API Facade
//!
//! Thin dispatch layer over the app controller for non-interactive
//! clients (the CLI binary). It normalizes inputs (1-based display
//! indexes to record ids), returns structured `CmdResult` values, and
//! holds no business logic of its own. Everything from here inward takes
//! regular Rust arguments, returns regular Rust types, and never writes
//! to stdout/stderr.
//!
//! Generic over `DataStore`: production wires in `FileStore`, tests use
//! `InMemoryStore`.

use crate::app::App;
use crate::error::{RecipedexError, Result};
use crate::model::Field;
use crate::recipes::UpdateOutcome;
use crate::store::DataStore;
use crate::ui::render::CardView;
use crate::view::SortKey;
use std::time::Duration;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub cards: Vec<CardView>,
    pub categories: Vec<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_cards(mut self, cards: Vec<CardView>) -> Self {
        self.cards = cards;
        self
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }
}

pub struct RecipedexApi<S: DataStore> {
    app: App<S>,
}

impl<S: DataStore> RecipedexApi<S> {
    pub fn new(store: S) -> Result<Self> {
        Ok(Self {
            app: App::new(store)?,
        })
    }

    pub fn with_debounce(store: S, delay: Duration) -> Result<Self> {
        Ok(Self {
            app: App::with_debounce(store, delay)?,
        })
    }

    pub fn add(&mut self, name: &str, category: &str, link: &str) -> Result<CmdResult> {
        self.app.add_form_mut().fill(name, category, link);
        let recipe = self.app.submit_add()?;
        let mut result = CmdResult::default().with_cards(self.app.render()?);
        result.add_message(CmdMessage::success(format!("Recipe added: {}", recipe.name)));
        Ok(result)
    }

    pub fn list(&mut self, category: Option<&str>, sort: Option<SortKey>) -> Result<CmdResult> {
        if let Some(category) = category {
            self.app.set_category_filter(category);
        }
        let mut result = CmdResult::default();
        if let Some(sort) = sort {
            self.app.set_sort(sort);
            if sort != SortKey::None && self.app.sort() != sort {
                result.add_message(CmdMessage::warning(
                    "Sorting by type is unavailable while a category filter is active.",
                ));
            }
        }
        Ok(result
            .with_cards(self.app.render()?)
            .with_categories(self.app.categories()))
    }

    pub fn edit(&mut self, index: usize, field: Field, value: &str) -> Result<CmdResult> {
        let id = self.resolve_index(index)?;
        let outcome = self.app.recipes_mut().update_field(id, field, value)?;
        let mut result = CmdResult::default();
        match outcome {
            UpdateOutcome::Updated => {
                result.add_message(CmdMessage::success(format!("Recipe updated ({})", index)));
            }
            UpdateOutcome::Reverted => {
                result.add_message(CmdMessage::warning(format!(
                    "Empty value; kept the previous {}.",
                    field
                )));
            }
            UpdateOutcome::NotFound => {
                result.add_message(CmdMessage::warning(format!("No recipe at index {}.", index)));
            }
        }
        Ok(result.with_cards(self.app.render()?))
    }

    /// Open the delete-confirmation dialog; returns the message to show.
    pub fn delete_message(&mut self, index: usize) -> Result<String> {
        let id = self.resolve_index(index)?;
        self.app.request_delete(id)
    }

    pub fn confirm_delete(&mut self) -> Result<CmdResult> {
        let removed = self.app.confirm_delete()?;
        let mut result = CmdResult::default().with_cards(self.app.render()?);
        if removed {
            result.add_message(CmdMessage::success("Recipe deleted."));
        } else {
            result.add_message(CmdMessage::warning("Recipe was already gone."));
        }
        Ok(result)
    }

    pub fn cancel_delete(&mut self) -> CmdResult {
        self.app.cancel_delete();
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("Deletion cancelled."));
        result
    }

    pub fn categories(&self) -> CmdResult {
        CmdResult::default().with_categories(self.app.categories())
    }

    pub fn app(&self) -> &App<S> {
        &self.app
    }

    fn resolve_index(&self, index: usize) -> Result<Uuid> {
        self.app
            .recipes()
            .recipes()
            .get(index.wrapping_sub(1))
            .map(|r| r.id)
            .ok_or_else(|| RecipedexError::Api(format!("Invalid index: {}", index)))
    }
}
