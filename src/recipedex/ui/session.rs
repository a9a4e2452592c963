//! Per-card inline-edit state machine.
//!
//! Each rendered card is either in `display` or `editing` state; editing
//! cards live in an explicit map keyed by record id (several cards may be
//! editing at once, there is no exclusive-editor rule). Input events
//! schedule debounced commits; blur/enter flush them; escape reverts the
//! field's draft to the last-persisted value without committing; the save
//! toggle flushes the whole card and returns it to `display`.

use crate::debounce::{EditDebouncer, EDIT_DEBOUNCE};
use crate::model::Field;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// A single-field write ready to be applied to the recipe store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub id: Uuid,
    pub field: Field,
    pub value: String,
}

/// Keys with edit-session semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Enter,
    Escape,
}

#[derive(Debug, Default)]
struct CardEdit {
    drafts: HashMap<Field, String>,
    focused: Option<Field>,
}

pub struct EditSession {
    cards: HashMap<Uuid, CardEdit>,
    debouncer: EditDebouncer,
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditSession {
    pub fn new() -> Self {
        Self::with_delay(EDIT_DEBOUNCE)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            cards: HashMap::new(),
            debouncer: EditDebouncer::new(delay),
        }
    }

    /// `display -> editing`. Other cards are unaffected.
    pub fn begin_edit(&mut self, id: Uuid) {
        self.cards.entry(id).or_default();
    }

    pub fn is_editing(&self, id: Uuid) -> bool {
        self.cards.contains_key(&id)
    }

    /// Focusing any editable field puts the card into `editing`.
    pub fn focus(&mut self, id: Uuid, field: Field) {
        let card = self.cards.entry(id).or_default();
        card.focused = Some(field);
    }

    pub fn focused(&self, id: Uuid) -> Option<Field> {
        self.cards.get(&id).and_then(|c| c.focused)
    }

    /// An input event: update the draft and (re)arm the debounced commit.
    pub fn input(&mut self, id: Uuid, field: Field, value: &str, now: Instant) {
        let card = self.cards.entry(id).or_default();
        card.drafts.insert(field, value.to_string());
        self.debouncer.schedule(id, field, value.to_string(), now);
    }

    /// A field lost focus. When focus moves to a different field of the
    /// same card the commit is deferred (the user is tabbing within one
    /// record); otherwise the pending update for the field is flushed.
    pub fn blur(
        &mut self,
        id: Uuid,
        field: Field,
        next_focus: Option<(Uuid, Field)>,
    ) -> Option<Commit> {
        if let Some(card) = self.cards.get_mut(&id) {
            if card.focused == Some(field) {
                card.focused = None;
            }
        }

        if let Some((next_id, next_field)) = next_focus {
            if next_id == id && next_field != field {
                return None;
            }
        }

        self.debouncer
            .flush_field(id, field)
            .map(|value| Commit { id, field, value })
    }

    /// Enter commits (acts as blur); escape reverts the draft to the
    /// last-persisted value and cancels any pending commit.
    pub fn key(&mut self, id: Uuid, field: Field, key: EditKey) -> Option<Commit> {
        match key {
            EditKey::Enter => self.blur(id, field, None),
            EditKey::Escape => {
                self.debouncer.cancel(id, field);
                if let Some(card) = self.cards.get_mut(&id) {
                    card.drafts.remove(&field);
                }
                None
            }
        }
    }

    /// The explicit save toggle: flush every pending field of the card
    /// unconditionally and return it to `display`.
    pub fn save(&mut self, id: Uuid) -> Vec<Commit> {
        let commits = self
            .debouncer
            .flush_card(id)
            .into_iter()
            .map(|(field, value)| Commit { id, field, value })
            .collect();
        self.cards.remove(&id);
        commits
    }

    /// Dirty-edits guard: flush every pending update, whichever card owns
    /// it, so a full rebuild never drops in-progress keystrokes.
    pub fn flush_all(&mut self) -> Vec<Commit> {
        self.debouncer
            .flush_all()
            .into_iter()
            .map(|(id, field, value)| Commit { id, field, value })
            .collect()
    }

    /// Fire debounced updates whose settling period has elapsed.
    pub fn tick(&mut self, now: Instant) -> Vec<Commit> {
        self.debouncer
            .tick(now)
            .into_iter()
            .map(|(id, field, value)| Commit { id, field, value })
            .collect()
    }

    /// In-progress value for a field, when the card is editing and the
    /// field has been touched.
    pub fn draft(&self, id: Uuid, field: Field) -> Option<&str> {
        self.cards
            .get(&id)
            .and_then(|c| c.drafts.get(&field))
            .map(String::as_str)
    }

    /// Drop a draft so the display falls back to the persisted value.
    /// Used when a commit came back as a revert (empty value).
    pub fn clear_draft(&mut self, id: Uuid, field: Field) {
        if let Some(card) = self.cards.get_mut(&id) {
            card.drafts.remove(&field);
        }
    }

    pub fn has_pending_edits(&self) -> bool {
        self.debouncer.has_pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const DELAY: Duration = Duration::from_millis(100);

    fn session() -> EditSession {
        EditSession::with_delay(DELAY)
    }

    #[test]
    fn focus_begins_editing() {
        let mut s = session();
        let id = Uuid::new_v4();
        assert!(!s.is_editing(id));
        s.focus(id, Field::Name);
        assert!(s.is_editing(id));
        assert_eq!(s.focused(id), Some(Field::Name));
    }

    #[test]
    fn input_schedules_a_debounced_commit() {
        let mut s = session();
        let id = Uuid::new_v4();
        let t0 = Instant::now();
        s.input(id, Field::Name, "Ra", t0);
        s.input(id, Field::Name, "Ramen", t0 + Duration::from_millis(50));

        assert!(s.tick(t0 + Duration::from_millis(100)).is_empty());
        let fired = s.tick(t0 + Duration::from_millis(200));
        assert_eq!(
            fired,
            vec![Commit {
                id,
                field: Field::Name,
                value: "Ramen".to_string()
            }]
        );
    }

    #[test]
    fn blur_to_another_card_flushes() {
        let mut s = session();
        let id = Uuid::new_v4();
        let other = Uuid::new_v4();
        s.input(id, Field::Name, "Ramen", Instant::now());
        let commit = s.blur(id, Field::Name, Some((other, Field::Name)));
        assert_eq!(commit.map(|c| c.value), Some("Ramen".to_string()));
    }

    #[test]
    fn blur_within_same_card_defers() {
        let mut s = session();
        let id = Uuid::new_v4();
        s.focus(id, Field::Name);
        s.input(id, Field::Name, "Ramen", Instant::now());
        let commit = s.blur(id, Field::Name, Some((id, Field::Link)));
        assert_eq!(commit, None);
        assert!(s.has_pending_edits());
        assert_eq!(s.focused(id), None);
    }

    #[test]
    fn blur_to_same_field_still_flushes() {
        // Re-focusing the very field that blurred is not a tab-within-card.
        let mut s = session();
        let id = Uuid::new_v4();
        s.input(id, Field::Name, "Ramen", Instant::now());
        let commit = s.blur(id, Field::Name, Some((id, Field::Name)));
        assert!(commit.is_some());
    }

    #[test]
    fn enter_commits_like_blur() {
        let mut s = session();
        let id = Uuid::new_v4();
        s.input(id, Field::Link, "ramen.net", Instant::now());
        let commit = s.key(id, Field::Link, EditKey::Enter);
        assert_eq!(commit.map(|c| c.value), Some("ramen.net".to_string()));
        assert!(!s.has_pending_edits());
    }

    #[test]
    fn escape_reverts_draft_and_cancels_commit() {
        let mut s = session();
        let id = Uuid::new_v4();
        s.input(id, Field::Name, "typo", Instant::now());
        assert_eq!(s.draft(id, Field::Name), Some("typo"));

        let commit = s.key(id, Field::Name, EditKey::Escape);
        assert_eq!(commit, None);
        assert_eq!(s.draft(id, Field::Name), None);
        assert!(!s.has_pending_edits());
    }

    #[test]
    fn save_flushes_all_fields_and_ends_editing() {
        let mut s = session();
        let id = Uuid::new_v4();
        let t0 = Instant::now();
        s.focus(id, Field::Name);
        s.input(id, Field::Name, "Ramen", t0);
        s.input(id, Field::Link, "ramen.net", t0);

        let commits = s.save(id);
        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].field, Field::Name);
        assert_eq!(commits[1].field, Field::Link);
        assert!(!s.is_editing(id));
        assert!(!s.has_pending_edits());
    }

    #[test]
    fn save_with_nothing_pending_still_ends_editing() {
        let mut s = session();
        let id = Uuid::new_v4();
        s.begin_edit(id);
        assert!(s.save(id).is_empty());
        assert!(!s.is_editing(id));
    }

    #[test]
    fn cards_edit_concurrently() {
        let mut s = session();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        s.focus(a, Field::Name);
        s.focus(b, Field::Link);
        assert!(s.is_editing(a));
        assert!(s.is_editing(b));
    }

    #[test]
    fn flush_all_drains_every_card() {
        let mut s = session();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let t0 = Instant::now();
        s.input(a, Field::Name, "A", t0);
        s.input(b, Field::Link, "b.com", t0);

        let commits = s.flush_all();
        assert_eq!(commits.len(), 2);
        assert!(!s.has_pending_edits());
    }
}
