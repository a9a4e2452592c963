//! Trailing-edge debounce for inline edits.
//!
//! A scheduled payload only fires after a fixed settling delay with no
//! further `schedule` calls; each new call supersedes the pending one.
//! Firing is driven by the caller (`fire_due` with the current instant)
//! rather than a timer thread, which keeps the whole thing
//! single-threaded and deterministic under test. `flush` force-fires the
//! pending payload immediately.
//!
//! Each (record id, field) pair gets its own independent instance via
//! [`EditDebouncer`], so an edit on one field can never cancel a pending
//! commit for another.

use crate::model::{Field, FIELDS};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Settling delay between the last keystroke and the persisted write.
pub const EDIT_DEBOUNCE: Duration = Duration::from_millis(5000);

#[derive(Debug)]
struct Pending<T> {
    payload: T,
    due: Instant,
}

/// Single-slot trailing-edge debouncer.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Cancel any pending payload and arm a new one due `delay` from
    /// `now`.
    pub fn schedule(&mut self, payload: T, now: Instant) {
        self.pending = Some(Pending {
            payload,
            due: now + self.delay,
        });
    }

    /// Take the pending payload if its settling period has elapsed.
    pub fn fire_due(&mut self, now: Instant) -> Option<T> {
        if self.pending.as_ref().is_some_and(|p| now >= p.due) {
            self.pending.take().map(|p| p.payload)
        } else {
            None
        }
    }

    /// Take the pending payload immediately; no-op when nothing pends.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.payload)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Per-(record, field) debouncers for the edit session.
pub struct EditDebouncer {
    delay: Duration,
    slots: HashMap<(Uuid, Field), Debouncer<String>>,
}

impl EditDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            slots: HashMap::new(),
        }
    }

    pub fn schedule(&mut self, id: Uuid, field: Field, value: String, now: Instant) {
        self.slots
            .entry((id, field))
            .or_insert_with(|| Debouncer::new(self.delay))
            .schedule(value, now);
    }

    /// Drop a pending edit without firing it (escape key).
    pub fn cancel(&mut self, id: Uuid, field: Field) {
        if let Some(slot) = self.slots.get_mut(&(id, field)) {
            slot.flush();
        }
    }

    pub fn flush_field(&mut self, id: Uuid, field: Field) -> Option<String> {
        self.slots.get_mut(&(id, field)).and_then(|s| s.flush())
    }

    /// Flush all three fields of one card, in stable field order.
    pub fn flush_card(&mut self, id: Uuid) -> Vec<(Field, String)> {
        FIELDS
            .iter()
            .filter_map(|&field| self.flush_field(id, field).map(|v| (field, v)))
            .collect()
    }

    /// Flush everything that is still pending, whichever card it belongs
    /// to. Used as the dirty-edits guard before a full rebuild.
    pub fn flush_all(&mut self) -> Vec<(Uuid, Field, String)> {
        let mut out = Vec::new();
        for (&(id, field), slot) in self.slots.iter_mut() {
            if let Some(value) = slot.flush() {
                out.push((id, field, value));
            }
        }
        out
    }

    /// Fire every payload whose settling period has elapsed.
    pub fn tick(&mut self, now: Instant) -> Vec<(Uuid, Field, String)> {
        let mut out = Vec::new();
        for (&(id, field), slot) in self.slots.iter_mut() {
            if let Some(value) = slot.fire_due(now) {
                out.push((id, field, value));
            }
        }
        out
    }

    pub fn is_pending(&self, id: Uuid, field: Field) -> bool {
        self.slots
            .get(&(id, field))
            .is_some_and(|s| s.is_pending())
    }

    pub fn has_pending(&self) -> bool {
        self.slots.values().any(|s| s.is_pending())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rapid_schedules_fire_once_with_last_args() {
        let mut d = Debouncer::new(Duration::from_millis(100));
        let t0 = Instant::now();
        d.schedule("a", t0);
        d.schedule("ab", t0 + Duration::from_millis(30));
        d.schedule("abc", t0 + Duration::from_millis(60));

        // Still inside the settling period of the last schedule.
        assert_eq!(d.fire_due(t0 + Duration::from_millis(120)), None);
        assert_eq!(d.fire_due(t0 + Duration::from_millis(160)), Some("abc"));
        assert_eq!(d.fire_due(t0 + Duration::from_millis(500)), None);
    }

    #[test]
    fn flush_takes_pending_immediately() {
        let mut d = Debouncer::new(Duration::from_millis(100));
        let t0 = Instant::now();
        d.schedule(1, t0);
        assert_eq!(d.flush(), Some(1));
        assert!(!d.is_pending());
    }

    #[test]
    fn flush_with_nothing_pending_is_a_noop() {
        let mut d: Debouncer<u8> = Debouncer::new(Duration::from_millis(100));
        assert_eq!(d.flush(), None);
        assert_eq!(d.flush(), None);
    }

    #[test]
    fn fields_debounce_independently() {
        let id = Uuid::new_v4();
        let mut d = EditDebouncer::new(Duration::from_millis(100));
        let t0 = Instant::now();
        d.schedule(id, Field::Name, "Ramen".into(), t0);
        d.schedule(id, Field::Link, "ramen.net".into(), t0 + Duration::from_millis(90));

        // The later link edit must not have cancelled the name edit.
        let fired = d.tick(t0 + Duration::from_millis(110));
        assert_eq!(fired, vec![(id, Field::Name, "Ramen".to_string())]);
        assert!(d.is_pending(id, Field::Link));
    }

    #[test]
    fn cards_debounce_independently() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let mut d = EditDebouncer::new(Duration::from_millis(100));
        let t0 = Instant::now();
        d.schedule(a, Field::Name, "A".into(), t0);
        d.schedule(b, Field::Name, "B".into(), t0);
        assert_eq!(d.flush_field(a, Field::Name), Some("A".to_string()));
        assert!(d.is_pending(b, Field::Name));
    }

    #[test]
    fn flush_card_uses_stable_field_order() {
        let id = Uuid::new_v4();
        let mut d = EditDebouncer::new(Duration::from_millis(100));
        let t0 = Instant::now();
        d.schedule(id, Field::Link, "l.com".into(), t0);
        d.schedule(id, Field::Name, "N".into(), t0);
        let flushed = d.flush_card(id);
        assert_eq!(
            flushed,
            vec![
                (Field::Name, "N".to_string()),
                (Field::Link, "l.com".to_string())
            ]
        );
    }

    #[test]
    fn cancel_drops_pending_without_firing() {
        let id = Uuid::new_v4();
        let mut d = EditDebouncer::new(Duration::from_millis(100));
        d.schedule(id, Field::Name, "typo".into(), Instant::now());
        d.cancel(id, Field::Name);
        assert!(!d.has_pending());
        assert!(d.flush_card(id).is_empty());
    }
}
