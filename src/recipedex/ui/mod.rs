//! UI-side state machines: per-card edit sessions, disposable card
//! projections, and the add/delete dialog flows. Nothing in here touches
//! storage directly; methods return data (commits, messages) that the app
//! controller applies to the recipe store.

pub mod dialog;
pub mod render;
pub mod session;
