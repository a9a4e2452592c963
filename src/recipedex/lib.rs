//! # Recipedex Architecture
//!
//! Recipedex is a **UI-agnostic recipe bookmark library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over the app controller                      │
//! │  - Normalizes inputs (display indexes → record ids)         │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  App Controller (app.rs) + Core (recipes, view, ui, ...)    │
//! │  - Owns the collection and all transient UI state           │
//! │  - mutate → persist → full re-render, every action          │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait (string-keyed get/set)          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Reconciliation Loop
//!
//! One in-memory collection, synchronized with persistent storage after
//! every mutation, rendered by discarding and rebuilding all card
//! projections from the current filtered/sorted view. Inline edits are
//! debounced per (record, field); renders flush pending edits first so a
//! rebuild triggered by one card can never drop another card's
//! keystrokes.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns
//! regular Rust types, never writes to stdout/stderr, and never assumes a
//! terminal. The same core could sit behind a web UI or any other client.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for non-interactive clients
//! - [`app`]: The app controller owning collection + transient UI state
//! - [`recipes`]: The recipe store (create/update/remove/reload + persist)
//! - [`view`]: Pure filter/sort engine
//! - [`debounce`]: Trailing-edge debounce for inline edits
//! - [`ui`]: Edit session, card projections, dialog flows
//! - [`link`]: Link normalization and domain extraction
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Recipe`, `Field`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod app;
pub mod config;
pub mod debounce;
pub mod error;
pub mod link;
pub mod model;
pub mod recipes;
pub mod store;
pub mod ui;
pub mod view;
