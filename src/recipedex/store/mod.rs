//! # Storage Layer
//!
//! This module defines the storage abstraction for recipedex. The
//! [`DataStore`] trait is the persistent key-value contract the app was
//! written against: a blocking `get`/`set` of whole string values, where
//! one key ([`RECIPES_KEY`]) holds the entire recipe collection serialized
//! as a JSON array.
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** without changing core logic
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production file-based storage; each key is a file
//!   `{key}.json` under the data directory
//! - [`memory::InMemoryStore`]: in-memory storage for fast, isolated tests
//!
//! ## Contract
//!
//! A read returns the previous full write or "absent". A write replaces
//! the entire value; partial state is never persisted. The [`RecipeStore`]
//! is the only component that writes, and it always writes the whole
//! collection right after mutating it in memory.
//!
//! [`RecipeStore`]: crate::recipes::RecipeStore

use crate::error::Result;

pub mod fs;
pub mod memory;

/// The single key under which the recipe collection is persisted.
pub const RECIPES_KEY: &str = "recipes";

/// Abstract interface for persistent string-keyed storage.
pub trait DataStore {
    /// Read the full value for a key, or `None` if it was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the full value for a key.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
