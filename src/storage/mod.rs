// ABOUTME: Durable key-value storage abstraction for persisted browser state
// ABOUTME: Pluggable backend support (file, in-memory) behind one async trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// File-backed storage, one file per key
pub mod file;
/// In-memory storage for tests and ephemeral sessions
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::errors::{AppError, AppResult};
use async_trait::async_trait;

/// String-keyed durable slots holding string values
///
/// Writes replace the whole slot. Reads of a slot never written return
/// `Ok(None)`.
///
/// # Examples
///
/// ```rust
/// use mealdeck::storage::{DurableStorage, MemoryStorage};
/// # async fn example() -> Result<(), mealdeck::errors::AppError> {
/// let storage = MemoryStorage::new();
/// storage.write("favoriteRecipes", "[]").await?;
/// assert_eq!(storage.read("favoriteRecipes").await?.as_deref(), Some("[]"));
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait DurableStorage: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn read(&self, key: &str) -> AppResult<Option<String>>;

    /// Replace the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn write(&self, key: &str, value: &str) -> AppResult<()>;
}

/// Reject keys that cannot safely become file names
///
/// # Errors
///
/// Returns `InvalidInput` for empty keys or keys with characters outside
/// `[A-Za-z0-9_-]`
pub fn validate_key(key: &str) -> AppResult<()> {
    if key.is_empty() {
        return Err(AppError::invalid_input("Storage key cannot be empty"));
    }
    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(AppError::invalid_input(format!(
            "Storage key '{key}' contains unsupported characters"
        )));
    }
    Ok(())
}
