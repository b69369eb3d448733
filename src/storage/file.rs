// ABOUTME: File-backed durable storage with one JSON file per key
// ABOUTME: Writes go to a temporary sibling and are renamed into place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{validate_key, DurableStorage};
use crate::constants::storage::FILE_EXTENSION;
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

/// Storage rooted at a data directory
///
/// The slot `favoriteRecipes` lives at `<root>/favoriteRecipes.json`. The
/// directory is created on first write.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Create storage rooted at `root`
    #[must_use]
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Path of the file holding `key`
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.{FILE_EXTENSION}"))
    }

    fn temp_path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!(".{key}.{FILE_EXTENSION}.tmp"))
    }
}

#[async_trait]
impl DurableStorage for FileStorage {
    async fn read(&self, key: &str) -> AppResult<Option<String>> {
        validate_key(key)?;
        let path = self.path_for(key);
        match fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::storage(format!(
                "Failed to read {}: {e}",
                path.display()
            ))
            .with_source(e)),
        }
    }

    async fn write(&self, key: &str, value: &str) -> AppResult<()> {
        validate_key(key)?;
        fs::create_dir_all(&self.root).await.map_err(|e| {
            AppError::storage(format!(
                "Failed to create data directory {}: {e}",
                self.root.display()
            ))
            .with_source(e)
        })?;

        let path = self.path_for(key);
        let temp = self.temp_path_for(key);
        fs::write(&temp, value).await.map_err(|e| {
            AppError::storage(format!("Failed to write {}: {e}", temp.display())).with_source(e)
        })?;
        if let Err(e) = fs::rename(&temp, &path).await {
            if let Err(cleanup) = fs::remove_file(&temp).await {
                warn!(path = %temp.display(), error = %cleanup, "Failed to remove temporary slot file");
            }
            return Err(
                AppError::storage(format!("Failed to replace {}: {e}", path.display()))
                    .with_source(e),
            );
        }

        debug!(storage.key = key, bytes = value.len(), path = %path.display(), "Slot written");
        Ok(())
    }
}
