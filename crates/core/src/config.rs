//! Explicit configuration for the graph pipeline
//!
//! There is no process-global configuration; callers construct a
//! `VaultConfig` at startup and pass it down by reference.

use std::path::PathBuf;

/// Where the vault lives and where the graph snapshot is persisted.
#[derive(Debug, Clone)]
pub struct VaultConfig {
    /// Root directory of the note vault
    pub vault: PathBuf,
    /// Path of the persisted JSON graph snapshot
    pub snapshot: PathBuf,
}

impl VaultConfig {
    /// Default snapshot file name, relative to the working directory.
    pub const DEFAULT_SNAPSHOT: &'static str = "graph.json";

    pub fn new(vault: impl Into<PathBuf>) -> Self {
        Self {
            vault: vault.into(),
            snapshot: PathBuf::from(Self::DEFAULT_SNAPSHOT),
        }
    }

    /// Override the snapshot location.
    pub fn with_snapshot(mut self, snapshot: impl Into<PathBuf>) -> Self {
        self.snapshot = snapshot.into();
        self
    }
}
