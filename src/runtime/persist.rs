//! Wallet state persistence on the local filesystem.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use async_trait::async_trait;

use super::{PersistHandle, WalletStateSnapshot};
use crate::error::Result;

/// JSON snapshot file with write-to-temp-then-rename atomicity, so a crash
/// mid-write never leaves a truncated state file behind.
#[derive(Debug, Clone)]
pub struct FilePersistHandle {
    path: PathBuf,
}

impl FilePersistHandle {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn write_atomic(&self, json: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = self.path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path)?;

        let cleanup_and_err = |e| {
            let _ = fs::remove_file(&temp_path);
            e
        };

        file.write_all(json.as_bytes()).map_err(cleanup_and_err)?;
        file.sync_all().map_err(cleanup_and_err)?;
        fs::rename(&temp_path, &self.path).map_err(cleanup_and_err)?;

        Ok(())
    }
}

#[async_trait]
impl PersistHandle for FilePersistHandle {
    async fn load(&self) -> Result<Option<WalletStateSnapshot>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(serde_json::from_str(&content)?)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn save(&self, snapshot: &WalletStateSnapshot) -> Result<()> {
        let json = serde_json::to_string_pretty(snapshot)?;
        self.write_atomic(&json)
    }
}
