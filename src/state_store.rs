use std::path::PathBuf;

use tokio::fs;
use tracing::{debug, warn};

use crate::error::{ReporterError, Result};
use crate::types::PersistedState;

/// Loads and saves the state file carried between runs.
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the persisted state, if any.
    ///
    /// A missing file means "no prior state". A file that fails to parse is
    /// treated the same way: the baseline is lost, not the run.
    pub async fn load(&self) -> Option<PersistedState> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "state file unreadable, starting fresh");
                return None;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(state) => {
                debug!(path = %self.path.display(), "loaded persisted state");
                Some(state)
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "state file corrupt, starting fresh");
                None
            }
        }
    }

    /// Persist state atomically.
    ///
    /// Writes to a temp path, then renames over the real path, so a crash
    /// mid-write never leaves a partial state file.
    pub async fn save(&self, state: &PersistedState) -> Result<()> {
        let contents = serde_json::to_string_pretty(state)?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, contents.as_bytes())
            .await
            .map_err(|e| ReporterError::StateWrite {
                path: tmp.clone(),
                source: e,
            })?;
        fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| ReporterError::StateWrite {
                path: self.path.clone(),
                source: e,
            })?;

        debug!(path = %self.path.display(), "persisted state");
        Ok(())
    }
}
