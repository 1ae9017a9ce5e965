use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Pre-recorded tool responses on disk, addressed as
/// `<root>/<phone_number>/<tool_name>.json`.
///
/// The store is read-only and the composite key is used exactly as given,
/// with no normalization. Callers must gate `phone_number` against the
/// allow-list before resolving, since the key addresses the filesystem
/// directly.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    root: PathBuf,
}

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("no fixture recorded at {}", path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read fixture at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FixtureStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FixtureStore { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read the stored response for `(phone_number, tool_name)` verbatim.
    ///
    /// Both error variants are the same non-fatal "could not read tool data"
    /// condition to callers; the split exists so the server can log which
    /// one actually happened.
    pub fn resolve(&self, phone_number: &str, tool_name: &str) -> Result<Vec<u8>, FixtureError> {
        let path = self
            .root
            .join(phone_number)
            .join(format!("{tool_name}.json"));

        std::fs::read(&path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => FixtureError::NotFound { path },
            _ => FixtureError::Io { path, source },
        })
    }
}
