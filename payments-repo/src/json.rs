//! JSON snapshot repository adapter.

use std::path::{Path, PathBuf};

use payments_types::{Payment, PaymentRepository, PaymentSnapshot, RepoError};

use crate::memory::InMemoryRepo;

// ─────────────────────────────────────────────────────────────────────────────
// JSON Snapshot Repository
// ─────────────────────────────────────────────────────────────────────────────

/// Repository that serves a snapshot parsed from a JSON file.
///
/// The file is never re-read; edits after `open` are not observed.
#[derive(Debug, Clone)]
pub struct JsonSnapshotRepo {
    source: Option<PathBuf>,
    inner: InMemoryRepo,
}

impl JsonSnapshotRepo {
    /// Reads and parses the snapshot at `path`.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self, RepoError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| RepoError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut repo = Self::from_json(&raw)?;
        repo.source = Some(path.to_path_buf());
        tracing::info!(payments = repo.inner.len(), "loaded payment snapshot");
        Ok(repo)
    }

    /// Parses a snapshot held in memory.
    pub fn from_json(raw: &str) -> Result<Self, RepoError> {
        let snapshot = PaymentSnapshot::from_json(raw)?;
        Ok(Self {
            source: None,
            inner: InMemoryRepo::from(snapshot.payments),
        })
    }

    /// File the snapshot was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl PaymentRepository for JsonSnapshotRepo {
    fn find_all(&self) -> Vec<Payment> {
        self.inner.find_all()
    }
}
