//! Shared, replaceable provider API key.

use std::sync::{Arc, RwLock};

use crate::error::EmbeddingError;

/// Handle to the API key used for embedding calls.
///
/// Clones share the same slot: a `set` through one handle is seen by every
/// subsequent `current` through any other. Calls already in flight keep the
/// value they read.
#[derive(Clone, Default)]
pub struct Credential {
    key: Arc<RwLock<String>>,
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let configured = self.current().ok().flatten().is_some();
        f.debug_struct("Credential").field("configured", &configured).finish()
    }
}

impl Credential {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: Arc::new(RwLock::new(key.into())) }
    }

    /// Start from an optional key, e.g. one read from the environment.
    #[must_use]
    pub fn from_optional(key: Option<String>) -> Self {
        Self::new(key.unwrap_or_default())
    }

    /// Replace the key. Not validated here; a bad key surfaces on the next call.
    pub fn set(&self, key: impl Into<String>) -> Result<(), EmbeddingError> {
        let mut slot = self.key.write().map_err(|_| EmbeddingError::LockPoisoned)?;
        *slot = key.into();
        Ok(())
    }

    /// The active key, or `None` when none has been configured.
    pub fn current(&self) -> Result<Option<String>, EmbeddingError> {
        let slot = self.key.read().map_err(|_| EmbeddingError::LockPoisoned)?;
        Ok(if slot.is_empty() { None } else { Some(slot.clone()) })
    }

    /// The active key, failing with `MissingCredential` when unset.
    pub fn require(&self) -> Result<String, EmbeddingError> {
        self.current()?.ok_or(EmbeddingError::MissingCredential)
    }
}
