//! Durable storage for the session credential.

use parking_lot::RwLock;
use shared_types::{AppError, StorageConfig};
use std::sync::Arc;
#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;
#[cfg(not(target_arch = "wasm32"))]
use tracing::warn;

/// Where the session token lives between runs.
///
/// Calls are synchronous: every backend (memory, a small file, browser
/// `localStorage`) answers immediately.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Result<Option<String>, AppError>;
    fn save(&self, token: &str) -> Result<(), AppError>;
    fn clear(&self) -> Result<(), AppError>;
}

/// Process-local store, used by tests and as a last-resort fallback.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, AppError> {
        Ok(self.token.read().clone())
    }

    fn save(&self, token: &str) -> Result<(), AppError> {
        *self.token.write() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        *self.token.write() = None;
        Ok(())
    }
}

/// Plain-text file holding just the token, one file per storage key.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileTokenStore {
    pub fn new(dir: impl Into<PathBuf>, key: &str) -> Self {
        Self {
            path: dir.into().join(key),
        }
    }

    /// `<data dir>/school-portal`, if the platform has a data directory.
    pub fn default_dir() -> Option<PathBuf> {
        dirs::data_local_dir().map(|d| d.join("school-portal"))
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>, AppError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::storage(format!(
                "failed to read {}: {e}",
                self.path.display()
            ))),
        }
    }

    fn save(&self, token: &str) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::storage(format!("failed to create {}: {e}", parent.display()))
            })?;
        }
        std::fs::write(&self.path, token).map_err(|e| {
            AppError::storage(format!("failed to write {}: {e}", self.path.display()))
        })
    }

    fn clear(&self) -> Result<(), AppError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::storage(format!(
                "failed to remove {}: {e}",
                self.path.display()
            ))),
        }
    }
}

/// Browser `localStorage`. The `Storage` handle is not `Send`, so it is
/// looked up on every call instead of being kept.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
#[derive(Debug, Clone)]
pub struct LocalStorageTokenStore {
    key: String,
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
impl LocalStorageTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<web_sys::Storage, AppError> {
        web_sys::window()
            .ok_or_else(|| AppError::storage("no window object"))?
            .local_storage()
            .map_err(|_| AppError::storage("localStorage is not accessible"))?
            .ok_or_else(|| AppError::storage("localStorage is not available"))
    }
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Result<Option<String>, AppError> {
        Self::storage()?
            .get_item(&self.key)
            .map_err(|_| AppError::storage("failed to read localStorage"))
    }

    fn save(&self, token: &str) -> Result<(), AppError> {
        Self::storage()?
            .set_item(&self.key, token)
            .map_err(|_| AppError::storage("failed to write localStorage"))
    }

    fn clear(&self) -> Result<(), AppError> {
        Self::storage()?
            .remove_item(&self.key)
            .map_err(|_| AppError::storage("failed to clear localStorage"))
    }
}

/// The platform's durable store for `config`.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub fn default_store(config: &StorageConfig) -> Arc<dyn TokenStore> {
    Arc::new(LocalStorageTokenStore::new(config.token_key.clone()))
}

/// Without the `web` feature a wasm build has nowhere durable to write.
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub fn default_store(_config: &StorageConfig) -> Arc<dyn TokenStore> {
    Arc::new(MemoryTokenStore::new())
}

/// The platform's durable store for `config`.
#[cfg(not(target_arch = "wasm32"))]
pub fn default_store(config: &StorageConfig) -> Arc<dyn TokenStore> {
    let dir = config
        .dir
        .as_ref()
        .map(PathBuf::from)
        .or_else(FileTokenStore::default_dir);
    match dir {
        Some(dir) => Arc::new(FileTokenStore::new(dir, &config.token_key)),
        None => {
            warn!("no data directory available, session will not persist");
            Arc::new(MemoryTokenStore::new())
        }
    }
}
