//! Local key-value persistence for the counter state.
//!
//! Values are plain strings keyed by name. The browser build writes straight
//! into `window.localStorage`; native builds keep a single JSON object in the
//! platform data directory and rewrite it on every `set`.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

#[cfg(not(target_arch = "wasm32"))]
use dioxus::logger::tracing::{info, warn};
use thiserror::Error;

/// Object-safe boxed future returned by [`KeyValueStore`] methods.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Shared handle placed in the component context.
pub type SharedStore = Rc<dyn KeyValueStore>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend unavailable")]
    Unavailable,
    #[error("storage io failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage file is not valid json: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("{0}")]
    Backend(String),
}

/// Asynchronous string store. Reads of unknown keys yield `Ok(None)`.
pub trait KeyValueStore {
    fn get<'a>(&'a self, key: &'a str) -> StoreFuture<'a, Result<Option<String>, StoreError>>;

    fn set<'a>(&'a self, key: &'a str, value: &'a str) -> StoreFuture<'a, Result<(), StoreError>>;
}

/// In-memory store used by tests and as a fallback when no data directory exists.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get<'a>(&'a self, key: &'a str) -> StoreFuture<'a, Result<Option<String>, StoreError>> {
        Box::pin(async move { Ok(self.inner.borrow().get(key).cloned()) })
    }

    fn set<'a>(&'a self, key: &'a str, value: &'a str) -> StoreFuture<'a, Result<(), StoreError>> {
        Box::pin(async move {
            self.inner
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        })
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStore;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{KeyValueStore, StoreError, StoreFuture};

    /// Store backed by `window.localStorage`.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserStore;

    impl BrowserStore {
        fn storage() -> Result<web_sys::Storage, StoreError> {
            web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or(StoreError::Unavailable)
        }
    }

    impl KeyValueStore for BrowserStore {
        fn get<'a>(
            &'a self,
            key: &'a str,
        ) -> StoreFuture<'a, Result<Option<String>, StoreError>> {
            Box::pin(async move {
                Self::storage()?
                    .get_item(key)
                    .map_err(|e| StoreError::Backend(format!("localStorage get_item failed: {e:?}")))
            })
        }

        fn set<'a>(
            &'a self,
            key: &'a str,
            value: &'a str,
        ) -> StoreFuture<'a, Result<(), StoreError>> {
            Box::pin(async move {
                Self::storage()?
                    .set_item(key, value)
                    .map_err(|e| StoreError::Backend(format!("localStorage set_item failed: {e:?}")))
            })
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use std::{
        collections::BTreeMap,
        fs,
        path::{Path, PathBuf},
    };

    use super::{KeyValueStore, StoreError, StoreFuture};

    const STATE_FILE: &str = "tally-state.json";

    /// Store backed by one JSON object file of string values.
    #[derive(Debug, Clone)]
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        pub fn at(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// Store inside the per-user data directory, if the platform exposes one.
        pub fn in_data_dir() -> Option<Self> {
            let dirs = directories::ProjectDirs::from("com", "Tally", "Tally")?;
            Some(Self::at(dirs.data_dir().join(STATE_FILE)))
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn read_map(&self) -> Result<BTreeMap<String, String>, StoreError> {
            match fs::read_to_string(&self.path) {
                Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
                Ok(raw) => Ok(serde_json::from_str(&raw)?),
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
                Err(err) => Err(err.into()),
            }
        }

        fn write_map(&self, map: &BTreeMap<String, String>) -> Result<(), StoreError> {
            if let Some(dir) = self.path.parent() {
                fs::create_dir_all(dir)?;
            }
            let raw = serde_json::to_string_pretty(map)?;
            fs::write(&self.path, raw)?;
            Ok(())
        }
    }

    impl KeyValueStore for FileStore {
        fn get<'a>(
            &'a self,
            key: &'a str,
        ) -> StoreFuture<'a, Result<Option<String>, StoreError>> {
            Box::pin(async move { Ok(self.read_map()?.remove(key)) })
        }

        fn set<'a>(
            &'a self,
            key: &'a str,
            value: &'a str,
        ) -> StoreFuture<'a, Result<(), StoreError>> {
            Box::pin(async move {
                let mut map = self.read_map()?;
                map.insert(key.to_string(), value.to_string());
                self.write_map(&map)
            })
        }
    }
}

/// Pick the persistent store for the current platform.
pub fn default_store() -> SharedStore {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(BrowserStore)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        match FileStore::in_data_dir() {
            Some(store) => {
                info!("[storage] persisting to {}", store.path().display());
                Rc::new(store)
            }
            None => {
                warn!("[storage] no data directory available; state will not survive restarts");
                Rc::new(MemoryStore::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::new();
        let store_obj: &dyn KeyValueStore = &store;

        assert_eq!(block_on(store_obj.get("count")).expect("get"), None);
        block_on(store_obj.set("count", "12")).expect("set");
        assert_eq!(
            block_on(store_obj.get("count")).expect("get"),
            Some("12".to_string())
        );
        block_on(store_obj.set("count", "13")).expect("overwrite");
        assert_eq!(
            block_on(store_obj.get("count")).expect("get"),
            Some("13".to_string())
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn memory_store_clones_share_state() {
        let store = MemoryStore::new();
        let clone = store.clone();
        block_on(store.set("themeColor", "#112233")).expect("set");
        assert_eq!(
            block_on(clone.get("themeColor")).expect("get"),
            Some("#112233".to_string())
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_store_persists_between_instances() {
        let dir = std::env::temp_dir().join(format!("tally-store-test-{}", std::process::id()));
        let path = dir.join("state.json");
        let _ = std::fs::remove_file(&path);

        let first = FileStore::at(&path);
        assert_eq!(first.path(), path.as_path());
        assert_eq!(block_on(first.get("count")).expect("empty get"), None);
        block_on(first.set("count", "7")).expect("set count");
        block_on(first.set("limitsEnabled", "true")).expect("set flag");

        let second = FileStore::at(&path);
        assert_eq!(
            block_on(second.get("count")).expect("get"),
            Some("7".to_string())
        );
        assert_eq!(
            block_on(second.get("limitsEnabled")).expect("get"),
            Some("true".to_string())
        );

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_store_reports_corrupt_file() {
        let dir = std::env::temp_dir().join(format!("tally-store-corrupt-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("temp dir");
        let path = dir.join("state.json");
        std::fs::write(&path, "not json").expect("write junk");

        let store = FileStore::at(&path);
        let err = block_on(store.get("count")).expect_err("corrupt file must error");
        assert!(matches!(err, StoreError::Serde(_)));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
