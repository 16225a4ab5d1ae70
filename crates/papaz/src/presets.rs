//! Presets: build a store over a ready-made adapter and hydrate it.
//!
//! Every preset constructs its adapter, builds the store, performs the
//! initial `read()` and hands back a hydrated store.

use std::path::{Path, PathBuf};

use papaz_adapters::{
    AdapterError, JsonFile, JsonFileSync, LocalStorage, Memory, MemorySync, SessionStorage,
    SessionStorageArea,
};
use papaz_core::{Adapter, Papaz, PapazSync, SyncAdapter};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::{Environment, PresetConfig};
use crate::error::Result;

/// An async adapter chosen at runtime.
pub type DynAdapter<T> = Box<dyn Adapter<T, Error = AdapterError>>;

/// A blocking adapter chosen at runtime.
pub type DynSyncAdapter<T> = Box<dyn SyncAdapter<T, Error = AdapterError>>;

/// Async store over a JSON file, configured from the environment.
///
/// With `PAPAZ_ENV=test` the file is never touched and an in-memory adapter
/// is used instead.
pub async fn json_file_preset<T>(
    path: impl Into<PathBuf>,
    default_data: T,
) -> Result<Papaz<T, DynAdapter<T>>>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
    json_file_preset_with_config(path, default_data, &PresetConfig::from_env()).await
}

/// Async store over a JSON file with an explicit configuration.
pub async fn json_file_preset_with_config<T>(
    path: impl Into<PathBuf>,
    default_data: T,
    config: &PresetConfig,
) -> Result<Papaz<T, DynAdapter<T>>>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
    let path = path.into();
    let adapter: DynAdapter<T> = match config.environment {
        Environment::Test => {
            debug!(path = %path.display(), "test environment, using memory adapter");
            Box::new(Memory::new())
        }
        Environment::Production => Box::new(JsonFile::new(path)),
    };

    let mut db = Papaz::builder()
        .adapter(adapter)
        .default_data(default_data)
        .build()?;
    db.read().await?;
    Ok(db)
}

/// Blocking store over a JSON file, configured from the environment.
pub fn json_file_sync_preset<T>(
    path: impl Into<PathBuf>,
    default_data: T,
) -> Result<PapazSync<T, DynSyncAdapter<T>>>
where
    T: Serialize + DeserializeOwned + Clone + 'static,
{
    json_file_sync_preset_with_config(path, default_data, &PresetConfig::from_env())
}

/// Blocking store over a JSON file with an explicit configuration.
pub fn json_file_sync_preset_with_config<T>(
    path: impl Into<PathBuf>,
    default_data: T,
    config: &PresetConfig,
) -> Result<PapazSync<T, DynSyncAdapter<T>>>
where
    T: Serialize + DeserializeOwned + Clone + 'static,
{
    let path = path.into();
    let adapter: DynSyncAdapter<T> = match config.environment {
        Environment::Test => {
            debug!(path = %path.display(), "test environment, using memory adapter");
            Box::new(MemorySync::new())
        }
        Environment::Production => Box::new(JsonFileSync::new(path)),
    };

    let mut db = PapazSync::builder()
        .adapter(adapter)
        .default_data(default_data)
        .build()?;
    db.read()?;
    Ok(db)
}

/// Blocking store over `key` in the persistent SQLite storage at `db_path`.
pub fn local_storage_preset<T>(
    db_path: impl AsRef<Path>,
    key: impl Into<String>,
    default_data: T,
) -> Result<PapazSync<T, LocalStorage<T>>>
where
    T: Serialize + DeserializeOwned + Clone,
{
    let adapter = LocalStorage::open(db_path, key)?;
    let mut db = PapazSync::builder()
        .adapter(adapter)
        .default_data(default_data)
        .build()?;
    db.read()?;
    Ok(db)
}

/// Blocking store over `key` in an in-memory session storage area.
pub fn session_storage_preset<T>(
    area: &SessionStorageArea,
    key: impl Into<String>,
    default_data: T,
) -> Result<PapazSync<T, SessionStorage<T>>>
where
    T: Serialize + DeserializeOwned + Clone,
{
    let adapter = SessionStorage::new(area.clone(), key);
    let mut db = PapazSync::builder()
        .adapter(adapter)
        .default_data(default_data)
        .build()?;
    db.read()?;
    Ok(db)
}
