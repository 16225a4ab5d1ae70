//! Storage media for the conformance suite.
//!
//! A [`Medium`] owns one storage location and can open any number of stores
//! over it. Async stores are driven through a current-thread runtime so the
//! same scenario code runs against both store variants.

use std::path::PathBuf;
use std::sync::Arc;

use papaz_adapters::{
    AdapterError, CborFile, CborFileSync, JsonFile, JsonFileSync, KeyValueStorage, LocalStorage,
    Memory, MemorySync, SessionStorage, SessionStorageArea, SqliteStorage,
};
use papaz_core::{Adapter, Papaz, PapazSync, SyncAdapter};
use tempfile::TempDir;
use tokio::runtime::Runtime;

use crate::fixtures::{Doc, TempJsonFile};

/// Storage key used by the web-storage media.
pub const STORAGE_KEY: &str = "db";

/// Which store variant a medium opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    Async,
    Sync,
}

/// A store over some medium, with the async variant made blocking.
pub trait StoreHandle {
    fn read(&mut self) -> Result<(), AdapterError>;
    fn write(&mut self) -> Result<(), AdapterError>;
    fn update(&mut self, mutator: Box<dyn FnOnce(&mut Doc) + '_>) -> Result<(), AdapterError>;
    fn data(&self) -> &Doc;
    fn set_data(&mut self, doc: Doc);
    fn is_hydrated(&self) -> bool;
}

/// A storage location that stores can be opened over.
pub trait Medium {
    /// Human-readable name for assertion messages.
    fn name(&self) -> String;

    /// Open a fresh store over this medium. Performs no I/O.
    fn open(&self, default_data: Doc) -> Box<dyn StoreHandle + '_>;

    /// Put `doc` on the medium without going through a store.
    fn seed(&self, doc: &Doc);

    /// Inspect the medium without going through a store.
    fn inspect(&self) -> Option<Doc>;
}

fn runtime() -> Arc<Runtime> {
    Arc::new(
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("build runtime"),
    )
}

/// [`Papaz`] driven to completion on a runtime.
pub struct AsyncHandle<A> {
    runtime: Arc<Runtime>,
    store: Papaz<Doc, A>,
}

impl<A> StoreHandle for AsyncHandle<A>
where
    A: Adapter<Doc, Error = AdapterError>,
{
    fn read(&mut self) -> Result<(), AdapterError> {
        self.runtime.block_on(self.store.read())
    }

    fn write(&mut self) -> Result<(), AdapterError> {
        self.runtime.block_on(self.store.write())
    }

    fn update(&mut self, mutator: Box<dyn FnOnce(&mut Doc) + '_>) -> Result<(), AdapterError> {
        self.runtime.block_on(self.store.update(mutator))
    }

    fn data(&self) -> &Doc {
        self.store.data()
    }

    fn set_data(&mut self, doc: Doc) {
        self.store.set_data(doc)
    }

    fn is_hydrated(&self) -> bool {
        self.store.is_hydrated()
    }
}

/// [`PapazSync`] as a handle.
pub struct SyncHandle<A> {
    store: PapazSync<Doc, A>,
}

impl<A> StoreHandle for SyncHandle<A>
where
    A: SyncAdapter<Doc, Error = AdapterError>,
{
    fn read(&mut self) -> Result<(), AdapterError> {
        self.store.read()
    }

    fn write(&mut self) -> Result<(), AdapterError> {
        self.store.write()
    }

    fn update(&mut self, mutator: Box<dyn FnOnce(&mut Doc) + '_>) -> Result<(), AdapterError> {
        self.store.update(mutator)
    }

    fn data(&self) -> &Doc {
        self.store.data()
    }

    fn set_data(&mut self, doc: Doc) {
        self.store.set_data(doc)
    }

    fn is_hydrated(&self) -> bool {
        self.store.is_hydrated()
    }
}

fn async_handle<'a, A>(runtime: &Arc<Runtime>, adapter: A, default_data: Doc) -> Box<dyn StoreHandle + 'a>
where
    A: Adapter<Doc, Error = AdapterError> + 'a,
{
    Box::new(AsyncHandle {
        runtime: Arc::clone(runtime),
        store: Papaz::new(adapter, default_data),
    })
}

fn sync_handle<'a, A>(adapter: A, default_data: Doc) -> Box<dyn StoreHandle + 'a>
where
    A: SyncAdapter<Doc, Error = AdapterError> + 'a,
{
    Box::new(SyncHandle {
        store: PapazSync::new(adapter, default_data),
    })
}

/// In-process memory, async or blocking.
pub struct MemoryMedium {
    flavor: Flavor,
    runtime: Arc<Runtime>,
    async_adapter: Memory<Doc>,
    sync_adapter: MemorySync<Doc>,
}

impl MemoryMedium {
    pub fn new(flavor: Flavor) -> Self {
        Self {
            flavor,
            runtime: runtime(),
            async_adapter: Memory::new(),
            sync_adapter: MemorySync::new(),
        }
    }
}

impl Medium for MemoryMedium {
    fn name(&self) -> String {
        format!("memory ({:?})", self.flavor)
    }

    fn open(&self, default_data: Doc) -> Box<dyn StoreHandle + '_> {
        match self.flavor {
            Flavor::Async => async_handle(&self.runtime, self.async_adapter.clone(), default_data),
            Flavor::Sync => sync_handle(self.sync_adapter.clone(), default_data),
        }
    }

    fn seed(&self, doc: &Doc) {
        match self.flavor {
            Flavor::Async => self
                .runtime
                .block_on(Adapter::write(&self.async_adapter, doc))
                .expect("seed memory"),
            Flavor::Sync => SyncAdapter::write(&self.sync_adapter, doc).expect("seed memory"),
        }
    }

    fn inspect(&self) -> Option<Doc> {
        let snapshot = match self.flavor {
            Flavor::Async => self.async_adapter.snapshot(),
            Flavor::Sync => self.sync_adapter.snapshot(),
        };
        snapshot.expect("inspect memory")
    }
}

/// A JSON file in a temporary directory.
pub struct JsonFileMedium {
    flavor: Flavor,
    runtime: Arc<Runtime>,
    file: TempJsonFile,
}

impl JsonFileMedium {
    pub fn new(flavor: Flavor) -> Self {
        Self {
            flavor,
            runtime: runtime(),
            file: TempJsonFile::new(),
        }
    }

    pub fn file(&self) -> &TempJsonFile {
        &self.file
    }
}

impl Medium for JsonFileMedium {
    fn name(&self) -> String {
        format!("json file ({:?})", self.flavor)
    }

    fn open(&self, default_data: Doc) -> Box<dyn StoreHandle + '_> {
        let path = self.file.path().to_path_buf();
        match self.flavor {
            Flavor::Async => async_handle(&self.runtime, JsonFile::<Doc>::new(path), default_data),
            Flavor::Sync => sync_handle(JsonFileSync::<Doc>::new(path), default_data),
        }
    }

    fn seed(&self, doc: &Doc) {
        self.file.overwrite(doc);
    }

    fn inspect(&self) -> Option<Doc> {
        self.file.read_json()
    }
}

/// A CBOR file in a temporary directory.
pub struct CborFileMedium {
    flavor: Flavor,
    runtime: Arc<Runtime>,
    _dir: TempDir,
    path: PathBuf,
}

impl CborFileMedium {
    pub fn new(flavor: Flavor) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("db.cbor");
        Self {
            flavor,
            runtime: runtime(),
            _dir: dir,
            path,
        }
    }
}

impl Medium for CborFileMedium {
    fn name(&self) -> String {
        format!("cbor file ({:?})", self.flavor)
    }

    fn open(&self, default_data: Doc) -> Box<dyn StoreHandle + '_> {
        match self.flavor {
            Flavor::Async => {
                async_handle(&self.runtime, CborFile::<Doc>::new(&self.path), default_data)
            }
            Flavor::Sync => sync_handle(CborFileSync::<Doc>::new(&self.path), default_data),
        }
    }

    fn seed(&self, doc: &Doc) {
        CborFileSync::<Doc>::new(&self.path)
            .write(doc)
            .expect("seed cbor file");
    }

    fn inspect(&self) -> Option<Doc> {
        CborFileSync::<Doc>::new(&self.path)
            .read()
            .expect("inspect cbor file")
    }
}

/// One key in an in-memory session storage area. Blocking only.
#[derive(Default)]
pub struct SessionStorageMedium {
    area: SessionStorageArea,
}

impl SessionStorageMedium {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Medium for SessionStorageMedium {
    fn name(&self) -> String {
        "session storage (Sync)".to_string()
    }

    fn open(&self, default_data: Doc) -> Box<dyn StoreHandle + '_> {
        sync_handle(
            SessionStorage::<Doc>::new(self.area.clone(), STORAGE_KEY),
            default_data,
        )
    }

    fn seed(&self, doc: &Doc) {
        let value = serde_json::to_string(doc).expect("serialize seed");
        self.area
            .set_item(STORAGE_KEY, &value)
            .expect("seed session storage");
    }

    fn inspect(&self) -> Option<Doc> {
        self.area
            .get_item(STORAGE_KEY)
            .expect("inspect session storage")
            .map(|value| serde_json::from_str(&value).expect("parse session storage"))
    }
}

/// One key in a SQLite-backed local storage file. Blocking only.
pub struct LocalStorageMedium {
    _dir: TempDir,
    path: PathBuf,
}

impl LocalStorageMedium {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("local.db");
        Self { _dir: dir, path }
    }

    fn storage(&self) -> SqliteStorage {
        SqliteStorage::open(&self.path).expect("open local storage")
    }
}

impl Default for LocalStorageMedium {
    fn default() -> Self {
        Self::new()
    }
}

impl Medium for LocalStorageMedium {
    fn name(&self) -> String {
        "local storage (Sync)".to_string()
    }

    fn open(&self, default_data: Doc) -> Box<dyn StoreHandle + '_> {
        sync_handle(
            LocalStorage::<Doc>::new(self.storage(), STORAGE_KEY),
            default_data,
        )
    }

    fn seed(&self, doc: &Doc) {
        let value = serde_json::to_string(doc).expect("serialize seed");
        self.storage()
            .set_item(STORAGE_KEY, &value)
            .expect("seed local storage");
    }

    fn inspect(&self) -> Option<Doc> {
        self.storage()
            .get_item(STORAGE_KEY)
            .expect("inspect local storage")
            .map(|value| serde_json::from_str(&value).expect("parse local storage"))
    }
}

/// Every medium, in every flavor it supports.
pub fn all_media() -> Vec<Box<dyn Medium>> {
    let mut media: Vec<Box<dyn Medium>> = Vec::new();
    for flavor in [Flavor::Async, Flavor::Sync] {
        media.push(Box::new(MemoryMedium::new(flavor)));
        media.push(Box::new(JsonFileMedium::new(flavor)));
        media.push(Box::new(CborFileMedium::new(flavor)));
    }
    media.push(Box::new(SessionStorageMedium::new()));
    media.push(Box::new(LocalStorageMedium::new()));
    media
}
