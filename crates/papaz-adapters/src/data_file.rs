//! Structured file adapters: a document encoded with a [`Codec`].

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use papaz_core::{Adapter, SyncAdapter};

use crate::codec::{CborCodec, Codec, JsonCodec};
use crate::error::{AdapterError, Result};
use crate::text_file::{TextFile, TextFileSync};

/// Async file adapter for documents encoded by `C`.
pub struct DataFile<T, C> {
    file: TextFile,
    codec: C,
    _doc: PhantomData<fn() -> T>,
}

/// Async pretty-printed JSON file.
pub type JsonFile<T> = DataFile<T, JsonCodec>;

/// Async CBOR file.
pub type CborFile<T> = DataFile<T, CborCodec>;

impl<T, C: Default> DataFile<T, C> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_codec(path, C::default())
    }
}

impl<T, C> DataFile<T, C> {
    /// Use a custom codec.
    pub fn with_codec(path: impl Into<PathBuf>, codec: C) -> Self {
        Self {
            file: TextFile::new(path),
            codec,
            _doc: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

#[async_trait]
impl<T, C> Adapter<T> for DataFile<T, C>
where
    T: Send + Sync,
    C: Codec<T>,
{
    type Error = AdapterError;

    async fn read(&self) -> Result<Option<T>> {
        match self.file.read_bytes().await? {
            Some(bytes) if !self.codec.is_blank(&bytes) => self.codec.decode(&bytes).map(Some),
            _ => Ok(None),
        }
    }

    async fn write(&self, data: &T) -> Result<()> {
        let bytes = self.codec.encode(data)?;
        self.file.write_bytes(bytes).await
    }
}

/// Blocking file adapter for documents encoded by `C`.
pub struct DataFileSync<T, C> {
    file: TextFileSync,
    codec: C,
    _doc: PhantomData<fn() -> T>,
}

/// Blocking pretty-printed JSON file.
pub type JsonFileSync<T> = DataFileSync<T, JsonCodec>;

/// Blocking CBOR file.
pub type CborFileSync<T> = DataFileSync<T, CborCodec>;

impl<T, C: Default> DataFileSync<T, C> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_codec(path, C::default())
    }
}

impl<T, C> DataFileSync<T, C> {
    pub fn with_codec(path: impl Into<PathBuf>, codec: C) -> Self {
        Self {
            file: TextFileSync::new(path),
            codec,
            _doc: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl<T, C> SyncAdapter<T> for DataFileSync<T, C>
where
    C: Codec<T>,
{
    type Error = AdapterError;

    fn read(&self) -> Result<Option<T>> {
        match self.file.read_bytes()? {
            Some(bytes) if !self.codec.is_blank(&bytes) => self.codec.decode(&bytes).map(Some),
            _ => Ok(None),
        }
    }

    fn write(&self, data: &T) -> Result<()> {
        let bytes = self.codec.encode(data)?;
        self.file.write_bytes(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    struct Data {
        #[serde(skip_serializing_if = "Option::is_none")]
        a: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        b: Option<i64>,
    }

    #[tokio::test]
    async fn test_json_file_missing_and_blank() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");
        let adapter = JsonFile::<Data>::new(&path);

        assert_eq!(adapter.read().await.unwrap(), None);

        std::fs::write(&path, "  \n").unwrap();
        assert_eq!(adapter.read().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_json_file_writes_plain_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");
        let adapter = JsonFile::<Data>::new(&path);

        adapter
            .write(&Data {
                a: None,
                b: Some(2),
            })
            .await
            .unwrap();

        let on_disk: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk, serde_json::json!({ "b": 2 }));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_json_file_concurrent_writes_stay_parseable() {
        let dir = tempfile::tempdir().unwrap();
        let adapter = std::sync::Arc::new(JsonFile::<Vec<String>>::new(dir.path().join("db.json")));

        for round in 0..25 {
            let mut tasks = Vec::new();
            for i in 0..8 {
                let adapter = adapter.clone();
                let doc = vec![format!("{}-{}", round, i); 500 * (i + 1)];
                tasks.push(tokio::spawn(async move { adapter.write(&doc).await }));
            }
            for task in tasks {
                task.await.unwrap().unwrap();
            }

            let doc = adapter.read().await.unwrap().unwrap();
            assert!(doc.iter().all(|item| item == &doc[0]));
            assert_eq!(doc.len() % 500, 0);
        }
    }

    #[test]
    fn test_json_file_sync_malformed_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonFileSync::<Data>::new(&path).read().unwrap_err();
        assert!(matches!(err, AdapterError::Json(_)));
    }

    #[test]
    fn test_cbor_file_sync_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let adapter = CborFileSync::<BTreeMap<String, Vec<u32>>>::new(dir.path().join("db.cbor"));

        let mut doc = BTreeMap::new();
        doc.insert("ids".to_string(), vec![1, 2, 3]);
        adapter.write(&doc).unwrap();

        assert_eq!(adapter.read().unwrap(), Some(doc));
    }

    #[test]
    fn test_custom_codec() {
        #[derive(Default)]
        struct Lines;

        impl Codec<Vec<String>> for Lines {
            fn encode(&self, data: &Vec<String>) -> Result<Vec<u8>> {
                Ok(data.join("\n").into_bytes())
            }

            fn decode(&self, bytes: &[u8]) -> Result<Vec<String>> {
                Ok(String::from_utf8_lossy(bytes).lines().map(String::from).collect())
            }
        }

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todos.txt");
        let adapter = DataFileSync::<Vec<String>, Lines>::new(&path);

        adapter.write(&vec!["foo".into(), "bar".into()]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "foo\nbar");
        assert_eq!(adapter.read().unwrap(), Some(vec!["foo".into(), "bar".into()]));
    }
}
