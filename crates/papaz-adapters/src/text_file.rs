//! Raw text file adapters.
//!
//! The document is the file's content as a `String`. A missing file reads as
//! nothing persisted; an existing empty file reads as `""`.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use papaz_core::{Adapter, SyncAdapter};
use tracing::trace;

use crate::error::{AdapterError, Result};
use crate::fs;

fn decode_utf8(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

/// Async text file adapter. File I/O runs on tokio's blocking pool.
///
/// Writes through one adapter, or any of its clones, are serialized.
#[derive(Debug, Clone)]
pub struct TextFile {
    path: PathBuf,
    write_lock: Arc<tokio::sync::Mutex<()>>,
}

impl TextFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(tokio::sync::Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the raw bytes, or `None` if the file does not exist.
    pub(crate) async fn read_bytes(&self) -> Result<Option<Vec<u8>>> {
        let path = self.path.clone();
        trace!(path = %path.display(), "text file read");
        let bytes = tokio::task::spawn_blocking(move || fs::read_optional(&path)).await??;
        Ok(bytes)
    }

    /// Atomically replace the file with `bytes`.
    pub(crate) async fn write_bytes(&self, bytes: Vec<u8>) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let path = self.path.clone();
        trace!(path = %path.display(), "text file write");
        tokio::task::spawn_blocking(move || fs::write_atomic(&path, &bytes)).await??;
        Ok(())
    }
}

#[async_trait]
impl Adapter<String> for TextFile {
    type Error = AdapterError;

    async fn read(&self) -> Result<Option<String>> {
        self.read_bytes().await?.map(decode_utf8).transpose()
    }

    async fn write(&self, data: &String) -> Result<()> {
        self.write_bytes(data.as_bytes().to_vec()).await
    }
}

/// Blocking text file adapter.
///
/// Writes through one adapter, or any of its clones, are serialized.
#[derive(Debug, Clone)]
pub struct TextFileSync {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl TextFileSync {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn read_bytes(&self) -> Result<Option<Vec<u8>>> {
        trace!(path = %self.path.display(), "text file read");
        Ok(fs::read_optional(&self.path)?)
    }

    pub(crate) fn write_bytes(&self, bytes: &[u8]) -> Result<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|e| AdapterError::Poisoned(e.to_string()))?;
        trace!(path = %self.path.display(), "text file write");
        Ok(fs::write_atomic(&self.path, bytes)?)
    }
}

impl SyncAdapter<String> for TextFileSync {
    type Error = AdapterError;

    fn read(&self) -> Result<Option<String>> {
        self.read_bytes()?.map(decode_utf8).transpose()
    }

    fn write(&self, data: &String) -> Result<()> {
        self.write_bytes(data.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_text_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let adapter = TextFile::new(dir.path().join("notes.txt"));

        assert_eq!(adapter.read().await.unwrap(), None);

        adapter.write(&"hello\nworld".to_string()).await.unwrap();
        assert_eq!(adapter.read().await.unwrap().as_deref(), Some("hello\nworld"));
    }

    #[test]
    fn test_text_file_sync_empty_file_is_empty_string() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, "").unwrap();

        let adapter = TextFileSync::new(&path);
        assert_eq!(adapter.read().unwrap().as_deref(), Some(""));
    }

    #[test]
    fn test_text_file_sync_rejects_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.txt");
        std::fs::write(&path, [0xff, 0xfe, 0xfd]).unwrap();

        let err = TextFileSync::new(&path).read().unwrap_err();
        assert!(matches!(err, AdapterError::Io(e) if e.kind() == io::ErrorKind::InvalidData));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_writes_on_shared_adapter() {
        let dir = tempfile::tempdir().unwrap();
        let adapter = Arc::new(TextFile::new(dir.path().join("notes.txt")));

        for round in 0..20 {
            let mut tasks = Vec::new();
            for i in 0..8 {
                let adapter = Arc::clone(&adapter);
                let text = format!("{}-{}\n", round, i).repeat(2048);
                tasks.push(tokio::spawn(async move { adapter.write(&text).await }));
            }
            for task in tasks {
                task.await.unwrap().unwrap();
            }

            let stored = adapter.read().await.unwrap().unwrap();
            let first = stored.lines().next().unwrap().to_string();
            assert!(stored.lines().all(|line| line == first));
            assert_eq!(stored.lines().count(), 2048);
        }
    }

    #[test]
    fn test_sync_clones_share_write_lock() {
        let dir = tempfile::tempdir().unwrap();
        let adapter = TextFileSync::new(dir.path().join("notes.txt"));

        std::thread::scope(|scope| {
            for i in 0..8 {
                let adapter = adapter.clone();
                scope.spawn(move || {
                    let text = format!("{}\n", i).repeat(4096);
                    for _ in 0..10 {
                        adapter.write(&text).unwrap();
                    }
                });
            }
        });

        let stored = adapter.read().unwrap().unwrap();
        let first = stored.lines().next().unwrap().to_string();
        assert!(stored.lines().all(|line| line == first));
    }
}
