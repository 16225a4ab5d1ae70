//! Codecs: how a document is turned into file content and back.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{AdapterError, Result};

/// Encoding used by [`DataFile`](crate::DataFile).
pub trait Codec<T>: Send + Sync {
    /// Encode a document.
    fn encode(&self, data: &T) -> Result<Vec<u8>>;

    /// Decode a document. Only called on non-blank content.
    fn decode(&self, bytes: &[u8]) -> Result<T>;

    /// Whether `bytes` count as nothing persisted.
    fn is_blank(&self, bytes: &[u8]) -> bool {
        bytes.is_empty()
    }
}

/// Pretty-printed JSON with two-space indentation.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl<T> Codec<T> for JsonCodec
where
    T: Serialize + DeserializeOwned,
{
    fn encode(&self, data: &T) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(data)?)
    }

    fn decode(&self, bytes: &[u8]) -> Result<T> {
        Ok(serde_json::from_slice(bytes)?)
    }

    fn is_blank(&self, bytes: &[u8]) -> bool {
        bytes.iter().all(u8::is_ascii_whitespace)
    }
}

/// CBOR via ciborium.
#[derive(Debug, Clone, Copy, Default)]
pub struct CborCodec;

impl<T> Codec<T> for CborCodec
where
    T: Serialize + DeserializeOwned,
{
    fn encode(&self, data: &T) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        ciborium::into_writer(data, &mut buf).map_err(|e| AdapterError::Cbor(e.to_string()))?;
        Ok(buf)
    }

    fn decode(&self, bytes: &[u8]) -> Result<T> {
        ciborium::from_reader(bytes).map_err(|e| AdapterError::Cbor(e.to_string()))
    }
}
