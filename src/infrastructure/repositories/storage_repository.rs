use async_trait::async_trait;
use std::path::Path;

/// Object storage holding every published artifact.
///
/// Objects are written publicly readable; `public_url` is the address clients
/// download them from.
#[async_trait]
pub trait StorageRepository: Send + Sync {
    /// Stream a local file to the bucket under `key`
    async fn put_file(&self, key: &str, path: &Path, content_type: &str) -> Result<(), String>;

    /// List object keys (first page only)
    async fn list_keys(&self) -> Result<Vec<String>, String>;

    /// Read an object as UTF-8 text. `Ok(None)` when the key does not exist.
    async fn get_text(&self, key: &str) -> Result<Option<String>, String>;

    fn public_url(&self, key: &str) -> String;
}
