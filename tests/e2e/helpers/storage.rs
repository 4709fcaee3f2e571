use async_trait::async_trait;
use parking_lot::Mutex;
use prayer_backend::infrastructure::repositories::StorageRepository;
use std::path::Path;

pub const BUCKET_URL: &str = "https://prayers.s3.eu-west-1.amazonaws.com";

#[derive(Debug, Clone, PartialEq)]
pub struct StoredObject {
    pub key: String,
    pub body: Vec<u8>,
    pub content_type: String,
}

/// Object store kept in memory, listing in insertion order
#[derive(Default)]
pub struct InMemoryStorage {
    objects: Mutex<Vec<StoredObject>>,
    failing_prefix: Mutex<Option<String>>,
}

#[allow(dead_code)]
impl InMemoryStorage {
    pub fn insert(&self, key: &str, body: &[u8], content_type: &str) {
        self.objects.lock().push(StoredObject {
            key: key.to_string(),
            body: body.to_vec(),
            content_type: content_type.to_string(),
        });
    }

    pub fn objects(&self) -> Vec<StoredObject> {
        self.objects.lock().clone()
    }

    /// Make every upload whose key starts with `prefix` fail
    pub fn fail_uploads_with_prefix(&self, prefix: &str) {
        *self.failing_prefix.lock() = Some(prefix.to_string());
    }
}

#[async_trait]
impl StorageRepository for InMemoryStorage {
    async fn put_file(&self, key: &str, path: &Path, content_type: &str) -> Result<(), String> {
        let failing_prefix = self.failing_prefix.lock().clone();
        if failing_prefix.is_some_and(|prefix| key.starts_with(&prefix)) {
            return Err(format!("AccessDenied for {}", key));
        }

        let body = tokio::fs::read(path).await.map_err(|e| e.to_string())?;
        self.insert(key, &body, content_type);
        Ok(())
    }

    async fn list_keys(&self) -> Result<Vec<String>, String> {
        Ok(self.objects.lock().iter().map(|o| o.key.clone()).collect())
    }

    async fn get_text(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self
            .objects
            .lock()
            .iter()
            .find(|o| o.key == key)
            .map(|o| String::from_utf8_lossy(&o.body).into_owned()))
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", BUCKET_URL, key)
    }
}
