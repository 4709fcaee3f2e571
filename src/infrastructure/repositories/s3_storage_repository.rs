use super::storage_repository::StorageRepository;
use async_trait::async_trait;
use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::{primitives::ByteStream, types::ObjectCannedAcl, Client as S3Client};
use std::path::Path;
use std::sync::Arc;

/// AWS S3 implementation of the storage repository
pub struct S3StorageRepository {
    s3_client: Arc<S3Client>,
    bucket: String,
    region: String,
}

impl S3StorageRepository {
    pub fn new(s3_client: Arc<S3Client>, bucket: String, region: String) -> Self {
        Self {
            s3_client,
            bucket,
            region,
        }
    }
}

#[async_trait]
impl StorageRepository for S3StorageRepository {
    async fn put_file(&self, key: &str, path: &Path, content_type: &str) -> Result<(), String> {
        let start_time = std::time::Instant::now();

        let body = ByteStream::from_path(path).await.map_err(|e| {
            tracing::error!(error = %e, path = %path.display(), "Failed to open staged file");
            format!("Failed to open staged file {}: {}", path.display(), e)
        })?;

        self.s3_client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(body)
            .content_type(content_type)
            .acl(ObjectCannedAcl::PublicRead)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = ?e,
                    error_display = %e,
                    bucket = %self.bucket,
                    key = key,
                    "S3 put_object failed"
                );
                format!("S3 upload of {} failed: {}", key, e)
            })?;

        tracing::info!(
            bucket = %self.bucket,
            key = key,
            content_type = content_type,
            latency_ms = start_time.elapsed().as_millis(),
            "Object uploaded"
        );

        Ok(())
    }

    async fn list_keys(&self) -> Result<Vec<String>, String> {
        let output = self
            .s3_client
            .list_objects_v2()
            .bucket(&self.bucket)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = ?e, bucket = %self.bucket, "S3 list_objects_v2 failed");
                format!("S3 listing failed: {}", e)
            })?;

        let keys: Vec<String> = output
            .contents()
            .iter()
            .filter_map(|object| object.key().map(str::to_string))
            .collect();

        tracing::debug!(bucket = %self.bucket, object_count = keys.len(), "Bucket listed");

        Ok(keys)
    }

    async fn get_text(&self, key: &str) -> Result<Option<String>, String> {
        let output = match self
            .s3_client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
        {
            Ok(output) => output,
            Err(e) if is_missing_object(&e) => return Ok(None),
            Err(e) => {
                tracing::error!(error = ?e, key = key, "S3 get_object failed");
                return Err(format!("S3 read of {} failed: {}", key, e));
            }
        };

        let bytes = output
            .body
            .collect()
            .await
            .map_err(|e| format!("Failed to read body of {}: {}", key, e))?
            .into_bytes();

        Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
    }

    fn public_url(&self, key: &str) -> String {
        let path = key
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");
        format!(
            "https://{}.s3.{}.amazonaws.com/{}",
            self.bucket, self.region, path
        )
    }
}

/// A read of a key that is not in the bucket
fn is_missing_object<R>(error: &SdkError<GetObjectError, R>) -> bool {
    error
        .as_service_error()
        .is_some_and(GetObjectError::is_no_such_key)
}
