use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::modules::storage::application::ports::outgoing::asset_store::{
    AssetStore, AssetStoreError,
};

/// Objects live under `upload/{namespace}/...` so the public URL carries the
/// `/upload/` marker the attachment transform keys on.
const UPLOAD_PREFIX: &str = "upload";

/// google-cloud-storage uses a bucket resource name format:
/// `projects/_/buckets/{bucket}`
fn bucket_resource(bucket: &str) -> String {
    format!("projects/_/buckets/{}", bucket)
}

fn public_url(bucket: &str, object_name: &str) -> String {
    format!("https://storage.googleapis.com/{}/{}", bucket, object_name)
}

/// Filenames end up in object keys and public URLs; keep them boring.
fn sanitize_filename(filename: &str) -> String {
    let cleaned: String = filename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.is_empty() {
        "file".to_string()
    } else {
        cleaned
    }
}

fn object_key(namespace: &str, filename: &str) -> String {
    format!(
        "{}/{}/{}_{}",
        UPLOAD_PREFIX,
        namespace,
        Uuid::new_v4(),
        sanitize_filename(filename)
    )
}

fn map_write_error(msg: &str) -> AssetStoreError {
    let m = msg.to_lowercase();

    if m.contains("permission") || m.contains("forbidden") || m.contains("denied") {
        AssetStoreError::AccessDenied
    } else if m.contains("credential") || m.contains("config") {
        AssetStoreError::Configuration
    } else {
        AssetStoreError::Infrastructure(msg.to_string())
    }
}

/// Internal seam so the adapter is testable without mocking
/// google-cloud-storage types.
#[async_trait]
trait GcsClient: Send + Sync {
    async fn write_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
        bytes: Vec<u8>,
    ) -> Result<(), String>;
}

#[cfg(test)]
struct ArcGcsClient(Arc<dyn GcsClient>);

#[cfg(test)]
#[async_trait]
impl GcsClient for ArcGcsClient {
    async fn write_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
        bytes: Vec<u8>,
    ) -> Result<(), String> {
        self.0.write_object(bucket_resource, object_name, bytes).await
    }
}

/// Production adapter: stores uploads in a GCS bucket and hands back the
/// public object URL. The client is initialized lazily on first use.
#[derive(Clone)]
pub struct GcsAssetStore {
    client: Arc<OnceCell<Box<dyn GcsClient>>>,
    bucket: String,
}

impl GcsAssetStore {
    pub fn new(bucket: &str) -> Self {
        Self {
            client: Arc::new(OnceCell::new()),
            bucket: bucket.to_string(),
        }
    }

    async fn get_client(&self) -> Result<&dyn GcsClient, Box<dyn std::error::Error + Send + Sync>> {
        self.client
            .get_or_try_init(|| async {
                let real_client = RealGcsClient::new().await?;
                Ok(Box::new(real_client) as Box<dyn GcsClient>)
            })
            .await
            .map(|boxed| &**boxed)
    }

    #[cfg(test)]
    fn with_client(client: Arc<dyn GcsClient>, bucket: &str) -> Self {
        let once = OnceCell::new();
        let _ = once.set(Box::new(ArcGcsClient(client)) as Box<dyn GcsClient>);

        Self {
            client: Arc::new(once),
            bucket: bucket.to_string(),
        }
    }
}

#[async_trait]
impl AssetStore for GcsAssetStore {
    async fn upload(
        &self,
        namespace: &str,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<String, AssetStoreError> {
        let client = self
            .get_client()
            .await
            .map_err(|e| AssetStoreError::Infrastructure(e.to_string()))?;

        let object = object_key(namespace, filename);

        client
            .write_object(&bucket_resource(&self.bucket), &object, bytes)
            .await
            .map_err(|e| map_write_error(&e))?;

        Ok(public_url(&self.bucket, &object))
    }
}

// ============================================================================
// Real Google Cloud Storage client (google-cloud-storage)
// ============================================================================

struct RealGcsClient {
    storage: google_cloud_storage::client::Storage,
}

impl RealGcsClient {
    async fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        tracing::info!("Initializing GCS client...");

        let storage = google_cloud_storage::client::Storage::builder()
            .build()
            .await
            .map_err(|e| {
                tracing::error!("Failed to build GCS storage client: {:?}", e);
                e
            })?;

        Ok(Self { storage })
    }
}

#[async_trait]
impl GcsClient for RealGcsClient {
    async fn write_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
        bytes: Vec<u8>,
    ) -> Result<(), String> {
        self.storage
            .write_object(
                bucket_resource.to_string(),
                object_name.to_string(),
                bytes::Bytes::from(bytes),
            )
            .send_unbuffered()
            .await
            .map(|_obj| ())
            .map_err(|e| e.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================
