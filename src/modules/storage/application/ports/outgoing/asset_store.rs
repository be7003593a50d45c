use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AssetStoreError {
    #[error("Asset store is not configured")]
    Configuration,

    #[error("Access to the asset store was denied")]
    AccessDenied,

    #[error("Asset store failure: {0}")]
    Infrastructure(String),
}

/// External collaborator persisting uploaded files (resumes, logos).
/// `upload` stores raw bytes under a namespace and returns a durable URL.
#[async_trait]
pub trait AssetStore: Send + Sync {
    async fn upload(
        &self,
        namespace: &str,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<String, AssetStoreError>;
}

/// Stand-in wired when asset-store credentials are absent. Callers treat the
/// Configuration error as best-effort and keep going without the asset.
pub struct UnconfiguredAssetStore;

#[async_trait]
impl AssetStore for UnconfiguredAssetStore {
    async fn upload(
        &self,
        _namespace: &str,
        _filename: &str,
        _bytes: Vec<u8>,
    ) -> Result<String, AssetStoreError> {
        Err(AssetStoreError::Configuration)
    }
}
