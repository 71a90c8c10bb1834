use crate::modules::image::domain::entities::ImageUpload;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Stores uploaded images and hands back the URL they are served under.
///
/// `Ok(None)` means the backend could not produce a URL for the upload;
/// transport and I/O failures surface as errors.
#[async_trait]
pub trait ImageService: Send + Sync {
    async fn save(&self, image: Option<ImageUpload>) -> AppResult<Option<String>>;
}
