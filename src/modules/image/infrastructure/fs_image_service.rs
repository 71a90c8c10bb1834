use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Instant;
use uuid::Uuid;

use crate::log_debug;
use crate::modules::image::domain::{ImageService, ImageUpload};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::config::AppConfig;
use crate::shared::utils::logger::LogContext;

/// Stores uploads on the local filesystem under a generated name and
/// serves them from a configured URL prefix.
pub struct FilesystemImageService {
    storage_dir: PathBuf,
    base_url: String,
}

impl FilesystemImageService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            storage_dir: config.image_storage_dir.clone(),
            base_url: config.image_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn extension_for(content_type: &str) -> AppResult<&'static str> {
        match content_type {
            "image/png" => Ok("png"),
            "image/jpeg" => Ok("jpg"),
            "image/gif" => Ok("gif"),
            other => Err(AppError::InvalidInput(format!(
                "Unsupported image content type '{}'",
                other
            ))),
        }
    }
}

#[async_trait]
impl ImageService for FilesystemImageService {
    async fn save(&self, image: Option<ImageUpload>) -> AppResult<Option<String>> {
        let Some(image) = image else {
            log_debug!("No image supplied, nothing stored");
            return Ok(None);
        };

        if image.is_empty() {
            return Err(AppError::InvalidInput(
                "Uploaded image is empty".to_string(),
            ));
        }

        let extension = Self::extension_for(&image.content_type)?;
        let stored_name = format!("{}.{}", Uuid::new_v4(), extension);
        let target = self.storage_dir.join(&stored_name);

        let start = Instant::now();
        tokio::fs::create_dir_all(&self.storage_dir).await?;
        tokio::fs::write(&target, &image.data).await?;
        LogContext::storage_operation(
            "write",
            &stored_name,
            Some(start.elapsed().as_millis() as u64),
        );

        Ok(Some(format!("{}/{}", self.base_url, stored_name)))
    }
}
