use std::env;
use std::path::PathBuf;

use crate::log_info;
use crate::shared::errors::AppResult;

/// Runtime configuration, loaded from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory where uploaded series images are written.
    pub image_storage_dir: PathBuf,
    /// Public URL prefix under which stored images are served.
    pub image_base_url: String,
}

impl AppConfig {
    pub fn new(image_storage_dir: impl Into<PathBuf>, image_base_url: impl Into<String>) -> Self {
        Self {
            image_storage_dir: image_storage_dir.into(),
            image_base_url: image_base_url.into(),
        }
    }

    /// Load configuration from environment variables
    ///
    /// Reads `.env` via dotenvy first, so local development can keep the
    /// variables in a file. `IMAGE_STORAGE_DIR` is required,
    /// `IMAGE_BASE_URL` defaults to `/image`.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let image_storage_dir = PathBuf::from(env::var("IMAGE_STORAGE_DIR")?);
        let image_base_url =
            env::var("IMAGE_BASE_URL").unwrap_or_else(|_| "/image".to_string());

        log_info!(
            "Configuration loaded: image storage at {:?}, served under '{}'",
            image_storage_dir,
            image_base_url
        );

        Ok(Self {
            image_storage_dir,
            image_base_url,
        })
    }
}
