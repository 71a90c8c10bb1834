/// Image storage boundary
///
/// The catalog hands the raw upload to an image service and records only
/// the URL it gets back.
pub mod domain;
pub mod infrastructure;

// Re-exports for easy access
pub use domain::{ImageService, ImageUpload};
pub use infrastructure::FilesystemImageService;
