pub mod entities;
pub mod service;

pub use entities::ImageUpload;
pub use service::ImageService;
