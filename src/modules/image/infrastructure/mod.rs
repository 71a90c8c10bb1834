pub mod fs_image_service;

pub use fs_image_service::FilesystemImageService;
