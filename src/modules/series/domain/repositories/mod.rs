pub mod catalog_number_repository;
pub mod series_repository;

pub use catalog_number_repository::CatalogNumberRepository;
pub use series_repository::SeriesRepository;
