pub mod entities;
pub mod repositories;
pub mod services;
pub mod value_objects;

// Re-exports for easy access
pub use entities::Series;
pub use repositories::{CatalogNumberRepository, SeriesRepository};
pub use services::parse_catalog_numbers;
pub use value_objects::{
    CatalogKind, CatalogNumber, GibbonsNumber, MichelNumber, ScottNumber, YvertNumber,
};
