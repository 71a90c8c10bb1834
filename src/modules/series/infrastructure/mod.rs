pub mod persistence;

pub use persistence::{InMemoryCatalogNumberRepository, InMemorySeriesRepository};
