/// Stamp series module
///
/// The central bounded context of the catalog: the `Series` entity, the
/// catalog-number value objects, the repositories behind which persistence
/// hides, and the `SeriesService` that turns a raw submission into a
/// stored series.
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::dto::AddSeriesRequest;
pub use application::service::SeriesService;
pub use domain::{
    CatalogNumber, CatalogNumberRepository, GibbonsNumber, MichelNumber, ScottNumber, Series,
    SeriesRepository, YvertNumber,
};
