/// Country reference data
///
/// Countries are referenced, not owned, by stamp series. The module keeps
/// the lookup/creation surface small: an entity, a repository trait and a
/// thin application service.
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy access
pub use application::service::CountryService;
pub use domain::{Country, CountryRepository};
pub use infrastructure::InMemoryCountryRepository;
