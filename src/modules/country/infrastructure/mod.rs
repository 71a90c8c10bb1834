pub mod repository;

pub use repository::InMemoryCountryRepository;
