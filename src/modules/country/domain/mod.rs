pub mod entities;
pub mod repository;

pub use entities::Country;
pub use repository::CountryRepository;
