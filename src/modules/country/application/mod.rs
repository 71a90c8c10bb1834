pub mod service;

pub use service::CountryService;
