pub mod dto;
pub mod service;

pub use dto::AddSeriesRequest;
pub use service::SeriesService;
