pub mod add_series_request;

pub use add_series_request::AddSeriesRequest;
