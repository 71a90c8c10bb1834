pub mod catalog_number_parser;

pub use catalog_number_parser::parse_catalog_numbers;
