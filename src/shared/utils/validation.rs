use chrono::{Datelike, Utc};
use regex::Regex;

use crate::shared::errors::AppError;

/// Lowest year a stamp series can be released: the Penny Black, 1840.
pub const EARLIEST_RELEASE_YEAR: i32 = 1840;

/// Upper bound for the number of stamps in a single series.
pub const MAX_STAMPS_IN_SERIES: u32 = 50;

/// Longest comment we accept for a series.
pub const MAX_COMMENT_LENGTH: usize = 255;

/// Longest single catalog number accepted by the parser.
pub const MAX_CATALOG_NUMBER_LENGTH: usize = 10;

pub struct Validator;

impl Validator {
    pub fn validate_quantity(quantity: u32) -> Result<(), AppError> {
        if quantity == 0 {
            return Err(AppError::InvalidInput(
                "Quantity must be positive".to_string(),
            ));
        }
        if quantity > MAX_STAMPS_IN_SERIES {
            return Err(AppError::InvalidInput(format!(
                "Quantity cannot exceed {} stamps",
                MAX_STAMPS_IN_SERIES
            )));
        }
        Ok(())
    }

    pub fn validate_release_year(year: i32) -> Result<(), AppError> {
        let current_year = Utc::now().year();
        if year < EARLIEST_RELEASE_YEAR || year > current_year {
            return Err(AppError::InvalidInput(format!(
                "Release year must be between {} and {}",
                EARLIEST_RELEASE_YEAR, current_year
            )));
        }
        Ok(())
    }

    pub fn validate_comment(comment: &str) -> Result<(), AppError> {
        if comment.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Comment must be non empty".to_string(),
            ));
        }
        if comment.len() > MAX_COMMENT_LENGTH {
            return Err(AppError::InvalidInput(format!(
                "Comment too long (max {} characters)",
                MAX_COMMENT_LENGTH
            )));
        }
        Ok(())
    }

    /// A single catalog number, already trimmed by the parser.
    pub fn validate_catalog_number(number: &str) -> Result<(), AppError> {
        if number.is_empty() {
            return Err(AppError::InvalidInput(
                "Catalog number cannot be empty".to_string(),
            ));
        }
        if number.len() > MAX_CATALOG_NUMBER_LENGTH {
            return Err(AppError::InvalidInput(format!(
                "Catalog number too long (max {} characters)",
                MAX_CATALOG_NUMBER_LENGTH
            )));
        }

        let re = Regex::new(r"^[A-Za-z0-9.\-]+$").unwrap();
        if !re.is_match(number) {
            return Err(AppError::InvalidInput(format!(
                "Catalog number '{}' contains invalid characters",
                number
            )));
        }
        Ok(())
    }

    pub fn validate_country_name(name: &str) -> Result<(), AppError> {
        if name.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Country name cannot be empty".to_string(),
            ));
        }
        if name.len() > 100 {
            return Err(AppError::InvalidInput(
                "Country name too long (max 100 characters)".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_bounds() {
        assert!(Validator::validate_quantity(1).is_ok());
        assert!(Validator::validate_quantity(MAX_STAMPS_IN_SERIES).is_ok());
        assert!(Validator::validate_quantity(0).is_err());
        assert!(Validator::validate_quantity(MAX_STAMPS_IN_SERIES + 1).is_err());
    }

    #[test]
    fn release_year_bounds() {
        assert!(Validator::validate_release_year(1840).is_ok());
        assert!(Validator::validate_release_year(2000).is_ok());
        assert!(Validator::validate_release_year(1839).is_err());
        assert!(Validator::validate_release_year(Utc::now().year() + 1).is_err());
    }

    #[test]
    fn blank_comment_is_rejected() {
        assert!(Validator::validate_comment("  ").is_err());
        assert!(Validator::validate_comment("Some text").is_ok());
    }

    #[test]
    fn catalog_number_charset() {
        assert!(Validator::validate_catalog_number("1").is_ok());
        assert!(Validator::validate_catalog_number("22a").is_ok());
        assert!(Validator::validate_catalog_number("MS-1234.b").is_ok());
        assert!(Validator::validate_catalog_number("").is_err());
        assert!(Validator::validate_catalog_number("1 2").is_err());
        assert!(Validator::validate_catalog_number("12345678901").is_err());
    }

    #[test]
    fn country_name_checks() {
        assert!(Validator::validate_country_name("Italy").is_ok());
        assert!(Validator::validate_country_name(" ").is_err());
        assert!(Validator::validate_country_name(&"x".repeat(101)).is_err());
    }
}
