use std::collections::HashSet;

use crate::modules::series::domain::value_objects::CatalogNumber;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

/// Parse a comma-separated catalog number string into a set of value
/// objects.
///
/// Tokens are trimmed before use, so `"1, 2"` and `"1,2"` parse the same.
/// An empty token (`"1,,2"`, a trailing comma, or a blank input) is a
/// user typo and rejected rather than silently dropped. Duplicates
/// collapse through set semantics.
pub fn parse_catalog_numbers<N: CatalogNumber>(raw: &str) -> AppResult<HashSet<N>> {
    let mut numbers = HashSet::new();

    for token in raw.split(',') {
        let token = token.trim();
        if token.is_empty() {
            return Err(AppError::InvalidInput(format!(
                "{} numbers '{}' contain an empty entry",
                N::KIND,
                raw
            )));
        }
        Validator::validate_catalog_number(token)?;
        numbers.insert(N::new(token));
    }

    Ok(numbers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::series::domain::value_objects::{GibbonsNumber, MichelNumber};

    #[test]
    fn parses_comma_separated_numbers() {
        let numbers: HashSet<MichelNumber> = parse_catalog_numbers("1,2").unwrap();
        let expected: HashSet<MichelNumber> =
            [MichelNumber::new("1"), MichelNumber::new("2")].into();
        assert_eq!(numbers, expected);
    }

    #[test]
    fn trims_whitespace_around_tokens() {
        let numbers: HashSet<MichelNumber> = parse_catalog_numbers(" 1, 2 ").unwrap();
        assert_eq!(numbers.len(), 2);
        assert!(numbers.contains(&MichelNumber::new("1")));
        assert!(numbers.contains(&MichelNumber::new("2")));
    }

    #[test]
    fn duplicates_collapse() {
        let numbers: HashSet<GibbonsNumber> = parse_catalog_numbers("1,1,1").unwrap();
        assert_eq!(numbers.len(), 1);
    }

    #[test]
    fn rejects_empty_token() {
        assert!(parse_catalog_numbers::<MichelNumber>("1,,2").is_err());
        assert!(parse_catalog_numbers::<MichelNumber>("1,2,").is_err());
        assert!(parse_catalog_numbers::<MichelNumber>("").is_err());
        assert!(parse_catalog_numbers::<MichelNumber>("   ").is_err());
    }

    #[test]
    fn rejects_invalid_characters() {
        assert!(parse_catalog_numbers::<MichelNumber>("1,2#3").is_err());
    }

    #[test]
    fn accepts_letter_suffixes_and_prefixes() {
        let numbers: HashSet<GibbonsNumber> = parse_catalog_numbers("MS1234,22a").unwrap();
        assert_eq!(numbers.len(), 2);
    }
}
