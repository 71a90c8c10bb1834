//! Catalog number value objects
//!
//! The same physical stamp carries a different identifier in each of the
//! four major cataloging standards. Each standard gets its own newtype so
//! a Scott number can never end up in a Michel set; shared behavior sits
//! behind the `CatalogNumber` trait, which keeps parsing and persistence
//! generic over the variant.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// The cataloging standard a number belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    Michel,
    Scott,
    Yvert,
    Gibbons,
}

impl CatalogKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogKind::Michel => "michel",
            CatalogKind::Scott => "scott",
            CatalogKind::Yvert => "yvert",
            CatalogKind::Gibbons => "gibbons",
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single textual catalog number; equality and hashing by value.
pub trait CatalogNumber:
    Clone + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    const KIND: CatalogKind;

    fn new(value: impl Into<String>) -> Self;
    fn value(&self) -> &str;
}

macro_rules! catalog_number {
    ($name:ident, $kind:expr) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl CatalogNumber for $name {
            const KIND: CatalogKind = $kind;

            fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            fn value(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

catalog_number!(MichelNumber, CatalogKind::Michel);
catalog_number!(ScottNumber, CatalogKind::Scott);
catalog_number!(YvertNumber, CatalogKind::Yvert);
catalog_number!(GibbonsNumber, CatalogKind::Gibbons);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn equality_is_by_value() {
        assert_eq!(MichelNumber::new("1"), MichelNumber::new("1"));
        assert_ne!(MichelNumber::new("1"), MichelNumber::new("2"));
    }

    #[test]
    fn sets_collapse_duplicates() {
        let mut numbers = HashSet::new();
        numbers.insert(ScottNumber::new("10a"));
        numbers.insert(ScottNumber::new("10a"));
        assert_eq!(numbers.len(), 1);
    }

    #[test]
    fn kind_is_attached_to_the_variant() {
        assert_eq!(MichelNumber::KIND, CatalogKind::Michel);
        assert_eq!(ScottNumber::KIND, CatalogKind::Scott);
        assert_eq!(YvertNumber::KIND, CatalogKind::Yvert);
        assert_eq!(GibbonsNumber::KIND, CatalogKind::Gibbons);
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&YvertNumber::new("1234b")).unwrap();
        assert_eq!(json, "\"1234b\"");
    }
}
