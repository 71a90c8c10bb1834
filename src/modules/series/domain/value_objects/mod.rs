pub mod catalog_number;

pub use catalog_number::{
    CatalogKind, CatalogNumber, GibbonsNumber, MichelNumber, ScottNumber, YvertNumber,
};
