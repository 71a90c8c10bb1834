pub mod transaction;

pub use transaction::{TransactionManager, TransactionScope};
