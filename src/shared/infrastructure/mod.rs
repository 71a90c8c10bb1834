pub mod config;
pub mod noop_transaction;

pub use config::AppConfig;
pub use noop_transaction::NoopTransactionManager;
