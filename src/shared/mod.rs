// Shared kernel used by every catalog module

pub mod application; // Transaction boundary traits
pub mod errors; // Shared error types
pub mod infrastructure; // Config + infrastructure defaults
pub mod utils; // Logging and field validation

// Re-exports for convenience
pub use application::transaction::{TransactionManager, TransactionScope};
pub use infrastructure::config::AppConfig;
pub use infrastructure::noop_transaction::NoopTransactionManager;
