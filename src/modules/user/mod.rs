/// Actor identity boundary
///
/// Authentication and sessions live outside this core; the catalog only
/// needs to know who is acting so audit fields can be stamped.
pub mod domain;
pub mod infrastructure;

// Re-exports for easy access
pub use domain::{User, UserService};
pub use infrastructure::FixedUserService;
