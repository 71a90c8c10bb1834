pub mod entities;
pub mod service;

pub use entities::User;
pub use service::UserService;
