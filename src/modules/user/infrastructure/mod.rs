pub mod fixed_user_service;

pub use fixed_user_service::FixedUserService;
