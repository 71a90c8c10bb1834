pub mod country;
pub mod image;
pub mod series;
pub mod user;
