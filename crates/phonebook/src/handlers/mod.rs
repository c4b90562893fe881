pub mod error;
pub mod health;
pub mod phone_numbers;

pub use error::AppError;
