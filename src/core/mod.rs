pub mod client;
pub mod memo;
pub mod nested;

pub use crate::domain::ports::JsonFetcher;
pub use crate::utils::error::Result;
