pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::http::HttpJsonFetcher;
pub use crate::core::client::{has_license, OrgClient, DEFAULT_API_BASE};
pub use crate::core::memo::Memo;
pub use crate::core::nested::access_nested;
pub use crate::domain::ports::JsonFetcher;
pub use crate::utils::error::{ClientError, Result};
