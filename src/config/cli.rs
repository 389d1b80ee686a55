use crate::core::client::DEFAULT_API_BASE;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "orglens")]
#[command(about = "List the public repositories of a GitHub organization")]
pub struct CliConfig {
    /// Organization login name, e.g. "rust-lang"
    #[arg(long)]
    pub org: String,

    /// Only list repositories under this license key, e.g. "apache-2.0"
    #[arg(long)]
    pub license: Option<String>,

    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("org", &self.org)?;
        validate_url("api_base", &self.api_base)?;
        if let Some(license) = &self.license {
            validate_non_empty_string("license", license)?;
        }
        Ok(())
    }
}
