use crate::core::memo::Memo;
use crate::core::nested::access_nested;
use crate::domain::ports::JsonFetcher;
use crate::utils::error::{ClientError, Result};
use serde_json::Value;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Returns true when the repository record carries the requested license key.
///
/// A record without a `license` object, or with a non-string `license.key`,
/// never matches.
pub fn has_license(repo: &Value, license_key: &str) -> bool {
    match access_nested(repo, &["license", "key"]) {
        Ok(key) => key.as_str() == Some(license_key),
        Err(_) => false,
    }
}

/// Client for the public repository listing of a GitHub organization.
///
/// Fetches go through the injected [`JsonFetcher`]; the organization payload
/// and the repository payload are each fetched at most once per client
/// instance. Fetch and decode failures propagate to the caller unchanged.
pub struct OrgClient<F: JsonFetcher> {
    org: String,
    api_base: String,
    fetcher: F,
    org_payload: Memo<Value>,
    repos_payload: Memo<Value>,
}

impl<F: JsonFetcher> OrgClient<F> {
    pub fn new(fetcher: F, org: impl Into<String>) -> Self {
        Self::with_api_base(fetcher, org, DEFAULT_API_BASE)
    }

    /// Points the client at a different API base, e.g. a mock server.
    pub fn with_api_base(fetcher: F, org: impl Into<String>, api_base: impl Into<String>) -> Self {
        Self {
            org: org.into(),
            api_base: api_base.into(),
            fetcher,
            org_payload: Memo::new(),
            repos_payload: Memo::new(),
        }
    }

    pub fn org_name(&self) -> &str {
        &self.org
    }

    /// Organization metadata, fetched once and cached on the instance.
    pub async fn org(&self) -> Result<&Value> {
        self.org_payload
            .get_or_try_init(|| async {
                let url = format!("{}/orgs/{}", self.api_base, self.org);
                tracing::debug!("Fetching organization metadata from {}", url);
                self.fetcher.get_json(&url).await
            })
            .await
    }

    /// URL of the organization's repository collection, taken from the org
    /// metadata.
    pub async fn repos_url(&self) -> Result<String> {
        let org = self.org().await?;
        let url = access_nested(org, &["repos_url"])?;
        url.as_str()
            .map(str::to_string)
            .ok_or_else(|| ClientError::Payload {
                message: format!("repos_url is not a string for org '{}'", self.org),
            })
    }

    async fn repos(&self) -> Result<&Value> {
        self.repos_payload
            .get_or_try_init(|| async {
                let url = self.repos_url().await?;
                tracing::debug!("Fetching repository listing from {}", url);
                self.fetcher.get_json(&url).await
            })
            .await
    }

    /// Names of the organization's public repositories, in payload order.
    ///
    /// With a license filter, only repositories whose `license.key` equals the
    /// requested identifier exactly are included; repositories without a
    /// license field are excluded. A record without a string `name` is a
    /// [`ClientError::Payload`] error.
    pub async fn public_repos(&self, license: Option<&str>) -> Result<Vec<String>> {
        let payload = self.repos().await?;
        let repos = payload.as_array().ok_or_else(|| ClientError::Payload {
            message: format!("repository listing for org '{}' is not an array", self.org),
        })?;

        let mut names = Vec::new();
        for repo in repos {
            if let Some(wanted) = license {
                if !has_license(repo, wanted) {
                    continue;
                }
            }
            let name = repo
                .get("name")
                .and_then(Value::as_str)
                .ok_or_else(|| ClientError::Payload {
                    message: format!(
                        "repository record without a string name for org '{}'",
                        self.org
                    ),
                })?;
            names.push(name.to_string());
        }

        tracing::debug!(
            "Collected {} repository names for org '{}'",
            names.len(),
            self.org
        );
        Ok(names)
    }
}
