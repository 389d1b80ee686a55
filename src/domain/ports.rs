use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Capability to fetch a URL and decode the response body as JSON.
///
/// The organization client is generic over this trait so tests can swap the
/// network path for a stub.
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    async fn get_json(&self, url: &str) -> Result<Value>;
}
