use std::time::Duration;

use anyhow::Context;
use reqwest::Client;
use serde_json::{Map, Value};

/// Outcome of one upstream call. Every failure mode collapses into `Failure`.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchResult {
    Success(Value),
    Failure,
}

impl FetchResult {
    /// The parsed body, or an empty object when the call failed.
    pub fn into_value(self) -> Value {
        match self {
            FetchResult::Success(value) => value,
            FetchResult::Failure => Value::Object(Map::new()),
        }
    }
}

/// Shared HTTP client used for every outbound call.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
}

impl UpstreamClient {
    pub fn new(timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("failed to build upstream HTTP client")?;
        Ok(Self { client })
    }

    /// Plain GET without auth or extra headers.
    pub async fn fetch(&self, url: &str) -> FetchResult {
        match self.try_fetch(url).await {
            Ok(value) => FetchResult::Success(value),
            Err(err) => {
                tracing::warn!(url, error = %err, "upstream unavailable");
                FetchResult::Failure
            }
        }
    }

    async fn try_fetch(&self, url: &str) -> Result<Value, reqwest::Error> {
        self.client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await
    }
}
