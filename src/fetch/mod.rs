pub mod page;

use crate::error::{AiReadyError, Result};
use crate::types::config::DEFAULT_USER_AGENT;
use std::time::Duration;
use ureq::Agent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Timeout-bounded HTTP GET. Non-2xx statuses are data, not errors.
pub trait Fetcher: Send + Sync {
    fn get(&self, url: &str) -> Result<FetchResponse>;
}

pub struct HttpFetcher {
    agent: Agent,
    user_agent: String,
}

impl HttpFetcher {
    pub fn new(timeout_ms: u64, user_agent: &str) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(Duration::from_millis(timeout_ms)))
            .http_status_as_error(false)
            .build();
        Self {
            agent: Agent::new_with_config(config),
            user_agent: user_agent.to_string(),
        }
    }
}

impl Fetcher for HttpFetcher {
    fn get(&self, url: &str) -> Result<FetchResponse> {
        let mut response = self
            .agent
            .get(url)
            .header("User-Agent", self.user_agent.as_str())
            .call()
            .map_err(|e| classify(url, e))?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| classify(url, e))?;
        tracing::debug!(url, status, bytes = body.len(), "fetched");
        Ok(FetchResponse { status, body })
    }
}

/// One-off GET with the default user agent.
pub fn fetch_with_timeout(url: &str, timeout_ms: u64) -> Result<FetchResponse> {
    HttpFetcher::new(timeout_ms, DEFAULT_USER_AGENT).get(url)
}

fn classify(url: &str, err: ureq::Error) -> AiReadyError {
    match err {
        ureq::Error::Timeout(_) => AiReadyError::Timeout(url.to_string()),
        other => AiReadyError::Fetch(format!("{url}: {other}")),
    }
}

/// Refuses every request; file checks fall back to their "not found" results.
pub struct OfflineFetcher;

impl Fetcher for OfflineFetcher {
    fn get(&self, url: &str) -> Result<FetchResponse> {
        Err(AiReadyError::Fetch(format!("{url}: offline mode")))
    }
}

#[cfg(test)]
pub mod fake {
    use super::{FetchResponse, Fetcher};
    use crate::error::{AiReadyError, Result};
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Serves canned responses and records every requested URL.
    /// Unknown URLs answer 404.
    #[derive(Default)]
    pub struct FakeFetcher {
        responses: HashMap<String, std::result::Result<FetchResponse, String>>,
        requests: Mutex<Vec<String>>,
    }

    impl FakeFetcher {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with(mut self, url: &str, status: u16, body: &str) -> Self {
            self.responses.insert(
                url.to_string(),
                Ok(FetchResponse {
                    status,
                    body: body.to_string(),
                }),
            );
            self
        }

        pub fn failing(mut self, url: &str) -> Self {
            self.responses
                .insert(url.to_string(), Err("connection reset".to_string()));
            self
        }

        pub fn requests(&self) -> Vec<String> {
            self.requests.lock().expect("request log lock").clone()
        }
    }

    impl Fetcher for FakeFetcher {
        fn get(&self, url: &str) -> Result<FetchResponse> {
            self.requests
                .lock()
                .expect("request log lock")
                .push(url.to_string());
            match self.responses.get(url) {
                Some(Ok(response)) => Ok(response.clone()),
                Some(Err(message)) => Err(AiReadyError::Fetch(message.clone())),
                None => Ok(FetchResponse {
                    status: 404,
                    body: "<!DOCTYPE html><html><body>404 Not Found</body></html>".to_string(),
                }),
            }
        }
    }
}
