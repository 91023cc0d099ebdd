use std::{env, time::Duration};

use reqwest::{
    Url,
    header::{HeaderMap, HeaderName, HeaderValue},
};

use crate::error::{ClientError, ClientResult};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Everything needed to reach one backend.
///
/// The same value covers direct access (`http://127.0.0.1:8000`) and access
/// through a development proxy: point `base_url` at the proxy origin instead.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    pub timeout: Duration,
    pub headers: HeaderMap,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ClientError::Config(format!("invalid base url {base_url:?}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::Config(format!(
                "base url {base_url} cannot carry a path"
            )));
        }
        Ok(Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            headers: HeaderMap::new(),
        })
    }

    /// Reads `STOREFRONT_API_URL` and `STOREFRONT_TIMEOUT_SECS`.
    pub fn from_env() -> ClientResult<Self> {
        Self::from_values(
            env::var("STOREFRONT_API_URL").ok(),
            env::var("STOREFRONT_TIMEOUT_SECS").ok(),
        )
    }

    fn from_values(base_url: Option<String>, timeout_secs: Option<String>) -> ClientResult<Self> {
        let base_url = base_url
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout_secs = timeout_secs
            .and_then(|t| t.trim().parse::<u64>().ok())
            .filter(|t| *t > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Ok(Self::new(base_url.trim())?.with_timeout(Duration::from_secs(timeout_secs)))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Adds a header sent with every request.
    pub fn with_header(mut self, name: &str, value: &str) -> ClientResult<Self> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ClientError::Config(format!("invalid header name {name:?}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| ClientError::Config(format!("invalid header value for {name}: {e}")))?;
        self.headers.insert(name, value);
        Ok(self)
    }
}
