//! Typed access to the storefront backend.
//!
//! Every endpoint wrapper funnels through [`ApiClient::send`]: one request,
//! no retries, and the response body decoded into the wrapper's return type.

use std::time::Instant;

use reqwest::{Client, Method, Url, multipart::Form};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use uuid::Uuid;

use crate::{
    config::ClientConfig,
    error::{ClientError, ClientResult},
};

mod admin;
mod chat;
mod health;
mod orders;
mod products;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request payload, by wire encoding.
#[derive(Debug)]
pub enum RequestBody {
    Empty,
    Json(Value),
    Multipart(Form),
}

impl RequestBody {
    pub fn json<T: Serialize>(payload: &T) -> ClientResult<Self> {
        serde_json::to_value(payload)
            .map(RequestBody::Json)
            .map_err(ClientError::Encode)
    }
}

/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .default_headers(config.headers)
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    pub fn from_env() -> ClientResult<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    pub fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::Config(format!("base url {} cannot carry a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Resolves an asset reference such as `/uploads/abc.png` against the backend.
    ///
    /// Absolute URLs are returned unchanged. Relative references keep any path
    /// prefix of the base URL, so they also resolve through a proxy mount.
    pub fn asset_url(&self, reference: &str) -> ClientResult<Url> {
        if let Ok(url) = Url::parse(reference) {
            return Ok(url);
        }
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(reference.trim_start_matches('/'))
            .map_err(|e| ClientError::Config(format!("invalid asset reference {reference:?}: {e}")))
    }

    /// Sends one request and decodes the JSON response body.
    pub async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
        body: RequestBody,
    ) -> ClientResult<T> {
        let url = self.endpoint(segments)?;
        let request_id = Uuid::new_v4();

        let request = self
            .http
            .request(method.clone(), url.clone())
            .header(REQUEST_ID_HEADER, request_id.to_string());
        let request = match body {
            RequestBody::Empty => request,
            RequestBody::Json(value) => request.json(&value),
            RequestBody::Multipart(form) => request.multipart(form),
        };

        tracing::debug!(
            request_id = %request_id,
            method = %method,
            url = %url,
            "request started"
        );
        let started = Instant::now();
        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        tracing::debug!(
            request_id = %request_id,
            status = %status,
            ms = %started.elapsed().as_millis(),
            "request finished"
        );

        if !status.is_success() {
            return Err(ClientError::Status {
                status,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        serde_json::from_slice(&bytes).map_err(ClientError::Decode)
    }
}
