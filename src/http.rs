//! HTTP collaborator for the radar endpoints.
//!
//! The radar speaks plain HTTP on its own subnet. Transport failures are
//! folded into the response as a negative code; a positive code always
//! means the device answered.

use std::time::Duration;

use crate::config;
use crate::error::RadarResult;

/// Outcome of a single GET: positive `code` means the device answered.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub code: i32,
    pub body: String,
}

impl HttpResponse {
    /// Transport-level failure carrying the error text as the body.
    pub fn transport_error(detail: impl Into<String>) -> Self {
        Self {
            code: -1,
            body: detail.into(),
        }
    }
}

/// Single GET as the poll cycle sees it: one request, one response
pub trait HttpClient {
    async fn get(&self, url: &str) -> HttpResponse;
}

/// reqwest-backed client with a fixed per-request timeout
#[derive(Debug, Clone)]
pub struct DefaultHttpClient {
    client: reqwest::Client,
}

impl DefaultHttpClient {
    pub fn new() -> RadarResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config::HTTP_TIMEOUT_SECS))
            .build()
            .map_err(|e| crate::error::RadarError::ConnectFailed {
                reason: e.to_string(),
            })?;
        Ok(Self { client })
    }
}

impl HttpClient for DefaultHttpClient {
    async fn get(&self, url: &str) -> HttpResponse {
        let resp = match self.client.get(url).send().await {
            Ok(resp) => resp,
            Err(e) => return HttpResponse::transport_error(e.to_string()),
        };

        let code = resp.status().as_u16() as i32;
        match resp.text().await {
            Ok(body) => HttpResponse { code, body },
            Err(e) => HttpResponse::transport_error(e.to_string()),
        }
    }
}
