//! HTTP seam for the requester.
//!
//! [`ReqwestTransport`] is the production implementation. Tests swap in
//! stubs through [`ChatTransport`].

use crate::error::{ConfigError, RequesterError};

use common::{HttpStatusCode, RedactedApiKey};

use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use url::Url;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Status and full body text, read regardless of status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: HttpStatusCode,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: impl Into<HttpStatusCode>, body: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            body: body.into(),
        }
    }
}

/// One blocking JSON POST with bearer auth.
pub trait ChatTransport {
    /// # Errors
    ///
    /// Returns [`RequesterError::Network`] on connect/timeout/I-O failure.
    /// A non-2xx status is NOT an error at this layer.
    fn post_json(
        &self,
        endpoint: &Url,
        api_key: &RedactedApiKey,
        body: Vec<u8>,
    ) -> Result<RawResponse, RequesterError>;
}

impl<T: ChatTransport + ?Sized> ChatTransport for &T {
    fn post_json(
        &self,
        endpoint: &Url,
        api_key: &RedactedApiKey,
        body: Vec<u8>,
    ) -> Result<RawResponse, RequesterError> {
        (**self).post_json(endpoint, api_key, body)
    }
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// `read_timeout` bounds the whole exchange after connect.
    pub fn new(connect_timeout: Duration, read_timeout: Duration) -> Result<Self, RequesterError> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(read_timeout)
            .build()?;

        Ok(Self { client })
    }
}

impl ChatTransport for ReqwestTransport {
    fn post_json(
        &self,
        endpoint: &Url,
        api_key: &RedactedApiKey,
        body: Vec<u8>,
    ) -> Result<RawResponse, RequesterError> {
        let mut authorization = HeaderValue::from_str(&api_key.bearer_header_value())
            .map_err(|_| {
                ConfigError::validation("API key contains characters not allowed in an HTTP header")
            })?;
        authorization.set_sensitive(true);

        let response = self
            .client
            .post(endpoint.clone())
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header(AUTHORIZATION, authorization)
            .body(body)
            .send()?;

        let status = HttpStatusCode(response.status().as_u16());
        let bytes = response.bytes()?;
        let body = String::from_utf8_lossy(&bytes).into_owned();

        debug!("POST {} -> HTTP {} ({} bytes)", endpoint, status, body.len());
        Ok(RawResponse { status, body })
    }
}
