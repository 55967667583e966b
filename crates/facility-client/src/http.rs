//! HTTP transport with cookie-based session and envelope handling
//!
//! Every JSON call is checked in the same order: transport, HTTP status,
//! body decoding, then the `{ success, message, data }` envelope. A non-2xx
//! status is a failure whatever the body says.

use std::time::Duration;

use bytes::Bytes;
use reqwest::{Client, RequestBuilder, Response, header};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;
use url::Url;

use facility_api::ApiResponse;

use crate::{
    config::HttpClientConfig,
    error::{ClientError, Result},
};

const JSON: &str = "application/json";

/// HTTP client for the facility API.
///
/// The session cookie set by the login endpoint is kept in the client's
/// cookie store and sent with every subsequent request.
#[derive(Clone, Debug)]
pub struct FacilityHttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl FacilityHttpClient {
    /// Create a new HTTP client
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        Url::parse(&config.base_url).map_err(|e| {
            ClientError::InvalidConfig(format!("base_url '{}': {}", config.base_url, e))
        })?;

        let client = Client::builder()
            .cookie_store(true)
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.read_timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Build full URL from the configured base
    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Make a GET request and unwrap the envelope
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.build_url(path);
        debug!("GET {}", url);
        self.send_json(self.client.get(url).header(header::CONTENT_TYPE, JSON))
            .await
    }

    /// Make a GET request with query parameters and unwrap the envelope
    pub async fn get_json_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T> {
        let url = self.build_url(path);
        debug!("GET {}", url);
        self.send_json(
            self.client
                .get(url)
                .header(header::CONTENT_TYPE, JSON)
                .query(query),
        )
        .await
    }

    /// Make a POST request with JSON body and unwrap the envelope
    pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.build_url(path);
        debug!("POST {}", url);
        self.send_json(self.client.post(url).json(body)).await
    }

    /// Make a POST request without body; only the envelope's `success` flag is checked.
    ///
    /// Returns the server message.
    pub async fn post_empty(&self, path: &str) -> Result<String> {
        let url = self.build_url(path);
        debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .header(header::CONTENT_TYPE, JSON)
            .send()
            .await?;
        let body = Self::success_body(response).await?;
        let envelope: ApiResponse<serde_json::Value> = serde_json::from_slice(&body)?;
        if envelope.success {
            Ok(envelope.message)
        } else {
            Err(facility_api::EnvelopeError::Rejected(envelope.message).into())
        }
    }

    /// Make a POST request with multipart form data (for file uploads)
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T> {
        let url = self.build_url(path);
        debug!("POST (multipart) {}", url);
        let response = self.client.post(url).multipart(form).send().await?;
        Self::decode_envelope(response).await
    }

    /// Make a GET request and return the raw body; no envelope is expected
    pub async fn get_bytes(&self, path: &str) -> Result<Bytes> {
        let url = self.build_url(path);
        debug!("GET (binary) {}", url);
        let response = self.client.get(url).send().await?;
        Self::success_body(response).await
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        Self::decode_envelope(response).await
    }

    async fn decode_envelope<T: DeserializeOwned>(response: Response) -> Result<T> {
        let body = Self::success_body(response).await?;
        let envelope: ApiResponse<T> = serde_json::from_slice(&body)?;
        Ok(envelope.into_data()?)
    }

    /// Read the body of a 2xx response, or turn any other status into an error
    async fn success_body(response: Response) -> Result<Bytes> {
        let status = response.status();
        if status.is_success() {
            Ok(response.bytes().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ClientError::Http {
                status: status.as_u16(),
                body,
            })
        }
    }
}
