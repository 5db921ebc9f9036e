//! HTTP transport bound to the gateway host

use async_trait::async_trait;
use enot_core::{ApiConfig, Document, Params};
use reqwest::Client;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::{ApiError, ApiResult};
use crate::query::build_query;

/// HTTP request methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "DELETE" => Ok(Method::Delete),
            _ => Err(ApiError::UnsupportedMethod(s.to_string())),
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Something that can deliver a request to the gateway
#[async_trait]
pub trait Transport: Send + Sync {
    /// Base host requests are resolved against
    fn host(&self) -> &str;

    /// Send `params` as a query string to `path` and decode the JSON object reply
    async fn send(&self, path: &str, params: &Params, method: Method) -> ApiResult<Document>;

    /// Send a GET request
    async fn get(&self, path: &str, params: &Params) -> ApiResult<Document> {
        self.send(path, params, Method::Get).await
    }
}

/// reqwest-backed transport with bounded connect and total timeouts
#[derive(Clone)]
pub struct ApiTransport {
    host: String,
    client: Client,
}

impl ApiTransport {
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            host: config.host.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Full request URL for `path` with the encoded query appended
    pub fn url_for(&self, path: &str, params: &Params) -> String {
        let mut url = format!("{}/{}", self.host, path.trim_start_matches('/'));
        let query = build_query(params);
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }
        url
    }
}

impl fmt::Debug for ApiTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiTransport({})", self.host)
    }
}

#[async_trait]
impl Transport for ApiTransport {
    fn host(&self) -> &str {
        &self.host
    }

    async fn send(&self, path: &str, params: &Params, method: Method) -> ApiResult<Document> {
        // The query carries credentials, so only the path is logged.
        debug!("{} {} ({} params)", method, path, params.len());

        let response = self
            .client
            .request(method.into(), self.url_for(path, params))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("{} {} returned {}", method, path, status);
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        decode_document(&body)
    }
}

/// Decode a response body into a JSON object document
pub fn decode_document(body: &str) -> ApiResult<Document> {
    let value: Value = serde_json::from_str(body)?;
    Document::try_from(value).map_err(|other| ApiError::UnexpectedShape(json_kind(&other)))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
