//! # HTTP Fetch Adapter
//!
//! Issues one GET per data source, parses the body as JSON regardless of
//! status, and classifies the outcome. Every failure path resolves to a
//! [`FetchError`]; nothing is retried at this layer.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// User agent sent with every widget request
const USER_AGENT: &str = concat!("livewidget/", env!("CARGO_PKG_VERSION"));

/// A fully-formed GET request for one data source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDescriptor {
    url: String,
}

impl SourceDescriptor {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for SourceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GET {}", self.url)
    }
}

/// What went wrong below the application layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    Connect,
    Timeout,
    MalformedBody,
    Request,
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TransportKind::Connect => "network unreachable",
            TransportKind::Timeout => "request timed out",
            TransportKind::MalformedBody => "malformed response body",
            TransportKind::Request => "request failed",
        };
        f.write_str(text)
    }
}

/// Failure of a single fetch
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// Network unreachable, timeout or an unreadable body
    #[error("{kind}: {message}")]
    Transport { kind: TransportKind, message: String },

    /// Well-formed error reported by the remote source
    #[error("{message}")]
    Application { status: u16, message: String },
}

impl FetchError {
    pub fn malformed(message: impl Into<String>) -> Self {
        FetchError::Transport {
            kind: TransportKind::MalformedBody,
            message: message.into(),
        }
    }

    /// Whether the response arrived but its body could not be understood
    pub fn is_malformed_body(&self) -> bool {
        matches!(
            self,
            FetchError::Transport {
                kind: TransportKind::MalformedBody,
                ..
            }
        )
    }

    /// Rewrite the message of an application error, leaving transport errors as they are
    pub fn map_application_message(self, f: impl FnOnce(String) -> String) -> Self {
        match self {
            FetchError::Application { status, message } => FetchError::Application {
                status,
                message: f(message),
            },
            other => other,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        let kind = if error.is_timeout() {
            TransportKind::Timeout
        } else if error.is_connect() {
            TransportKind::Connect
        } else if error.is_decode() || error.is_body() {
            TransportKind::MalformedBody
        } else {
            TransportKind::Request
        };
        FetchError::Transport {
            kind,
            message: error.to_string(),
        }
    }
}

/// A remote data source a widget can pull its payload from
#[async_trait]
pub trait DataSource<T>: Send + Sync {
    /// Request this source issues
    fn descriptor(&self) -> &SourceDescriptor;

    /// Issue exactly one request and resolve it to a payload or a [`FetchError`]
    async fn fetch(&self) -> Result<T, FetchError>;
}

/// Single-shot JSON GET client shared by all widget sources
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher with the default client configuration
    pub fn new() -> anyhow::Result<Self> {
        tracing::debug!("Creating HTTP client for widget sources");
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }

    /// GET `source` and decode a successful body as `T`
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        source: &SourceDescriptor,
    ) -> Result<T, FetchError> {
        let value = self.get_json_value(source).await?;
        serde_json::from_value(value).map_err(|e| FetchError::malformed(e.to_string()))
    }

    /// GET `source` and return the parsed JSON body of a successful response
    async fn get_json_value(&self, source: &SourceDescriptor) -> Result<Value, FetchError> {
        let response = self.get(source).await?;

        if !response.status.is_success() {
            let message = response
                .body
                .as_ref()
                .and_then(|value| value.get("error"))
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| generic_failure_message(response.status));
            tracing::warn!("{} answered {}: {}", source, response.status.as_u16(), message);
            return Err(FetchError::Application {
                status: response.status.as_u16(),
                message,
            });
        }

        response
            .body
            .ok_or_else(|| FetchError::malformed("response body is not JSON"))
    }

    /// GET `source` and keep the status next to whatever JSON the body held.
    ///
    /// Only transport failures are errors here; status handling is up to the caller.
    pub async fn get(&self, source: &SourceDescriptor) -> Result<JsonResponse, FetchError> {
        tracing::debug!("Issuing {}", source);

        let response = self.client.get(source.url()).send().await.map_err(|e| {
            let error = FetchError::from(e);
            tracing::warn!("Transport failure for {}: {}", source, error);
            error
        })?;
        let status = response.status();
        let bytes = response.bytes().await?;

        tracing::debug!(
            "Received {} ({} bytes) for {}",
            status.as_u16(),
            bytes.len(),
            source
        );

        Ok(JsonResponse {
            status,
            body: serde_json::from_slice(&bytes).ok(),
        })
    }
}

/// Status and JSON body of a completed request
#[derive(Debug, Clone)]
pub struct JsonResponse {
    pub status: StatusCode,
    /// `None` when the body is empty or not JSON
    pub body: Option<Value>,
}

fn generic_failure_message(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("request failed with status {} {}", status.as_u16(), reason),
        None => format!("request failed with status {}", status.as_u16()),
    }
}
