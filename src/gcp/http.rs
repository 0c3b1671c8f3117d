//! HTTP utilities for Compute REST API calls

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Sanitize response body for logging
/// Truncates long responses and drops control characters
pub fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.len() > MAX_LOG_BODY_LENGTH {
        let mut end = MAX_LOG_BODY_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... [truncated, {} bytes total]", &body[..end], body.len())
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "")
}

/// `{"error": {"code": 404, "message": "..."}}`
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Turn a non-success response into [`Error::Api`], keeping Google's message
/// when the body carries one.
fn api_error(status: reqwest::StatusCode, body: &str) -> Error {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|e| e.error.message)
        .ok()
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        });
    Error::Api {
        status: status.as_u16(),
        message,
    }
}

/// HTTP client wrapper for Compute API calls
#[derive(Clone)]
pub struct GcpHttpClient {
    client: Client,
}

impl GcpHttpClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("gce-mv/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }

    pub async fn get<R: DeserializeOwned>(&self, url: &str, token: &str) -> Result<R> {
        self.send(self.client.request(Method::GET, url).bearer_auth(token), "GET", url)
            .await
    }

    pub async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        url: &str,
        token: &str,
        body: &B,
    ) -> Result<R> {
        let request = self.client.request(Method::POST, url).bearer_auth(token).json(body);
        self.send(request, "POST", url).await
    }

    pub async fn put<B: Serialize, R: DeserializeOwned>(
        &self,
        url: &str,
        token: &str,
        body: &B,
    ) -> Result<R> {
        let request = self.client.request(Method::PUT, url).bearer_auth(token).json(body);
        self.send(request, "PUT", url).await
    }

    pub async fn delete<R: DeserializeOwned>(&self, url: &str, token: &str) -> Result<R> {
        self.send(self.client.request(Method::DELETE, url).bearer_auth(token), "DELETE", url)
            .await
    }

    async fn send<R: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        method: &str,
        url: &str,
    ) -> Result<R> {
        tracing::debug!("{} {}", method, url);

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // Security: Only log sanitized/truncated error body to avoid leaking sensitive data
            tracing::error!("API error: {} - {}", status, sanitize_for_log(&body));
            return Err(api_error(status, &body));
        }

        // Empty bodies decode as `null`, which suits `()` and `Option<_>` targets
        let body = if body.trim().is_empty() { "null" } else { &body };
        Ok(serde_json::from_str(body)?)
    }
}

/// Format an error for display on the command line
/// Security: Maps API statuses to generic messages instead of raw API details
pub fn format_api_error(error: &Error) -> String {
    match error {
        Error::Api { status: 403, .. } => {
            "Permission denied. Check your GCP IAM permissions.".to_string()
        }
        Error::Api { status: 401, .. } | Error::Auth { .. } => {
            "Authentication failed. Run 'gcloud auth application-default login'.".to_string()
        }
        Error::Api { status: 404, .. } => "Resource not found.".to_string(),
        Error::Api { status: 429, .. } => {
            "Rate limit exceeded. Please try again later.".to_string()
        }
        Error::Api { status: 400, .. } => "Invalid request. Check your parameters.".to_string(),
        Error::Api { status: 409, .. } => {
            "Resource conflict. The resource may already exist or be in use.".to_string()
        }
        Error::Api { status, .. } if *status >= 500 => {
            "GCP service temporarily unavailable. Please try again.".to_string()
        }
        Error::Transport(_) => {
            "Request failed. Check your network connection and try again.".to_string()
        }
        other => {
            let error_str = other.to_string();
            let sanitized = error_str
                .chars()
                .filter(|c| c.is_ascii_graphic() || *c == ' ')
                .take(160)
                .collect::<String>();
            if sanitized.len() < error_str.len() {
                format!("{}...", sanitized)
            } else {
                sanitized
            }
        }
    }
}
