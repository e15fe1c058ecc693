//! Authenticated request core.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every network call the console makes flows through [`ApiClient`]. It owns
//! the bearer-header rule (attached iff a token is stored), JSON body
//! encoding, and uniform failure surfacing: any non-2xx response becomes
//! [`RequestError::Status`] whose message is the raw response text.
//!
//! ERROR HANDLING
//! ==============
//! [`ApiClient::get`] and [`ApiClient::request`] return the parsed JSON
//! unchecked. The typed helpers below them decode into `records` types and
//! report shape mismatches as [`RequestError::Decode`]. Nothing retries,
//! times out, or cancels; a 401 is surfaced like any other status and does
//! not touch the session.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::rc::Rc;

use records::{ConfigBlob, CrawlTrigger, Job, LoginRequest, Run, Source, SourcePatch, TokenResponse};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ConsoleConfig;
use crate::session::Session;
use crate::transport::{AUTHORIZATION, CONTENT_TYPE, HttpRequest, JSON_CONTENT_TYPE, Method, Transport, TransportError};
use crate::views::jobs::JobQuery;
use crate::views::settings::ConfigFamily;

/// Failure of a single API call.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// Non-success status; the message is the raw response body.
    #[error("{body}")]
    Status { status: u16, body: String },

    /// The request never produced a response.
    #[error("{0}")]
    Transport(#[from] TransportError),

    /// Success status but the body is not JSON.
    #[error("response is not valid JSON: {0}")]
    InvalidJson(String),

    /// Valid JSON that does not match the expected record shape.
    #[error("unexpected response shape: {0}")]
    Decode(String),

    /// A settings buffer that failed to parse before any request was sent.
    #[error("config text is not valid JSON: {0}")]
    MalformedEdit(String),
}

impl RequestError {
    /// HTTP status for server-rejected calls.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Generic authenticated JSON client over an injected [`Transport`].
#[derive(Clone)]
pub struct ApiClient {
    base: String,
    session: Session,
    transport: Rc<dyn Transport>,
}

impl ApiClient {
    #[must_use]
    pub fn new(config: &ConsoleConfig, session: Session, transport: Rc<dyn Transport>) -> Self {
        Self { base: config.api_base.clone(), session, transport }
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The session store whose token this client presents.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// `GET base + path`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn get(&self, path: &str) -> Result<Value, RequestError> {
        self.request(path, Method::Get, None).await
    }

    /// Issue `method base + path`, JSON-encoding `body` when present.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Status`] for non-2xx responses,
    /// [`RequestError::Transport`] when no response arrives, and
    /// [`RequestError::InvalidJson`] when a 2xx body is not JSON.
    pub async fn request(&self, path: &str, method: Method, body: Option<&Value>) -> Result<Value, RequestError> {
        let mut headers = Vec::with_capacity(2);
        if let Some(token) = self.session.get() {
            headers.push((AUTHORIZATION, format!("Bearer {token}")));
        }
        let body = body.map(|value| {
            headers.push((CONTENT_TYPE, JSON_CONTENT_TYPE.to_owned()));
            value.to_string()
        });

        tracing::debug!(%method, path, "api request");
        let response = self
            .transport
            .send(HttpRequest { method, url: format!("{}{path}", self.base), headers, body })
            .await?;

        if !response.is_success() {
            tracing::debug!(%method, path, status = response.status, "api request rejected");
            return Err(RequestError::Status { status: response.status, body: response.body });
        }
        parse_body(&response.body)
    }

    async fn get_as<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestError> {
        decode(self.get(path).await?)
    }

    async fn request_as<T: DeserializeOwned>(
        &self,
        path: &str,
        method: Method,
        body: Option<&Value>,
    ) -> Result<T, RequestError> {
        decode(self.request(path, method, body).await?)
    }

    /// `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Any [`RequestError`]; a rejected credential pair is a `Status` error.
    pub async fn post_login(&self, credentials: &LoginRequest) -> Result<TokenResponse, RequestError> {
        let body = encode(credentials)?;
        self.request_as("/auth/login", Method::Post, Some(&body)).await
    }

    /// `GET /jobs?q=...` with the query's optional filters.
    ///
    /// # Errors
    ///
    /// Any [`RequestError`].
    pub async fn list_jobs(&self, query: &JobQuery) -> Result<Vec<Job>, RequestError> {
        self.get_as(&query.to_path()).await
    }

    /// `GET /jobs/{id}`.
    ///
    /// # Errors
    ///
    /// Any [`RequestError`].
    pub async fn get_job(&self, id: i64) -> Result<Job, RequestError> {
        self.get_as(&format!("/jobs/{id}")).await
    }

    /// `POST /crawl/trigger`. The summary is decoded leniently; an
    /// unexpected body yields an empty summary rather than an error.
    ///
    /// # Errors
    ///
    /// Any [`RequestError`] from the request itself.
    pub async fn trigger_crawl(&self) -> Result<CrawlTrigger, RequestError> {
        let raw = self.request("/crawl/trigger", Method::Post, None).await?;
        Ok(serde_json::from_value(raw).unwrap_or_default())
    }

    /// `GET /runs`, optionally capped by `limit`.
    ///
    /// # Errors
    ///
    /// Any [`RequestError`].
    pub async fn list_runs(&self, limit: Option<u32>) -> Result<Vec<Run>, RequestError> {
        match limit {
            Some(limit) => self.get_as(&format!("/runs?limit={limit}")).await,
            None => self.get_as("/runs").await,
        }
    }

    /// `GET /sources`.
    ///
    /// # Errors
    ///
    /// Any [`RequestError`].
    pub async fn list_sources(&self) -> Result<Vec<Source>, RequestError> {
        self.get_as("/sources").await
    }

    /// `PATCH /sources/{id}`. The updated row in the response is returned
    /// raw; views reload the list instead of using it.
    ///
    /// # Errors
    ///
    /// Any [`RequestError`].
    pub async fn patch_source(&self, id: i64, patch: SourcePatch) -> Result<Value, RequestError> {
        let body = encode(&patch)?;
        self.request(&format!("/sources/{id}"), Method::Patch, Some(&body)).await
    }

    /// `GET /settings/{family}`.
    ///
    /// # Errors
    ///
    /// Any [`RequestError`].
    pub async fn get_config(&self, family: ConfigFamily) -> Result<ConfigBlob, RequestError> {
        self.get(family.path()).await
    }

    /// `PUT /settings/{family}` with `config` as the body.
    ///
    /// # Errors
    ///
    /// Any [`RequestError`].
    pub async fn put_config(&self, family: ConfigFamily, config: &ConfigBlob) -> Result<ConfigBlob, RequestError> {
        self.request(family.path(), Method::Put, Some(config)).await
    }

    /// `GET /health` liveness probe.
    ///
    /// # Errors
    ///
    /// Any [`RequestError`].
    pub async fn health(&self) -> Result<Value, RequestError> {
        self.get("/health").await
    }
}

fn parse_body(body: &str) -> Result<Value, RequestError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|e| RequestError::InvalidJson(e.to_string()))
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, RequestError> {
    serde_json::from_value(value).map_err(|e| RequestError::Decode(e.to_string()))
}

fn encode<T: serde::Serialize>(value: &T) -> Result<Value, RequestError> {
    serde_json::to_value(value).map_err(|e| RequestError::Decode(e.to_string()))
}
