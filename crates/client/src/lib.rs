mod auth;
pub mod course;

pub use auth::ApiToken;
pub use course::{Course, CourseApi};

use std::time::Duration;

use log::debug;
use reqwest::{
    blocking::{Client as HttpClient, RequestBuilder},
    Method,
};
use serde::Deserialize;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Used when the caller doesn't give a timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A client for the course administration API
#[derive(Clone)]
pub struct Client {
    base: String,
    token: Option<ApiToken>,
    http: HttpClient,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("http error: {}", .0)]
    HTTPError(#[from] reqwest::Error),

    #[error("server responded with {status}: {body}")]
    Status { status: u16, body: String },

    #[error("serde error: {}", .0)]
    SerdeError(#[from] serde_json::Error),
}

impl Client {
    /// Create a client talking to the API rooted at `base`, e.g. `http://localhost:5000`
    pub fn new(base: impl Into<String>, token: Option<ApiToken>) -> Result<Self> {
        Self::with_timeout(base, token, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        base: impl Into<String>,
        token: Option<ApiToken>,
        timeout: Duration,
    ) -> Result<Self> {
        let http = HttpClient::builder().timeout(timeout).build()?;

        Ok(Client {
            base: base.into(),
            token,
            http,
        })
    }

    /// The base URL this client was created with
    pub fn base(&self) -> &str {
        &self.base
    }

    pub(crate) fn url(&self, path: &str) -> String {
        join_url(&self.base, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let req = self.http.request(method, self.url(path));
        match &self.token {
            Some(token) => req.bearer_auth(token.as_ref()),
            None => req,
        }
    }

    /// Send a request, turning non-2xx responses into [`Error::Status`], and return the body.
    fn send(&self, method: Method, path: &str) -> Result<String> {
        debug!("{} {}", method, path);
        let resp = self.request(method, path).send()?;
        let status = resp.status();
        let body = resp.text()?;

        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }

        if log::log_enabled!(log::Level::Debug) {
            debug!("response: {}", body);
        }

        Ok(body)
    }

    pub(crate) fn get<T: for<'a> Deserialize<'a>>(&self, path: &str) -> Result<T> {
        let body = self.send(Method::GET, path)?;
        Ok(serde_json::from_str(&body)?)
    }

    pub(crate) fn delete(&self, path: &str) -> Result<()> {
        self.send(Method::DELETE, path)?;
        Ok(())
    }

    /// Call server health endpoint
    pub fn health(&self) -> Result<HealthResp> {
        self.get("api/health")
    }
}

/// Response given by the health endpoint API
#[derive(Debug, Deserialize, Clone)]
pub struct HealthResp {
    #[serde(default)]
    pub status: String,
}

/// Join a base URL and a path with exactly one `/` between them
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
