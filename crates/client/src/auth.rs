//! Authentication for the admin API.
//!
//! The API takes a bearer token, which is read from the config file and attached to every request.
use serde::{Deserialize, Serialize};

/// A bearer token, wrapped so we don't print it by accident
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiToken(String);

impl std::fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ApiToken (******)")
    }
}

impl From<String> for ApiToken {
    fn from(value: String) -> Self {
        ApiToken(value)
    }
}

impl From<ApiToken> for String {
    fn from(val: ApiToken) -> Self {
        val.0
    }
}

impl AsRef<str> for ApiToken {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}
