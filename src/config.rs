use std::time::Duration;

use crate::Mixpanel;

/// Ingestion host used when no other URL is configured.
pub const DEFAULT_API_URL: &str = "https://api.mixpanel.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub api_url: String,
    pub timeout: Option<Duration>,
    #[doc(hidden)]
    pub __non_exhaustive: (),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token: String::default(),
            api_url: DEFAULT_API_URL.to_owned(),
            timeout: None,
            __non_exhaustive: (),
        }
    }
}

impl Config {
    pub fn new(token: &str) -> Self {
        Self {
            token: token.to_owned(),
            ..Self::default()
        }
    }

    pub fn client(&self) -> Mixpanel {
        Mixpanel::from_config(self)
    }

    pub fn with_token(self, token: &str) -> Self {
        Self {
            token: token.to_owned(),
            ..self
        }
    }

    pub fn with_api_url(self, api_url: &str) -> Self {
        Self {
            api_url: api_url.to_owned(),
            ..self
        }
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..self
        }
    }
}
