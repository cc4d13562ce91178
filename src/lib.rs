//! Unofficial Mixpanel client for Rust. Talks to the HTTP ingestion API:
//! live event tracking, historical event import and profile updates.

use std::fmt;
use std::time::{Duration, SystemTime};

mod config;
mod endpoint;
mod payloads;
mod transport;

pub use crate::config::{Config, DEFAULT_API_URL};
pub use crate::transport::{Error, Result};

use crate::endpoint::Endpoint;
use crate::payloads::{EngagePayload, TrackPayload};

/// Arbitrary JSON attributes attached to an event or a profile update.
pub type Properties = serde_json::Map<String, serde_json::Value>;

/// A single analytics event, before the token and identity are attached.
#[derive(Debug, Clone, Default)]
pub struct Event {
    /// When the event happened. `None` means "now" as far as Mixpanel is
    /// concerned; the field is omitted from the payload.
    pub timestamp: Option<SystemTime>,
    pub properties: Properties,
}

/// A change to a user profile: an operation verb like `$set` or `$append`
/// plus the attributes it applies to.
#[derive(Debug, Clone, Default)]
pub struct Update {
    pub operation: String,
    pub properties: Properties,
}

#[derive(Clone)]
pub struct Mixpanel {
    pub(crate) token: String,
    pub(crate) api_url: String,
    pub(crate) timeout: Option<Duration>,
}

impl Mixpanel {
    /// Neither argument is validated; a bad token or URL surfaces as an
    /// error on the first call. See [`DEFAULT_API_URL`] for the usual host.
    pub fn new(token: &str, api_url: &str) -> Self {
        Mixpanel {
            token: token.to_owned(),
            api_url: api_url.to_owned(),
            timeout: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Mixpanel {
            token: config.token.clone(),
            api_url: config.api_url.clone(),
            timeout: config.timeout,
        }
    }

    /// Records a live event for `distinct_id`, regardless of its timestamp.
    pub fn track(&self, distinct_id: &str, event_name: &str, event: &Event) -> Result<()> {
        let payload = TrackPayload::new(&self.token, distinct_id, event_name, event);
        transport::send(self, Endpoint::Track, &payload)
    }

    /// Records an event that may lie outside the live-tracking window.
    /// Events older than five days go through `/import`; anything newer is
    /// an ordinary track call.
    pub fn import(&self, distinct_id: &str, event_name: &str, event: &Event) -> Result<()> {
        let payload = TrackPayload::new(&self.token, distinct_id, event_name, event);
        let endpoint = Endpoint::for_import(event.timestamp, SystemTime::now());
        transport::send(self, endpoint, &payload)
    }

    /// Applies `update` to the profile of `distinct_id`.
    pub fn update(&self, distinct_id: &str, update: &Update) -> Result<()> {
        let payload = EngagePayload::new(&self.token, distinct_id, update);
        transport::send(self, Endpoint::Engage, &payload)
    }
}

impl fmt::Debug for Mixpanel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        struct TokenPlaceholder;
        impl fmt::Debug for TokenPlaceholder {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("<filtered>")
            }
        }
        f.debug_struct("Mixpanel")
            .field("token", &TokenPlaceholder)
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
