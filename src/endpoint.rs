use std::fmt;
use std::time::{Duration, SystemTime};

/// Events older than this can no longer be recorded through `/track`.
pub(crate) const MAX_TRACK_AGE: Duration = Duration::from_secs(5 * 24 * 60 * 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Endpoint {
    Track,
    Import,
    Engage,
}

impl Endpoint {
    /// Picks the endpoint for a backfilled event. Only backfills are routed
    /// by age; live events and profile updates have fixed endpoints.
    pub(crate) fn for_import(timestamp: Option<SystemTime>, now: SystemTime) -> Self {
        let effective = timestamp.unwrap_or(now);
        match now.duration_since(effective) {
            // An event exactly five days old is still a regular track call.
            Ok(age) if age > MAX_TRACK_AGE => Endpoint::Import,
            _ => Endpoint::Track,
        }
    }

    pub(crate) fn path(&self) -> &'static str {
        match self {
            Endpoint::Track => "/track",
            Endpoint::Import => "/import",
            Endpoint::Engage => "/engage",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.path())
    }
}
