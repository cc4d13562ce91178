use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use http::{Method, StatusCode};
use log::{debug, trace};
use serde::Serialize;
use thiserror::Error;

use crate::endpoint::Endpoint;
use crate::Mixpanel;

/// Anything that can go wrong while talking to Mixpanel.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("request to mixpanel failed: {0}")]
    Transport(#[from] attohttpc::Error),
    #[error("mixpanel returned HTTP status {0}")]
    Status(StatusCode),
    #[error("payload could not be serialized: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("mixpanel did not return 1 when tracking: {body:?}")]
    TrackFailed { body: String },
    #[error("mixpanel did not return 1 when updating a profile: {body:?}")]
    UpdateFailed { body: String },
}

pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn send<P: Serialize>(client: &Mixpanel, endpoint: Endpoint, payload: &P) -> Result<()> {
    let data = serde_json::to_vec(payload)?;
    debug!("sending {} byte payload to {}", data.len(), endpoint);
    let url = format!("{}{}", client.api_url, endpoint.path());
    // The base URL is unvalidated caller input; RequestBuilder::new would panic on it.
    let mut request = attohttpc::RequestBuilder::try_new(Method::GET, &url)?
        .param("data", STANDARD.encode(&data));
    if let Some(timeout) = client.timeout {
        request = request.timeout(timeout);
    }
    let response = request.send()?;
    let status = response.status();
    let body = response.text()?;
    trace!("mixpanel answered {} with body {:?}", status, body);
    if !status.is_success() {
        return Err(Error::Status(status));
    }
    interpret(endpoint, body)
}

// The ingestion API reports the outcome as a bare "1" or "0" body.
fn interpret(endpoint: Endpoint, body: String) -> Result<()> {
    if body == "1" || body == "1\n" {
        return Ok(());
    }
    Err(match endpoint {
        Endpoint::Engage => Error::UpdateFailed { body },
        Endpoint::Track | Endpoint::Import => Error::TrackFailed { body },
    })
}
