use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use super::error::ClientError;
use super::types::{Device, DeviceListResponse, WakeResult};

/// Request timeout used when the config does not set one
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Client for a single wolweb server
///
/// Every operation issues exactly one GET request. Nothing is retried.
#[derive(Debug, Clone)]
pub struct DeviceClient {
    http: reqwest::Client,
    server: String,
}

impl DeviceClient {
    /// Build a client for `server`, the base URL of the wolweb service.
    ///
    /// The URL is not validated here; a malformed value is reported when
    /// the first request is attempted.
    pub fn new(server: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            server: server.into(),
        })
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    /// Fetch all devices known to the server, in the order it sent them
    pub async fn list_devices(&self) -> Result<Vec<Device>, ClientError> {
        let url = self.endpoint(&["wolweb", "data", "get"])?;
        let response: DeviceListResponse = self.get_json(url).await?;

        debug!(count = response.devices.len(), "Fetched device list");
        Ok(response.devices)
    }

    /// Ask the server to wake `name`. Returns the server's confirmation text.
    pub async fn wake_device(&self, name: &str) -> Result<String, ClientError> {
        let url = self.endpoint(&["wolweb", "wake", name])?;
        let result: WakeResult = self.get_json(url).await?;

        if result.success {
            Ok(result.message)
        } else {
            warn!(device = name, message = %result.message, "Wake request declined");
            Err(ClientError::Rejected(result.message))
        }
    }

    /// Join path segments onto the server URL, escaping each one.
    ///
    /// `.` and `..` are dot-segments in any spelling, escaped or not, so
    /// they can never reach the server as data and are refused here.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        if let Some(segment) = segments.iter().find(|s| is_dot_segment(s)) {
            return Err(ClientError::UnaddressableName(segment.to_string()));
        }

        let mut url = Url::parse(&self.server).map_err(|e| ClientError::InvalidUrl {
            url: self.server.clone(),
            reason: e.to_string(),
        })?;

        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl {
                url: self.server.clone(),
                reason: "URL cannot carry a path".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ClientError> {
        debug!(%url, "GET");

        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        debug!(%url, %status, bytes = body.len(), "Response received");

        serde_json::from_slice(&body).map_err(|source| ClientError::Decode {
            url: url.to_string(),
            status: status.as_u16(),
            source,
        })
    }
}

fn is_dot_segment(segment: &str) -> bool {
    matches!(segment, "." | "..")
}
