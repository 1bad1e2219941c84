use thiserror::Error;

/// Failures surfaced by [`DeviceClient`](super::DeviceClient).
///
/// Three domains are kept apart: transport (the request never completed),
/// decode (the body could not be understood) and rejection (the server
/// answered and declined).
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request to wolweb server failed")]
    Transport(#[from] reqwest::Error),

    #[error("invalid server URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to decode response from {url} (HTTP {status})")]
    Decode {
        url: String,
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    #[error("device name '{0}' cannot be sent as a URL path segment")]
    UnaddressableName(String),

    #[error("{0}")]
    Rejected(String),
}

impl ClientError {
    /// The request could not be completed
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::InvalidUrl { .. } | Self::UnaddressableName(_)
        )
    }

    /// The response body was not the expected JSON
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// The server explicitly declined the request
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_displays_server_message() {
        let err = ClientError::Rejected("device not found".to_string());
        assert_eq!(err.to_string(), "device not found");
        assert!(err.is_rejected());
        assert!(!err.is_transport());
        assert!(!err.is_decode());
    }

    #[test]
    fn test_invalid_url_is_transport_class() {
        let err = ClientError::InvalidUrl {
            url: "nope".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        assert!(err.is_transport());
        assert!(!err.is_rejected());
    }

    #[test]
    fn test_unaddressable_name_is_transport_class() {
        let err = ClientError::UnaddressableName("..".to_string());
        assert!(err.is_transport());
        assert!(!err.is_rejected());
        assert!(err.to_string().contains("'..'"));
    }

    #[test]
    fn test_decode_error_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = ClientError::Decode {
            url: "http://localhost/wolweb/data/get".to_string(),
            status: 200,
            source,
        };
        assert!(err.is_decode());
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("HTTP 200"));
    }
}
