use thiserror::Error;

/// Generic user-facing message for any failure whose detail belongs in logs,
/// not on screen.
pub const GENERIC_FETCH_MESSAGE: &str = "Error fetching movies. Please try again later.";

/// Failure taxonomy for both external HTTP collaborators.
///
/// Each variant carries enough detail for logging; what the user sees comes
/// from [`FetchError::user_message`] only.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// Non-success HTTP status from the server.
    #[error("server returned status {0}")]
    Status(u16),
    /// The server answered 200 but flagged an internal failure in the body.
    #[error("api reported failure: {0}")]
    Api(String),
    /// Connection, DNS, or timeout failure before a response arrived.
    #[error("network error: {0}")]
    Network(String),
    /// The response body could not be parsed as the expected JSON shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl FetchError {
    /// Message suitable for display. Only an API-reported failure surfaces
    /// its own message; everything else collapses to the generic string.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Api(message) => message.clone(),
            _ => GENERIC_FETCH_MESSAGE.to_string(),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_errors_surface_their_own_message() {
        let err = FetchError::Api("Invalid API key.".to_string());
        assert_eq!(err.user_message(), "Invalid API key.");
    }

    #[test]
    fn other_errors_collapse_to_generic_message() {
        for err in [
            FetchError::Status(500),
            FetchError::Network("connection refused".to_string()),
            FetchError::Decode("expected value at line 1".to_string()),
        ] {
            assert_eq!(err.user_message(), GENERIC_FETCH_MESSAGE);
        }
    }
}
