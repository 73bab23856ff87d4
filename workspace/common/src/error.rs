use thiserror::Error;

/// Error types shared by the dashboard components
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    /// The request never produced a response
    #[error("Request failed: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status
    #[error("HTTP error: {0}")]
    Status(u16),

    /// The response body could not be decoded
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// The request body could not be built
    #[error("Failed to build request: {0}")]
    Encode(String),

    /// Position lookup was denied or failed
    #[error("Unable to retrieve location: {0}")]
    Geolocation(String),

    /// A browser capability is missing
    #[error("{0} is not supported by this browser.")]
    Unsupported(&'static str),

    /// Login form submitted without an email
    #[error("Email required")]
    MissingEmail,
}

/// Type alias for Result with DashboardError
pub type Result<T> = std::result::Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(DashboardError::Status(500).to_string(), "HTTP error: 500");
        assert_eq!(
            DashboardError::Unsupported("Geolocation").to_string(),
            "Geolocation is not supported by this browser."
        );
        assert_eq!(DashboardError::MissingEmail.to_string(), "Email required");
    }
}
