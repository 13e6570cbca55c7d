use serde::{Deserialize, Serialize};

/// Represents an error response body from the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// The main error message
    pub message: String,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Creates a new error response with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new error response with message and details.
    pub fn with_details(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Checks if this error response has details.
    #[must_use]
    pub const fn has_details(&self) -> bool {
        self.details.is_some()
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.details {
            Some(details) => write!(f, "{}: {}", self.message, details),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ErrorResponse {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_new() {
        let error = ErrorResponse::new("Test error");
        assert_eq!(error.message, "Test error");
        assert_eq!(error.details, None);
        assert!(!error.has_details());
    }

    #[test]
    fn test_error_response_with_details() {
        let error = ErrorResponse::with_details("Test error", "Additional details");
        assert_eq!(error.message, "Test error");
        assert_eq!(error.details, Some("Additional details".to_string()));
        assert!(error.has_details());
    }

    #[test]
    fn test_error_response_display() {
        let error_no_details = ErrorResponse::new("Simple error");
        assert_eq!(format!("{error_no_details}"), "Simple error");

        let error_with_details = ErrorResponse::with_details("Main error", "Additional info");
        assert_eq!(format!("{error_with_details}"), "Main error: Additional info");
    }

    #[test]
    fn test_error_response_deserialization() {
        let json = r#"{"message":"Test error","details":null}"#;
        let error: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(error.message, "Test error");
        assert_eq!(error.details, None);
    }

    #[test]
    fn test_error_response_as_error() {
        let error = ErrorResponse::new("Error trait test");
        let error_trait: &dyn std::error::Error = &error;
        assert!(error_trait.to_string().contains("Error trait test"));
    }
}
