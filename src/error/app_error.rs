use thiserror::Error;

/// Application-wide error type covering the webhook relay pipeline.
///
/// Every variant carries structured context for logging; none of it is
/// ever echoed back to the webhook caller (see the error handler in
/// `api::middleware`). A request-level error never terminates the process.
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed or unparseable input field (bad date, payload that does
    /// not match the declared notification type).
    #[error("Format error in {field}: {reason}")]
    Format { field: String, reason: String },

    /// A nested field the selected formatter requires was absent.
    #[error("Missing required field: {entity}.{field}")]
    MissingField { entity: String, field: String },

    /// Discord returned a non-success response or the outbound call
    /// failed outright (connect error, timeout). `detail` captures the
    /// response body or transport error for diagnostics.
    #[error("Delivery to Discord failed: {status}")]
    Delivery { status: String, detail: Option<String> },

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    /// Format error shorthand.
    pub fn format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::Format {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Missing-field error shorthand.
    pub fn missing_field(entity: impl Into<String>, field: impl Into<String>) -> Self {
        AppError::MissingField {
            entity: entity.into(),
            field: field.into(),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_display() {
        let err = AppError::format("updatedAt", "invalid ISO-8601 date");
        assert_eq!(
            err.to_string(),
            "Format error in updatedAt: invalid ISO-8601 date"
        );
    }

    #[test]
    fn test_missing_field_display() {
        let err = AppError::missing_field("comment", "issue");
        assert_eq!(err.to_string(), "Missing required field: comment.issue");
    }

    #[test]
    fn test_delivery_error_display_hides_detail() {
        let err = AppError::Delivery {
            status: "400 Bad Request".to_string(),
            detail: Some("{\"message\": \"Invalid Webhook Token\"}".to_string()),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("400 Bad Request"));
        assert!(!rendered.contains("Invalid Webhook Token"));
    }
}
