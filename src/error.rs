//! Error taxonomy for occupancy queries.

/// Fallback message used when a failed response carries no `detail`.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to query occupancy";

/// Errors surfaced while building or running an occupancy query.
///
/// `Display` prints the bare message, so a service error reads exactly as
/// the backend's `detail` text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Query text was blank; raised before any request is made.
    Validation(String),
    /// Backend answered with a non-success status.
    Service { status: u16, message: String },
    /// Connection failure or a body that is not valid JSON.
    Transport(String),
    /// Valid JSON that violates the record contract (unknown enum value,
    /// missing field, duplicate id).
    Data(String),
}

impl QueryError {
    /// The human-readable message without any category prefix.
    pub fn message(&self) -> &str {
        match self {
            QueryError::Validation(msg)
            | QueryError::Service { message: msg, .. }
            | QueryError::Transport(msg)
            | QueryError::Data(msg) => msg,
        }
    }

    /// Builds a service error from a failed response body.
    /// Uses the `detail` field when present, the generic message otherwise.
    pub fn from_failed_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<crate::api::ErrorDetail>(body)
            .ok()
            .and_then(|e| e.detail)
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
        QueryError::Service { status, message }
    }
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for QueryError {}

impl From<reqwest::Error> for QueryError {
    fn from(error: reqwest::Error) -> Self {
        QueryError::Transport(error_chain(&error))
    }
}

/// Joins an error and its sources as `outer: inner: root`.
/// A source whose text the previous level already printed is skipped.
pub(crate) fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.is_empty() && !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_bare_message() {
        let err = QueryError::Service {
            status: 429,
            message: "quota exceeded".to_string(),
        };
        assert_eq!(err.to_string(), "quota exceeded");

        let err = QueryError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "connection refused");
    }

    #[derive(Debug)]
    struct Wrapped {
        text: &'static str,
        cause: Option<std::io::Error>,
    }

    impl std::fmt::Display for Wrapped {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", self.text)
        }
    }

    impl std::error::Error for Wrapped {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            self.cause.as_ref().map(|e| e as _)
        }
    }

    #[test]
    fn test_error_chain_includes_root_cause() {
        let err = Wrapped {
            text: "error sending request",
            cause: Some(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "Connection refused",
            )),
        };
        assert_eq!(error_chain(&err), "error sending request: Connection refused");
    }

    #[test]
    fn test_error_chain_skips_repeated_text() {
        let err = Wrapped {
            text: "tcp connect error: Connection refused",
            cause: Some(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "Connection refused",
            )),
        };
        assert_eq!(error_chain(&err), "tcp connect error: Connection refused");

        let bare = Wrapped {
            text: "timed out",
            cause: None,
        };
        assert_eq!(error_chain(&bare), "timed out");
    }

    #[test]
    fn test_from_failed_response_uses_detail() {
        let err = QueryError::from_failed_response(500, r#"{"detail": "quota exceeded"}"#);
        assert_eq!(
            err,
            QueryError::Service {
                status: 500,
                message: "quota exceeded".to_string()
            }
        );
    }

    #[test]
    fn test_from_failed_response_falls_back() {
        for body in ["", "not json", "{}", r#"{"detail": null}"#, r#"{"detail": ""}"#, "[]"] {
            let err = QueryError::from_failed_response(502, body);
            assert_eq!(
                err.message(),
                GENERIC_FAILURE_MESSAGE,
                "body {:?} should fall back",
                body
            );
        }
    }

    #[test]
    fn test_from_failed_response_ignores_structured_detail() {
        // FastAPI validation errors put a list under `detail`
        let body = r#"{"detail": [{"loc": ["body", "query_text"], "msg": "field required"}]}"#;
        let err = QueryError::from_failed_response(422, body);
        assert_eq!(err.message(), GENERIC_FAILURE_MESSAGE);
    }
}
