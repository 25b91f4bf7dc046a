use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("{0}")]
    Auth(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Booking failed: {0}")]
    Booking(String),
}

impl ApiError {
    /// Classify a non-2xx response using its status and (possibly JSON) body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = server_message(body);
        match status {
            401 | 403 => Self::Auth(message.unwrap_or_else(|| "Invalid credentials".to_string())),
            404 => Self::NotFound(message.unwrap_or_else(|| "Resource not found".to_string())),
            400 | 422 => Self::Validation(message.unwrap_or_else(|| "Invalid request".to_string())),
            409 => Self::Booking(message.unwrap_or_else(|| "Seat no longer available".to_string())),
            _ => Self::Network(match message {
                Some(m) => format!("server returned {}: {}", status, m),
                None => format!("server returned {}", status),
            }),
        }
    }

    /// Any rejection of a booking request surfaces as a booking failure.
    /// Transport problems keep their own label.
    pub fn into_booking(self) -> Self {
        match self {
            Self::Network(_) | Self::Booking(_) => self,
            Self::Auth(m) | Self::Validation(m) | Self::NotFound(m) => Self::Booking(m),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Validation(format!("Unexpected response from server: {}", err))
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<ApiError> for String {
    fn from(err: ApiError) -> Self {
        err.to_string()
    }
}

/// Pull `message` (or `error`) out of a JSON error body.
fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|k| value.get(*k).and_then(|v| v.as_str()))
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_maps_to_auth_with_default_message() {
        assert_eq!(
            ApiError::from_status(401, ""),
            ApiError::Auth("Invalid credentials".to_string())
        );
    }

    #[test]
    fn test_server_message_is_preferred() {
        let err = ApiError::from_status(422, r#"{"message":"The email field is required.","errors":{}}"#);
        assert_eq!(err, ApiError::Validation("The email field is required.".to_string()));
    }

    #[test]
    fn test_error_field_fallback() {
        let err = ApiError::from_status(404, r#"{"error":"Session not found"}"#);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Session not found");
    }

    #[test]
    fn test_conflict_is_booking_error() {
        assert!(matches!(ApiError::from_status(409, "{}"), ApiError::Booking(_)));
    }

    #[test]
    fn test_server_failure_is_network_error() {
        let err = ApiError::from_status(500, "<html>oops</html>");
        assert_eq!(err, ApiError::Network("server returned 500".to_string()));
    }

    #[test]
    fn test_into_booking_keeps_network_label() {
        let net = ApiError::Network("offline".to_string());
        assert_eq!(net.clone().into_booking(), net);

        let rejected = ApiError::Validation("Seat 12 is taken".to_string()).into_booking();
        assert_eq!(rejected, ApiError::Booking("Seat 12 is taken".to_string()));
        assert_eq!(rejected.to_string(), "Booking failed: Seat 12 is taken");
    }
}
