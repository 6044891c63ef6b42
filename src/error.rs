use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::fmt::{self, Debug, Display};
use std::net::AddrParseError;
use std::num::ParseIntError;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        reqwest_error(err)
    }
}

impl From<AddrParseError> for Error {
    fn from(_: AddrParseError) -> Self {
        configuration_error("BIND_ADDRESS is not a socket address")
    }
}

impl From<ParseIntError> for Error {
    fn from(_: ParseIntError) -> Self {
        configuration_error("ROUTE_TIMEOUT_MS is not an integer")
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match self.code {
            1..=99 => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
            _ => (StatusCode::BAD_REQUEST, self.message.as_str()),
        };

        let body = Json(json!({
            "code": self.code,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl Error {
    /// Provider-side failures are absorbed into a fallback route rather than
    /// surfaced to the caller.
    pub fn is_provider_failure(&self) -> bool {
        matches!(self.code, 3 | 4 | 6 | 7)
    }
}

pub fn invalid_state_error() -> Error {
    Error {
        code: 100,
        message: "invalid state".into(),
    }
}

pub fn invalid_input_error() -> Error {
    Error {
        code: 101,
        message: "invalid input".into(),
    }
}

pub fn configuration_error(reason: &str) -> Error {
    Error {
        code: 2,
        message: format!("configuration error: {}", reason),
    }
}

pub fn reqwest_error(_: reqwest::Error) -> Error {
    Error {
        code: 3,
        message: "reqwest error".into(),
    }
}

pub fn upstream_error() -> Error {
    Error {
        code: 4,
        message: "upstream error".into(),
    }
}

pub fn unexpected_error() -> Error {
    Error {
        code: 5,
        message: "unexpected error".into(),
    }
}

pub fn provider_authorization_error<T: Debug>(status: T) -> Error {
    Error {
        code: 6,
        message: format!("provider authorization error: {:?}", status),
    }
}

pub fn timeout_error() -> Error {
    Error {
        code: 7,
        message: "timeout error".into(),
    }
}

#[test]
fn provider_failures_test() {
    assert!(upstream_error().is_provider_failure());
    assert!(timeout_error().is_provider_failure());
    assert!(provider_authorization_error("REQUEST_DENIED").is_provider_failure());
    assert!(!invalid_input_error().is_provider_failure());
    assert!(!configuration_error("missing key").is_provider_failure());
}

#[test]
fn client_errors_keep_their_message_test() {
    let response = invalid_state_error().into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = unexpected_error().into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
