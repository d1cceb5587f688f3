//! The responses returned by the api.
//!
//! The api wraps its answers in an envelope looking like
//! `{"success": bool, "data": ..., "errors": [...]}` where every field may be
//! missing. The helpers here capture the raw answer and interpret the
//! envelope.

use crate::error::{ApiError, Error};

/// Raw answer of the api, the status code and the body as received.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// Checks that the status code belongs to the set the operation expects.
    ///
    /// The raw body is kept in the error so that the caller can inspect what
    /// the server really answered.
    pub(crate) fn accept(self, expected: &[u16]) -> Result<Self, Error> {
        if expected.contains(&self.status) {
            Ok(self)
        } else {
            Err(Error::Protocol(self.status, self.body))
        }
    }

    pub(crate) fn decode<T: serde::de::DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_str(&self.body).map_err(Error::from)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Checks a response against a set of expected status codes and makes sure
/// the body parses as json.
///
/// Returns whether the response passes, along with a short diagnostic. This
/// helper only looks at the response, it never touches the network.
pub fn validate(response: &HttpResponse, expected_status: &[u16]) -> (bool, String) {
    if !expected_status.contains(&response.status) {
        return (
            false,
            format!("unexpected status code: {}", response.status),
        );
    }
    match serde_json::from_str::<serde_json::Value>(&response.body) {
        Ok(_) => (true, String::from("valid json response")),
        Err(_) => (false, String::from("invalid json response")),
    }
}

#[derive(Debug, serde::Deserialize)]
pub(crate) struct Envelope<T> {
    pub success: Option<bool>,
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<ApiError>,
}

impl<T> Envelope<T> {
    /// Returns the payload when the api explicitly flagged the operation as
    /// successful, the collected errors otherwise. A missing flag counts as a
    /// failure.
    pub(crate) fn payload(self) -> Result<T, Error> {
        match self.success {
            Some(true) => self.data.ok_or(Error::ResponseFormat),
            _ => Err(Error::Api(self.errors)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{validate, Envelope, HttpResponse};
    use crate::error::Error;

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn validate_accepts_expected_status_and_json() {
        let (passed, reason) = validate(&response(200, r#"{"success": true}"#), &[200]);
        assert!(passed);
        assert_eq!(reason, "valid json response");
    }

    #[test]
    fn validate_rejects_unexpected_status() {
        let (passed, reason) = validate(&response(404, "{}"), &[200, 201]);
        assert!(!passed);
        assert_eq!(reason, "unexpected status code: 404");
    }

    #[test]
    fn validate_rejects_invalid_json() {
        let (passed, reason) = validate(&response(200, "<html></html>"), &[200]);
        assert!(!passed);
        assert_eq!(reason, "invalid json response");
    }

    #[test]
    fn accept_keeps_the_body_on_unexpected_status() {
        let error = response(500, "boom").accept(&[200]).unwrap_err();
        assert!(matches!(error, Error::Protocol(500, body) if body == "boom"));
    }

    #[test]
    fn payload_requires_an_explicit_success() {
        let envelope: Envelope<serde_json::Value> = serde_json::from_str(r#"{"data": {}}"#).unwrap();
        assert!(matches!(envelope.payload(), Err(Error::Api(_))));
    }

    #[test]
    fn payload_requires_the_data() {
        let envelope: Envelope<serde_json::Value> =
            serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(matches!(envelope.payload(), Err(Error::ResponseFormat)));
    }

    #[test]
    fn payload_returns_the_data() {
        let envelope: Envelope<u32> =
            serde_json::from_str(r#"{"success": true, "data": 42}"#).unwrap();
        assert_eq!(envelope.payload().unwrap(), 42);
    }

    #[test]
    fn payload_collects_the_errors() {
        let envelope: Envelope<serde_json::Value> = serde_json::from_str(
            r#"{"success": false, "errors": [{"description": "duplicate folder"}]}"#,
        )
        .unwrap();
        match envelope.payload().unwrap_err() {
            Error::Api(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].description, "duplicate folder");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }
}
