//! The errors reported by the client and by the api itself.

/// Single error entry found in the `errors` field of a response envelope.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct ApiError {
    /// Human readable description of what went wrong.
    #[serde(default)]
    pub description: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.description.is_empty() {
            f.write_str("unknown error")
        } else {
            f.write_str(&self.description)
        }
    }
}

fn describe(errors: &[ApiError]) -> String {
    if errors.is_empty() {
        String::from("unknown error")
    } else {
        errors
            .iter()
            .map(|item| item.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// The errors that the commands can return.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Unable to reach the api.
    #[error("unable to reach the api: {0}")]
    Reqwest(#[from] reqwest::Error),
    /// The api answered with a status code the operation doesn't accept.
    /// Carries the status code and the raw body.
    #[error("unexpected status code {0}")]
    Protocol(u16, String),
    /// Unable to decode the response body.
    #[error("unable to decode the response body: {0}")]
    SerdeJson(#[from] serde_json::Error),
    /// The api handled the request but declared the operation failed.
    #[error("the api rejected the request: {}", describe(.0))]
    Api(Vec<ApiError>),
    /// The response body doesn't have the expected shape.
    #[error("the response doesn't have the expected format")]
    ResponseFormat,
    /// No folder id was provided and none is remembered from an earlier creation.
    #[error("no folder id available, create a folder first")]
    MissingFolderId,
    /// The folder title is empty.
    #[error("the folder title cannot be empty")]
    EmptyTitle,
}
