//! The credentials used to authenticate against the api.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, InvalidHeaderValue, CONTENT_TYPE};

/// The credentials attached to every request.
///
/// The api token travels in the `api_token` header. The user id, when set,
/// travels in the `user_id` header and is repeated in the body of the write
/// operations, as the api expects it in both places.
#[derive(Clone, Debug)]
pub struct Credentials {
    api_token: String,
    user_id: Option<String>,
}

impl Credentials {
    pub fn new<T: Into<String>>(api_token: T) -> Self {
        Self {
            api_token: api_token.into(),
            user_id: None,
        }
    }

    pub fn with_user_id<U: Into<String>>(mut self, user_id: U) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Creates the credentials based on the environment variables.
    ///
    /// Reads the api token from `DOCUMENT360_API_TOKEN` and the optional user
    /// id from `DOCUMENT360_USER_ID`.
    ///
    /// ```rust
    /// use document360::credentials::Credentials;
    ///
    /// match Credentials::from_env() {
    ///     Some(_credentials) => println!("credentials found in the environment"),
    ///     None => eprintln!("no credentials provided"),
    /// }
    /// ```
    pub fn from_env() -> Option<Self> {
        let api_token = std::env::var("DOCUMENT360_API_TOKEN").ok()?;
        let user_id = std::env::var("DOCUMENT360_USER_ID").ok();
        Some(Self { api_token, user_id })
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.api_token.is_empty()
    }

    pub(crate) fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Builds the set of headers sent with every request.
    pub(crate) fn to_headers(&self) -> Result<HeaderMap, InvalidHeaderValue> {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("api_token"),
            HeaderValue::from_str(&self.api_token)?,
        );
        if let Some(ref user_id) = self.user_id {
            headers.insert(
                HeaderName::from_static("user_id"),
                HeaderValue::from_str(user_id)?,
            );
        }
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }
}
