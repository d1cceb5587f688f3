//! The http client implementing the [drive folders api](https://apidocs.document360.com/apidocs/drive).

use std::borrow::Cow;
use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::Method;

use crate::credentials::Credentials;
use crate::error::Error;
use crate::response::HttpResponse;

/// Default user agent of the http client.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
/// Endpoint of the drive folders api.
pub const BASE_URL: &str = "https://apihub.document360.io/v2/Drive/Folders";
/// Default timeout applied to every request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The errors when generating a [`HttpClient`](HttpClient) from a
/// [`HttpClientBuilder`](HttpClientBuilder).
#[derive(Debug, thiserror::Error)]
pub enum HttpClientBuilderError {
    /// The credentials are not set or the api token is empty.
    #[error("an api token is required to reach the api")]
    CredentialsMissing,
    /// The credentials cannot be represented as header values.
    #[error("the credentials cannot be used as header values: {0}")]
    InvalidCredentials(#[from] reqwest::header::InvalidHeaderValue),
    /// Something went wrong when building the inner http client.
    #[error("unable to build the http client: {0}")]
    Reqwest(#[from] reqwest::Error),
}

fn timeout_from_env() -> Option<Duration> {
    std::env::var("DOCUMENT360_TIMEOUT")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .map(Duration::from_millis)
}

/// A builder for the [`HttpClient`](HttpClient) structure.
///
/// ```rust
/// use document360::client::HttpClientBuilder;
/// use document360::credentials::Credentials;
///
/// let _client = HttpClientBuilder::default()
///     .with_credentials(Credentials::new("my-token").with_user_id("my-user-id"))
///     .build()
///     .expect("couldn't create client");
/// ```
#[derive(Debug)]
pub struct HttpClientBuilder {
    pub client_builder: reqwest::ClientBuilder,
    pub credentials: Option<Credentials>,
    pub base_url: Cow<'static, str>,
    pub timeout: Duration,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            client_builder: reqwest::ClientBuilder::default(),
            credentials: None,
            base_url: Cow::Borrowed(BASE_URL),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl HttpClientBuilder {
    /// Creates a builder from the environment variables.
    ///
    /// The credentials follow [`Credentials::from_env`](crate::credentials::Credentials::from_env).
    /// The timeout comes from `DOCUMENT360_TIMEOUT`, in milliseconds, and
    /// falls back to [`DEFAULT_TIMEOUT`](DEFAULT_TIMEOUT) when unset or unreadable.
    pub fn from_env() -> Self {
        Self {
            client_builder: reqwest::ClientBuilder::default(),
            credentials: Credentials::from_env(),
            base_url: Cow::Borrowed(BASE_URL),
            timeout: timeout_from_env().unwrap_or(DEFAULT_TIMEOUT),
        }
    }

    pub fn set_client_builder(&mut self, value: reqwest::ClientBuilder) {
        self.client_builder = value;
    }

    pub fn with_client_builder(mut self, value: reqwest::ClientBuilder) -> Self {
        self.client_builder = value;
        self
    }

    pub fn set_credentials(&mut self, value: Credentials) {
        self.credentials = Some(value);
    }

    pub fn with_credentials(mut self, value: Credentials) -> Self {
        self.credentials = Some(value);
        self
    }

    pub fn set_base_url<U: Into<Cow<'static, str>>>(&mut self, value: U) {
        self.base_url = value.into();
    }

    pub fn with_base_url<U: Into<Cow<'static, str>>>(mut self, value: U) -> Self {
        self.base_url = value.into();
        self
    }

    pub fn set_timeout(&mut self, value: Duration) {
        self.timeout = value;
    }

    pub fn with_timeout(mut self, value: Duration) -> Self {
        self.timeout = value;
        self
    }

    /// Builds the client and the set of headers attached to every request.
    ///
    /// # Errors
    ///
    /// Returns `Err(HttpClientBuilderError::CredentialsMissing)` when the
    /// credentials are not provided or the api token is empty.
    /// Returns `Err(HttpClientBuilderError::InvalidCredentials)` when the
    /// credentials cannot be turned into header values.
    /// Returns `Err(HttpClientBuilderError::Reqwest)` when the inner http
    /// client cannot be created.
    pub fn build(self) -> Result<HttpClient, HttpClientBuilderError> {
        let credentials = self
            .credentials
            .filter(|item| !item.is_empty())
            .ok_or(HttpClientBuilderError::CredentialsMissing)?;
        let headers = credentials.to_headers()?;
        let client = self
            .client_builder
            .user_agent(USER_AGENT)
            .timeout(self.timeout)
            .build()?;
        Ok(HttpClient {
            client,
            credentials,
            headers,
            base_url: self.base_url,
        })
    }
}

/// The client used to interact with the drive folders api.
///
/// ```rust,no_run
/// use document360::client::HttpClientBuilder;
/// use document360::folder::list::FolderListCommand;
/// use document360::prelude::HttpCommand;
///
/// # tokio_test::block_on(async {
/// let client = HttpClientBuilder::from_env()
///     .build()
///     .expect("couldn't create client");
/// let folders = FolderListCommand::new()
///     .execute(&client)
///     .await
///     .expect("couldn't fetch the folders");
/// println!("found {} folders", folders.len());
/// # })
/// ```
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    credentials: Credentials,
    headers: HeaderMap,
    base_url: Cow<'static, str>,
}

impl HttpClient {
    pub(crate) fn user_id(&self) -> Option<&str> {
        self.credentials.user_id()
    }

    fn build_url(&self, folder_id: Option<&str>) -> String {
        match folder_id {
            Some(folder_id) => format!("{}/{}", self.base_url, folder_id),
            None => self.base_url.to_string(),
        }
    }

    fn trace_request(&self, method: &Method, url: &str, body: Option<&str>) {
        match body {
            Some(body) => tracing::debug!(
                method = %method,
                url = %url,
                headers = ?self.headers,
                body = %body,
                "sending request"
            ),
            None => tracing::debug!(
                method = %method,
                url = %url,
                headers = ?self.headers,
                "sending request"
            ),
        }
    }

    fn trace_response(status: u16, body: &str) {
        let outcome = if status < 400 { "success" } else { "error" };
        match serde_json::from_str::<serde_json::Value>(body) {
            Ok(json) => tracing::debug!(status, outcome, body = %json, "received response"),
            Err(_) => tracing::debug!(status, outcome, body = %body, "received response"),
        }
        if status >= 400 {
            tracing::warn!(status, body = %body, "the api answered with an error");
        }
    }

    async fn send(
        &self,
        method: Method,
        folder_id: Option<&str>,
        body: Option<String>,
    ) -> Result<HttpResponse, Error> {
        let url = self.build_url(folder_id);
        self.trace_request(&method, &url, body.as_deref());
        let mut request = self
            .client
            .request(method, url.as_str())
            .headers(self.headers.clone());
        if let Some(body) = body {
            request = request.body(body);
        }
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Self::trace_response(status, &body);
        Ok(HttpResponse { status, body })
    }

    #[tracing::instrument(name = "get", skip(self))]
    pub(crate) async fn get(&self) -> Result<HttpResponse, Error> {
        self.send(Method::GET, None, None).await
    }

    #[tracing::instrument(name = "post", skip(self, params))]
    pub(crate) async fn post<P: serde::Serialize>(
        &self,
        params: &P,
    ) -> Result<HttpResponse, Error> {
        let body = serde_json::to_string(params)?;
        self.send(Method::POST, None, Some(body)).await
    }

    #[tracing::instrument(name = "put", skip(self, params))]
    pub(crate) async fn put<P: serde::Serialize>(
        &self,
        folder_id: &str,
        params: &P,
    ) -> Result<HttpResponse, Error> {
        let body = serde_json::to_string(params)?;
        self.send(Method::PUT, Some(folder_id), Some(body)).await
    }

    #[tracing::instrument(name = "delete", skip(self, params))]
    pub(crate) async fn delete<P: serde::Serialize>(
        &self,
        folder_id: &str,
        params: &P,
    ) -> Result<HttpResponse, Error> {
        let body = serde_json::to_string(params)?;
        self.send(Method::DELETE, Some(folder_id), Some(body)).await
    }
}

#[cfg(test)]
mod tests {
    use super::{HttpClientBuilder, HttpClientBuilderError, BASE_URL};
    use crate::credentials::Credentials;

    #[test]
    fn build_without_credentials() {
        let error = HttpClientBuilder::default().build().unwrap_err();
        assert!(matches!(error, HttpClientBuilderError::CredentialsMissing));
    }

    #[test]
    fn build_with_empty_token() {
        let error = HttpClientBuilder::default()
            .with_credentials(Credentials::new(""))
            .build()
            .unwrap_err();
        assert!(matches!(error, HttpClientBuilderError::CredentialsMissing));
    }

    #[test]
    fn build_with_credentials() {
        let client = HttpClientBuilder::default()
            .with_credentials(Credentials::new("access-token").with_user_id("user-1"))
            .build()
            .unwrap();
        assert_eq!(client.user_id(), Some("user-1"));
        assert_eq!(client.build_url(None), BASE_URL);
        assert_eq!(
            client.build_url(Some("8e764116")),
            format!("{}/8e764116", BASE_URL)
        );
    }
}
