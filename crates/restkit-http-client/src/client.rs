//! HTTP client wrapper

use std::collections::HashMap;
use std::time::Duration;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Error;
use crate::request;

/// Deadline applied to every call, measured from call start.
///
/// Fixed for all calls; there is no per-call override.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// HTTP client bound to a single downstream host
///
/// Holds the immutable base host and one shared transport. The client is
/// cheap to clone and safe to use from many concurrent calls; each call
/// builds its own request and shares only the connection pool.
#[derive(Debug, Clone)]
pub struct HttpClient {
    host: String,
    inner: reqwest::Client,
}

impl HttpClient {
    /// Create a client for `host` with a default transport
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            inner: reqwest::Client::new(),
        }
    }

    /// Create a client for `host` from a preconfigured `reqwest::Client`
    pub fn from_reqwest(host: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            host: host.into(),
            inner: client,
        }
    }

    /// Base host this client targets
    pub fn host(&self) -> &str {
        &self.host
    }

    /// GET `{host}/{path}`, decoding the JSON response into `body`
    ///
    /// Returns the response status code. A decode failure is logged and
    /// swallowed: the call still succeeds and `body` is left unchanged, as it
    /// is for an empty response body.
    pub async fn get<T>(
        &self,
        path: &str,
        body: &mut T,
        headers: Option<&HashMap<String, String>>,
        query: Option<&HashMap<String, String>>,
    ) -> Result<u16, Error>
    where
        T: DeserializeOwned,
    {
        self.execute(Method::GET, path, None, body, headers, query)
            .await
    }

    /// POST `body` as JSON to `{host}/{path}`, decoding the response back
    /// into `body`
    ///
    /// Encoding failure aborts before anything is sent. Decode failures are
    /// logged and swallowed as for [`HttpClient::get`]. No `Content-Type` is
    /// set implicitly; pass one through `headers` if the remote requires it.
    pub async fn post<T>(
        &self,
        path: &str,
        body: &mut T,
        headers: Option<&HashMap<String, String>>,
        query: Option<&HashMap<String, String>>,
    ) -> Result<u16, Error>
    where
        T: Serialize + DeserializeOwned,
    {
        let payload = serde_json::to_vec(body)?;
        self.execute(Method::POST, path, Some(payload), body, headers, query)
            .await
    }

    /// PUT `body` as JSON to `{host}/{path}`, decoding the response back
    /// into `body`
    ///
    /// Same encoding and decode semantics as [`HttpClient::post`].
    pub async fn put<T>(
        &self,
        path: &str,
        body: &mut T,
        headers: Option<&HashMap<String, String>>,
        query: Option<&HashMap<String, String>>,
    ) -> Result<u16, Error>
    where
        T: Serialize + DeserializeOwned,
    {
        let payload = serde_json::to_vec(body)?;
        self.execute(Method::PUT, path, Some(payload), body, headers, query)
            .await
    }

    /// DELETE `{host}/{path}`, decoding the JSON response into `body`
    ///
    /// The request carries no body. Decode semantics match
    /// [`HttpClient::get`].
    pub async fn delete<T>(
        &self,
        path: &str,
        body: &mut T,
        headers: Option<&HashMap<String, String>>,
        query: Option<&HashMap<String, String>>,
    ) -> Result<u16, Error>
    where
        T: DeserializeOwned,
    {
        self.execute(Method::DELETE, path, None, body, headers, query)
            .await
    }

    /// Shared pipeline for all four verbs: URL assembly, query/header
    /// injection, dispatch under the per-call deadline, response decode.
    async fn execute<T>(
        &self,
        method: Method,
        path: &str,
        payload: Option<Vec<u8>>,
        target: &mut T,
        headers: Option<&HashMap<String, String>>,
        query: Option<&HashMap<String, String>>,
    ) -> Result<u16, Error>
    where
        T: DeserializeOwned,
    {
        let mut url = request::join_url(&self.host, path)?;
        request::apply_query(&mut url, query);

        let mut builder = self.inner.request(method, url);
        builder = request::apply_headers(builder, headers);
        if let Some(bytes) = payload {
            builder = builder.body(bytes);
        }

        let response = dispatch(builder, REQUEST_TIMEOUT).await?;
        let status = response.status().as_u16();

        // Reading consumes the response, so the pooled connection is
        // released on every path. A completed exchange counts as success
        // even when the body cannot be read or decoded; those failures are
        // diagnostics only and `target` is left unchanged.
        match response.bytes().await {
            Ok(bytes) if bytes.is_empty() => {}
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(value) => *target = value,
                Err(err) => {
                    tracing::warn!(status, error = %err, "response body did not decode as JSON");
                }
            },
            Err(err) => {
                tracing::warn!(status, error = %err, "response body could not be read");
            }
        }

        Ok(status)
    }
}

/// Send the request with an explicit deadline.
///
/// The deadline covers the whole exchange from connect to the end of the
/// response body. This is the only cancellation mechanism; there is no retry
/// after expiry.
async fn dispatch(
    builder: reqwest::RequestBuilder,
    timeout: Duration,
) -> Result<reqwest::Response, Error> {
    Ok(builder.timeout(timeout).send().await?)
}
