use std::fmt;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use tracing::debug;
use url::Url;
use websms_domain::{Result, WebSmsError};

use super::codec::{decode_response, encode_call};
use super::value::RpcValue;
use crate::errors::RpcError;
use crate::http::HttpClient;

const XML_CONTENT_TYPE: &str = "text/xml";

/// Unauthenticated XML-RPC transport: one endpoint plus the pooled HTTP
/// client. Credentials are bound per session with [`authenticate`].
///
/// [`authenticate`]: XmlRpcTransport::authenticate
#[derive(Clone)]
pub struct XmlRpcTransport {
    http: HttpClient,
    endpoint: Url,
}

impl XmlRpcTransport {
    /// # Errors
    /// Returns `WebSmsError::Config` if the endpoint is not a valid URL or the
    /// HTTP client cannot be built.
    pub fn new(endpoint: &str, timeout: Option<Duration>) -> Result<Self> {
        let endpoint = Url::parse(endpoint).map_err(|err| {
            WebSmsError::Config(format!("invalid gateway endpoint '{endpoint}': {err}"))
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(XML_CONTENT_TYPE));

        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(concat!("websms/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// New client carrying basic-auth credentials. Connections stay pooled
    /// in the transport; the returned client owns only the credentials.
    pub fn authenticate(
        &self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> XmlRpcClient {
        XmlRpcClient {
            http: self.http.clone(),
            endpoint: self.endpoint.clone(),
            username: username.into(),
            password: password.into(),
        }
    }
}

/// XML-RPC client bound to one endpoint and one set of basic-auth credentials.
#[derive(Clone)]
pub struct XmlRpcClient {
    http: HttpClient,
    endpoint: Url,
    username: String,
    password: String,
}

impl XmlRpcClient {
    /// Create a client for `endpoint` with its own transport.
    ///
    /// # Errors
    /// Returns `WebSmsError::Config` if the endpoint is not a valid URL or the
    /// HTTP client cannot be built.
    pub fn new(
        endpoint: &str,
        username: impl Into<String>,
        password: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        Ok(XmlRpcTransport::new(endpoint, timeout)?.authenticate(username, password))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Invoke `method` with positional `params` and return the single result
    /// value.
    pub async fn call(
        &self,
        method: &str,
        params: &[RpcValue],
    ) -> std::result::Result<RpcValue, RpcError> {
        debug!(method, params = params.len(), "XML-RPC call");

        let request = self
            .http
            .request(Method::POST, self.endpoint.clone())
            .basic_auth(&self.username, Some(&self.password))
            .body(encode_call(method, params));

        let response = self.http.send(request).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RpcError::Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown status").to_string(),
            });
        }

        let body = response.text().await?;
        let value = decode_response(&body);
        if let Err(err) = &value {
            debug!(method, error = %err, "XML-RPC call failed");
        }
        value
    }
}

impl fmt::Debug for XmlRpcTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XmlRpcTransport").field("endpoint", &self.endpoint.as_str()).finish()
    }
}

impl fmt::Debug for XmlRpcClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XmlRpcClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
