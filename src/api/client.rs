//! Purpose: Blocking HTTP client facade for exercising REST endpoints in tests.
//! Exports: `ApiClient`.
//! Role: One configured entry point per API under test; no global client state.
//! Invariants: Base URLs must use http or https and are validated up front.
//! Invariants: HTTP error statuses come back as responses; only transport
//! failures and malformed inputs are crate errors.
//! Invariants: Every request and response status is logged via `tracing`.

use crate::api::response::ApiResponse;
use crate::core::error::{Error, ErrorKind};
use serde::Serialize;
use std::sync::Arc;
use url::Url;

#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    base_url: Url,
    token: Option<String>,
    default_query: Vec<(String, String)>,
    agent: ureq::Agent,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let base_url = normalize_base_url(base_url)?;
        Ok(Self {
            inner: Arc::new(ClientInner {
                base_url,
                token: None,
                default_query: Vec::new(),
                agent: ureq::AgentBuilder::new().build(),
            }),
        })
    }

    /// Attaches a bearer token sent as `Authorization` on every request.
    pub fn with_token(self, token: impl Into<String>) -> Self {
        self.map_inner(|inner| inner.token = Some(token.into()))
    }

    /// Adds a query parameter appended to every request.
    pub fn with_query(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.map_inner(|inner| inner.default_query.push((key.into(), value.into())))
    }

    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    pub fn get(&self, path: &str) -> Result<ApiResponse, Error> {
        self.get_with_query(path, &[])
    }

    pub fn get_with_query(&self, path: &str, query: &[(&str, &str)]) -> Result<ApiResponse, Error> {
        let url = self.url_for(path)?;
        self.execute("GET", &url, |mut request| {
            for (key, value) in query {
                request = request.query(key, value);
            }
            request.call()
        })
    }

    /// Sends a POST with the pairs form-encoded in the body.
    pub fn post_form(&self, path: &str, form: &[(&str, &str)]) -> Result<ApiResponse, Error> {
        let url = self.url_for(path)?;
        self.execute("POST", &url, |request| request.send_form(form))
    }

    /// Sends a POST with the value serialized as a JSON body.
    pub fn post_json<T: Serialize>(&self, path: &str, body: &T) -> Result<ApiResponse, Error> {
        let url = self.url_for(path)?;
        let payload = serde_json::to_string(body).map_err(|err| {
            Error::new(ErrorKind::Internal)
                .with_message("failed to encode request json")
                .with_source(err)
        })?;
        self.execute("POST", &url, |request| {
            request
                .set("Content-Type", "application/json")
                .send_string(&payload)
        })
    }

    fn url_for(&self, path: &str) -> Result<Url, Error> {
        build_url(&self.inner.base_url, path)
    }

    fn request(&self, method: &str, url: &Url) -> ureq::Request {
        let mut request = self.inner.agent.request(method, url.as_str());
        if let Some(token) = &self.inner.token {
            request = request.set("Authorization", &format!("Bearer {token}"));
        }
        for (key, value) in &self.inner.default_query {
            request = request.query(key, value);
        }
        request
    }

    fn execute(
        &self,
        method: &str,
        url: &Url,
        send: impl FnOnce(ureq::Request) -> Result<ureq::Response, ureq::Error>,
    ) -> Result<ApiResponse, Error> {
        tracing::info!(method, url = %url, "sending api request");
        let response = match send(self.request(method, url)) {
            Ok(response) => response,
            Err(ureq::Error::Status(_, response)) => response,
            Err(ureq::Error::Transport(err)) => {
                tracing::error!(method, url = %url, error = %err, "api transport failure");
                return Err(Error::new(ErrorKind::Io)
                    .with_message("request failed")
                    .with_url(url.as_str())
                    .with_source(err));
            }
        };
        let status = response.status();
        let content_type = response.content_type().to_string();
        let body = response.into_string().map_err(|err| {
            Error::new(ErrorKind::Io)
                .with_message("failed to read response body")
                .with_url(url.as_str())
                .with_source(err)
        })?;
        tracing::info!(method, url = %url, status, "api response");
        if status >= 400 {
            tracing::error!(method, url = %url, status, "api request returned an error status");
        }
        Ok(ApiResponse::new(status, content_type, body))
    }

    fn map_inner(mut self, apply: impl FnOnce(&mut ClientInner)) -> Self {
        if let Some(inner) = Arc::get_mut(&mut self.inner) {
            apply(inner);
        } else {
            let mut inner = ClientInner {
                base_url: self.inner.base_url.clone(),
                token: self.inner.token.clone(),
                default_query: self.inner.default_query.clone(),
                agent: self.inner.agent.clone(),
            };
            apply(&mut inner);
            self.inner = Arc::new(inner);
        }
        self
    }
}

fn normalize_base_url(raw: &str) -> Result<Url, Error> {
    let mut url = Url::parse(raw).map_err(|err| {
        Error::new(ErrorKind::Usage)
            .with_message("invalid base url")
            .with_url(raw)
            .with_source(err)
    })?;
    let scheme = url.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(Error::new(ErrorKind::Usage)
            .with_message("base url must use http or https scheme")
            .with_url(raw));
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

fn build_url(base_url: &Url, path: &str) -> Result<Url, Error> {
    let mut url = base_url.clone();
    {
        let mut segments = url.path_segments_mut().map_err(|_| {
            Error::new(ErrorKind::Usage).with_message("base url cannot be a base")
        })?;
        segments.pop_if_empty();
        for segment in path.split('/').filter(|segment| !segment.is_empty()) {
            segments.push(segment);
        }
    }
    Ok(url)
}
