use async_trait::async_trait;

use crate::client::error::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A file selected by the user, read fully into memory
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Fields of a `multipart/form-data` body
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultipartForm {
    pub text: Vec<(&'static str, String)>,
    pub files: Vec<(&'static str, Document)>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.text.push((name, value.into()));
        self
    }

    pub fn file(mut self, name: &'static str, document: Document) -> Self {
        self.files.push((name, document));
        self
    }
}

#[derive(Debug)]
pub enum RequestBody {
    Empty,
    Json(String),
    Multipart(MultipartForm),
}

/// A request against the backend, relative to its base URL
///
/// Path segments and query pairs are kept unencoded; the transport encodes them.
#[derive(Debug)]
pub struct ApiRequest {
    pub method: Method,
    pub segments: Vec<String>,
    pub query: Vec<(&'static str, String)>,
    pub bearer: Option<String>,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn new(method: Method, segments: &[&str]) -> Self {
        Self {
            method,
            segments: segments.iter().map(|s| s.to_string()).collect(),
            query: Vec::new(),
            bearer: None,
            body: RequestBody::Empty,
        }
    }

    pub fn get(segments: &[&str]) -> Self {
        Self::new(Method::Get, segments)
    }

    pub fn post(segments: &[&str]) -> Self {
        Self::new(Method::Post, segments)
    }

    pub fn query(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.query.push((name, value.into()));
        self
    }

    pub fn bearer(mut self, token: &str) -> Self {
        self.bearer = Some(token.to_string());
        self
    }

    pub fn json<B: serde::Serialize>(mut self, body: &B) -> Result<Self, Error> {
        self.body = RequestBody::Json(serde_json::to_string(body)?);
        Ok(self)
    }

    pub fn multipart(mut self, form: MultipartForm) -> Self {
        self.body = RequestBody::Multipart(form);
        self
    }
}

/// Status code and raw body of a backend response
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests to the backend over the platform's HTTP stack
#[async_trait(?Send)]
pub trait Transport {
    /// Joins the base URL with encoded path segments and query pairs
    fn build_url(
        &self,
        base_url: &str,
        segments: &[String],
        query: &[(&'static str, String)],
    ) -> Result<String, Error>;

    /// Sends the request; only failures to obtain a response are errors
    async fn send(&self, base_url: &str, request: ApiRequest) -> Result<ApiResponse, Error>;
}
