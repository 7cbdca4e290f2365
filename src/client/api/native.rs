use async_trait::async_trait;
use dioxus_logger::tracing;
use reqwest::{
    header::CONTENT_TYPE,
    multipart::{Form, Part},
    Url,
};

use crate::client::{
    api::transport::{ApiRequest, ApiResponse, Method, MultipartForm, RequestBody, Transport},
    error::Error,
};

/// [`Transport`] backed by `reqwest`, used by desktop builds and tests
#[derive(Clone, Default)]
pub struct NativeTransport {
    client: reqwest::Client,
}

impl NativeTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

fn into_form(form: MultipartForm) -> Result<Form, Error> {
    let mut multipart = Form::new();

    for (name, value) in form.text {
        multipart = multipart.text(name, value);
    }

    for (name, document) in form.files {
        let mut part = Part::bytes(document.bytes).file_name(document.file_name);
        if let Some(content_type) = document.content_type {
            part = part
                .mime_str(&content_type)
                .map_err(|e| Error::TransportError(e.to_string()))?;
        }
        multipart = multipart.part(name, part);
    }

    Ok(multipart)
}

#[async_trait(?Send)]
impl Transport for NativeTransport {
    fn build_url(
        &self,
        base_url: &str,
        segments: &[String],
        query: &[(&'static str, String)],
    ) -> Result<String, Error> {
        let mut url = Url::parse(base_url)
            .map_err(|e| Error::TransportError(format!("Invalid URL {}: {}", base_url, e)))?;

        url.path_segments_mut()
            .map_err(|_| Error::TransportError(format!("Invalid base URL {}", base_url)))?
            .pop_if_empty()
            .extend(segments);

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in query {
                pairs.append_pair(name, value);
            }
        }

        Ok(url.into())
    }

    async fn send(&self, base_url: &str, request: ApiRequest) -> Result<ApiResponse, Error> {
        let url = self.build_url(base_url, &request.segments, &request.query)?;

        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        };

        tracing::debug!("{} {}", method, url);

        let mut builder = self.client.request(method, &url);
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(body) => builder.header(CONTENT_TYPE, "application/json").body(body),
            RequestBody::Multipart(form) => builder.multipart(into_form(form)?),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| Error::TransportError(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::TransportError(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}
