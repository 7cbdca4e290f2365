use async_trait::async_trait;
use dioxus_logger::tracing;
use js_sys::{encode_uri_component, Array, Uint8Array};
use reqwasm::http::Request;
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};

use crate::client::{
    api::transport::{ApiRequest, ApiResponse, Method, MultipartForm, RequestBody, Transport},
    error::Error,
};

/// [`Transport`] backed by the browser's `fetch` through reqwasm
#[derive(Clone, Default)]
pub struct BrowserTransport;

fn js_error(err: JsValue) -> Error {
    Error::TransportError(format!("{:?}", err))
}

fn into_form_data(form: MultipartForm) -> Result<FormData, Error> {
    let data = FormData::new().map_err(js_error)?;

    for (name, value) in &form.text {
        data.append_with_str(name, value).map_err(js_error)?;
    }

    for (name, document) in &form.files {
        let parts = Array::new();
        parts.push(&Uint8Array::from(document.bytes.as_slice()));

        let options = BlobPropertyBag::new();
        if let Some(content_type) = &document.content_type {
            options.set_type(content_type);
        }

        let blob =
            Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)?;
        data.append_with_blob_and_filename(name, &blob, &document.file_name)
            .map_err(js_error)?;
    }

    Ok(data)
}

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    fn build_url(
        &self,
        base_url: &str,
        segments: &[String],
        query: &[(&'static str, String)],
    ) -> Result<String, Error> {
        let mut url = base_url.trim_end_matches('/').to_string();

        for segment in segments {
            url.push('/');
            url.push_str(&String::from(encode_uri_component(segment)));
        }

        for (i, (name, value)) in query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(name);
            url.push('=');
            url.push_str(&String::from(encode_uri_component(value)));
        }

        Ok(url)
    }

    async fn send(&self, base_url: &str, request: ApiRequest) -> Result<ApiResponse, Error> {
        let url = self.build_url(base_url, &request.segments, &request.query)?;

        tracing::debug!("{:?} {}", request.method, url);

        let mut builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
        };

        if let Some(token) = &request.bearer {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(body) => builder
                .header("Content-Type", "application/json")
                .body(body),
            RequestBody::Multipart(form) => builder.body(into_form_data(form)?),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| Error::TransportError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::TransportError(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}
