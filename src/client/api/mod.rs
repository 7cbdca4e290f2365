//! HTTP client for the CollabLab backend.
//!
//! [`ApiClient`] exposes one method per backend endpoint and is generic over the
//! [`Transport`] that actually sends requests: `fetch` in the browser and `reqwest` on
//! native targets. Every method branches on the response status explicitly; non-success
//! statuses become [`Error::RequestFailed`] (or [`Error::AuthError`] for sign in and
//! sign up) instead of being treated as success.

pub mod transport;

#[cfg(target_arch = "wasm32")]
pub mod browser;
#[cfg(not(target_arch = "wasm32"))]
pub mod native;

use dioxus_logger::tracing;
use serde::de::DeserializeOwned;

use crate::{
    client::{
        api::transport::{ApiRequest, ApiResponse, Document, MultipartForm, Transport},
        config::Config,
        error::Error,
        session::Credential,
    },
    model::{
        api::ErrorDto,
        application::{ApplicationRequestDto, ApplicationStatus, StatusUpdateDto},
        auth::{AccessTokenDto, SignInDto, SignUpDto},
        project::{NewProjectDto, ProjectDto},
    },
};

/// Transport used by the running application
#[cfg(target_arch = "wasm32")]
pub type PlatformTransport = browser::BrowserTransport;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformTransport = native::NativeTransport;

const AUTH_FAILED: &str = "Auth failed";

/// Fields of an application to a project
#[derive(Clone, Debug, PartialEq)]
pub struct ApplicationForm {
    pub message: String,
    pub portfolio_url: String,
    pub document: Document,
}

pub struct ApiClient<T: Transport> {
    base_url: String,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: &Config, transport: T) -> Self {
        Self {
            base_url: config.backend_url.clone(),
            transport,
        }
    }

    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, Error> {
        self.transport.send(&self.base_url, request).await.map_err(|err| {
            tracing::error!("{}", err);
            err
        })
    }

    /// Converts a non-success response into [`Error::RequestFailed`]
    fn failure(response: ApiResponse) -> Error {
        let message = serde_json::from_str::<ErrorDto>(&response.body)
            .ok()
            .and_then(|dto| dto.message().map(str::to_string))
            .unwrap_or_else(|| {
                if response.body.is_empty() {
                    "Unknown error".to_string()
                } else {
                    response.body.clone()
                }
            });

        tracing::warn!(status = response.status, "{}", message);

        Error::RequestFailed {
            status: response.status,
            message,
        }
    }

    fn parse<R: DeserializeOwned>(response: ApiResponse) -> Result<R, Error> {
        if !response.is_success() {
            return Err(Self::failure(response));
        }

        serde_json::from_str(&response.body).map_err(|err| {
            tracing::error!("Failed to parse response body: {}", err);
            Error::JsonError(err)
        })
    }

    fn expect_success(response: ApiResponse) -> Result<(), Error> {
        if response.is_success() {
            Ok(())
        } else {
            Err(Self::failure(response))
        }
    }

    async fn authenticate(&self, request: ApiRequest) -> Result<Credential, Error> {
        let response = self.send(request).await?;

        if !response.is_success() {
            let message = serde_json::from_str::<ErrorDto>(&response.body)
                .ok()
                .and_then(|dto| dto.message().map(str::to_string))
                .unwrap_or_else(|| AUTH_FAILED.to_string());

            tracing::debug!(status = response.status, "Authentication refused: {}", message);

            return Err(Error::AuthError(message));
        }

        let token: AccessTokenDto = serde_json::from_str(&response.body)?;

        Credential::new(token.access_token).ok_or_else(|| Error::AuthError(AUTH_FAILED.to_string()))
    }

    /// `POST /auth/signin`
    ///
    /// # Returns
    /// - `Ok(Credential)` - The access token issued by the backend
    /// - `Err(Error::AuthError)` - Refused, carrying the backend's `detail` message or "Auth failed"
    pub async fn sign_in(&self, dto: &SignInDto) -> Result<Credential, Error> {
        self.authenticate(ApiRequest::post(&["auth", "signin"]).json(dto)?)
            .await
    }

    /// `POST /auth/signup`, same outcomes as [`ApiClient::sign_in`]
    pub async fn sign_up(&self, dto: &SignUpDto) -> Result<Credential, Error> {
        self.authenticate(ApiRequest::post(&["auth", "signup"]).json(dto)?)
            .await
    }

    /// `GET /projects?q=`, an empty query lists every project
    pub async fn list_projects(&self, query: &str) -> Result<Vec<ProjectDto>, Error> {
        let response = self
            .send(ApiRequest::get(&["projects"]).query("q", query))
            .await?;

        Self::parse(response)
    }

    /// `POST /projects`, returning the created project
    pub async fn create_project(
        &self,
        credential: &Credential,
        project: &NewProjectDto,
    ) -> Result<ProjectDto, Error> {
        let request = ApiRequest::post(&["projects"])
            .bearer(credential.as_str())
            .json(project)?;

        Self::parse(self.send(request).await?)
    }

    /// `POST /projects/{id}/save`
    pub async fn save_project(&self, credential: &Credential, project_id: &str) -> Result<(), Error> {
        let request = ApiRequest::post(&["projects", project_id, "save"]).bearer(credential.as_str());

        Self::expect_success(self.send(request).await?)
    }

    /// `POST /projects/{id}/apply` as `multipart/form-data`
    pub async fn apply(
        &self,
        credential: &Credential,
        project_id: &str,
        application: ApplicationForm,
    ) -> Result<(), Error> {
        let form = MultipartForm::new()
            .text("message", application.message)
            .text("portfolio_url", application.portfolio_url)
            .file("document", application.document);

        let request = ApiRequest::post(&["projects", project_id, "apply"])
            .bearer(credential.as_str())
            .multipart(form);

        Self::expect_success(self.send(request).await?)
    }

    /// `GET /owner/projects/{id}/requests`
    pub async fn list_applicants(
        &self,
        credential: &Credential,
        project_id: &str,
    ) -> Result<Vec<ApplicationRequestDto>, Error> {
        let request =
            ApiRequest::get(&["owner", "projects", project_id, "requests"]).bearer(credential.as_str());

        Self::parse(self.send(request).await?)
    }

    /// `POST /owner/requests/{id}/status`
    pub async fn update_status(
        &self,
        credential: &Credential,
        request_id: &str,
        status: ApplicationStatus,
    ) -> Result<(), Error> {
        let request = ApiRequest::post(&["owner", "requests", request_id, "status"])
            .bearer(credential.as_str())
            .json(&StatusUpdateDto { status })?;

        Self::expect_success(self.send(request).await?)
    }

    /// Link to `GET /owner/requests/{id}/document`
    ///
    /// The browser follows the link itself; the client never downloads the bytes.
    pub fn document_url(&self, request_id: &str) -> Result<String, Error> {
        self.transport.build_url(
            &self.base_url,
            &[
                "owner".to_string(),
                "requests".to_string(),
                request_id.to_string(),
                "document".to_string(),
            ],
            &[],
        )
    }
}
