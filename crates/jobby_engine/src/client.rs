use std::time::Duration;

use jobby_core::{Credential, JobDetailsPage, JobList, JobsQuery, Profile};
use jobby_logging::{jobby_debug, jobby_warn};
use reqwest::header::{HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::types::{ErrorResponse, LoginBody, ProfileEnvelope, TokenResponse};
use crate::{ApiError, FailureKind};

pub const DEFAULT_BASE_URL: &str = "https://apis.ccbp.in";

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// The job board endpoints the app consumes.
#[async_trait::async_trait]
pub trait JobBoardApi: Send + Sync {
    /// Exchanges username and password for a bearer token.
    async fn login(&self, username: &str, password: &str) -> Result<String, ApiError>;

    async fn profile(&self, credential: &Credential) -> Result<Profile, ApiError>;

    async fn jobs(&self, credential: &Credential, query: &JobsQuery) -> Result<JobList, ApiError>;

    async fn job_details(
        &self,
        credential: &Credential,
        job_id: &str,
    ) -> Result<JobDetailsPage, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestJobBoard {
    settings: ApiSettings,
    client: reqwest::Client,
}

impl ReqwestJobBoard {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn url(&self, path: &str, query: Option<&str>) -> Result<Url, ApiError> {
        let base = self.settings.base_url.trim_end_matches('/');
        let raw = match query {
            Some(query) => format!("{base}{path}?{query}"),
            None => format!("{base}{path}"),
        };
        Url::parse(&raw).map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        credential: &Credential,
    ) -> Result<T, ApiError> {
        jobby_debug!("GET {}", url);
        let response = self
            .client
            .request(Method::GET, url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .bearer_auth(credential.token())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status));
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        decode(&body)
    }
}

#[async_trait::async_trait]
impl JobBoardApi for ReqwestJobBoard {
    async fn login(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let url = self.url("/login", None)?;
        let body = serde_json::to_vec(&LoginBody { username, password })
            .map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))?;

        let response = self
            .client
            .request(Method::POST, url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        if status.is_success() {
            let token: TokenResponse = decode(&bytes)?;
            return Ok(token.jwt_token);
        }

        match serde_json::from_slice::<ErrorResponse>(&bytes) {
            Ok(rejection) => {
                jobby_warn!("Login rejected with status {}", status);
                Err(ApiError::new(FailureKind::Rejected, rejection.error_msg))
            }
            Err(_) => Err(status_error(status)),
        }
    }

    async fn profile(&self, credential: &Credential) -> Result<Profile, ApiError> {
        let url = self.url("/profile", None)?;
        let envelope: ProfileEnvelope = self.get_json(url, credential).await?;
        Ok(envelope.profile_details)
    }

    async fn jobs(&self, credential: &Credential, query: &JobsQuery) -> Result<JobList, ApiError> {
        let url = self.url("/jobs", Some(&query.to_query_string()))?;
        self.get_json(url, credential).await
    }

    async fn job_details(
        &self,
        credential: &Credential,
        job_id: &str,
    ) -> Result<JobDetailsPage, ApiError> {
        let mut url = self.url("/jobs", None)?;
        url.path_segments_mut()
            .map_err(|_| ApiError::new(FailureKind::InvalidUrl, "base url cannot have a path"))?
            .push(job_id);
        self.get_json(url, credential).await
    }
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(bytes).map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))
}

fn status_error(status: StatusCode) -> ApiError {
    ApiError::new(FailureKind::HttpStatus(status.as_u16()), status.to_string())
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}
