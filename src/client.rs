use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use crate::aliases::AliasEntry;
use crate::config::ServerProfile;
use crate::error::Error;
use crate::helpers::url::{
    build_status_endpoint, build_with_parameters_endpoint, full_url, job_api_endpoint,
    job_parameters_endpoint,
};
use crate::parameters::{classify, BuildRequest, JobParameters, ParameterSet};

/// Build number used when the operator does not name one
pub const LAST_BUILD: &str = "lastBuild";

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// Authenticated HTTP exchange with the Jenkins server
pub trait Transport {
    fn get(&self, url: &str, profile: &ServerProfile) -> Result<HttpResponse>;
    fn post_form(&self, url: &str, profile: &ServerProfile, body: String) -> Result<HttpResponse>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str, profile: &ServerProfile) -> Result<HttpResponse> {
        (**self).get(url, profile)
    }

    fn post_form(&self, url: &str, profile: &ServerProfile, body: String) -> Result<HttpResponse> {
        (**self).post_form(url, profile, body)
    }
}

/// Blocking reqwest transport using HTTP Basic auth
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str, profile: &ServerProfile) -> Result<HttpResponse> {
        let response = self
            .client
            .get(url)
            .basic_auth(&profile.user, Some(&profile.api_token))
            .header(ACCEPT, "application/json")
            .send()
            .context("Failed to reach Jenkins")?;

        let status = response.status();
        let body = response.bytes().context("Failed to read response")?.to_vec();
        Ok(HttpResponse { status, body })
    }

    fn post_form(&self, url: &str, profile: &ServerProfile, body: String) -> Result<HttpResponse> {
        let response = self
            .client
            .post(url)
            .basic_auth(&profile.user, Some(&profile.api_token))
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .context("Failed to reach Jenkins")?;

        let status = response.status();
        let body = response.bytes().context("Failed to read response")?.to_vec();
        Ok(HttpResponse { status, body })
    }
}

/// Only the field used to recognise a job
#[derive(Debug, Deserialize)]
struct JobSummary {
    #[serde(rename = "fullDisplayName")]
    full_display_name: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BuildStatus {
    #[serde(rename = "fullDisplayName")]
    pub full_display_name: String,
    pub id: Option<String>,
    pub building: Option<bool>,
    pub result: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerOutcome {
    pub succeeded: bool,
    pub status_text: String,
}

pub struct JenkinsClient<T: Transport = HttpTransport> {
    transport: T,
    profile: ServerProfile,
}

impl JenkinsClient<HttpTransport> {
    pub fn new(profile: ServerProfile) -> Result<Self> {
        Ok(Self::with_transport(profile, HttpTransport::new()?))
    }
}

impl<T: Transport> JenkinsClient<T> {
    pub fn with_transport(profile: ServerProfile, transport: T) -> Self {
        Self { transport, profile }
    }

    /// GET `endpoint` relative to the server URL and return the raw body
    pub fn get(&self, endpoint: &str) -> Result<Vec<u8>> {
        let url = full_url(&self.profile.server_url, endpoint);
        debug!("GET {}", url);

        let response = self.transport.get(&url, &self.profile)?;
        debug!("GET {} -> {}", url, response.status);

        if !response.status.is_success() {
            return Err(Error::HttpStatus { url, status: response.status }.into());
        }

        Ok(response.body)
    }

    pub fn discover_parameters(&self, job: &AliasEntry) -> Result<ParameterSet> {
        let body = self.get(&job_parameters_endpoint(&job.path))?;

        let job_parameters: JobParameters = serde_json::from_slice(&body).map_err(|source| Error::Decode {
            what: "Jenkins job configurations",
            source,
        })?;

        Ok(classify(&job_parameters.definitions()))
    }

    /// Start a build; only HTTP 201 counts as success
    pub fn trigger_build(&self, job: &AliasEntry, request: &BuildRequest) -> Result<TriggerOutcome> {
        let url = full_url(&self.profile.server_url, &build_with_parameters_endpoint(&job.path));
        let body = encode_form(request);
        debug!("POST {}", url);

        let response = self.transport.post_form(&url, &self.profile, body)?;
        debug!("POST {} -> {}", url, response.status);

        Ok(TriggerOutcome {
            succeeded: response.status == StatusCode::CREATED,
            status_text: response.status.to_string(),
        })
    }

    pub fn fetch_status(&self, job: &AliasEntry, build: Option<&str>) -> Result<BuildStatus> {
        let build = build.unwrap_or(LAST_BUILD);
        let body = self.get(&build_status_endpoint(&job.path, build))?;

        let status = serde_json::from_slice(&body).map_err(|source| Error::Decode {
            what: "build status",
            source,
        })?;

        Ok(status)
    }

    /// Confirm `path` names a job and return its display name
    pub fn validate_job_url(&self, path: &str) -> Result<String> {
        let body = match self.get(&job_api_endpoint(path)) {
            Ok(body) => body,
            Err(e) => {
                let not_found = matches!(
                    e.downcast_ref::<Error>(),
                    Some(Error::HttpStatus { status, .. }) if *status == StatusCode::NOT_FOUND
                );
                if not_found {
                    return Err(Error::InvalidJobUrl(path.to_string()).into());
                }
                return Err(e);
            }
        };

        let summary: JobSummary = serde_json::from_slice(&body).map_err(|source| Error::Decode {
            what: "Jenkins job information",
            source,
        })?;

        summary
            .full_display_name
            .ok_or_else(|| Error::InvalidJobUrl(path.to_string()).into())
    }
}

/// `application/x-www-form-urlencoded` body for a build trigger
pub fn encode_form(request: &BuildRequest) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(request.form_pairs())
        .finish()
}
