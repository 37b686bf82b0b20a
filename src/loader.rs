//! Appointment Feed Loader
//!
//! One GET against the queue board feed, parsed into appointments. Failures
//! are classified for the logs and otherwise collapse into the same error
//! state.

use async_trait::async_trait;
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;

use crate::endpoint::{endpoint_url, DEFAULT_BASE_URL, DEFAULT_LOCATION_ID};
use crate::error::LoadError;
use crate::model::{parse_appointments, Appointment};
use crate::state::LoadState;

/// Something that can produce the appointments for one board mount
#[async_trait]
pub trait AppointmentSource: Send + Sync {
    /// Perform the load. Called once per mount; never retried.
    async fn load(&self) -> Result<Vec<Appointment>, LoadError>;

    /// Perform the load and settle a fresh board state with the result.
    /// The technical error goes to the log, the state only carries the
    /// user-facing message.
    async fn load_state(&self) -> LoadState {
        let result = self.load().await;
        if let Err(e) = &result {
            tracing::error!(kind = e.kind(), error = %e, "Failed to load appointments");
        }
        LoadState::Loading.resolve(result)
    }
}

/// Configuration for the HTTP loader
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Feed URL without the location query
    pub base_url: String,
    /// Location id appended as `locationId`
    pub location_id: String,
    /// Whole-request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            location_id: DEFAULT_LOCATION_ID.to_string(),
            request_timeout_ms: 30_000,
        }
    }
}

impl LoaderConfig {
    /// Full request URL
    pub fn url(&self) -> String {
        endpoint_url(&self.base_url, &self.location_id)
    }
}

/// Loads the feed over HTTP
pub struct AppointmentLoader {
    client: Client,
    config: LoaderConfig,
}

impl AppointmentLoader {
    /// Create a loader with the given configuration
    pub fn new(config: LoaderConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }
}

#[async_trait]
impl AppointmentSource for AppointmentLoader {
    async fn load(&self) -> Result<Vec<Appointment>, LoadError> {
        let url = self.config.url();
        tracing::debug!(%url, "Fetching appointments");

        let response = self.client.get(&url).send().await.map_err(network_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(network_error)?;
        let appointments = parse_appointments(&body)?;

        tracing::info!(count = appointments.len(), "Loaded appointments");
        Ok(appointments)
    }
}

fn network_error(e: reqwest::Error) -> LoadError {
    if e.is_timeout() {
        LoadError::Network(format!("request timed out: {}", e))
    } else if e.is_connect() {
        LoadError::Network(format!("connection failed: {}", e))
    } else {
        LoadError::Network(e.to_string())
    }
}

/// Loads a saved feed body from disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl AppointmentSource for FileSource {
    async fn load(&self) -> Result<Vec<Appointment>, LoadError> {
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| LoadError::Network(format!("failed to read {:?}: {}", self.path, e)))?;

        parse_appointments(&body)
    }
}

/// Always yields the same result
#[derive(Debug, Clone)]
pub struct StaticSource {
    result: Result<Vec<Appointment>, LoadError>,
}

impl StaticSource {
    pub fn new(result: Result<Vec<Appointment>, LoadError>) -> Self {
        Self { result }
    }
}

#[async_trait]
impl AppointmentSource for StaticSource {
    async fn load(&self) -> Result<Vec<Appointment>, LoadError> {
        self.result.clone()
    }
}
