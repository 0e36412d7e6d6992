//! PyPI registry client for fetching Python package releases

use std::time::Duration;

use async_trait::async_trait;
use indexmap::IndexMap;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::REQUEST_TIMEOUT_SECS;
use crate::version::error::RegistryError;
use crate::version::registry::Registry;
use crate::version::types::ReleaseSet;

/// PyPI registry client
///
/// Owns one HTTP client that is reused for every lookup of a run.
pub struct PypiRegistry {
    client: Client,
    base_url: String,
}

impl PypiRegistry {
    pub fn new(base_url: &str) -> Result<Self, RegistryError> {
        let client = Client::builder()
            .user_agent(concat!("pydep-check/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

/// PyPI JSON API response structure
#[derive(Debug, Deserialize)]
struct PypiResponse {
    #[serde(default)]
    releases: IndexMap<String, Vec<PypiFile>>,
}

/// One uploaded distribution file of a release
#[derive(Debug, Deserialize)]
struct PypiFile {
    upload_time: String,
}

impl PypiResponse {
    fn into_release_set(self) -> ReleaseSet {
        self.releases
            .into_iter()
            .map(|(version, files)| {
                let uploads: Vec<String> = files.into_iter().map(|f| f.upload_time).collect();
                (version, uploads)
            })
            .collect()
    }
}

#[async_trait]
impl Registry for PypiRegistry {
    async fn fetch_releases(&self, package_name: &str) -> Result<ReleaseSet, RegistryError> {
        let url = format!("{}/pypi/{}/json", self.base_url, package_name);
        debug!("Fetching PyPI package: {}", url);

        let response = self.client.get(&url).send().await?;

        // An unknown package has no releases, so every pin of it is unsafe
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            warn!(
                "Package {} not found on the registry, treating it as having no releases",
                package_name
            );
            return Ok(ReleaseSet::default());
        }

        if !response.status().is_success() {
            return Err(RegistryError::InvalidResponse(format!(
                "PyPI API returned status {}",
                response.status()
            )));
        }

        let body = response.bytes().await?;

        // A body that is not release metadata means "no known releases"
        let releases = match serde_json::from_slice::<PypiResponse>(&body) {
            Ok(pypi_response) => pypi_response.into_release_set(),
            Err(e) => {
                warn!(
                    "Unreadable PyPI response for package {}, treating it as having no releases: {}",
                    package_name, e
                );
                ReleaseSet::default()
            }
        };

        debug!(
            "Found {} releases for package {}",
            releases.len(),
            package_name
        );

        Ok(releases)
    }
}
