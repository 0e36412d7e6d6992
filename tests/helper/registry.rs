//! Registry test utilities

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use pydep_check::version::error::RegistryError;
use pydep_check::version::registry::Registry;
use pydep_check::version::types::ReleaseSet;

/// Mock registry for testing
#[derive(Default)]
pub struct MockRegistry {
    releases: HashMap<String, ReleaseSet>,
    failing: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register releases as `(version, upload_times)` pairs
    pub fn with_releases(mut self, package: &str, releases: Vec<(&str, Vec<&str>)>) -> Self {
        self.releases
            .insert(package.to_string(), releases.into_iter().collect());
        self
    }

    /// Make every lookup of `package` fail
    pub fn with_failure(mut self, package: &str) -> Self {
        self.failing.insert(package.to_string());
        self
    }

    /// Packages looked up so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Registry for MockRegistry {
    async fn fetch_releases(&self, package_name: &str) -> Result<ReleaseSet, RegistryError> {
        self.calls.lock().unwrap().push(package_name.to_string());

        if self.failing.contains(package_name) {
            return Err(RegistryError::InvalidResponse(
                "PyPI API returned status 503 Service Unavailable".to_string(),
            ));
        }

        // Unknown packages have no releases, as on PyPI
        Ok(self
            .releases
            .get(package_name)
            .cloned()
            .unwrap_or_default())
    }
}
