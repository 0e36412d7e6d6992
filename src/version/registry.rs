//! Registry trait for fetching release metadata

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;
use crate::version::types::ReleaseSet;

/// Trait for fetching release metadata from a package index
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Fetches every release of a package together with its upload times
    ///
    /// # Arguments
    /// * `package_name` - The name of the package (e.g., "requests")
    ///
    /// # Returns
    /// * `Ok(ReleaseSet)` - Releases in registry order; empty if the index
    ///   answered with something that is not release metadata
    /// * `Err(RegistryError)` - If the request itself fails
    async fn fetch_releases(&self, package_name: &str) -> Result<ReleaseSet, RegistryError>;
}
