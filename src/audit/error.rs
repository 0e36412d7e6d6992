use thiserror::Error;

use crate::version::error::{RegistryError, ResolveError};

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Failed to fetch releases for package {package}")]
    Registry {
        package: String,
        source: RegistryError,
    },

    #[error("Failed to resolve safe versions for package {package}")]
    Resolve {
        package: String,
        source: ResolveError,
    },
}
