//! Parser layer
//! - types.rs: Common types (ManifestEntry, Operator)
//! - error.rs: ParseError
//! - requirements_txt.rs: requirements.txt parser

pub mod error;
pub mod requirements_txt;
pub mod types;

pub use error::ParseError;
pub use requirements_txt::{ManifestEntries, RequirementsTxtParser};
pub use types::{ManifestEntry, Operator};
