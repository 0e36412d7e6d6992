//! Release lookup and safe-version resolution
//!
//! This module fetches release metadata from a package index and reduces it,
//! together with a cutoff, into the versions that are safe to pin.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Registry   │────▶│  Resolver   │◀────│   Cutoff    │
//! │  (fetch)    │     │  (filter)   │     │ (end of day)│
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────┐     ┌─────────────┐
//! │ Registries  │     │   PEP 440   │
//! │   (PyPI)    │     │ (ordering)  │
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`cutoff`]: The cutoff instant and `--date` parsing
//! - [`registry`]: Registry trait for fetching releases from remote sources
//! - [`registries`]: Concrete registry implementations (PyPI)
//! - [`resolver`]: Reduces releases and a cutoff to a `SafeVersionList`
//! - [`pep440`]: Version precedence ordering
//! - [`error`]: Error types for registry and resolution operations
//! - [`types`]: `ReleaseSet` and `SafeVersionList`

pub mod cutoff;
pub mod error;
pub mod pep440;
pub mod registries;
pub mod registry;
pub mod resolver;
pub mod types;
