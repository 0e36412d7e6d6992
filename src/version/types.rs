//! Release metadata and derived version lists

use indexmap::IndexMap;

/// Upload timestamps per version, in the order the registry returned them
///
/// A version may carry several uploads (sdist, wheels), each with its own
/// `upload_time`. An empty set means the registry knows no releases.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseSet {
    releases: IndexMap<String, Vec<String>>,
}

impl ReleaseSet {
    pub fn new(releases: IndexMap<String, Vec<String>>) -> Self {
        Self { releases }
    }

    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }

    pub fn len(&self) -> usize {
        self.releases.len()
    }

    /// Iterate over `(version, upload_times)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.releases
            .iter()
            .map(|(version, uploads)| (version.as_str(), uploads.as_slice()))
    }
}

impl<V, U> FromIterator<(V, Vec<U>)> for ReleaseSet
where
    V: Into<String>,
    U: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (V, Vec<U>)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(version, uploads)| {
                    (
                        version.into(),
                        uploads.into_iter().map(Into::into).collect(),
                    )
                })
                .collect(),
        )
    }
}

/// Versions published before the cutoff, oldest first by PEP 440 precedence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SafeVersionList {
    versions: Vec<String>,
}

impl SafeVersionList {
    /// Wrap versions that are already sorted by precedence
    pub(crate) fn from_sorted(versions: Vec<String>) -> Self {
        Self { versions }
    }

    pub fn contains(&self, version: &str) -> bool {
        self.versions.iter().any(|v| v == version)
    }

    /// The highest safe version
    pub fn latest(&self) -> Option<&str> {
        self.versions.last().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.versions
    }
}
