use std::str::FromStr;

use pep508_rs::pep440_rs::Version;

/// Sort key giving every version string a total precedence order.
///
/// Strings that are not PEP 440 versions sort before all valid versions,
/// lexicographically among themselves.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Legacy(String),
    Pep440(Version),
}

impl Precedence {
    fn of(version: &str) -> Self {
        match parse_version(version) {
            Some(parsed) => Precedence::Pep440(parsed),
            None => Precedence::Legacy(version.to_string()),
        }
    }
}

/// Parse a version string as a PEP 440 version.
///
/// Examples:
/// - "1.10" -> Version(1.10)
/// - "2.0rc1" -> Version(2.0rc1)
/// - "not-a-version" -> None
pub fn parse_version(version: &str) -> Option<Version> {
    Version::from_str(version.trim()).ok()
}

/// Sort version strings ascending by precedence ("1.9" before "1.10")
pub fn sort_by_precedence(versions: &mut [String]) {
    versions.sort_by_cached_key(|v| Precedence::of(v));
}
