//! Common types for manifest parsing

use std::fmt;

/// Comparison operator between a package name and its pinned version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `==`
    Eq,
    /// `>=`
    Ge,
    /// `<=`
    Le,
    /// `~=`
    Compatible,
    /// `>`
    Gt,
    /// `<`
    Lt,
}

impl Operator {
    /// Every operator in the order lines are searched for them.
    ///
    /// Two-character operators come before `>` and `<` so that `>=` is not
    /// split at its `>`.
    pub const ALL: [Operator; 6] = [
        Operator::Eq,
        Operator::Ge,
        Operator::Le,
        Operator::Compatible,
        Operator::Gt,
        Operator::Lt,
    ];

    /// Returns the string representation of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Eq => "==",
            Operator::Ge => ">=",
            Operator::Le => "<=",
            Operator::Compatible => "~=",
            Operator::Gt => ">",
            Operator::Lt => "<",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One pinned dependency read from a manifest line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Package name (e.g., "requests")
    pub name: String,
    pub operator: Operator,
    /// Pinned version as written (e.g., "2.31.0")
    pub version: String,
    /// Line number (0-indexed)
    pub line: usize,
}

impl ManifestEntry {
    /// Same entry pinned to another version
    pub fn with_version(&self, version: &str) -> Self {
        Self {
            version: version.to_string(),
            ..self.clone()
        }
    }
}

impl fmt::Display for ManifestEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.name, self.operator, self.version)
    }
}
