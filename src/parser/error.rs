/// Error type for manifest parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The line contains none of the known operators
    #[error("Cannot parse line {line}: {content}")]
    NoOperator { line: usize, content: String },

    /// Nothing precedes the operator
    #[error("Missing package name on line {line}: {content}")]
    MissingName { line: usize, content: String },

    /// Nothing follows the operator
    #[error("Missing version on line {line}: {content}")]
    MissingVersion { line: usize, content: String },
}
