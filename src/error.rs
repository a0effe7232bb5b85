use thiserror::Error;

/// Why a tree could not be turned into text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenError {
    /// The tree holds a node kind the generator has no formatter for.
    #[error("no formatter for node kind {kind}")]
    UnsupportedNodeKind { kind: &'static str },

    /// A node lacks structure its kind requires.
    #[error("malformed {kind}: {reason}")]
    MalformedNode { kind: &'static str, reason: String },
}

impl GenError {
    #[must_use]
    pub fn unsupported(kind: &'static str) -> Self {
        GenError::UnsupportedNodeKind { kind }
    }

    #[must_use]
    pub fn malformed(kind: &'static str, reason: impl Into<String>) -> Self {
        GenError::MalformedNode { kind, reason: reason.into() }
    }

    /// Node kind the error was raised for.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            GenError::UnsupportedNodeKind { kind } | GenError::MalformedNode { kind, .. } => *kind,
        }
    }
}
