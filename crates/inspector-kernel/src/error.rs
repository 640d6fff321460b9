//! Error types for inspection and option loading.

/// Why an `inspect` call produced no text.
///
/// Failures are never partial: a nested value that cannot be rendered aborts
/// the whole top-level call with the nested error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InspectError {
    /// The indent argument was negative, fractional, or not a number, or
    /// a container at that indent would need more padding than allowed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Neither registry recognized the value.
    ///
    /// `diagnostic` is a keyed block of the value's string tag, type and
    /// constructor name, and is embedded verbatim in the message.
    #[error("unexpected data: undefined type of variable: {diagnostic}")]
    UnclassifiedValue {
        string_tag: String,
        type_of: &'static str,
        constructor: Option<String>,
        diagnostic: String,
    },

    /// Nesting went deeper than the configured limit.
    #[error("nesting depth exceeded the limit of {limit}")]
    DepthExceeded { limit: usize },
}

impl InspectError {
    pub(crate) fn invalid_indent(found: impl std::fmt::Display) -> Self {
        Self::InvalidArgument(format!("indent must be a non-negative integer, got {found}"))
    }

    pub(crate) fn oversized_indent(level: usize, width: usize) -> Self {
        Self::InvalidArgument(format!(
            "indent level {level} at width {width} exceeds {} columns",
            crate::indent::MAX_PAD_COLUMNS
        ))
    }
}

/// Failure to load [`InspectOptions`](crate::InspectOptions) from disk.
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error("failed to read file: {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid toml at {path}: {source}")]
    ParseToml {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
