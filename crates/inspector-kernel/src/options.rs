//! Inspector options and their TOML form.
//!
//! ```toml
//! max-depth = 64
//! match-policy = "first"
//! escape-strings = true
//! indent-width = 2
//! ```
//!
//! Every key is optional; missing keys keep their defaults.

use crate::error::OptionsError;
use crate::indent::DEFAULT_INDENT_WIDTH;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Which recognizer wins when several kinds in one registry match.
///
/// The built-in registries are ordered for [`MatchPolicy::Last`]: broad
/// kinds come first and narrower kinds later override them. `First` is meant
/// for custom registries that list their most specific kinds first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    #[default]
    Last,
    First,
}

impl std::fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Last => write!(f, "last"),
            Self::First => write!(f, "first"),
        }
    }
}

impl std::str::FromStr for MatchPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "last" => Ok(Self::Last),
            "first" => Ok(Self::First),
            _ => Err(format!("unknown match policy: {s}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct InspectOptions {
    /// Deepest nesting level rendered before failing with `DepthExceeded`.
    pub max_depth: usize,
    pub match_policy: MatchPolicy,
    /// Backslash-escape `"` and `\` inside rendered strings.
    pub escape_strings: bool,
    /// Spaces per indent level.
    pub indent_width: usize,
}

impl Default for InspectOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            match_policy: MatchPolicy::Last,
            escape_strings: false,
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

impl InspectOptions {
    /// Parse options from TOML text. `origin` only labels errors.
    pub fn from_toml_str(text: &str, origin: &str) -> Result<Self, OptionsError> {
        toml::from_str(text).map_err(|source| OptionsError::ParseToml {
            path: origin.to_string(),
            source,
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, OptionsError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let text = fs::read_to_string(path).map_err(|source| OptionsError::ReadFile {
            path: display.clone(),
            source,
        })?;
        Self::from_toml_str(&text, &display)
    }
}
