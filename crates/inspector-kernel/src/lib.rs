//! # Inspector Kernel
//!
//! Classifies a runtime value into exactly one named kind and renders it as
//! deterministic, indented, human-readable text. The output is for people
//! reading logs, not for parsing back.
//!
//! ## Architecture
//!
//! ```text
//! inspect(value, indent)
//!     │
//! Inspector             ← dispatcher: platform first, then intrinsic
//!     │
//! Registry              ← ordered kinds; the last matching kind wins
//!     │
//! Kind                  ← recognizer (structural test) + renderer
//!     │
//! render::*             ← containers recurse back into the Inspector
//! ```
//!
//! ```
//! use inspector_kernel::inspect;
//! use inspector_value::Value;
//!
//! let value = Value::object([("a", Value::array(vec![1.into(), 2.into()]))]);
//! assert_eq!(inspect(&value).unwrap(), "{\n    \"a\": [1, 2]\n}");
//! ```

pub mod error;
pub mod indent;
pub mod inspector;
mod intrinsic;
pub mod kind;
pub mod options;
mod platform;
pub mod registry;
pub mod render;

pub use error::{InspectError, OptionsError};
pub use indent::{Indent, indentation};
pub use inspector::Inspector;
pub use kind::{Kind, Recognizer, RenderCx, RenderFn, Universe};
pub use options::{InspectOptions, MatchPolicy};
pub use registry::{Classification, KindEntry, Registry, RegistryBuilder};

use inspector_value::Value;
use std::sync::LazyLock;

static DEFAULT_INSPECTOR: LazyLock<Inspector> = LazyLock::new(Inspector::default);

/// Render `value` with the built-in registries at indent level zero.
pub fn inspect(value: &Value) -> Result<String, InspectError> {
    DEFAULT_INSPECTOR.inspect(value)
}

/// Render `value` with the built-in registries at `indent`.
pub fn inspect_at(value: &Value, indent: Indent) -> Result<String, InspectError> {
    DEFAULT_INSPECTOR.inspect_at(value, indent)
}
