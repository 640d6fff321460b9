//! Kinds: a name, a recognizer, and a renderer.

use crate::error::InspectError;
use crate::indent::{Indent, pad};
use crate::inspector::Inspector;
use crate::options::InspectOptions;
use inspector_value::Value;
use serde::{Deserialize, Serialize};

/// The value universe a registry covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Universe {
    /// Host objects: documents, elements, windows, storage, XHR.
    Platform,
    /// Language values: numbers, strings, containers, errors, buffers.
    Intrinsic,
}

impl std::fmt::Display for Universe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Platform => write!(f, "platform"),
            Self::Intrinsic => write!(f, "intrinsic"),
        }
    }
}

impl std::str::FromStr for Universe {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "platform" => Ok(Self::Platform),
            "intrinsic" => Ok(Self::Intrinsic),
            _ => Err(format!("unknown universe: {s}")),
        }
    }
}

/// Structural test deciding whether a value belongs to a kind.
///
/// Recognizers are pure and total: they see primitives, `null` and
/// `undefined` too, and answer `false` for anything they do not understand.
#[derive(Clone, Copy)]
pub enum Recognizer {
    /// An object whose class tag is one of the listed names.
    Class(&'static [&'static str]),
    /// Any other structural predicate.
    Shape(fn(&Value) -> bool),
}

impl Recognizer {
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Self::Class(names) => value
                .as_object()
                .is_some_and(|object| names.iter().any(|name| *name == object.class())),
            Self::Shape(test) => test(value),
        }
    }
}

impl std::fmt::Debug for Recognizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Class(names) => f.debug_tuple("Class").field(names).finish(),
            Self::Shape(_) => f.write_str("Shape(..)"),
        }
    }
}

/// Renders a value already known to belong to a kind.
pub type RenderFn = fn(&RenderCx<'_>, &Value) -> Result<String, InspectError>;

/// A named classification with its recognizer and renderer.
///
/// A kind's identity is its name; a registry never holds two kinds with the
/// same name.
#[derive(Clone, Copy)]
pub struct Kind {
    pub name: &'static str,
    pub recognizer: Recognizer,
    pub render: RenderFn,
}

impl Kind {
    pub const fn new(name: &'static str, recognizer: Recognizer, render: RenderFn) -> Self {
        Self {
            name,
            recognizer,
            render,
        }
    }

    /// A kind recognized by a structural predicate.
    pub const fn shape(name: &'static str, test: fn(&Value) -> bool, render: RenderFn) -> Self {
        Self::new(name, Recognizer::Shape(test), render)
    }

    /// A kind recognized by class tag alone.
    pub const fn class(
        name: &'static str,
        classes: &'static [&'static str],
        render: RenderFn,
    ) -> Self {
        Self::new(name, Recognizer::Class(classes), render)
    }

    pub fn matches(&self, value: &Value) -> bool {
        self.recognizer.matches(value)
    }
}

impl std::fmt::Debug for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Kind")
            .field("name", &self.name)
            .field("recognizer", &self.recognizer)
            .finish_non_exhaustive()
    }
}

/// Where a renderer sits in the traversal.
///
/// Renderers recurse through [`RenderCx::nested`], which re-enters the
/// dispatcher one indent level and one depth level deeper.
#[derive(Clone, Copy)]
pub struct RenderCx<'a> {
    inspector: &'a Inspector,
    indent: Indent,
    depth: usize,
}

impl<'a> RenderCx<'a> {
    pub(crate) fn new(inspector: &'a Inspector, indent: Indent, depth: usize) -> Self {
        Self {
            inspector,
            indent,
            depth,
        }
    }

    pub fn indent(&self) -> Indent {
        self.indent
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn options(&self) -> &'a InspectOptions {
        self.inspector.options()
    }

    /// Whitespace for `level` at the configured width.
    pub fn pad(&self, level: usize) -> Result<String, InspectError> {
        let width = self.options().indent_width;
        pad(level, width).ok_or_else(|| InspectError::oversized_indent(level, width))
    }

    /// Render a child value through the full dispatcher.
    pub fn nested(&self, value: &Value) -> Result<String, InspectError> {
        self.inspector
            .dispatch(value, self.indent.deeper(), self.depth + 1)
            .map(|classification| classification.text)
    }
}
