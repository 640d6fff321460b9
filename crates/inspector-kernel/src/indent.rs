//! Indent levels and the whitespace they produce.

use crate::error::InspectError;
use inspector_value::Value;

/// Spaces per indent level unless options say otherwise.
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Widest leading whitespace a single line may carry.
pub const MAX_PAD_COLUMNS: usize = 1 << 20;

/// A validated, non-negative nesting level.
///
/// Dynamic inputs go through the `TryFrom` impls, which reject negative,
/// fractional and non-numeric levels with [`InspectError::InvalidArgument`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Indent(usize);

impl Indent {
    pub const ZERO: Self = Self(0);

    pub const fn new(level: usize) -> Self {
        Self(level)
    }

    pub const fn level(self) -> usize {
        self.0
    }

    /// One level deeper. Saturates; padding that large is rejected when a
    /// container tries to use it.
    pub const fn deeper(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl From<usize> for Indent {
    fn from(level: usize) -> Self {
        Self(level)
    }
}

impl TryFrom<i64> for Indent {
    type Error = InspectError;

    fn try_from(level: i64) -> Result<Self, Self::Error> {
        usize::try_from(level)
            .map(Self)
            .map_err(|_| InspectError::invalid_indent(level))
    }
}

impl TryFrom<f64> for Indent {
    type Error = InspectError;

    fn try_from(level: f64) -> Result<Self, Self::Error> {
        // `usize::MAX as f64` rounds up to 2^64, which does not fit.
        if level.is_finite()
            && level >= 0.0
            && level.fract() == 0.0
            && level < usize::MAX as f64
        {
            Ok(Self(level as usize))
        } else {
            Err(InspectError::invalid_indent(level))
        }
    }
}

/// An omitted argument (`undefined`) means level zero; any other non-number
/// is rejected.
impl TryFrom<&Value> for Indent {
    type Error = InspectError;

    fn try_from(level: &Value) -> Result<Self, Self::Error> {
        match level {
            Value::Undefined => Ok(Self::ZERO),
            Value::Number(n) => Self::try_from(*n),
            other => Err(InspectError::InvalidArgument(format!(
                "indent must be a non-negative integer, got a value of type {}",
                other.type_of()
            ))),
        }
    }
}

/// Leading whitespace for `level` at `width` spaces per level, or `None`
/// when it would exceed [`MAX_PAD_COLUMNS`].
pub fn pad(level: usize, width: usize) -> Option<String> {
    level
        .checked_mul(width)
        .filter(|columns| *columns <= MAX_PAD_COLUMNS)
        .map(|columns| " ".repeat(columns))
}

/// Leading whitespace for `level` at the default four spaces per level.
pub fn indentation(level: usize) -> Option<String> {
    pad(level, DEFAULT_INDENT_WIDTH)
}
