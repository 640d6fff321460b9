//! The [`Value`] enum and the structural queries recognizers rely on.

use crate::object::Object;

/// Any runtime value handed to the inspector.
///
/// Values form an owned tree, so reference cycles cannot be expressed.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    /// A symbol with its optional description.
    Symbol(Option<String>),
    Object(Box<Object>),
}

impl Value {
    /// What the host's `typeof` operator would report.
    pub fn type_of(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "object",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Symbol(_) => "symbol",
            Self::Object(object) if object.is_callable() => "function",
            Self::Object(_) => "object",
        }
    }

    /// The bare class name, e.g. `Array` or `HTMLDivElement`.
    pub fn class(&self) -> &str {
        match self {
            Self::Undefined => "Undefined",
            Self::Null => "Null",
            Self::Bool(_) => "Boolean",
            Self::Number(_) => "Number",
            Self::String(_) => "String",
            Self::Symbol(_) => "Symbol",
            Self::Object(object) => object.class(),
        }
    }

    /// `Object.prototype.toString` form: `[object Class]`.
    pub fn string_tag(&self) -> String {
        format!("[object {}]", self.class())
    }

    /// Name of the constructor function, when the value has one.
    pub fn constructor_name(&self) -> Option<&str> {
        match self {
            Self::Undefined | Self::Null => None,
            Self::Bool(_) => Some("Boolean"),
            Self::Number(_) => Some("Number"),
            Self::String(_) => Some("String"),
            Self::Symbol(_) => Some("Symbol"),
            Self::Object(object) => object.constructor(),
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Member lookup. Primitives expose no members.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|object| object.get(key))
    }

    /// Member lookup that treats an absent member as `undefined`.
    pub fn member(&self, key: &str) -> &Value {
        static UNDEFINED: Value = Value::Undefined;
        self.get(key).unwrap_or(&UNDEFINED)
    }

    pub fn has_method(&self, name: &str) -> bool {
        self.as_object().is_some_and(|object| object.has_method(name))
    }

    pub fn instance_of(&self, name: &str) -> bool {
        self.as_object().is_some_and(|object| object.instance_of(name))
    }

    /// Numeric `length`, if present.
    pub fn length(&self) -> Option<f64> {
        self.as_object().and_then(Object::length)
    }

    /// Host truthiness: what `if (value)` would decide.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::String(text) => !text.is_empty(),
            Self::Symbol(_) | Self::Object(_) => true,
        }
    }

    pub fn is_nullish(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_tags_match_host_conventions() {
        assert_eq!(Value::Undefined.string_tag(), "[object Undefined]");
        assert_eq!(Value::Null.string_tag(), "[object Null]");
        assert_eq!(Value::Null.type_of(), "object");
        assert_eq!(Value::from(true).type_of(), "boolean");
        assert_eq!(Value::Symbol(None).type_of(), "symbol");
        assert_eq!(Value::Symbol(None).constructor_name(), Some("Symbol"));
        assert_eq!(Value::Undefined.constructor_name(), None);
    }

    #[test]
    fn callables_report_function_type() {
        let function = Value::function("function f() { return 1; }");
        assert_eq!(function.type_of(), "function");
        assert_eq!(function.class(), "Function");
    }

    #[test]
    fn truthiness() {
        assert!(!Value::Undefined.is_truthy());
        assert!(!Value::Number(0.0).is_truthy());
        assert!(!Value::Number(f64::NAN).is_truthy());
        assert!(!Value::from("").is_truthy());
        assert!(Value::from("x").is_truthy());
        assert!(Value::empty_object().is_truthy());
    }

    #[test]
    fn primitives_have_no_members() {
        assert_eq!(Value::from("abc").get("length"), None);
        assert_eq!(Value::Number(1.0).member("anything"), &Value::Undefined);
        assert!(!Value::Null.has_method("toString"));
    }
}
