//! Builders for language-intrinsic values.
//!
//! Each builder reproduces the structural surface a host gives the
//! corresponding built-in: class tag, constructor, prototype chain, and the
//! methods duck-typing recognizers probe for.

use crate::object::{Object, Singleton, Slot};
use crate::value::Value;
use chrono::{DateTime, FixedOffset};

pub const ARRAY_METHODS: &[&str] = &[
    "concat", "indexOf", "join", "pop", "push", "reverse", "shift", "slice", "sort", "splice",
    "unshift",
];

pub const DATE_METHODS: &[&str] = &[
    "getDate",
    "getDay",
    "getFullYear",
    "getHours",
    "getMilliseconds",
    "getMinutes",
    "getMonth",
    "getSeconds",
    "getTime",
    "toISOString",
];

pub const DATA_VIEW_METHODS: &[&str] = &[
    "getFloat32",
    "getFloat64",
    "getInt16",
    "getInt32",
    "getInt8",
    "getUint16",
    "getUint32",
    "getUint8",
];

const MATH_CONSTANTS: &[(&str, f64)] = &[
    ("E", std::f64::consts::E),
    ("LN10", std::f64::consts::LN_10),
    ("LN2", std::f64::consts::LN_2),
    ("LOG10E", std::f64::consts::LOG10_E),
    ("LOG2E", std::f64::consts::LOG2_E),
    ("PI", std::f64::consts::PI),
    ("SQRT1_2", std::f64::consts::FRAC_1_SQRT_2),
    ("SQRT2", std::f64::consts::SQRT_2),
];

const MATH_METHODS: &[&str] = &[
    "abs", "ceil", "cos", "exp", "floor", "log", "max", "min", "pow", "random", "round", "sin",
    "sqrt", "tan",
];

/// Element types of typed array views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypedArrayKind {
    Int8,
    Uint8,
    Uint8Clamped,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Float32,
    Float64,
}

impl TypedArrayKind {
    pub const ALL: [TypedArrayKind; 9] = [
        Self::Float32,
        Self::Float64,
        Self::Int16,
        Self::Int32,
        Self::Int8,
        Self::Uint16,
        Self::Uint32,
        Self::Uint8,
        Self::Uint8Clamped,
    ];

    pub fn class_name(self) -> &'static str {
        match self {
            Self::Int8 => "Int8Array",
            Self::Uint8 => "Uint8Array",
            Self::Uint8Clamped => "Uint8ClampedArray",
            Self::Int16 => "Int16Array",
            Self::Uint16 => "Uint16Array",
            Self::Int32 => "Int32Array",
            Self::Uint32 => "Uint32Array",
            Self::Float32 => "Float32Array",
            Self::Float64 => "Float64Array",
        }
    }

    pub fn bytes_per_element(self) -> usize {
        match self {
            Self::Int8 | Self::Uint8 | Self::Uint8Clamped => 1,
            Self::Int16 | Self::Uint16 => 2,
            Self::Int32 | Self::Uint32 | Self::Float32 => 4,
            Self::Float64 => 8,
        }
    }
}

/// Built-in error constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    Error,
    EvalError,
    InternalError,
    RangeError,
    ReferenceError,
    StopIteration,
    SyntaxError,
    TypeError,
    UriError,
}

impl ErrorType {
    pub fn name(self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::EvalError => "EvalError",
            Self::InternalError => "InternalError",
            Self::RangeError => "RangeError",
            Self::ReferenceError => "ReferenceError",
            Self::StopIteration => "StopIteration",
            Self::SyntaxError => "SyntaxError",
            Self::TypeError => "TypeError",
            Self::UriError => "URIError",
        }
    }
}

/// Builds an error object. Optional location fields are only set when
/// provided, matching hosts that omit them.
#[derive(Debug, Clone)]
pub struct ErrorBuilder {
    kind: ErrorType,
    name: Option<String>,
    message: String,
    line: Option<u32>,
    file: Option<String>,
}

impl ErrorBuilder {
    pub fn new(kind: ErrorType) -> Self {
        Self {
            kind,
            name: None,
            message: String::new(),
            line: None,
            file: None,
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Override the `name` member, as user code sometimes does.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    pub fn file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn build(self) -> Value {
        let type_name = self.kind.name();
        let mut ancestry = vec![type_name];
        if self.kind != ErrorType::Error {
            ancestry.push("Error");
        }
        ancestry.push("Object");

        let name = self.name.unwrap_or_else(|| type_name.to_string());
        let mut object = Object::new("Error")
            .with_constructor(type_name)
            .with_ancestry(ancestry)
            .with_methods(["toString"])
            .with_hidden("name", name)
            .with_hidden("message", self.message);
        if let Some(line) = self.line {
            object = object.with_hidden("lineNumber", line);
        }
        if let Some(file) = self.file {
            object = object.with_hidden("fileName", file);
        }
        object.into_value()
    }
}

impl Value {
    /// A plain object with own enumerable properties in the given order.
    pub fn object<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut object = plain_object();
        for (key, value) in entries {
            object.insert(key, value);
        }
        object.into_value()
    }

    pub fn empty_object() -> Self {
        plain_object().into_value()
    }

    pub fn array(items: Vec<Value>) -> Self {
        Object::new("Array")
            .with_constructor("Array")
            .with_ancestry(["Array", "Object"])
            .with_methods(ARRAY_METHODS.iter().copied())
            .with_elements(items)
            .into_value()
    }

    /// A function's `arguments` object: indexed and length-bearing, but not
    /// an array.
    pub fn arguments(items: Vec<Value>) -> Self {
        Object::new("Arguments")
            .with_constructor("Object")
            .with_ancestry(["Object"])
            .with_elements(items)
            .into_value()
    }

    /// A function whose `toString()` yields `source`.
    pub fn function(source: impl Into<String>) -> Self {
        Object::new("Function")
            .with_constructor("Function")
            .with_ancestry(["Function", "Object"])
            .with_methods(["apply", "bind", "call", "toString"])
            .with_slot(Slot::Function {
                source: source.into(),
            })
            .into_value()
    }

    pub fn date(at: DateTime<FixedOffset>) -> Self {
        Object::new("Date")
            .with_constructor("Date")
            .with_ancestry(["Date", "Object"])
            .with_methods(DATE_METHODS.iter().copied())
            .with_slot(Slot::Date(at))
            .into_value()
    }

    pub fn regexp(source: impl Into<String>, flags: impl Into<String>) -> Self {
        let flags: String = flags.into();
        Object::new("RegExp")
            .with_constructor("RegExp")
            .with_ancestry(["RegExp", "Object"])
            .with_methods(["exec", "test", "toString"])
            .with_hidden("global", flags.contains('g'))
            .with_hidden("ignoreCase", flags.contains('i'))
            .with_hidden("multiline", flags.contains('m'))
            .with_hidden("source", Into::<String>::into(source))
            .with_hidden("flags", flags)
            .into_value()
    }

    pub fn array_buffer(byte_length: usize) -> Self {
        Object::new("ArrayBuffer")
            .with_constructor("ArrayBuffer")
            .with_ancestry(["ArrayBuffer", "Object"])
            .with_methods(["slice"])
            .with_hidden("byteLength", byte_length)
            .into_value()
    }

    /// A `DataView` spanning a whole fresh buffer.
    pub fn data_view(buffer_byte_length: usize) -> Self {
        Self::data_view_range(buffer_byte_length, 0, buffer_byte_length)
    }

    pub fn data_view_range(buffer_byte_length: usize, byte_offset: usize, byte_length: usize) -> Self {
        Object::new("DataView")
            .with_constructor("DataView")
            .with_ancestry(["DataView", "Object"])
            .with_methods(DATA_VIEW_METHODS.iter().copied())
            .with_hidden("buffer", Self::array_buffer(buffer_byte_length))
            .with_hidden("byteOffset", byte_offset)
            .with_hidden("byteLength", byte_length)
            .into_value()
    }

    /// A zero-filled typed array of `length` elements. Contents are never
    /// materialized.
    pub fn typed_array(kind: TypedArrayKind, length: usize) -> Self {
        let byte_length = length * kind.bytes_per_element();
        Object::new(kind.class_name())
            .with_constructor(kind.class_name())
            .with_ancestry([kind.class_name(), "Object"])
            .with_methods(["set", "subarray"])
            .with_hidden("buffer", Self::array_buffer(byte_length))
            .with_hidden("byteOffset", 0)
            .with_hidden("byteLength", byte_length)
            .with_hidden("length", length)
            .with_hidden("BYTES_PER_ELEMENT", kind.bytes_per_element())
            .into_value()
    }

    pub fn error(kind: ErrorType, message: impl Into<String>) -> Self {
        ErrorBuilder::new(kind).message(message).build()
    }

    pub fn math() -> Self {
        let mut object = Object::new("Math")
            .with_constructor("Object")
            .with_ancestry(["Object"])
            .with_methods(MATH_METHODS.iter().copied())
            .with_slot(Slot::Singleton(Singleton::Math));
        for (name, constant) in MATH_CONSTANTS {
            object = object.with_hidden(*name, *constant);
        }
        object.into_value()
    }

    pub fn json_namespace() -> Self {
        Object::new("JSON")
            .with_constructor("Object")
            .with_ancestry(["Object"])
            .with_methods(["parse", "stringify"])
            .with_slot(Slot::Singleton(Singleton::Json))
            .into_value()
    }
}

fn plain_object() -> Object {
    Object::new("Object")
        .with_constructor("Object")
        .with_ancestry(["Object"])
        .with_methods(["hasOwnProperty", "toString", "valueOf"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_arrays_size_their_buffer_by_element_width() {
        let view = Value::typed_array(TypedArrayKind::Float64, 3);
        let buffer = view.get("buffer").expect("typed arrays carry a buffer");
        assert!(buffer.instance_of("ArrayBuffer"));
        assert_eq!(buffer.get("byteLength"), Some(&Value::Number(24.0)));
        assert_eq!(view.length(), Some(3.0));
    }

    #[test]
    fn error_subtypes_inherit_from_error() {
        let error = Value::error(ErrorType::TypeError, "bad");
        assert!(error.instance_of("TypeError"));
        assert!(error.instance_of("Error"));
        assert_eq!(error.class(), "Error");
        assert_eq!(error.get("name").and_then(Value::as_str), Some("TypeError"));
        assert_eq!(error.get("lineNumber"), None);
    }

    #[test]
    fn base_error_does_not_list_itself_twice() {
        let error = ErrorBuilder::new(ErrorType::Error).line(4).build();
        let object = error.as_object().expect("errors are objects");
        assert_eq!(object.ancestry(), ["Error", "Object"]);
        assert_eq!(error.get("lineNumber"), Some(&Value::Number(4.0)));
    }

    #[test]
    fn namespaces_are_singletons_without_enumerable_members() {
        let math = Value::math();
        let object = math.as_object().expect("math is an object");
        assert_eq!(object.singleton(), Some(Singleton::Math));
        assert_eq!(object.properties().len(), 0);
        assert!(math.get("PI").is_some());
    }

    #[test]
    fn arrays_expose_the_full_method_surface() {
        let array = Value::array(vec![Value::Null]);
        assert!(ARRAY_METHODS.iter().all(|name| array.has_method(name)));
        assert_eq!(array.length(), Some(1.0));
        assert_eq!(array.constructor_name(), Some("Array"));
    }
}
