//! The intrinsic registry: numbers, strings, containers, errors, buffers.
//!
//! Declaration order below is the classification order. `NaN` also
//! satisfies the `Infinity` test and wins only because it is declared later;
//! likewise a plain object that happens to carry the array method surface is
//! still an `Object`.

use crate::kind::{Kind, Universe};
use crate::registry::Registry;
use crate::render;
use inspector_value::intrinsics::{ARRAY_METHODS, DATA_VIEW_METHODS};
use inspector_value::{Singleton, Value};
use std::sync::LazyLock;

pub(crate) static REGISTRY: LazyLock<Registry> = LazyLock::new(build);

/// Getters whose joint presence marks a date.
const DATE_GETTERS: &[&str] = &[
    "getDate",
    "getDay",
    "getFullYear",
    "getHours",
    "getMilliseconds",
    "getMinutes",
    "getMonth",
    "getSeconds",
];

fn build() -> Registry {
    Registry::builder(Universe::Intrinsic)
        .kind(Kind::shape("Array", is_array, render::sequence))
        .kind(Kind::shape("Arguments", is_arguments, render::sequence))
        .kind(Kind::shape("Boolean", is_boolean, render::plain))
        .kind(Kind::shape("Date", is_date, render::date))
        .kind(Kind::class("Function", &["Function"], render::function_signature))
        .kind(Kind::shape("Number", is_finite_number, render::plain))
        .kind(Kind::class("Object", &["Object"], render::keyed))
        .kind(Kind::shape("RegExp", is_regexp, render::regexp))
        .kind(Kind::shape("String", is_string, render::string))
        .kind(Kind::shape("ArrayBuffer", is_array_buffer, render::array_buffer))
        .kind(Kind::shape("DataView", is_data_view, render::buffer_view))
        .kind(Kind::shape("Float32Array", is_float32_array, render::buffer_view))
        .kind(Kind::shape("Float64Array", is_float64_array, render::buffer_view))
        .kind(Kind::shape("Int16Array", is_int16_array, render::buffer_view))
        .kind(Kind::shape("Int32Array", is_int32_array, render::buffer_view))
        .kind(Kind::shape("Int8Array", is_int8_array, render::buffer_view))
        .kind(Kind::shape("Uint16Array", is_uint16_array, render::buffer_view))
        .kind(Kind::shape("Uint32Array", is_uint32_array, render::buffer_view))
        .kind(Kind::shape("Uint8Array", is_uint8_array, render::buffer_view))
        .kind(Kind::shape("Uint8ClampedArray", is_uint8_clamped_array, render::buffer_view))
        .kind(Kind::shape("Error", is_base_error, render::error))
        .kind(Kind::shape("EvalError", is_eval_error, render::error))
        .kind(Kind::shape("InternalError", is_internal_error, render::error))
        .kind(Kind::shape("RangeError", is_range_error, render::error))
        .kind(Kind::shape("ReferenceError", is_reference_error, render::error))
        .kind(Kind::shape("StopIteration", is_stop_iteration, render::error))
        .kind(Kind::shape("SyntaxError", is_syntax_error, render::error))
        .kind(Kind::shape("TypeError", is_type_error, render::error))
        .kind(Kind::shape("URIError", is_uri_error, render::error))
        .kind(Kind::shape("Infinity", is_non_finite_number, render::plain))
        .kind(Kind::shape("JSON", is_json_namespace, render::keyed))
        .kind(Kind::shape("Math", is_math_namespace, render::keyed))
        .kind(Kind::shape("NaN", is_nan, render::plain))
        .kind(Kind::shape("Null", is_null, render::plain))
        .kind(Kind::shape("undefined", is_undefined, render::plain))
        .build()
}

fn is_array(value: &Value) -> bool {
    if value.constructor_name() == Some("Array") {
        return true;
    }
    value.constructor_name().is_some()
        && ARRAY_METHODS.iter().all(|name| value.has_method(name))
        && value.length().is_some()
}

fn is_arguments(value: &Value) -> bool {
    value.length().is_some() && value.class() == "Arguments"
}

fn is_boolean(value: &Value) -> bool {
    matches!(value, Value::Bool(_))
}

fn is_date(value: &Value) -> bool {
    DATE_GETTERS.iter().all(|name| value.has_method(name))
}

fn is_finite_number(value: &Value) -> bool {
    matches!(value, Value::Number(n) if n.is_finite())
}

fn is_regexp(value: &Value) -> bool {
    value.has_method("exec") && value.has_method("test")
}

fn is_string(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

fn is_numeric(value: &Value, key: &str) -> bool {
    matches!(value.get(key), Some(Value::Number(_)))
}

fn is_array_buffer(value: &Value) -> bool {
    value.instance_of("ArrayBuffer") && is_numeric(value, "byteLength")
}

fn has_buffer(value: &Value) -> bool {
    value.member("buffer").instance_of("ArrayBuffer")
}

fn is_data_view(value: &Value) -> bool {
    has_buffer(value)
        && DATA_VIEW_METHODS.iter().all(|name| value.has_method(name))
        && value.instance_of("DataView")
}

fn is_typed_view(value: &Value, class: &str) -> bool {
    has_buffer(value)
        && is_numeric(value, "byteLength")
        && is_numeric(value, "byteOffset")
        && value.instance_of(class)
}

macro_rules! typed_view_recognizers {
    ($($name:ident => $class:literal),* $(,)?) => {
        $(
            fn $name(value: &Value) -> bool {
                is_typed_view(value, $class)
            }
        )*
    };
}

typed_view_recognizers! {
    is_float32_array => "Float32Array",
    is_float64_array => "Float64Array",
    is_int16_array => "Int16Array",
    is_int32_array => "Int32Array",
    is_int8_array => "Int8Array",
    is_uint16_array => "Uint16Array",
    is_uint32_array => "Uint32Array",
    is_uint8_array => "Uint8Array",
    is_uint8_clamped_array => "Uint8ClampedArray",
}

fn has_name(value: &Value, name: &str) -> bool {
    value.member("name").as_str() == Some(name)
}

fn is_base_error(value: &Value) -> bool {
    has_name(value, "Error") && value.instance_of("Error")
}

fn is_error_subtype(value: &Value, class: &str) -> bool {
    value.instance_of("Error") && value.instance_of(class)
}

macro_rules! error_recognizers {
    ($($name:ident => $class:literal),* $(,)?) => {
        $(
            fn $name(value: &Value) -> bool {
                is_error_subtype(value, $class)
            }
        )*
    };
}

error_recognizers! {
    is_eval_error => "EvalError",
    is_range_error => "RangeError",
    is_reference_error => "ReferenceError",
    is_syntax_error => "SyntaxError",
    is_type_error => "TypeError",
    is_uri_error => "URIError",
}

// Engines that have these expose them only by name as well.
fn is_internal_error(value: &Value) -> bool {
    is_error_subtype(value, "InternalError") && has_name(value, "InternalError")
}

fn is_stop_iteration(value: &Value) -> bool {
    is_error_subtype(value, "StopIteration") && has_name(value, "StopIteration")
}

fn is_non_finite_number(value: &Value) -> bool {
    matches!(value, Value::Number(n) if !n.is_finite())
}

fn is_singleton(value: &Value, which: Singleton) -> bool {
    value
        .as_object()
        .is_some_and(|object| object.singleton() == Some(which))
}

fn is_json_namespace(value: &Value) -> bool {
    is_singleton(value, Singleton::Json)
}

fn is_math_namespace(value: &Value) -> bool {
    is_singleton(value, Singleton::Math)
}

fn is_nan(value: &Value) -> bool {
    matches!(value, Value::Number(n) if n.is_nan())
}

fn is_null(value: &Value) -> bool {
    matches!(value, Value::Null)
}

fn is_undefined(value: &Value) -> bool {
    matches!(value, Value::Undefined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::MatchPolicy;
    use inspector_value::{ErrorBuilder, ErrorType, Object, TypedArrayKind};

    fn winner(value: &Value) -> Option<&'static str> {
        REGISTRY
            .recognize(value, MatchPolicy::Last)
            .map(|kind| kind.name)
    }

    #[test]
    fn declaration_order_is_fixed() {
        let names: Vec<&str> = REGISTRY.kinds().iter().map(|kind| kind.name).collect();
        assert_eq!(names.len(), 35);
        assert_eq!(names[0], "Array");
        assert_eq!(names[6], "Object");
        assert_eq!(names[names.len() - 1], "undefined");
        let infinity = names.iter().position(|name| *name == "Infinity");
        let nan = names.iter().position(|name| *name == "NaN");
        assert!(infinity < nan);
    }

    #[test]
    fn nan_overrides_infinity() {
        assert_eq!(winner(&Value::Number(f64::NAN)), Some("NaN"));
        assert_eq!(winner(&Value::Number(f64::INFINITY)), Some("Infinity"));
        assert_eq!(winner(&Value::Number(3.0)), Some("Number"));
    }

    #[test]
    fn error_subtypes_override_their_base() {
        assert_eq!(winner(&Value::error(ErrorType::Error, "x")), Some("Error"));
        assert_eq!(winner(&Value::error(ErrorType::TypeError, "x")), Some("TypeError"));
        assert_eq!(winner(&Value::error(ErrorType::UriError, "x")), Some("URIError"));

        let renamed = ErrorBuilder::new(ErrorType::InternalError).name("Other").build();
        assert_eq!(winner(&renamed), None);
    }

    #[test]
    fn typed_arrays_are_told_apart_by_class() {
        for kind in TypedArrayKind::ALL {
            let view = Value::typed_array(kind, 2);
            assert_eq!(winner(&view), Some(kind.class_name()));
        }
        assert_eq!(winner(&Value::data_view(8)), Some("DataView"));
        assert_eq!(winner(&Value::array_buffer(8)), Some("ArrayBuffer"));
    }

    #[test]
    fn duck_typed_array_needs_the_full_surface() {
        let almost = Object::new("List")
            .with_constructor("List")
            .with_methods(["pop", "push"])
            .with_hidden("length", 0.0)
            .into_value();
        assert_eq!(winner(&almost), None);

        let full = Object::new("List")
            .with_constructor("List")
            .with_methods(ARRAY_METHODS.iter().copied())
            .with_hidden("length", 0.0)
            .into_value();
        assert_eq!(winner(&full), Some("Array"));
    }

    #[test]
    fn duck_typed_date_needs_every_getter() {
        let getters = |skip: &str| {
            Object::new("Moment")
                .with_constructor("Moment")
                .with_methods(DATE_GETTERS.iter().copied().filter(|name| *name != skip))
                .into_value()
        };
        assert_eq!(winner(&getters("")), Some("Date"));
        assert_eq!(winner(&getters("getMilliseconds")), None);
        assert_eq!(winner(&getters("getDay")), None);
    }

    #[test]
    fn namespaces_match_by_identity_only() {
        assert_eq!(winner(&Value::math()), Some("Math"));
        assert_eq!(winner(&Value::json_namespace()), Some("JSON"));
        assert_eq!(winner(&Value::object([("parse", true)])), Some("Object"));
    }

    #[test]
    fn symbols_match_nothing() {
        assert_eq!(winner(&Value::Symbol(None)), None);
    }
}
