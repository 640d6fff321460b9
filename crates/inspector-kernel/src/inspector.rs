//! The dispatcher: platform registry first, intrinsic registry second.

use crate::error::InspectError;
use crate::indent::{Indent, indentation};
use crate::kind::RenderCx;
use crate::options::InspectOptions;
use crate::registry::{Classification, Registry};
use crate::render;
use inspector_value::Value;

/// Classifies and renders values against a pair of registries.
///
/// An inspector holds no mutable state; one instance can serve any number of
/// threads.
#[derive(Debug, Clone)]
pub struct Inspector {
    platform: Registry,
    intrinsic: Registry,
    options: InspectOptions,
}

impl Default for Inspector {
    /// The built-in registries with default options.
    fn default() -> Self {
        Self::new(Registry::platform().clone(), Registry::intrinsic().clone())
    }
}

impl Inspector {
    pub fn new(platform: Registry, intrinsic: Registry) -> Self {
        Self {
            platform,
            intrinsic,
            options: InspectOptions::default(),
        }
    }

    pub fn with_options(mut self, options: InspectOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &InspectOptions {
        &self.options
    }

    pub fn platform(&self) -> &Registry {
        &self.platform
    }

    pub fn intrinsic(&self) -> &Registry {
        &self.intrinsic
    }

    /// Render `value` at indent level zero.
    pub fn inspect(&self, value: &Value) -> Result<String, InspectError> {
        self.inspect_at(value, Indent::ZERO)
    }

    pub fn inspect_at(&self, value: &Value, indent: Indent) -> Result<String, InspectError> {
        self.classify(value, indent)
            .map(|classification| classification.text)
    }

    /// Render with an indent supplied as a runtime value. `undefined` means
    /// zero; negative, fractional and non-numeric indents are rejected.
    pub fn inspect_indented(&self, value: &Value, indent: &Value) -> Result<String, InspectError> {
        let indent = Indent::try_from(indent)?;
        self.inspect_at(value, indent)
    }

    /// The winning kind for `value` together with its rendering.
    pub fn classify(&self, value: &Value, indent: Indent) -> Result<Classification, InspectError> {
        self.dispatch(value, indent, 0)
    }

    pub(crate) fn dispatch(
        &self,
        value: &Value,
        indent: Indent,
        depth: usize,
    ) -> Result<Classification, InspectError> {
        let limit = self.options.max_depth;
        if depth > limit {
            tracing::debug!(depth, limit, "nesting depth exceeded");
            return Err(InspectError::DepthExceeded { limit });
        }

        let cx = RenderCx::new(self, indent, depth);
        for registry in [&self.platform, &self.intrinsic] {
            if let Some(classification) = registry.classify(&cx, value)? {
                return Ok(classification);
            }
        }
        Err(self.unclassified(value))
    }

    /// Builds the failure for a value no registry recognized.
    ///
    /// The diagnostic block is formatted directly, in the keyed layout,
    /// so neither the depth limit nor a sparse custom registry can strip
    /// the type from the message.
    fn unclassified(&self, value: &Value) -> InspectError {
        let string_tag = value.string_tag();
        let type_of = value.type_of();
        let constructor = value.constructor_name().map(str::to_string);
        tracing::debug!(%string_tag, type_of, ?constructor, "value matched no kind");

        let escape = self.options.escape_strings;
        let quoted = |text: &str| render::quote_with(text, escape);
        let fields = [
            ("toString", quoted(&string_tag)),
            ("typeof", quoted(type_of)),
            (
                "constructor",
                constructor
                    .as_deref()
                    .map_or_else(|| "undefined".to_string(), quoted),
            ),
        ];
        let inner = indentation(1).unwrap_or_default();
        let lines: Vec<String> = fields
            .iter()
            .map(|(key, field)| format!("{inner}{}: {field}", quoted(key)))
            .collect();
        let diagnostic = format!("{{\n{}\n}}", lines.join(",\n"));

        InspectError::UnclassifiedValue {
            string_tag,
            type_of,
            constructor,
            diagnostic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::Universe;
    use inspector_value::{ErrorBuilder, ErrorType, Object};

    #[test]
    fn platform_registry_is_consulted_first() {
        let inspector = Inspector::default();
        let storage = Value::storage([("theme", "dark")]);
        let classification = inspector
            .classify(&storage, Indent::ZERO)
            .expect("storage is a platform kind");
        assert_eq!(classification.universe, Universe::Platform);
        assert_eq!(classification.kind, "Storage");
        assert_eq!(classification.text, "[Storage]");
    }

    #[test]
    fn intrinsic_registry_is_the_fallback() {
        let classification = Inspector::default()
            .classify(&Value::from("x"), Indent::ZERO)
            .expect("strings are intrinsic");
        assert_eq!(classification.universe, Universe::Intrinsic);
        assert_eq!(classification.kind, "String");
        assert_eq!(classification.text, "\"x\"");
    }

    #[test]
    fn unclassified_values_report_their_type() {
        let err = Inspector::default()
            .inspect(&Value::Symbol(Some("id".into())))
            .expect_err("symbols have no kind");
        let message = err.to_string();
        assert!(message.starts_with("unexpected data: undefined type of variable: {"));
        assert!(message.contains("\"typeof\": \"symbol\""));
        assert!(message.contains("\"toString\": \"[object Symbol]\""));
    }

    #[test]
    fn unknown_host_objects_are_unclassified() {
        let err = Inspector::default()
            .inspect(&Value::host("CSSRule"))
            .expect_err("no kind for CSSRule");
        match err {
            InspectError::UnclassifiedValue {
                string_tag,
                type_of,
                constructor,
                ..
            } => {
                assert_eq!(string_tag, "[object CSSRule]");
                assert_eq!(type_of, "object");
                assert_eq!(constructor.as_deref(), Some("CSSRule"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unclassified_report_survives_a_zero_depth_limit() {
        let inspector = Inspector::default().with_options(InspectOptions {
            max_depth: 0,
            ..InspectOptions::default()
        });
        let err = inspector
            .inspect(&Value::Symbol(None))
            .expect_err("symbols have no kind");
        assert_eq!(
            err.to_string(),
            "unexpected data: undefined type of variable: {\n    \"toString\": \"[object Symbol]\",\n    \"typeof\": \"symbol\",\n    \"constructor\": \"Symbol\"\n}"
        );
    }

    #[test]
    fn unclassified_report_does_not_need_a_string_kind() {
        let empty = || Registry::builder(Universe::Intrinsic).build();
        let inspector = Inspector::new(Registry::builder(Universe::Platform).build(), empty());
        let err = inspector
            .inspect(&Value::Null)
            .expect_err("an empty registry knows nothing");
        let message = err.to_string();
        assert!(message.contains("\"typeof\": \"object\""), "{message}");
        assert!(message.contains("\"constructor\": undefined"), "{message}");
    }

    #[test]
    fn huge_indents_fail_instead_of_overflowing() {
        let inspector = Inspector::default();
        let keyed = Value::object([("a", 1.0)]);

        let sequence = Value::array(vec![Value::Number(1.0)]);
        assert_eq!(
            inspector.inspect_at(&sequence, Indent::new(usize::MAX)).as_deref(),
            Ok("[1]")
        );
        assert!(matches!(
            inspector.inspect_at(&keyed, Indent::new(usize::MAX)),
            Err(InspectError::InvalidArgument(_))
        ));
        assert!(matches!(
            inspector.inspect_at(&keyed, Indent::new(1_000_000_000_000_000)),
            Err(InspectError::InvalidArgument(_))
        ));
        assert!(matches!(
            inspector.inspect_indented(&keyed, &Value::Number(18_446_744_073_709_551_616.0)),
            Err(InspectError::InvalidArgument(_))
        ));
        assert_eq!(
            inspector.inspect_at(&Value::empty_object(), Indent::new(usize::MAX)).as_deref(),
            Ok("{}")
        );
    }

    #[test]
    fn nested_failures_abort_the_whole_call() {
        let value = Value::array(vec![Value::Number(1.0), Value::Symbol(None)]);
        assert!(matches!(
            Inspector::default().inspect(&value),
            Err(InspectError::UnclassifiedValue { .. })
        ));
    }

    #[test]
    fn depth_guard_stops_runaway_nesting() {
        let options = InspectOptions {
            max_depth: 2,
            ..InspectOptions::default()
        };
        let inspector = Inspector::default().with_options(options);

        let within = Value::array(vec![Value::array(vec![Value::Number(1.0)])]);
        assert_eq!(inspector.inspect(&within).as_deref(), Ok("[[1]]"));

        let beyond = Value::array(vec![within]);
        assert_eq!(
            inspector.inspect(&beyond),
            Err(InspectError::DepthExceeded { limit: 2 })
        );
    }

    #[test]
    fn dynamic_indent_is_validated() {
        let inspector = Inspector::default();
        let value = Value::Number(5.0);
        assert_eq!(
            inspector.inspect_indented(&value, &Value::Number(3.0)).as_deref(),
            Ok("5")
        );
        for bad in [Value::Number(-1.0), Value::Number(1.5), Value::from("1")] {
            assert!(matches!(
                inspector.inspect_indented(&value, &bad),
                Err(InspectError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn errors_render_their_present_fields() {
        let error = ErrorBuilder::new(ErrorType::RangeError)
            .message("out of range")
            .line(12)
            .file("app.js")
            .build();
        assert_eq!(
            Inspector::default().inspect(&error).as_deref(),
            Ok("RangeError({\n\tMessage: \"out of range\"\n\tLine: 12\n\tFile: \"app.js\"\n})")
        );

        let bare = ErrorBuilder::new(ErrorType::Error).build();
        assert_eq!(Inspector::default().inspect(&bare).as_deref(), Ok("Error()"));
    }

    #[test]
    fn hidden_members_are_not_listed() {
        let object = Object::of_class("Object")
            .with_hidden("secret", 1.0)
            .with_property("shown", 2.0)
            .into_value();
        assert_eq!(
            Inspector::default().inspect(&object).as_deref(),
            Ok("{\n    \"shown\": 2\n}")
        );
    }
}
