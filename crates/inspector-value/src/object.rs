//! Object representation.
//!
//! An [`Object`] is a bag of structural facts. The class tag is what a
//! host's `Object.prototype.toString` would report; it is one signal among
//! several and recognizers are free to ignore it in favor of duck typing.

use crate::value::Value;
use chrono::{DateTime, FixedOffset};
use indexmap::IndexMap;
use std::collections::BTreeSet;

/// Host-internal state that is not observable through properties.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
    /// No internal state.
    Ordinary,

    /// A callable. `source` is what the host returns from `toString()`.
    Function { source: String },

    /// A point in time, rendered the way a host `Date#toString` would.
    Date(DateTime<FixedOffset>),

    /// An object that is only ever matched by identity.
    Singleton(Singleton),
}

/// Well-known objects recognized by identity rather than by shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Singleton {
    /// The `Math` namespace.
    Math,
    /// The `JSON` namespace.
    Json,
    /// The global object of a browser-like host.
    Global,
}

/// A structured runtime object.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    class: String,
    constructor: Option<String>,
    ancestry: Vec<String>,
    methods: BTreeSet<String>,
    properties: IndexMap<String, Value>,
    hidden: IndexMap<String, Value>,
    elements: Option<Vec<Value>>,
    slot: Slot,
}

impl Object {
    /// A bare object of the given class with no constructor, ancestry, or
    /// members.
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            constructor: None,
            ancestry: Vec::new(),
            methods: BTreeSet::new(),
            properties: IndexMap::new(),
            hidden: IndexMap::new(),
            elements: None,
            slot: Slot::Ordinary,
        }
    }

    /// An object whose constructor and sole prototype share the class name,
    /// the common shape of host objects.
    pub fn of_class(class: impl Into<String>) -> Self {
        let class = class.into();
        Self::new(class.clone())
            .with_constructor(class.clone())
            .with_ancestry([class, "Object".to_string()])
    }

    pub fn with_constructor(mut self, name: impl Into<String>) -> Self {
        self.constructor = Some(name.into());
        self
    }

    /// Replace the prototype chain, nearest prototype first.
    pub fn with_ancestry<I, S>(mut self, chain: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ancestry = chain.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_methods<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add an own enumerable property. Re-inserting a key keeps its original
    /// position.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add a non-enumerable or inherited member: readable by recognizers and
    /// renderers, skipped by keyed rendering.
    pub fn with_hidden(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.hidden.insert(key.into(), value.into());
        self
    }

    pub fn with_elements(mut self, elements: Vec<Value>) -> Self {
        self.elements = Some(elements);
        self
    }

    pub fn with_slot(mut self, slot: Slot) -> Self {
        self.slot = slot;
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.properties.insert(key.into(), value.into());
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn constructor(&self) -> Option<&str> {
        self.constructor.as_deref()
    }

    pub fn ancestry(&self) -> &[String] {
        &self.ancestry
    }

    pub fn instance_of(&self, name: &str) -> bool {
        self.ancestry.iter().any(|proto| proto == name)
    }

    pub fn has_method(&self, name: &str) -> bool {
        self.methods.contains(name)
    }

    /// Own property first, then hidden members.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key).or_else(|| self.hidden.get(key))
    }

    /// Own enumerable properties in insertion order.
    pub fn properties(&self) -> impl ExactSizeIterator<Item = (&str, &Value)> {
        self.properties.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Indexed members, if the object is array-like.
    pub fn elements(&self) -> Option<&[Value]> {
        self.elements.as_deref()
    }

    /// Numeric `length`: an explicit `length` member wins over the element
    /// count.
    pub fn length(&self) -> Option<f64> {
        match self.get("length") {
            Some(Value::Number(n)) => Some(*n),
            Some(_) => None,
            None => self.elements.as_ref().map(|items| items.len() as f64),
        }
    }

    pub fn slot(&self) -> &Slot {
        &self.slot
    }

    pub fn is_callable(&self) -> bool {
        matches!(self.slot, Slot::Function { .. })
    }

    pub fn singleton(&self) -> Option<Singleton> {
        match self.slot {
            Slot::Singleton(which) => Some(which),
            _ => None,
        }
    }

    pub fn into_value(self) -> Value {
        Value::Object(Box::new(self))
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        object.into_value()
    }
}
