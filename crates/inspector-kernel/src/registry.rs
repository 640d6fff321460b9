//! Ordered kind registries and the classifier.
//!
//! Declaration order is semantically load-bearing. Under the default
//! [`MatchPolicy::Last`] every kind is tested and the last one that matches
//! wins, so broad kinds are declared early and narrower kinds later
//! override them.

use crate::error::InspectError;
use crate::kind::{Kind, RenderCx, Universe};
use crate::options::MatchPolicy;
use inspector_value::Value;
use serde::Serialize;

/// The winning kind for a value and its rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub universe: Universe,
    pub kind: &'static str,
    pub text: String,
}

/// A kind's position in its registry, for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KindEntry {
    pub universe: Universe,
    pub position: usize,
    pub name: &'static str,
}

/// An immutable, ordered catalog of kinds for one universe.
#[derive(Debug, Clone)]
pub struct Registry {
    universe: Universe,
    kinds: Vec<Kind>,
}

impl Registry {
    pub fn builder(universe: Universe) -> RegistryBuilder {
        RegistryBuilder {
            universe,
            kinds: Vec::new(),
        }
    }

    /// The built-in catalog of language values.
    pub fn intrinsic() -> &'static Registry {
        &crate::intrinsic::REGISTRY
    }

    /// The built-in catalog of browser-like host objects.
    pub fn platform() -> &'static Registry {
        &crate::platform::REGISTRY
    }

    pub fn universe(&self) -> Universe {
        self.universe
    }

    /// Kinds in declaration order.
    pub fn kinds(&self) -> &[Kind] {
        &self.kinds
    }

    pub fn get(&self, name: &str) -> Option<&Kind> {
        self.kinds.iter().find(|kind| kind.name == name)
    }

    pub fn entries(&self) -> Vec<KindEntry> {
        self.kinds
            .iter()
            .enumerate()
            .map(|(position, kind)| KindEntry {
                universe: self.universe,
                position,
                name: kind.name,
            })
            .collect()
    }

    /// The kind `policy` selects for `value`, without rendering.
    pub fn recognize(&self, value: &Value, policy: MatchPolicy) -> Option<&Kind> {
        match policy {
            // Recognizers are pure, so scanning from the end finds exactly
            // the kind a full forward pass would have kept last.
            MatchPolicy::Last => self.kinds.iter().rev().find(|kind| kind.matches(value)),
            MatchPolicy::First => self.kinds.iter().find(|kind| kind.matches(value)),
        }
    }

    /// Classify `value` and render it with the winning kind.
    ///
    /// `Ok(None)` means no kind in this registry matched; that is not an
    /// error here, the dispatcher decides what to do with it.
    pub(crate) fn classify(
        &self,
        cx: &RenderCx<'_>,
        value: &Value,
    ) -> Result<Option<Classification>, InspectError> {
        let Some(kind) = self.recognize(value, cx.options().match_policy) else {
            return Ok(None);
        };
        tracing::trace!(
            universe = %self.universe,
            kind = kind.name,
            indent = cx.indent().level(),
            "classified value"
        );
        let text = (kind.render)(cx, value)?;
        Ok(Some(Classification {
            universe: self.universe,
            kind: kind.name,
            text,
        }))
    }
}

/// Collects kinds in declaration order.
#[derive(Debug)]
pub struct RegistryBuilder {
    universe: Universe,
    kinds: Vec<Kind>,
}

impl RegistryBuilder {
    /// Append a kind. Re-declaring a name replaces the earlier kind in place,
    /// keeping its position.
    pub fn kind(mut self, kind: Kind) -> Self {
        match self.kinds.iter_mut().find(|existing| existing.name == kind.name) {
            Some(existing) => {
                tracing::warn!(kind = kind.name, "kind declared twice; keeping the later one");
                *existing = kind;
            }
            None => self.kinds.push(kind),
        }
        self
    }

    pub fn kinds(self, kinds: impl IntoIterator<Item = Kind>) -> Self {
        kinds.into_iter().fold(self, Self::kind)
    }

    pub fn build(self) -> Registry {
        Registry {
            universe: self.universe,
            kinds: self.kinds,
        }
    }
}
