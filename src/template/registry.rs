//! Template registry: the set of template identifiers a generator accepts.

use super::TemplateKind;
use crate::error::ConfigError;
use std::collections::BTreeMap;

/// Known template identifiers, supplied to the resolver.
///
/// Generators that support only a subset of templates build a narrower
/// registry with [`TemplateRegistry::with_kinds`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRegistry {
    kinds: BTreeMap<String, TemplateKind>,
}

impl TemplateRegistry {
    /// Registry containing every built-in template kind.
    pub fn builtin() -> Self {
        Self::with_kinds(TemplateKind::ALL)
    }

    pub fn with_kinds<I>(kinds: I) -> Self
    where
        I: IntoIterator<Item = TemplateKind>,
    {
        let mut registry = Self {
            kinds: BTreeMap::new(),
        };
        for kind in kinds {
            registry.register(kind.identifier(), kind);
        }
        registry
    }

    /// Register `kind` under `identifier`. An alias may map to an existing kind.
    pub fn register(&mut self, identifier: impl Into<String>, kind: TemplateKind) {
        self.kinds.insert(identifier.into(), kind);
    }

    pub fn get(&self, identifier: &str) -> Option<TemplateKind> {
        self.kinds.get(identifier).copied()
    }

    /// Look up `identifier` or fail with [`ConfigError::InvalidTemplate`].
    pub fn lookup(&self, identifier: &str) -> Result<TemplateKind, ConfigError> {
        self.get(identifier)
            .ok_or_else(|| ConfigError::InvalidTemplate {
                key: identifier.to_string(),
                known: self.identifiers(),
            })
    }

    pub fn identifiers(&self) -> Vec<String> {
        self.kinds.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, TemplateKind)> {
        self.kinds.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
