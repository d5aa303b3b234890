//! Resolution units and how their names become path segments.

use crate::error::ConfigError;
use crate::options::GenerationOptions;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One generation target, typically a source set.
///
/// In a build description the name sits next to the options:
///
/// ```toml
/// [[units]]
/// name = "integrationTest"
/// hierarchical = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawUnit")]
pub struct ResolutionUnit {
    pub name: String,
    #[serde(flatten)]
    pub options: GenerationOptions,
}

// Options are collected loosely and re-read so unknown fields still fail;
// `deny_unknown_fields` has no effect through `flatten`.
#[derive(Deserialize)]
struct RawUnit {
    name: String,
    #[serde(flatten)]
    options: BTreeMap<String, serde_json::Value>,
}

impl TryFrom<RawUnit> for ResolutionUnit {
    type Error = ConfigError;

    fn try_from(raw: RawUnit) -> Result<Self, Self::Error> {
        let RawUnit { name, options } = raw;
        if name.trim().is_empty() {
            return Err(ConfigError::Load("unit name must not be blank".to_string()));
        }
        let options = serde_json::from_value(serde_json::Value::Object(options.into_iter().collect()))
            .map_err(|e| ConfigError::Load(format!("unit '{}': {}", name, e)))?;
        Ok(Self { name, options })
    }
}

impl ResolutionUnit {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: GenerationOptions::default(),
        }
    }

    pub fn with_options(name: impl Into<String>, options: GenerationOptions) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }

    /// Unit-level options, for configuration.
    pub fn options_mut(&mut self) -> &mut GenerationOptions {
        &mut self.options
    }
}

/// Derives the path segment substituted for the unit placeholder.
///
/// Supplied by the host build system. Returning `None` means the segment
/// cannot be derived for this unit.
pub trait UnitNaming {
    fn segment(&self, unit_name: &str) -> Option<String>;
}

/// Uses the unit name as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl UnitNaming for Identity {
    fn segment(&self, unit_name: &str) -> Option<String> {
        let name = unit_name.trim();
        (!name.is_empty()).then(|| name.to_string())
    }
}

/// Appends `-test` to the unit name: `main` becomes `main-test`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TestSuffix;

impl UnitNaming for TestSuffix {
    fn segment(&self, unit_name: &str) -> Option<String> {
        Identity.segment(unit_name).map(|name| format!("{name}-test"))
    }
}

impl<F> UnitNaming for F
where
    F: Fn(&str) -> Option<String>,
{
    fn segment(&self, unit_name: &str) -> Option<String> {
        self(unit_name)
    }
}
