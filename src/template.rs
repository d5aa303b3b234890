//! Template overrides.
//!
//! Users may replace any of the generator's built-in templates, either with
//! inline text or with a file. Overrides are keyed by a template identifier
//! and only validated against a [`TemplateRegistry`] at resolution time.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

mod registry;

pub use registry::TemplateRegistry;

/// Where a template applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateCategory {
    Class,
    Method,
    EntryPoint,
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateCategory::Class => f.write_str("class"),
            TemplateCategory::Method => f.write_str("method"),
            TemplateCategory::EntryPoint => f.write_str("entry point"),
        }
    }
}

/// A template slot the generator knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    AssertionClass,
    HierarchicalConcrete,
    HierarchicalAbstract,
    Object,
    BooleanPrimitive,
    BooleanWrapper,
    Array,
    Iterable,
    CharPrimitive,
    Character,
    RealNumberPrimitive,
    RealNumberWrapper,
    WholeNumberPrimitive,
    WholeNumberWrapper,
    Assertions,
    AssertionMethod,
    Soft,
    SoftMethod,
    JunitSoft,
    Bdd,
    BddMethod,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 21] = [
        TemplateKind::AssertionClass,
        TemplateKind::HierarchicalConcrete,
        TemplateKind::HierarchicalAbstract,
        TemplateKind::Object,
        TemplateKind::BooleanPrimitive,
        TemplateKind::BooleanWrapper,
        TemplateKind::Array,
        TemplateKind::Iterable,
        TemplateKind::CharPrimitive,
        TemplateKind::Character,
        TemplateKind::RealNumberPrimitive,
        TemplateKind::RealNumberWrapper,
        TemplateKind::WholeNumberPrimitive,
        TemplateKind::WholeNumberWrapper,
        TemplateKind::Assertions,
        TemplateKind::AssertionMethod,
        TemplateKind::Soft,
        TemplateKind::SoftMethod,
        TemplateKind::JunitSoft,
        TemplateKind::Bdd,
        TemplateKind::BddMethod,
    ];

    /// Key used in build descriptions, e.g. `assertion_class`.
    pub fn identifier(self) -> &'static str {
        match self {
            TemplateKind::AssertionClass => "assertion_class",
            TemplateKind::HierarchicalConcrete => "hierarchical_concrete",
            TemplateKind::HierarchicalAbstract => "hierarchical_abstract",
            TemplateKind::Object => "object",
            TemplateKind::BooleanPrimitive => "boolean_primitive",
            TemplateKind::BooleanWrapper => "boolean_wrapper",
            TemplateKind::Array => "array",
            TemplateKind::Iterable => "iterable",
            TemplateKind::CharPrimitive => "char_primitive",
            TemplateKind::Character => "character",
            TemplateKind::RealNumberPrimitive => "real_number_primitive",
            TemplateKind::RealNumberWrapper => "real_number_wrapper",
            TemplateKind::WholeNumberPrimitive => "whole_number_primitive",
            TemplateKind::WholeNumberWrapper => "whole_number_wrapper",
            TemplateKind::Assertions => "assertions",
            TemplateKind::AssertionMethod => "assertion_method",
            TemplateKind::Soft => "soft",
            TemplateKind::SoftMethod => "soft_method",
            TemplateKind::JunitSoft => "junit_soft",
            TemplateKind::Bdd => "bdd",
            TemplateKind::BddMethod => "bdd_method",
        }
    }

    /// Template type name as understood by the generator.
    pub fn generator_type(self) -> &'static str {
        match self {
            TemplateKind::AssertionClass => "ASSERT_CLASS",
            TemplateKind::HierarchicalConcrete => "HIERARCHICAL_ASSERT_CLASS",
            TemplateKind::HierarchicalAbstract => "ABSTRACT_ASSERT_CLASS",
            TemplateKind::Object => "HAS",
            TemplateKind::BooleanPrimitive => "IS",
            TemplateKind::BooleanWrapper => "IS_WRAPPER",
            TemplateKind::Array => "HAS_FOR_ARRAY",
            TemplateKind::Iterable => "HAS_FOR_ITERABLE",
            TemplateKind::CharPrimitive => "HAS_FOR_CHAR",
            TemplateKind::Character => "HAS_FOR_CHARACTER",
            TemplateKind::RealNumberPrimitive => "HAS_FOR_REAL_NUMBER",
            TemplateKind::RealNumberWrapper => "HAS_FOR_REAL_NUMBER_WRAPPER",
            TemplateKind::WholeNumberPrimitive => "HAS_FOR_WHOLE_NUMBER",
            TemplateKind::WholeNumberWrapper => "HAS_FOR_WHOLE_NUMBER_WRAPPER",
            TemplateKind::Assertions => "ASSERTIONS_ENTRY_POINT_CLASS",
            TemplateKind::AssertionMethod => "ASSERTION_ENTRY_POINT",
            TemplateKind::Soft => "SOFT_ASSERTIONS_ENTRY_POINT_CLASS",
            TemplateKind::SoftMethod => "SOFT_ENTRY_POINT_METHOD_ASSERTION",
            TemplateKind::JunitSoft => "JUNIT_SOFT_ASSERTIONS_ENTRY_POINT_CLASS",
            TemplateKind::Bdd => "BDD_ASSERTIONS_ENTRY_POINT_CLASS",
            TemplateKind::BddMethod => "BDD_ENTRY_POINT_METHOD_ASSERTION",
        }
    }

    pub fn category(self) -> TemplateCategory {
        match self {
            TemplateKind::AssertionClass
            | TemplateKind::HierarchicalConcrete
            | TemplateKind::HierarchicalAbstract => TemplateCategory::Class,
            TemplateKind::Assertions
            | TemplateKind::AssertionMethod
            | TemplateKind::Soft
            | TemplateKind::SoftMethod
            | TemplateKind::JunitSoft
            | TemplateKind::Bdd
            | TemplateKind::BddMethod => TemplateCategory::EntryPoint,
            _ => TemplateCategory::Method,
        }
    }

    /// Human-readable description used in reports.
    pub fn description(self) -> &'static str {
        match self {
            TemplateKind::AssertionClass => "class assertions",
            TemplateKind::HierarchicalConcrete => "hierarchical concrete class assertions",
            TemplateKind::HierarchicalAbstract => "hierarchical abstract class assertions",
            TemplateKind::Object => "object assertions",
            TemplateKind::BooleanPrimitive => "boolean assertions",
            TemplateKind::BooleanWrapper => "boolean wrapper assertions",
            TemplateKind::Array => "array assertions",
            TemplateKind::Iterable => "iterable assertions",
            TemplateKind::CharPrimitive => "char assertions",
            TemplateKind::Character => "Character assertions",
            TemplateKind::RealNumberPrimitive => "real number assertions (float, double)",
            TemplateKind::RealNumberWrapper => "real number wrapper assertions (Float, Double)",
            TemplateKind::WholeNumberPrimitive => "whole number assertions (int, long, short, byte)",
            TemplateKind::WholeNumberWrapper => {
                "whole number has assertions (Integer, Long, Short, Byte)"
            }
            TemplateKind::Assertions => "assertions entry point class",
            TemplateKind::AssertionMethod => "assertions entry point method",
            TemplateKind::Soft => "soft assertions entry point class",
            TemplateKind::SoftMethod => "soft assertions entry point method",
            TemplateKind::JunitSoft => "junit soft assertions entry point class",
            TemplateKind::Bdd => "BDD assertions entry point class",
            TemplateKind::BddMethod => "BDD assertions entry point method",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Replacement content for one template slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateSource {
    /// Template text given directly.
    #[serde(rename = "template")]
    Inline(String),
    /// Template text read from a file when generation runs.
    File(PathBuf),
}

impl TemplateSource {
    /// Template text. Reads the file for [`TemplateSource::File`].
    pub fn load(&self) -> Result<String, ConfigError> {
        match self {
            TemplateSource::Inline(text) => Ok(text.clone()),
            TemplateSource::File(path) => {
                std::fs::read_to_string(path).map_err(|source| ConfigError::TemplateRead {
                    path: path.clone(),
                    source,
                })
            }
        }
    }

    pub fn file(&self) -> Option<&Path> {
        match self {
            TemplateSource::File(path) => Some(path),
            TemplateSource::Inline(_) => None,
        }
    }
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateSource::Inline(text) => write!(f, "inline ({} bytes)", text.len()),
            TemplateSource::File(path) => write!(f, "file {}", path.display()),
        }
    }
}

/// Template overrides keyed by identifier. Keys are not validated here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateSet {
    overrides: BTreeMap<String, TemplateSource>,
}

impl TemplateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, source: TemplateSource) -> &mut Self {
        self.overrides.insert(key.into(), source);
        self
    }

    pub fn set_template(&mut self, key: impl Into<String>, content: impl Into<String>) -> &mut Self {
        self.insert(key, TemplateSource::Inline(content.into()))
    }

    pub fn set_file(&mut self, key: impl Into<String>, path: impl Into<PathBuf>) -> &mut Self {
        self.insert(key, TemplateSource::File(path.into()))
    }

    pub fn remove(&mut self, key: &str) -> Option<TemplateSource> {
        self.overrides.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&TemplateSource> {
        self.overrides.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TemplateSource)> {
        self.overrides.iter().map(|(k, v)| (k.as_str(), v))
    }
}
