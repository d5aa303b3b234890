//! Generation options at one configuration scope (project or unit).
//!
//! Every field is optional: `None` means "not configured here" and lets the
//! resolver fall back to the next scope. Setters are plain named methods that
//! return `&mut Self` so that a build description reads like a small DSL.

use crate::entry_point::{EntryPointKind, EntryPointSelection};
use crate::error::ConfigError;
use crate::pattern::NamePatternFilter;
use crate::template::TemplateSet;
use serde::{Deserialize, Serialize};

/// Reserved token replaced with the unit-derived path segment.
pub const UNIT_PLACEHOLDER: &str = "{unit}";

/// Built-in output directory layout.
pub const DEFAULT_OUTPUT_DIR_TEMPLATE: &str = "build/generated-src/{unit}-test/java";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationOptions {
    /// Skip generation entirely. Built-in default: `true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip: Option<bool>,

    /// Generate hierarchical assertions. Built-in default: `false`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hierarchical: Option<bool>,

    /// Entry point classes to generate. Built-in default: `{STANDARD}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_points: Option<EntryPointSelection>,

    /// Template overrides.
    #[serde(default, skip_serializing_if = "TemplateSet::is_empty")]
    pub templates: TemplateSet,

    /// Output directory, may contain [`UNIT_PLACEHOLDER`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir_template: Option<String>,

    /// Package for entry point classes. `None` lets the generator infer it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_point_package: Option<String>,

    /// Package filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packages: Option<NamePatternFilter>,

    /// Fully qualified class name filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classes: Option<NamePatternFilter>,
}

impl GenerationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_skip(&mut self, skip: bool) -> &mut Self {
        self.skip = Some(skip);
        self
    }

    pub fn set_hierarchical(&mut self, hierarchical: bool) -> &mut Self {
        self.hierarchical = Some(hierarchical);
        self
    }

    /// Set the entry point kinds from typed values.
    pub fn set_entry_point_kinds<I>(&mut self, kinds: I) -> &mut Self
    where
        I: IntoIterator<Item = EntryPointKind>,
    {
        self.entry_points = Some(EntryPointSelection::of(kinds));
        self
    }

    /// Set the entry point kinds from case-insensitive names.
    ///
    /// Fails on the first unknown name and leaves the options untouched.
    pub fn set_entry_points<I, S>(&mut self, names: I) -> Result<&mut Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.entry_points = Some(EntryPointSelection::from_names(names)?);
        Ok(self)
    }

    /// Mutable access to the entry point selection, starting from the
    /// built-in `{STANDARD}` when nothing is configured yet.
    pub fn entry_points_mut(&mut self) -> &mut EntryPointSelection {
        self.entry_points.get_or_insert_with(EntryPointSelection::default)
    }

    pub fn templates_mut(&mut self) -> &mut TemplateSet {
        &mut self.templates
    }

    pub fn set_output_dir_template(&mut self, template: impl Into<String>) -> &mut Self {
        self.output_dir_template = Some(template.into());
        self
    }

    pub fn set_entry_point_package(&mut self, package: impl Into<String>) -> &mut Self {
        self.entry_point_package = Some(package.into());
        self
    }

    pub fn packages_mut(&mut self) -> &mut NamePatternFilter {
        self.packages.get_or_insert_with(NamePatternFilter::default)
    }

    pub fn classes_mut(&mut self) -> &mut NamePatternFilter {
        self.classes.get_or_insert_with(NamePatternFilter::default)
    }

    /// Entry point kinds configured at this scope, if any.
    pub fn entry_point_kinds(&self) -> Option<Vec<EntryPointKind>> {
        self.entry_points.as_ref().map(|s| s.iter().collect())
    }

    /// True when nothing at all is configured at this scope.
    pub fn is_unset(&self) -> bool {
        *self == Self::default()
    }
}
