//! Configuration resolution.
//!
//! Merges unit-level options over project-level options over built-in
//! defaults, field by field, and materializes the output directory for the
//! unit. Resolution is a pure function of its inputs: it never touches the
//! filesystem and never invokes the generator.

use crate::entry_point::EntryPointSelection;
use crate::error::ConfigError;
use crate::options::{GenerationOptions, DEFAULT_OUTPUT_DIR_TEMPLATE, UNIT_PLACEHOLDER};
use crate::pattern::NamePatternFilter;
use crate::template::{TemplateKind, TemplateRegistry, TemplateSource};
use crate::unit::{Identity, ResolutionUnit, UnitNaming};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info};

/// Fully resolved options for one unit. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EffectiveOptions {
    pub unit: String,
    pub skip: bool,
    pub hierarchical: bool,
    /// Never empty.
    pub entry_points: EntryPointSelection,
    pub templates: BTreeMap<TemplateKind, TemplateSource>,
    /// `None` only for skipped units.
    pub output_dir: Option<PathBuf>,
    pub entry_point_package: Option<String>,
    pub packages: NamePatternFilter,
    pub classes: NamePatternFilter,
}

impl EffectiveOptions {
    /// Snapshot for a skipped unit: built-in defaults, nothing else evaluated.
    fn skipped(unit: &str) -> Self {
        Self {
            unit: unit.to_string(),
            skip: true,
            hierarchical: false,
            entry_points: EntryPointSelection::default(),
            templates: BTreeMap::new(),
            output_dir: None,
            entry_point_package: None,
            packages: NamePatternFilter::default(),
            classes: NamePatternFilter::default(),
        }
    }

    /// Whether a class named `qualified_name` should get assertions.
    ///
    /// The package is everything before the last `.`.
    pub fn selects_class(&self, qualified_name: &str) -> bool {
        let package = qualified_name
            .rsplit_once('.')
            .map(|(package, _)| package)
            .unwrap_or("");
        self.packages.matches(package) && self.classes.matches(qualified_name)
    }
}

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Unit,
    Project,
    BuiltIn,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Unit => f.write_str("unit"),
            Scope::Project => f.write_str("project"),
            Scope::BuiltIn => f.write_str("built-in"),
        }
    }
}

fn layered<'a, T>(unit: Option<&'a T>, project: Option<&'a T>) -> Option<(&'a T, Scope)> {
    unit.map(|v| (v, Scope::Unit))
        .or_else(|| project.map(|v| (v, Scope::Project)))
}

/// Resolves effective options for units against project defaults.
#[derive(Debug, Clone)]
pub struct ConfigurationResolver<N = Identity> {
    registry: TemplateRegistry,
    naming: N,
}

impl ConfigurationResolver<Identity> {
    /// Resolver with the built-in template registry and identity naming.
    pub fn new() -> Self {
        Self::with_naming(TemplateRegistry::builtin(), Identity)
    }
}

impl Default for ConfigurationResolver<Identity> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: UnitNaming> ConfigurationResolver<N> {
    pub fn with_naming(registry: TemplateRegistry, naming: N) -> Self {
        Self { registry, naming }
    }

    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    /// Resolve the effective options for `unit`.
    pub fn resolve(
        &self,
        unit: &ResolutionUnit,
        project: &GenerationOptions,
    ) -> Result<EffectiveOptions, ConfigError> {
        let local = &unit.options;

        let (skip, scope) = layered(local.skip.as_ref(), project.skip.as_ref())
            .map(|(v, s)| (*v, s))
            .unwrap_or((true, Scope::BuiltIn));
        debug!(unit = %unit.name, field = "skip", value = skip, source = %scope, "Resolved field");
        if skip {
            info!(unit = %unit.name, "Generation skipped");
            return Ok(EffectiveOptions::skipped(&unit.name));
        }

        let (hierarchical, scope) = layered(local.hierarchical.as_ref(), project.hierarchical.as_ref())
            .map(|(v, s)| (*v, s))
            .unwrap_or((false, Scope::BuiltIn));
        debug!(unit = %unit.name, field = "hierarchical", value = hierarchical, source = %scope, "Resolved field");

        // An explicitly empty selection counts as unset.
        let (entry_points, scope) = layered(
            local.entry_points.as_ref().filter(|s| !s.is_empty()),
            project.entry_points.as_ref().filter(|s| !s.is_empty()),
        )
        .map(|(v, s)| (v.clone(), s))
        .unwrap_or_else(|| (EntryPointSelection::default(), Scope::BuiltIn));
        debug!(unit = %unit.name, field = "entry_points", value = ?Vec::<String>::from(entry_points.clone()), source = %scope, "Resolved field");

        let templates = self.merge_templates(unit, project)?;

        let (output_template, scope) = layered(
            local.output_dir_template.as_ref(),
            project.output_dir_template.as_ref(),
        )
        .map(|(v, s)| (v.as_str(), s))
        .unwrap_or((DEFAULT_OUTPUT_DIR_TEMPLATE, Scope::BuiltIn));
        let output_dir = self.output_dir_for(output_template, &unit.name)?;
        debug!(unit = %unit.name, field = "output_dir", value = %output_dir.display(), source = %scope, "Resolved field");

        let entry_point_package = layered(
            local.entry_point_package.as_ref(),
            project.entry_point_package.as_ref(),
        )
        .map(|(v, _)| v.clone());

        let packages = layered(local.packages.as_ref(), project.packages.as_ref())
            .map(|(v, _)| v.clone())
            .unwrap_or_default();
        let classes = layered(local.classes.as_ref(), project.classes.as_ref())
            .map(|(v, _)| v.clone())
            .unwrap_or_default();

        info!(
            unit = %unit.name,
            hierarchical,
            entry_points = entry_points.len(),
            templates = templates.len(),
            output_dir = %output_dir.display(),
            "Resolved generation options"
        );

        Ok(EffectiveOptions {
            unit: unit.name.clone(),
            skip,
            hierarchical,
            entry_points,
            templates,
            output_dir: Some(output_dir),
            entry_point_package,
            packages,
            classes,
        })
    }

    /// Resolve every unit. Stops at the first failing unit.
    pub fn resolve_all<'a, I>(
        &self,
        units: I,
        project: &GenerationOptions,
    ) -> Result<Vec<EffectiveOptions>, ConfigError>
    where
        I: IntoIterator<Item = &'a ResolutionUnit>,
    {
        units
            .into_iter()
            .map(|unit| self.resolve(unit, project))
            .collect()
    }

    /// Substitute the unit placeholder in `template` for `unit_name`.
    ///
    /// A template without the placeholder is returned verbatim, so every unit
    /// shares the same directory.
    pub fn output_dir_for(&self, template: &str, unit_name: &str) -> Result<PathBuf, ConfigError> {
        if !template.contains(UNIT_PLACEHOLDER) {
            debug!(unit = unit_name, template, "Output directory template has no unit placeholder");
            return Ok(PathBuf::from(template));
        }

        let segment = self
            .naming
            .segment(unit_name)
            .filter(|s| !s.trim().is_empty() && !s.contains(UNIT_PLACEHOLDER))
            .ok_or_else(|| ConfigError::UnresolvedPlaceholder {
                template: template.to_string(),
                unit: unit_name.to_string(),
            })?;

        // Braces around the segment can rebuild the token, e.g. `{{unit}}`.
        let substituted = template.replace(UNIT_PLACEHOLDER, &segment);
        if substituted.contains(UNIT_PLACEHOLDER) {
            return Err(ConfigError::UnresolvedPlaceholder {
                template: template.to_string(),
                unit: unit_name.to_string(),
            });
        }
        Ok(PathBuf::from(substituted))
    }

    // Project overrides first, then unit overrides on top.
    fn merge_templates(
        &self,
        unit: &ResolutionUnit,
        project: &GenerationOptions,
    ) -> Result<BTreeMap<TemplateKind, TemplateSource>, ConfigError> {
        let mut merged = BTreeMap::new();
        for (scope, templates) in [(Scope::Project, &project.templates), (Scope::Unit, &unit.options.templates)] {
            for (key, source) in templates.iter() {
                let kind = self.registry.lookup(key)?;
                debug!(unit = %unit.name, template = key, source = %scope, "Template override");
                merged.insert(kind, source.clone());
            }
        }
        Ok(merged)
    }
}

/// Resolve with the built-in registry and identity naming.
pub fn resolve(
    unit: &ResolutionUnit,
    project: &GenerationOptions,
) -> Result<EffectiveOptions, ConfigError> {
    ConfigurationResolver::new().resolve(unit, project)
}

/// Make every project-level field explicit, filling gaps with built-in
/// defaults. `entry_point_package` has no default and stays as configured.
///
/// Resolving a unit against the result gives the same snapshot as resolving
/// against `project` itself.
pub fn resolve_as_defaults(project: &GenerationOptions) -> GenerationOptions {
    GenerationOptions {
        skip: Some(project.skip.unwrap_or(true)),
        hierarchical: Some(project.hierarchical.unwrap_or(false)),
        entry_points: Some(
            project
                .entry_points
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_default(),
        ),
        templates: project.templates.clone(),
        output_dir_template: Some(
            project
                .output_dir_template
                .clone()
                .unwrap_or_else(|| DEFAULT_OUTPUT_DIR_TEMPLATE.to_string()),
        ),
        entry_point_package: project.entry_point_package.clone(),
        packages: Some(project.packages.clone().unwrap_or_default()),
        classes: Some(project.classes.clone().unwrap_or_default()),
    }
}
