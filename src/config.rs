//! Build description loading
//!
//! A build description holds project-wide generation defaults, per-unit
//! overrides and logging settings. Sources are layered with the `config`
//! crate: merge-policy defaults, the global user file, workspace files, then
//! `ASSERTGEN__*` environment variables.
//!
//! Units are an array of tables with the name as a value. `config` lowercases
//! table keys, so names used as keys would lose their case.

use crate::error::ConfigError;
use crate::logging::LoggingConfig;
use crate::options::GenerationOptions;
use crate::resolve::{ConfigurationResolver, EffectiveOptions};
use crate::unit::{ResolutionUnit, UnitNaming};
use config::{Config, File};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::debug;

mod merge;
mod sources;

/// Root of a build description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildDescription {
    /// Project-wide defaults.
    #[serde(default)]
    pub project: GenerationOptions,

    /// Per-unit overrides. A later source replaces the whole list.
    #[serde(default)]
    pub units: Vec<ResolutionUnit>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl BuildDescription {
    /// All units, ordered by name.
    pub fn units(&self) -> Vec<ResolutionUnit> {
        let mut units = self.units.clone();
        units.sort_by(|a, b| a.name.cmp(&b.name));
        units
    }

    /// Look up a unit by its exact, case-sensitive name.
    pub fn unit(&self, name: &str) -> Result<ResolutionUnit, ConfigError> {
        self.units
            .iter()
            .find(|unit| unit.name == name)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownUnit(name.to_string()))
    }

    /// Unit names must be unique.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = BTreeSet::new();
        for unit in &self.units {
            if !seen.insert(unit.name.as_str()) {
                return Err(ConfigError::Load(format!("duplicate unit '{}'", unit.name)));
            }
        }
        Ok(())
    }

    /// Resolve every unit against the project defaults.
    pub fn resolve_all<N: UnitNaming>(
        &self,
        resolver: &ConfigurationResolver<N>,
    ) -> Result<Vec<EffectiveOptions>, ConfigError> {
        resolver.resolve_all(&self.units(), &self.project)
    }
}

/// Loads build descriptions.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load with full layering for `workspace_root`.
    pub fn load(workspace_root: &Path) -> Result<BuildDescription, ConfigError> {
        let builder = merge::merge_policy::builder_with_defaults()?;
        let builder = sources::global_file::add_to_builder(builder)?;
        let builder = sources::workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = sources::environment::add_to_builder(builder);

        let description: BuildDescription = builder.build()?.try_deserialize()?;
        description.validate()?;
        debug!(
            workspace = %workspace_root.display(),
            units = description.units.len(),
            "Loaded build description"
        );
        Ok(description)
    }

    /// Load a single file, without global, workspace or environment layers.
    pub fn load_from_file(path: &Path) -> Result<BuildDescription, ConfigError> {
        let description: BuildDescription = Config::builder()
            .add_source(File::from(path).required(true))
            .build()?
            .try_deserialize()?;
        description.validate()?;
        debug!(path = %path.display(), units = description.units.len(), "Loaded build description file");
        Ok(description)
    }

    /// Path of the global user config file, if a home directory is known.
    pub fn global_config_path() -> Option<PathBuf> {
        sources::global_file::global_config_path()
    }
}
