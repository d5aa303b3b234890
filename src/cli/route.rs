//! CLI route: single route table and run context. Dispatches to the resolver and presentation.

use crate::config::{BuildDescription, ConfigLoader};
use crate::error::ConfigError;
use crate::generation::load_templates;
use crate::resolve::{ConfigurationResolver, EffectiveOptions};
use crate::template::TemplateRegistry;
use crate::unit::{TestSuffix, UnitNaming};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::cli::parse::{Commands, OutputFormat};
use crate::cli::presentation::{
    format_kinds_json, format_kinds_text, format_resolved_json, format_resolved_text,
    format_validation_summary,
};

/// Runtime context for CLI execution: workspace and the loaded build description.
/// Built from workspace path and optional config path using ConfigLoader only.
pub struct RunContext {
    workspace_root: PathBuf,
    description: BuildDescription,
}

impl RunContext {
    /// Create run context from workspace root and optional config path. Uses ConfigLoader only.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let description = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };
        Ok(Self::from_description(workspace_root, description))
    }

    /// Run context over an already loaded build description.
    pub fn from_description(workspace_root: PathBuf, description: BuildDescription) -> Self {
        Self {
            workspace_root,
            description,
        }
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    pub fn description(&self) -> &BuildDescription {
        &self.description
    }

    /// Execute a command and return its rendered output.
    pub fn execute(&self, command: &Commands) -> Result<String, ConfigError> {
        debug!(workspace = %self.workspace_root.display(), "Executing command");
        match command {
            Commands::Resolve {
                unit,
                format,
                test_suffix,
            } => {
                let resolved = if *test_suffix {
                    let resolver =
                        ConfigurationResolver::with_naming(TemplateRegistry::builtin(), TestSuffix);
                    self.resolve_units(&resolver, unit.as_deref())?
                } else {
                    self.resolve_units(&ConfigurationResolver::new(), unit.as_deref())?
                };
                match format {
                    OutputFormat::Text => Ok(format_resolved_text(&resolved)),
                    OutputFormat::Json => format_resolved_json(&resolved),
                }
            }
            Commands::Kinds { format } => match format {
                OutputFormat::Text => Ok(format_kinds_text()),
                OutputFormat::Json => format_kinds_json(),
            },
            Commands::Validate => {
                let resolved = self.description.resolve_all(&ConfigurationResolver::new())?;
                let mut template_files = 0;
                for options in resolved.iter().filter(|o| !o.skip) {
                    load_templates(options)?;
                    template_files += options
                        .templates
                        .values()
                        .filter(|source| source.file().is_some())
                        .count();
                }
                info!(units = resolved.len(), "Build description validated");
                Ok(format_validation_summary(&resolved, template_files))
            }
        }
    }

    fn resolve_units<N: UnitNaming>(
        &self,
        resolver: &ConfigurationResolver<N>,
        unit: Option<&str>,
    ) -> Result<Vec<EffectiveOptions>, ConfigError> {
        match unit {
            Some(name) => {
                let unit = self.description.unit(name)?;
                Ok(vec![resolver.resolve(&unit, &self.description.project)?])
            }
            None => self.description.resolve_all(resolver),
        }
    }
}
