//! Generator seam and per-unit generation driver.
//!
//! The assertion generator itself is external; this module only defines the
//! capability it must provide and feeds it resolved options. Every unit is
//! resolved before any generator call, so configuration errors surface before
//! anything is generated.

use crate::entry_point::EntryPointKind;
use crate::error::{ConfigError, GeneratorError};
use crate::options::GenerationOptions;
use crate::report::GenerationReport;
use crate::resolve::{ConfigurationResolver, EffectiveOptions};
use crate::template::TemplateKind;
use crate::unit::{ResolutionUnit, UnitNaming};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{error, info};

/// A class to generate assertions for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassSource {
    /// Fully qualified name, e.g. `org.example.Person`.
    pub name: String,
    /// Source file the class was found in.
    pub file: PathBuf,
}

impl ClassSource {
    pub fn new(name: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
        }
    }

    fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    /// Classes that are themselves generated assertions.
    pub fn is_assertion_class(&self) -> bool {
        let simple = self.simple_name();
        simple.ends_with("Assert") || simple.ends_with("Assertions")
    }
}

/// Files written by the generator for one unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GeneratedFiles {
    pub assertion_files: Vec<PathBuf>,
    pub entry_point_files: BTreeMap<EntryPointKind, PathBuf>,
}

/// Loaded template text handed to the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedTemplate {
    pub kind: TemplateKind,
    pub content: String,
}

/// Load every template override in `options`.
pub fn load_templates(options: &EffectiveOptions) -> Result<Vec<LoadedTemplate>, ConfigError> {
    options
        .templates
        .iter()
        .map(|(kind, source)| {
            Ok(LoadedTemplate {
                kind: *kind,
                content: source.load()?,
            })
        })
        .collect()
}

/// External assertion generator.
pub trait AssertionGenerator {
    fn generate(
        &mut self,
        classes: &[ClassSource],
        options: &EffectiveOptions,
        templates: &[LoadedTemplate],
    ) -> Result<GeneratedFiles, GeneratorError>;
}

/// What happened to one unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GenerationOutcome {
    Skipped { unit: String },
    NothingSelected { unit: String, excluded: Vec<String> },
    Generated { unit: String, files: GeneratedFiles },
    Failed { unit: String, error: String },
}

impl GenerationOutcome {
    pub fn unit(&self) -> &str {
        match self {
            GenerationOutcome::Skipped { unit }
            | GenerationOutcome::NothingSelected { unit, .. }
            | GenerationOutcome::Generated { unit, .. }
            | GenerationOutcome::Failed { unit, .. } => unit,
        }
    }
}

/// Drives generation across units.
pub struct GenerationDriver<'r, N> {
    resolver: &'r ConfigurationResolver<N>,
}

impl<'r, N: UnitNaming> GenerationDriver<'r, N> {
    pub fn new(resolver: &'r ConfigurationResolver<N>) -> Self {
        Self { resolver }
    }

    /// Resolve all units, then generate for each one that is not skipped.
    ///
    /// `sources` maps unit names to the classes found in that unit. A
    /// generator failure is recorded for its unit and does not stop the
    /// remaining units.
    pub fn run<G: AssertionGenerator>(
        &self,
        generator: &mut G,
        project: &GenerationOptions,
        units: &[ResolutionUnit],
        sources: &BTreeMap<String, Vec<ClassSource>>,
    ) -> Result<Vec<GenerationOutcome>, ConfigError> {
        let resolved = self.resolver.resolve_all(units, project)?;

        let mut outcomes = Vec::with_capacity(resolved.len());
        for options in &resolved {
            let classes = sources.get(&options.unit).map(Vec::as_slice).unwrap_or(&[]);
            let outcome = Self::run_unit(generator, options, classes);

            let report = GenerationReport::new(options)
                .with_classes(classes)
                .with_outcome(&outcome);
            info!("{}", report.render());

            outcomes.push(outcome);
        }
        Ok(outcomes)
    }

    fn run_unit<G: AssertionGenerator>(
        generator: &mut G,
        options: &EffectiveOptions,
        classes: &[ClassSource],
    ) -> GenerationOutcome {
        let unit = options.unit.clone();
        if options.skip {
            return GenerationOutcome::Skipped { unit };
        }

        let (selected, excluded): (Vec<_>, Vec<_>) = classes
            .iter()
            .cloned()
            .partition(|c| !c.is_assertion_class() && options.selects_class(&c.name));
        if selected.is_empty() {
            return GenerationOutcome::NothingSelected {
                unit,
                excluded: excluded.into_iter().map(|c| c.name).collect(),
            };
        }

        let result = load_templates(options)
            .map_err(GeneratorError::from)
            .and_then(|templates| generator.generate(&selected, options, &templates));
        match result {
            Ok(files) => GenerationOutcome::Generated { unit, files },
            Err(e) => {
                error!(unit = %unit, error = %e, "Assertion generation failed");
                GenerationOutcome::Failed {
                    unit,
                    error: e.to_string(),
                }
            }
        }
    }
}
