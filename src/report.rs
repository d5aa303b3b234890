//! Human-readable report of resolved options and generation results.

use crate::generation::{ClassSource, GenerationOutcome};
use crate::resolve::EffectiveOptions;
use std::collections::BTreeSet;
use std::fmt::Write;

const INDENT: &str = "- ";
const SECTION: &str = "--- ";

/// Report for one unit.
///
/// Without an outcome only the input parameters are rendered.
pub struct GenerationReport<'a> {
    options: &'a EffectiveOptions,
    classes: &'a [ClassSource],
    outcome: Option<&'a GenerationOutcome>,
}

impl<'a> GenerationReport<'a> {
    pub fn new(options: &'a EffectiveOptions) -> Self {
        Self {
            options,
            classes: &[],
            outcome: None,
        }
    }

    pub fn with_classes(mut self, classes: &'a [ClassSource]) -> Self {
        self.classes = classes;
        self
    }

    pub fn with_outcome(mut self, outcome: &'a GenerationOutcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let title = format!("Assertion generation report: {}", self.options.unit);
        let rule = "=".repeat(title.len());
        let _ = writeln!(out);
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "{title}");
        let _ = writeln!(out, "{rule}");
        self.render_parameters(&mut out);
        if let Some(outcome) = self.outcome {
            let _ = writeln!(out);
            let _ = writeln!(out, "{SECTION}Generator results{SECTION}");
            self.render_outcome(&mut out, outcome);
        }
        out
    }

    fn render_parameters(&self, out: &mut String) {
        let options = self.options;
        let _ = writeln!(out);
        let _ = writeln!(out, "{SECTION}Generator input parameters{SECTION}");

        if options.skip {
            let _ = writeln!(out, "Generation is skipped for this unit.");
            return;
        }

        if !options.templates.is_empty() {
            let _ = writeln!(
                out,
                "The following templates will replace the ones provided by the generator:"
            );
            for (kind, source) in &options.templates {
                let _ = writeln!(out, "{INDENT}'{}' ({kind}): {source}", kind.description());
            }
            let _ = writeln!(out);
        }

        let _ = writeln!(out, "Hierarchical assertions: {}", options.hierarchical);
        let _ = writeln!(out, "Entry point classes:");
        for kind in options.entry_points.iter() {
            let _ = writeln!(out, "{INDENT}{} ({kind})", kind.class_name());
        }
        match &options.entry_point_package {
            Some(package) => {
                let _ = writeln!(out, "Entry point package: {package}");
            }
            None => {
                let _ = writeln!(out, "Entry point package: inferred by the generator");
            }
        }
        if let Some(dir) = &options.output_dir {
            let _ = writeln!(out, "Output directory: {}", dir.display());
        }

        if !options.packages.is_unrestricted() {
            let _ = writeln!(out, "Package filter:");
            render_filter(out, options.packages.includes(), options.packages.excludes());
        }
        if !options.classes.is_unrestricted() {
            let _ = writeln!(out, "Class filter:");
            render_filter(out, options.classes.includes(), options.classes.excludes());
        }

        let packages: BTreeSet<&str> = self
            .classes
            .iter()
            .filter_map(|c| c.name.rsplit_once('.').map(|(p, _)| p))
            .collect();
        if !packages.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "Generating assertions for classes in following packages and subpackages:"
            );
            for package in packages {
                let _ = writeln!(out, "{INDENT}{package}");
            }
        }
        if !self.classes.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Generating assertions for classes:");
            for class in self.classes {
                let _ = writeln!(out, "{INDENT}{}", class.name);
            }
        }
    }

    fn render_outcome(&self, out: &mut String, outcome: &GenerationOutcome) {
        let _ = writeln!(out);
        match outcome {
            GenerationOutcome::Skipped { .. } => {
                let _ = writeln!(out, "Nothing generated: unit is skipped.");
            }
            GenerationOutcome::NothingSelected { excluded, .. } => {
                let _ = writeln!(
                    out,
                    "No assertions generated as no classes have been found from given classes/packages."
                );
                if !excluded.is_empty() {
                    let _ = writeln!(out, "{INDENT}Excluded classes : {}", excluded.join(", "));
                }
            }
            GenerationOutcome::Failed { error, .. } => {
                let _ = writeln!(out, "Assertions failed with error : {error}");
            }
            GenerationOutcome::Generated { files, .. } => {
                if let Some(dir) = &self.options.output_dir {
                    let _ = writeln!(
                        out,
                        "Directory where custom assertions files have been generated:"
                    );
                    let _ = writeln!(out, "{INDENT}{}", dir.display());
                    let _ = writeln!(out);
                }
                let _ = writeln!(out, "Custom assertions files generated:");
                let names: BTreeSet<String> = files
                    .assertion_files
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect();
                for name in names {
                    let _ = writeln!(out, "{INDENT}{name}");
                }
                for (kind, file) in &files.entry_point_files {
                    let _ = writeln!(out);
                    let _ = writeln!(
                        out,
                        "{} entry point class has been generated in file:",
                        kind.class_name()
                    );
                    let _ = writeln!(out, "{INDENT}{}", file.display());
                }
            }
        }
    }
}

fn render_filter<'a>(
    out: &mut String,
    includes: impl Iterator<Item = &'a str>,
    excludes: impl Iterator<Item = &'a str>,
) {
    for pattern in includes {
        let _ = writeln!(out, "{INDENT}include {pattern}");
    }
    for pattern in excludes {
        let _ = writeln!(out, "{INDENT}exclude {pattern}");
    }
}
