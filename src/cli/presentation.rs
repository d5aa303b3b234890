//! CLI presentation: text and JSON rendering of resolved options and kind listings.

use crate::entry_point::EntryPointKind;
use crate::error::ConfigError;
use crate::report::GenerationReport;
use crate::resolve::EffectiveOptions;
use crate::template::TemplateKind;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use serde_json::json;

pub fn format_resolved_text(resolved: &[EffectiveOptions]) -> String {
    if resolved.is_empty() {
        return "No units in build description".to_string();
    }
    resolved
        .iter()
        .map(|options| GenerationReport::new(options).render())
        .collect::<Vec<_>>()
        .join("")
}

pub fn format_resolved_json(resolved: &[EffectiveOptions]) -> Result<String, ConfigError> {
    Ok(serde_json::to_string_pretty(resolved)?)
}

/// Both kind tables, template kinds first.
pub fn format_kinds_text() -> String {
    let mut templates = Table::new();
    templates.load_preset(UTF8_FULL);
    templates.set_header(vec!["Template", "Generator type", "Category", "Description"]);
    for kind in TemplateKind::ALL {
        templates.add_row(vec![
            kind.identifier().to_string(),
            kind.generator_type().to_string(),
            kind.category().to_string(),
            kind.description().to_string(),
        ]);
    }

    let mut entry_points = Table::new();
    entry_points.load_preset(UTF8_FULL);
    entry_points.set_header(vec!["Entry point", "File"]);
    for kind in EntryPointKind::ALL {
        entry_points.add_row(vec![kind.name(), kind.file_name()]);
    }

    format!("{}\n\n{}", templates, entry_points)
}

pub fn format_kinds_json() -> Result<String, ConfigError> {
    let templates: Vec<_> = TemplateKind::ALL
        .iter()
        .map(|kind| {
            json!({
                "identifier": kind.identifier(),
                "generator_type": kind.generator_type(),
                "category": kind.category().to_string(),
                "description": kind.description(),
            })
        })
        .collect();
    let entry_points: Vec<_> = EntryPointKind::ALL
        .iter()
        .map(|kind| json!({ "name": kind.name(), "file": kind.file_name() }))
        .collect();
    Ok(serde_json::to_string_pretty(&json!({
        "templates": templates,
        "entry_points": entry_points,
    }))?)
}

pub fn format_validation_summary(resolved: &[EffectiveOptions], template_files: usize) -> String {
    let skipped = resolved.iter().filter(|o| o.skip).count();
    format!(
        "Build description is valid: {} unit(s), {} skipped, {} template file(s) readable",
        resolved.len(),
        skipped,
        template_files
    )
}
