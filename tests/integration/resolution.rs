//! Resolution scenarios against the public API

use assertgen::{
    resolve, resolve_as_defaults, ConfigError, ConfigurationResolver, EntryPointKind,
    EntryPointSelection, GenerationOptions, ResolutionUnit, TemplateKind, TemplateRegistry,
    TemplateSource, TestSuffix,
};
use std::path::PathBuf;

fn enabled_project() -> GenerationOptions {
    let mut project = GenerationOptions::new();
    project.set_skip(false);
    project
}

#[test]
fn test_unset_options_resolve_to_builtin_defaults() {
    let effective = resolve(&ResolutionUnit::new("main"), &GenerationOptions::new()).unwrap();
    assert!(effective.skip);
    assert!(!effective.hierarchical);
    assert_eq!(effective.entry_points, EntryPointSelection::of([EntryPointKind::Standard]));
    assert_eq!(effective.entry_point_package, None);
    assert!(effective.templates.is_empty());
}

#[test]
fn test_unit_hierarchical_overrides_project() {
    let mut project = enabled_project();
    project.set_hierarchical(false);
    let mut unit = ResolutionUnit::new("main");
    unit.options_mut().set_hierarchical(true);

    let effective = resolve(&unit, &project).unwrap();
    assert!(effective.hierarchical);
}

#[test]
fn test_output_dir_substitutes_unit_segment() {
    let mut project = enabled_project();
    project.set_output_dir_template("build/generated/{unit}");

    let effective = resolve(&ResolutionUnit::new("test"), &project).unwrap();
    assert_eq!(effective.output_dir, Some(PathBuf::from("build/generated/test")));
}

#[test]
fn test_output_dir_with_test_suffix_naming() {
    let mut project = enabled_project();
    project.set_output_dir_template("build/generated/{unit}/java");
    let resolver = ConfigurationResolver::with_naming(TemplateRegistry::builtin(), TestSuffix);

    let effective = resolver.resolve(&ResolutionUnit::new("main"), &project).unwrap();
    assert_eq!(effective.output_dir, Some(PathBuf::from("build/generated/main-test/java")));
}

#[test]
fn test_default_output_dir() {
    let effective = resolve(&ResolutionUnit::new("main"), &enabled_project()).unwrap();
    assert_eq!(
        effective.output_dir,
        Some(PathBuf::from("build/generated-src/main-test/java"))
    );
}

#[test]
fn test_unknown_entry_point_names_token_and_valid_names() {
    let mut options = GenerationOptions::new();
    let err = options.set_entry_points(["standard", "fastest"]).unwrap_err();
    match &err {
        ConfigError::InvalidConfiguration { token, valid } => {
            assert_eq!(token, "fastest");
            assert!(valid.contains(&"STANDARD".to_string()));
            assert!(valid.contains(&"BDD".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    let message = err.to_string();
    assert!(message.contains("fastest"));
    assert!(message.contains("SOFT"));
    assert_eq!(options.entry_points, None);
}

#[test]
fn test_entry_point_names_are_case_insensitive() {
    for names in [["standard", "soft"], ["STANDARD", "SOFT"], ["Standard", "Soft"]] {
        let mut options = GenerationOptions::new();
        options.set_entry_points(names).unwrap();
        assert_eq!(
            options.entry_point_kinds(),
            Some(vec![EntryPointKind::Standard, EntryPointKind::Soft])
        );
    }
}

#[test]
fn test_empty_unit_selection_inherits_project_selection() {
    let mut project = enabled_project();
    project.set_entry_point_kinds([EntryPointKind::Bdd]);
    let mut unit = ResolutionUnit::new("main");
    unit.options_mut()
        .set_entry_points(Vec::<String>::new())
        .unwrap();

    assert_eq!(unit.options.entry_point_kinds(), Some(vec![]));
    let effective = resolve(&unit, &project).unwrap();
    assert_eq!(effective.entry_points, EntryPointSelection::of([EntryPointKind::Bdd]));
}

#[test]
fn test_empty_selection_everywhere_falls_back_to_standard() {
    let mut project = enabled_project();
    project.set_entry_point_kinds(Vec::<EntryPointKind>::new());
    let mut unit = ResolutionUnit::new("main");
    unit.options_mut()
        .set_entry_point_kinds(Vec::<EntryPointKind>::new());

    let effective = resolve(&unit, &project).unwrap();
    assert_eq!(effective.entry_points, EntryPointSelection::of([EntryPointKind::Standard]));
}

#[test]
fn test_templates_merge_per_kind() {
    let mut project = enabled_project();
    project
        .templates_mut()
        .set_template("assertion_class", "project class")
        .set_template("bdd_method", "project bdd");
    let mut unit = ResolutionUnit::new("main");
    unit.options_mut()
        .templates_mut()
        .set_file("bdd_method", "templates/bdd.txt");

    let effective = resolve(&unit, &project).unwrap();
    assert_eq!(
        effective.templates.get(&TemplateKind::AssertionClass),
        Some(&TemplateSource::Inline("project class".to_string()))
    );
    assert_eq!(
        effective.templates.get(&TemplateKind::BddMethod),
        Some(&TemplateSource::File(PathBuf::from("templates/bdd.txt")))
    );
}

#[test]
fn test_unknown_template_key_fails_resolution() {
    let mut project = enabled_project();
    project.templates_mut().set_template("no_such_template", "x");

    let err = resolve(&ResolutionUnit::new("main"), &project).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTemplate { ref key, .. } if key == "no_such_template"));
}

#[test]
fn test_skipped_unit_ignores_invalid_templates() {
    let mut project = GenerationOptions::new();
    project.templates_mut().set_template("no_such_template", "x");

    let effective = resolve(&ResolutionUnit::new("main"), &project).unwrap();
    assert!(effective.skip);
    assert_eq!(effective.output_dir, None);
}

#[test]
fn test_unresolvable_segment_is_an_error() {
    let resolver = ConfigurationResolver::with_naming(
        TemplateRegistry::builtin(),
        |_: &str| -> Option<String> { None },
    );
    let err = resolver
        .resolve(&ResolutionUnit::new("main"), &enabled_project())
        .unwrap_err();
    assert!(matches!(err, ConfigError::UnresolvedPlaceholder { ref unit, .. } if unit == "main"));
}

#[test]
fn test_filters_fall_back_as_a_whole() {
    let mut project = enabled_project();
    project.packages_mut().include(["org.example.**"]).unwrap();
    project.classes_mut().exclude(["**Internal"]).unwrap();
    let mut unit = ResolutionUnit::new("main");
    unit.options_mut().packages_mut().include(["com.acme"]).unwrap();

    let effective = resolve(&unit, &project).unwrap();
    assert!(effective.selects_class("com.acme.Widget"));
    assert!(!effective.selects_class("org.example.Widget"));
    assert!(!effective.selects_class("com.acme.WidgetInternal"));
}

#[test]
fn test_resolve_as_defaults_makes_fields_explicit() {
    let defaults = resolve_as_defaults(&GenerationOptions::new());
    assert_eq!(defaults.skip, Some(true));
    assert_eq!(defaults.hierarchical, Some(false));
    assert_eq!(defaults.entry_point_kinds(), Some(vec![EntryPointKind::Standard]));
    assert!(defaults.output_dir_template.is_some());
    assert_eq!(defaults.entry_point_package, None);
}
