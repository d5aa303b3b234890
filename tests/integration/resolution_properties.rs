//! Property-based tests for precedence and idempotence of resolution

use assertgen::{
    resolve, resolve_as_defaults, EntryPointKind, EntryPointSelection, GenerationOptions,
    ResolutionUnit, TemplateKind, TemplateSource,
};
use proptest::prelude::*;
use std::path::PathBuf;

fn selection() -> impl Strategy<Value = EntryPointSelection> {
    proptest::sample::subsequence(EntryPointKind::ALL.to_vec(), 1..=EntryPointKind::ALL.len())
        .prop_map(EntryPointSelection::of)
}

fn package() -> impl Strategy<Value = String> {
    "[a-z]{1,6}(\\.[a-z]{1,6}){0,2}"
}

fn output_template() -> impl Strategy<Value = String> {
    "[a-z]{1,6}(/[a-z]{1,6}){0,2}".prop_map(|base| format!("{base}/{{unit}}"))
}

/// Options that never disable generation, so every field gets resolved.
fn options() -> impl Strategy<Value = GenerationOptions> {
    (
        proptest::option::of(any::<bool>()),
        proptest::option::of(selection()),
        proptest::option::of(output_template()),
        proptest::option::of(package()),
    )
        .prop_map(|(hierarchical, entry_points, output_dir_template, entry_point_package)| {
            GenerationOptions {
                skip: Some(false),
                hierarchical,
                entry_points,
                output_dir_template,
                entry_point_package,
                ..GenerationOptions::default()
            }
        })
}

fn unit_name() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z0-9]{0,8}"
}

/// Test that a unit-level value wins for one field while the project supplies the rest
#[test]
fn test_unit_value_wins_per_field() {
    let mut runner = proptest::test_runner::TestRunner::default();

    let strategy = (
        (options(), unit_name(), "[a-z ]{1,12}"),
        (any::<bool>(), package(), selection(), output_template(), "[a-z ]{1,12}"),
    );
    runner
        .run(
            &strategy,
            |((mut project, name, project_body), (hierarchical, unit_package, unit_selection, unit_template, unit_body))| {
                project.templates_mut().set_template("assertion_class", project_body);
                let baseline = resolve(&ResolutionUnit::new(name.clone()), &project).unwrap();

                let mut unit = ResolutionUnit::new(name.clone());
                unit.options_mut().set_hierarchical(hierarchical);
                let mut expected = baseline.clone();
                expected.hierarchical = hierarchical;
                prop_assert_eq!(resolve(&unit, &project).unwrap(), expected);

                let mut unit = ResolutionUnit::new(name.clone());
                unit.options_mut().set_entry_point_package(unit_package.clone());
                let mut expected = baseline.clone();
                expected.entry_point_package = Some(unit_package);
                prop_assert_eq!(resolve(&unit, &project).unwrap(), expected);

                let mut unit = ResolutionUnit::new(name.clone());
                unit.options_mut().set_entry_point_kinds(unit_selection.iter());
                let mut expected = baseline.clone();
                expected.entry_points = unit_selection;
                prop_assert_eq!(resolve(&unit, &project).unwrap(), expected);

                let mut unit = ResolutionUnit::new(name.clone());
                unit.options_mut().set_output_dir_template(unit_template.clone());
                let mut expected = baseline.clone();
                expected.output_dir = Some(PathBuf::from(unit_template.replace("{unit}", &name)));
                prop_assert_eq!(resolve(&unit, &project).unwrap(), expected);

                let mut unit = ResolutionUnit::new(name.clone());
                unit.options_mut()
                    .templates_mut()
                    .set_template("assertion_class", unit_body.clone());
                let mut expected = baseline.clone();
                expected
                    .templates
                    .insert(TemplateKind::AssertionClass, TemplateSource::Inline(unit_body));
                prop_assert_eq!(resolve(&unit, &project).unwrap(), expected);

                // The project never skips; a skipping unit still does.
                let mut unit = ResolutionUnit::new(name);
                unit.options_mut().set_skip(true);
                let effective = resolve(&unit, &project).unwrap();
                prop_assert!(effective.skip);
                prop_assert_eq!(effective.output_dir, None);

                Ok(())
            },
        )
        .unwrap();
}

/// Test that fully specified unit options ignore the project entirely
#[test]
fn test_complete_unit_options_ignore_project() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(options(), options(), unit_name(), package()),
            |(project, unit_options, name, unit_package)| {
                // `entry_point_package` has no built-in default to make explicit.
                let mut explicit = resolve_as_defaults(&unit_options);
                explicit.entry_point_package.get_or_insert(unit_package);
                let unit = ResolutionUnit::with_options(name, explicit);

                let against_project = resolve(&unit, &project).unwrap();
                let against_nothing = resolve(&unit, &GenerationOptions::default()).unwrap();
                prop_assert_eq!(against_project, against_nothing);

                Ok(())
            },
        )
        .unwrap();
}

/// Test that resolution is deterministic and unchanged by explicit defaults
#[test]
fn test_resolution_is_idempotent() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(options(), unit_name()), |(project, name)| {
            let unit = ResolutionUnit::new(name);
            let defaults = resolve_as_defaults(&project);

            let first = resolve(&unit, &defaults).unwrap();
            let second = resolve(&unit, &defaults).unwrap();
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(&first, &resolve(&unit, &project).unwrap());
            prop_assert_eq!(resolve_as_defaults(&defaults), defaults);

            Ok(())
        })
        .unwrap();
}
