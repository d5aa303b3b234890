//! Integration tests for the generation driver over a loaded build description

use assertgen::generation::{GeneratedFiles, LoadedTemplate};
use assertgen::{
    AssertionGenerator, ClassSource, ConfigError, ConfigLoader, ConfigurationResolver,
    EffectiveOptions, GenerationDriver, GenerationOutcome, GeneratorError, TemplateKind,
};
use std::collections::BTreeMap;
use tempfile::TempDir;

/// Writes one file per selected class and entry point under the output directory.
struct FileWritingGenerator {
    root: std::path::PathBuf,
    seen_templates: Vec<(String, TemplateKind, String)>,
}

impl AssertionGenerator for FileWritingGenerator {
    fn generate(
        &mut self,
        classes: &[ClassSource],
        options: &EffectiveOptions,
        templates: &[LoadedTemplate],
    ) -> Result<GeneratedFiles, GeneratorError> {
        for template in templates {
            self.seen_templates
                .push((options.unit.clone(), template.kind, template.content.clone()));
        }

        let out = self.root.join(options.output_dir.clone().ok_or_else(|| {
            GeneratorError::Failed {
                unit: options.unit.clone(),
                message: "no output directory".to_string(),
            }
        })?);
        std::fs::create_dir_all(&out)?;

        let mut files = GeneratedFiles::default();
        for class in classes {
            let simple = class.name.rsplit('.').next().unwrap_or(class.name.as_str());
            let path = out.join(format!("{simple}Assert.java"));
            std::fs::write(&path, format!("// assertions for {}", class.name))?;
            files.assertion_files.push(path);
        }
        for kind in options.entry_points.iter() {
            let path = out.join(kind.file_name());
            std::fs::write(&path, kind.class_name())?;
            files.entry_point_files.insert(kind, path);
        }
        Ok(files)
    }
}

fn sources() -> BTreeMap<String, Vec<ClassSource>> {
    let mut sources = BTreeMap::new();
    sources.insert(
        "main".to_string(),
        vec![
            ClassSource::new("org.example.model.Person", "src/main/java/org/example/model/Person.java"),
            ClassSource::new("org.example.model.Address", "src/main/java/org/example/model/Address.java"),
            ClassSource::new("org.example.model.PersonAssert", "src/main/java/org/example/model/PersonAssert.java"),
            ClassSource::new("com.thirdparty.Widget", "src/main/java/com/thirdparty/Widget.java"),
        ],
    );
    sources.insert(
        "legacy".to_string(),
        vec![ClassSource::new("com.thirdparty.Gadget", "src/legacy/java/com/thirdparty/Gadget.java")],
    );
    sources
}

#[test]
fn test_driver_generates_only_for_enabled_units() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("assertgen.toml");
    std::fs::write(
        &config_file,
        r#"
[project]
skip = false
entry_points = ["standard", "soft"]
output_dir_template = "generated/{unit}"

[project.templates]
assertion_class = { template = "custom class template" }

[project.packages]
include = ["org.example.**"]

[[units]]
name = "main"
hierarchical = true

[[units]]
name = "legacy"
hierarchical = false

[[units]]
name = "docs"
skip = true
"#,
    )
    .unwrap();

    let description = ConfigLoader::load_from_file(&config_file).unwrap();
    let resolver = ConfigurationResolver::new();
    let mut generator = FileWritingGenerator {
        root: temp_dir.path().to_path_buf(),
        seen_templates: Vec::new(),
    };

    let outcomes = GenerationDriver::new(&resolver)
        .run(&mut generator, &description.project, &description.units(), &sources())
        .unwrap();

    let by_unit: BTreeMap<&str, &GenerationOutcome> =
        outcomes.iter().map(|o| (o.unit(), o)).collect();

    assert!(matches!(by_unit["docs"], GenerationOutcome::Skipped { .. }));
    match by_unit["legacy"] {
        GenerationOutcome::NothingSelected { excluded, .. } => {
            assert_eq!(excluded, &vec!["com.thirdparty.Gadget".to_string()]);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    match by_unit["main"] {
        GenerationOutcome::Generated { files, .. } => {
            assert_eq!(files.assertion_files.len(), 2);
            assert_eq!(files.entry_point_files.len(), 2);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }

    let main_dir = temp_dir.path().join("generated").join("main");
    assert!(main_dir.join("PersonAssert.java").exists());
    assert!(main_dir.join("AddressAssert.java").exists());
    assert!(!main_dir.join("WidgetAssert.java").exists());
    assert!(main_dir.join("Assertions.java").exists());
    assert!(main_dir.join("SoftAssertions.java").exists());

    assert_eq!(
        generator.seen_templates,
        vec![(
            "main".to_string(),
            TemplateKind::AssertionClass,
            "custom class template".to_string()
        )]
    );
}

#[test]
fn test_resolution_error_aborts_before_generation() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("assertgen.toml");
    std::fs::write(
        &config_file,
        "[project]\nskip = false\n\n[[units]]\nname = \"main\"\nhierarchical = true\n\n[[units]]\nname = \"zeta\"\n[units.templates]\nnope = { template = \"x\" }\n",
    )
    .unwrap();

    let description = ConfigLoader::load_from_file(&config_file).unwrap();
    let resolver = ConfigurationResolver::new();
    let mut generator = FileWritingGenerator {
        root: temp_dir.path().to_path_buf(),
        seen_templates: Vec::new(),
    };

    let err = GenerationDriver::new(&resolver)
        .run(&mut generator, &description.project, &description.units(), &sources())
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTemplate { .. }));
    assert!(!temp_dir.path().join("build").exists());
}
