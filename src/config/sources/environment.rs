//! Environment source: `ASSERTGEN__PROJECT__SKIP=false` sets `project.skip`.
//!
//! `ASSERTGEN__PROJECT__ENTRY_POINTS=soft,bdd` sets the project selection.
//! Units are an array of tables and can only come from files.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

const LIST_KEYS: [&str; 5] = [
    "project.entry_points",
    "project.packages.include",
    "project.packages.exclude",
    "project.classes.include",
    "project.classes.exclude",
];

pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    let environment = LIST_KEYS.iter().fold(
        Environment::with_prefix("ASSERTGEN")
            .prefix_separator("__")
            .separator("__")
            .list_separator(",")
            .try_parsing(true),
        |environment, key| environment.with_list_parse_key(key),
    );
    builder.add_source(environment)
}
