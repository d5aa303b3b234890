//! assertgen: layered configuration for an assertion generator
//!
//! Resolves, for every build unit, which assertion classes and entry points to
//! generate, which templates to use and where to write the output. Values are
//! layered unit over project over built-in defaults; an external generator
//! consumes the resolved snapshot.

pub mod cli;
pub mod config;
pub mod entry_point;
pub mod error;
pub mod generation;
pub mod logging;
pub mod options;
pub mod pattern;
pub mod report;
pub mod resolve;
pub mod template;
pub mod unit;

pub use config::{BuildDescription, ConfigLoader};
pub use entry_point::{EntryPointKind, EntryPointSelection};
pub use error::{ConfigError, GeneratorError};
pub use generation::{AssertionGenerator, ClassSource, GenerationDriver, GenerationOutcome};
pub use options::GenerationOptions;
pub use pattern::{NamePattern, NamePatternFilter};
pub use resolve::{resolve, resolve_as_defaults, ConfigurationResolver, EffectiveOptions};
pub use template::{TemplateKind, TemplateRegistry, TemplateSource};
pub use unit::{Identity, ResolutionUnit, TestSuffix, UnitNaming};
