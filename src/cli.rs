//! CLI domain: parse, route, output, and presentation only.
//! No resolution logic; the route table dispatches to the resolver and report.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands, OutputFormat};
pub use presentation::{
    format_kinds_json, format_kinds_text, format_resolved_json, format_resolved_text,
    format_validation_summary,
};
pub use route::RunContext;
