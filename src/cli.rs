//! CLI domain: parse, route, output, and presentation only.
//! No domain logic; the route table dispatches to the apply workflow.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{long_version, parse_args, try_parse_args_from, Cli, Commands};
pub use presentation::{display_path, format_apply_outcome};
pub use route::RunContext;
