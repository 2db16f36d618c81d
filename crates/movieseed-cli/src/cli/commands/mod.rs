//! CLI command handlers, one per file.

mod completions;
mod config;
mod list;
mod seed;
mod verify;

pub use completions::run_completions;
pub use config::run_config;
pub use list::run_list;
pub use seed::run_seed;
pub use verify::run_verify;
