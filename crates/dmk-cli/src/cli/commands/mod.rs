//! CLI command handlers, one file per subcommand.

mod comment;
mod fetch;
mod pages;
mod resolve;

pub use comment::run_comment;
pub use fetch::run_fetch;
pub use pages::run_pages;
pub use resolve::run_resolve;
