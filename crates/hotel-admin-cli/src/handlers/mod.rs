//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, args) -> Result<String, CliError>`
//! - Thin wrappers that:
//!   1. Translate CLI arguments into filters or form inputs
//!   2. Work through the store, the list view or a form
//!   3. Return the text to print
//!
//! `serve` and `paths` need no client context.

pub mod add;
pub mod edit;
pub mod list;
pub mod paths;
pub mod serve;
