//! `myos reset` command - delete every note

use crate::cli::{Cli, OutputFormat, ResetArgs};
use crate::commands::format::print_json;
use myos_core::bail_usage;
use myos_core::error::Result;
use myos_core::store::Store;

/// Confirmation token required by `--confirm`
pub const CONFIRM_TOKEN: &str = "RESET";

/// Execute the reset command
pub fn execute(cli: &Cli, store: &mut Store, args: &ResetArgs) -> Result<()> {
    if args.confirm.as_deref() != Some(CONFIRM_TOKEN) {
        bail_usage!("reset deletes every note; rerun with --confirm {}", CONFIRM_TOKEN);
    }

    let removed = store.clear()?;
    tracing::info!(removed, "store reset");

    match cli.format {
        OutputFormat::Json => print_json(&serde_json::json!({ "removed": removed }))?,
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Deleted {} notes", removed);
            }
        }
    }

    Ok(())
}
