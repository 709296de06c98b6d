//! `role-check` - evaluate role change policy from the command line.
//!
//! Reads one JSON command from stdin and writes the JSON result to stdout.
//!
//! ```text
//! echo '{"command":"decide","actor":"ADMIN","target":"TEAM_LEAD","next":"ADMIN","admins_left_after":3}' | role-check
//! ```

use std::io::Read;

use anyhow::{Context, Result};
use tracing::info;

use cw_rbac::{command::Command, config, observability};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = config::Config::from_env()?;
    observability::init(&config);

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read command from stdin")?;

    let command = Command::parse(&input).context("Invalid command")?;
    info!(?command, "Evaluating");

    let output = command.execute()?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
