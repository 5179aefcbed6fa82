//! Replay a gesture script and print what the board reported.
//!
//! ```text
//! spanboard <script.json>
//! spanboard -          (read the script from stdin)
//! ```
//!
//! Set `RUST_LOG=spanboard=debug` to trace the gestures.

use anyhow::{Context, Result, bail};
use spanboard::replay::{self, Script};
use std::io::Read;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(source) = args.next() else {
        bail!("usage: spanboard <script.json | ->");
    };

    let script = if source == "-" {
        let mut json = String::new();
        std::io::stdin()
            .read_to_string(&mut json)
            .context("Failed to read script from stdin")?;
        Script::from_json_str(&json).context("Invalid script on stdin")?
    } else {
        Script::load(&source).with_context(|| format!("Failed to load script {source}"))?
    };

    let outcome = replay::run(&script).context("Replay failed")?;
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
