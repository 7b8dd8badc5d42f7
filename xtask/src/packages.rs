use std::process::Command;

use anyhow::{Context, Result};

/// Workspace crates in dependency order. Each one must build on its own so
/// the domain and core layers never pick up infra dependencies by accident.
const LAYERS: &[&str] = &["websms-domain", "websms-core", "websms-infra", "websms-api"];

/// Check every layer in isolation.
pub fn check_layers() -> Result<()> {
    println!("Checking {} workspace crates in isolation...", LAYERS.len());

    for (index, package) in LAYERS.iter().enumerate() {
        println!("\n[{}/{}] cargo check -p {package} --all-targets", index + 1, LAYERS.len());

        let status = Command::new("cargo")
            .args(["check", "-p", package, "--all-targets"])
            .status()
            .with_context(|| format!("Failed to run cargo check for '{package}'"))?;

        if !status.success() {
            anyhow::bail!("Crate '{package}' failed to compile on its own");
        }

        println!("✅ {package} compiled successfully");
    }

    println!("\n✅ All {} crates compile in isolation!", LAYERS.len());

    Ok(())
}
