use std::process::Command;

use anyhow::{Context, Result};

/// Innermost first: each crate must build with only the layers below it.
const LAYERS: &[&str] = &["crmdesk-domain", "crmdesk-core", "crmdesk-infra", "crmdesk-app"];

/// Check every layer compiles on its own.
pub fn check_layers() -> Result<()> {
    println!("Checking {} workspace layers in isolation...", LAYERS.len());

    for (index, package) in LAYERS.iter().enumerate() {
        println!("\n[{}/{}] cargo check -p {package} --all-targets", index + 1, LAYERS.len());

        let status = Command::new("cargo")
            .args(["check", "-p", package, "--all-targets"])
            .status()
            .with_context(|| format!("Failed to run cargo check for '{package}'"))?;

        if !status.success() {
            anyhow::bail!("Layer '{package}' failed to compile");
        }

        println!("✅ {package} compiled successfully");
    }

    println!("\n✅ All {} layers compile successfully!", LAYERS.len());

    Ok(())
}
