use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use client_core::{loader, ServiceBinding};
use shared::domain::OpMode;

/// Inspects a deployment manifest: resolves the service binding and
/// prints the operation table the dispatcher would use.
#[derive(Parser, Debug)]
struct Args {
    /// Path to a local manifest artifact.
    #[arg(long, conflicts_with = "manifest_url")]
    manifest: Option<PathBuf>,
    /// URL to fetch the manifest from.
    #[arg(long)]
    manifest_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let manifest = match (&args.manifest, &args.manifest_url) {
        (Some(path), None) => loader::manifest_from_path(path)?,
        (None, Some(url)) => loader::fetch_manifest(&reqwest::Client::new(), url).await?,
        _ => bail!("pass exactly one of --manifest or --manifest-url"),
    };

    let binding = ServiceBinding::resolve(&manifest)?;
    println!(
        "Service deployed at {} on network {}",
        binding.address(),
        binding.network_id()
    );

    let mut descriptors: Vec<_> = binding.descriptors().collect();
    descriptors.sort_by(|a, b| a.name.cmp(&b.name));
    for descriptor in descriptors {
        let mode = match descriptor.mode {
            OpMode::Read => "read",
            OpMode::Write => "write",
            OpMode::PayableWrite => "payable write",
        };
        let value = descriptor
            .fixed_value
            .map(|amount| format!(", value {} base units", amount))
            .unwrap_or_default();
        println!(
            "  {}({}) [{mode}{value}]",
            descriptor.name,
            descriptor.arg_names.join(", ")
        );
    }

    Ok(())
}
