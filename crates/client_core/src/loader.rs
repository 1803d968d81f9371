use std::path::Path;

use shared::manifest::ServiceManifest;
use tracing::info;

use crate::error::ClientError;

/// Fetches the deployment manifest once at startup. Transport failures
/// and unparseable documents are distinct: the former may be transient,
/// the latter never is.
pub async fn fetch_manifest(
    http: &reqwest::Client,
    url: &str,
) -> Result<ServiceManifest, ClientError> {
    let response = http
        .get(url)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|err| ClientError::TransportError {
            message: format!("failed to fetch manifest from {url}: {err}"),
        })?;

    let body = response
        .bytes()
        .await
        .map_err(|err| ClientError::TransportError {
            message: format!("failed to read manifest body from {url}: {err}"),
        })?;

    let manifest = manifest_from_slice(&body)?;
    info!(url, functions = manifest.functions().count(), "manifest fetched");
    Ok(manifest)
}

pub fn manifest_from_slice(bytes: &[u8]) -> Result<ServiceManifest, ClientError> {
    serde_json::from_slice(bytes)
        .map_err(|err| ClientError::ManifestMalformed(format!("manifest does not parse: {err}")))
}

pub fn manifest_from_path(path: &Path) -> Result<ServiceManifest, ClientError> {
    let bytes = std::fs::read(path).map_err(|err| ClientError::TransportError {
        message: format!("failed to read manifest at {}: {err}", path.display()),
    })?;
    manifest_from_slice(&bytes)
}
