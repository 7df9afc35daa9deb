//! Inspect operation - the lowered descriptors as JSON.

use eyre::{Context, Result};
use sealgen_manifest::Manifest;

/// Lower the manifest and serialize the descriptors.
pub fn inspect(manifest: &Manifest) -> Result<String> {
    serde_json::to_string_pretty(&manifest.lower()).wrap_err("Failed to serialize descriptors")
}
