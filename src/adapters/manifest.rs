//! Model manifest: SHA-256 binding of model artifact files.
//!
//! A `manifest.json` next to the model lists every artifact file with its
//! digest. When present it is checked before anything is parsed, so a
//! truncated or swapped `model.json` fails at startup instead of producing
//! wrong prices.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::ports::ModelError;

/// File name of the manifest inside a model directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Default model file name inside a model directory.
pub const MODEL_FILE: &str = "model.json";

const MANIFEST_VERSION: u32 = 1;

/// Digest manifest for a model directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelManifest {
    pub version: u32,
    #[serde(default)]
    pub created_at: Option<i64>,
    /// Relative file name -> lowercase hex SHA-256
    pub files: BTreeMap<String, String>,
}

impl ModelManifest {
    /// Hash the given files (relative to `dir`) into a new manifest.
    ///
    /// # Errors
    /// Returns `ModelError::Io` if a file cannot be read.
    pub fn for_files(dir: &Path, files: &[&str]) -> Result<Self, ModelError> {
        let mut digests = BTreeMap::new();
        for rel in files {
            let path = dir.join(rel);
            let bytes = fs::read(&path)
                .map_err(|e| ModelError::Io(format!("Failed to read {path:?}: {e}")))?;
            digests.insert((*rel).to_string(), sha256_hex(&bytes));
        }

        Ok(Self {
            version: MANIFEST_VERSION,
            created_at: Some(unix_now()),
            files: digests,
        })
    }

    /// Write the manifest as pretty JSON into `dir`.
    ///
    /// # Errors
    /// Returns `ModelError::Io` if the file cannot be written.
    pub fn write(&self, dir: &Path) -> Result<PathBuf, ModelError> {
        let bytes = serde_json::to_vec_pretty(self)
            .map_err(|e| ModelError::Format(format!("Failed to serialize manifest: {e}")))?;
        let path = dir.join(MANIFEST_FILE);
        fs::write(&path, bytes)
            .map_err(|e| ModelError::Io(format!("Failed to write {path:?}: {e}")))?;
        Ok(path)
    }
}

/// Lowercase hex SHA-256 of a byte slice.
#[must_use]
pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

fn unix_now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

fn constant_time_eq_str(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Verify the manifest in `base_dir`, if one exists.
///
/// `model_file` must be bound by the manifest. Returns `Ok(None)` when no
/// manifest is present and `require` is false.
///
/// # Errors
/// Returns `ModelError::Integrity` on a missing required manifest, an
/// unbound model file, or any digest mismatch.
pub fn verify_manifest(
    base_dir: &Path,
    model_file: &str,
    require: bool,
) -> Result<Option<ModelManifest>, ModelError> {
    let manifest_path = base_dir.join(MANIFEST_FILE);

    if !manifest_path.exists() {
        if require {
            tracing::error!("Model manifest not found at {:?}", manifest_path);
            return Err(ModelError::Integrity(format!(
                "{MANIFEST_FILE} required but not found in {base_dir:?}"
            )));
        }
        tracing::warn!(
            "Loading model without {} (digests not checked)",
            MANIFEST_FILE
        );
        return Ok(None);
    }

    let content = fs::read(&manifest_path)
        .map_err(|e| ModelError::Io(format!("Failed to read manifest: {e}")))?;
    let manifest: ModelManifest = serde_json::from_slice(&content)
        .map_err(|e| ModelError::Integrity(format!("Invalid {MANIFEST_FILE} format: {e}")))?;

    if manifest.version != MANIFEST_VERSION {
        return Err(ModelError::Integrity(format!(
            "Unsupported manifest version: {}",
            manifest.version
        )));
    }

    if !manifest.files.contains_key(model_file) {
        return Err(ModelError::Integrity(format!(
            "{MANIFEST_FILE} does not bind {model_file}"
        )));
    }

    for (rel, expected_hex) in &manifest.files {
        let path = base_dir.join(rel);
        let bytes = fs::read(&path).map_err(|e| {
            ModelError::Integrity(format!(
                "Manifest references missing/unreadable file {path:?}: {e}"
            ))
        })?;

        if !constant_time_eq_str(&sha256_hex(&bytes), &expected_hex.to_ascii_lowercase()) {
            return Err(ModelError::Integrity(format!("File hash mismatch for {rel}")));
        }
    }

    tracing::info!(
        "Model manifest verified ({} file(s))",
        manifest.files.len()
    );
    Ok(Some(manifest))
}
