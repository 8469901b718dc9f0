//! Ecosystem tag detection.

use std::path::Path;

use tracing::debug;

use super::EcosystemTag;

/// Detects ecosystems by checking for marker files at the project root
pub struct MarkerDetector;

impl MarkerDetector {
    /// Detect all ecosystems present at the given path.
    ///
    /// Tags come back in declaration order, never discovery order. When nothing
    /// matches the result is exactly `[Unknown]`.
    pub fn detect(path: &Path) -> Vec<EcosystemTag> {
        let mut detected = Vec::new();

        for tag in EcosystemTag::DETECTABLE {
            if let Some(marker) = tag
                .marker_files()
                .iter()
                .find(|marker| path.join(marker).exists())
            {
                debug!(ecosystem = tag.as_str(), marker = *marker, "Ecosystem marker found");
                detected.push(tag);
            }
        }

        if detected.is_empty() {
            detected.push(EcosystemTag::Unknown);
        }

        detected
    }
}
