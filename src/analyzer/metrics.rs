use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use super::types::FileMetrics;
use crate::codec::{Codec, CodecRegistry};

/// Measures one file: full read, timed compression, size ratio.
///
/// Returns `Ok(None)` for zero-length files, which have no meaningful
/// ratio. I/O failures surface as `Err` for the caller to downgrade to
/// a per-file diagnostic.
pub fn compute(
    path: &Path,
    codec: Codec,
    registry: &CodecRegistry,
) -> Result<Option<FileMetrics>> {
    let data = std::fs::read(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    if data.is_empty() {
        return Ok(None);
    }

    let start = Instant::now();
    let compressed = registry.compress(&data, codec)?;
    let duration_ms = start.elapsed().as_millis() as u64;

    let original_size = data.len() as u64;
    let compressed_size = compressed.len() as u64;
    let ratio = compressed_size as f64 / original_size as f64;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    tracing::debug!(
        file = %name,
        original_size,
        compressed_size,
        ratio,
        duration_ms,
        "measured file"
    );

    Ok(Some(FileMetrics {
        name,
        original_size,
        compressed_size,
        ratio,
        duration_ms,
    }))
}
