use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{DumpError, Result};

use super::model::SampleSequence;

/// Bytes per encoded sample.
pub const SAMPLE_SIZE: usize = std::mem::size_of::<f32>();

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Read up to `max_samples` little-endian f32 values from a raw dump.
///
/// The file has no header; samples are densely packed. A trailing partial
/// word is ignored. The file is closed before decoding starts.
pub fn read_samples(path: &Path, max_samples: usize) -> Result<SampleSequence> {
    let limit = u64::try_from(max_samples.saturating_mul(SAMPLE_SIZE)).unwrap_or(u64::MAX);

    let (bytes, file_len) = {
        let mut file = File::open(path).map_err(|source| DumpError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let file_len = file.metadata().ok().map(|m| m.len());

        let mut bytes = Vec::new();
        file.by_ref()
            .take(limit)
            .read_to_end(&mut bytes)
            .map_err(|source| DumpError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        (bytes, file_len)
    };

    log::debug!(
        "read {} bytes from {} (file size {:?}, limit {limit})",
        bytes.len(),
        path.display(),
        file_len
    );

    if bytes.len() % SAMPLE_SIZE != 0 {
        log::warn!(
            "{}: ignoring {} trailing byte(s) that do not form a full sample",
            path.display(),
            bytes.len() % SAMPLE_SIZE
        );
    }
    if file_len.is_some_and(|len| len > limit) {
        log::debug!(
            "{}: stopped after {max_samples} samples, file holds more",
            path.display()
        );
    }

    let sequence = decode_samples(&bytes, max_samples);
    if sequence.is_empty() {
        log::warn!("{}: no complete samples, plot will be empty", path.display());
    }
    log::info!("Loaded {} samples from {}", sequence.len(), path.display());
    Ok(sequence)
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Decode packed little-endian f32 words, keeping at most `max_samples`.
pub fn decode_samples(bytes: &[u8], max_samples: usize) -> SampleSequence {
    bytes
        .chunks_exact(SAMPLE_SIZE)
        .take(max_samples)
        .map(|w| f32::from_le_bytes([w[0], w[1], w[2], w[3]]))
        .collect::<Vec<_>>()
        .into()
}
