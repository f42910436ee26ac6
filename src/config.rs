use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Viewer configuration
// ---------------------------------------------------------------------------

/// Dump written by the FutureSDR file sink, relative to the working directory.
pub const DEFAULT_DUMP_PATH: &str = "futuresdr_dump.f32";

/// Upper bound on the number of samples decoded from the dump.
pub const DEFAULT_MAX_SAMPLES: usize = 100_000;

/// Number of leading samples echoed to stdout.
pub const DEFAULT_PREVIEW_LEN: usize = 10_000;

/// Fixed parameters of one viewer run.
#[derive(Debug, Clone, PartialEq)]
pub struct DumpConfig {
    /// Raw little-endian f32 file to read.
    pub path: PathBuf,

    /// Decode at most this many samples.
    pub max_samples: usize,

    /// Print at most this many samples before opening the plot.
    pub preview_len: usize,

    /// Initial window size in logical points.
    pub window_size: [f32; 2],
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DUMP_PATH),
            max_samples: DEFAULT_MAX_SAMPLES,
            preview_len: DEFAULT_PREVIEW_LEN,
            window_size: [1200.0, 800.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_capture_setup() {
        let config = DumpConfig::default();
        assert_eq!(config.path, PathBuf::from("futuresdr_dump.f32"));
        assert_eq!(config.max_samples, 100_000);
        assert_eq!(config.preview_len, 10_000);
        assert!(config.preview_len <= config.max_samples);
    }
}
