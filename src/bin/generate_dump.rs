//! Writes a synthetic `futuresdr_dump.f32` so the viewer can be tried
//! without an SDR capture.

use std::f64::consts::TAU;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

const SAMPLE_RATE: f64 = 48_000.0;
const NUM_SAMPLES: usize = 100_000;

/// Two tones under a slow amplitude envelope, plus a small DC offset.
fn sample_at(n: usize) -> f32 {
    let t = n as f64 / SAMPLE_RATE;
    let envelope = 0.6 + 0.4 * (TAU * 0.5 * t).sin();
    let carrier = (TAU * 440.0 * t).sin() + 0.3 * (TAU * 1_250.0 * t).sin();
    (0.05 + envelope * carrier) as f32
}

fn main() -> Result<()> {
    env_logger::init();

    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("futuresdr_dump.f32"));

    let file = File::create(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);

    for n in 0..NUM_SAMPLES {
        writer
            .write_all(&sample_at(n).to_le_bytes())
            .with_context(|| format!("writing {}", output_path.display()))?;
    }
    writer.flush().context("flushing output")?;

    log::debug!("sample rate {SAMPLE_RATE} Hz");
    println!(
        "Wrote {NUM_SAMPLES} samples ({} bytes) to {}",
        NUM_SAMPLES * std::mem::size_of::<f32>(),
        output_path.display()
    );
    Ok(())
}
