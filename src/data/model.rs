// ---------------------------------------------------------------------------
// SampleSequence – the decoded dump
// ---------------------------------------------------------------------------

/// Ordered f32 samples decoded from a dump. Position is the only identity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSequence {
    samples: Vec<f32>,
}

impl SampleSequence {
    pub fn new(samples: Vec<f32>) -> Self {
        Self { samples }
    }

    /// All samples in file order.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the dump decoded to nothing.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Leading `len` samples, or all of them if the sequence is shorter.
    pub fn preview(&self, len: usize) -> &[f32] {
        let samples = self.samples();
        &samples[..len.min(samples.len())]
    }

    /// `[index, value]` pairs for a line plot, one per sample.
    pub fn plot_points(&self) -> Vec<[f64; 2]> {
        self.samples()
            .iter()
            .enumerate()
            .map(|(i, &v)| [i as f64, f64::from(v)])
            .collect()
    }
}

impl From<Vec<f32>> for SampleSequence {
    fn from(samples: Vec<f32>) -> Self {
        Self::new(samples)
    }
}
