/// Data layer: decoding and previewing the sample dump.
///
/// Architecture:
/// ```text
///  futuresdr_dump.f32
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  raw LE bytes → SampleSequence
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ SampleSequence │  Vec<f32>, index = sample ordinal
///   └────────────────┘
///        │
///        ├──────────────► preview  (stdout)
///        ▼
///      ui::plot  (x = index, y = value)
/// ```

pub mod loader;
pub mod model;
pub mod preview;
