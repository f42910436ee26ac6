use egui_plot::PlotPoint;

use crate::data::model::SampleSequence;

// ---------------------------------------------------------------------------
// Viewer state
// ---------------------------------------------------------------------------

/// What the plot window shows, independent of rendering.
pub struct ViewerState {
    /// Plot coordinates derived once from the decoded dump and borrowed by
    /// every repaint.
    pub points: Vec<PlotPoint>,
}

impl ViewerState {
    pub fn new(sequence: &SampleSequence) -> Self {
        let points = sequence
            .plot_points()
            .into_iter()
            .map(PlotPoint::from)
            .collect();
        Self { points }
    }
}
