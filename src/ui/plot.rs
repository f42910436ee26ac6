use eframe::egui::Ui;
use egui_plot::{Line, Plot, PlotPoints};

use crate::state::ViewerState;

// ---------------------------------------------------------------------------
// Sample plot (central panel)
// ---------------------------------------------------------------------------

/// Render the dump as a single line, x = sample index, y = value.
///
/// Axes, legend and interaction are left at the plot defaults. An empty dump
/// draws an empty plot.
pub fn sample_plot(ui: &mut Ui, state: &ViewerState) {
    Plot::new("sample_plot").show(ui, |plot_ui| {
        plot_ui.line(Line::new(PlotPoints::Borrowed(&state.points)));
    });
}
