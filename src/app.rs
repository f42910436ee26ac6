use anyhow::anyhow;
use eframe::egui;

use crate::config::DumpConfig;
use crate::data::model::SampleSequence;
use crate::state::ViewerState;
use crate::ui::plot;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DumpViewerApp {
    pub state: ViewerState,
}

impl DumpViewerApp {
    pub fn new(sequence: SampleSequence) -> Self {
        Self {
            state: ViewerState::new(&sequence),
        }
    }
}

impl eframe::App for DumpViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::sample_plot(ui, &self.state);
        });
    }
}

// ---------------------------------------------------------------------------
// Window
// ---------------------------------------------------------------------------

/// Open the plot window and block until the user closes it.
pub fn run(config: &DumpConfig, sequence: SampleSequence) -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let title = config.path.display().to_string();
    log::info!("Opening plot window for {} samples", sequence.len());

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(DumpViewerApp::new(sequence)))),
    )
    // eframe::Error is not Send + Sync, so it cannot be wrapped as a source.
    .map_err(|e| anyhow!("display backend failed: {e}"))
}
