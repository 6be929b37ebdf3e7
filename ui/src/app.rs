use std::time::Duration;

use crate::{state::State, widgets};

/// How often to poll for fetch results while a view is loading.
const PENDING_REPAINT_INTERVAL: Duration = Duration::from_millis(100);

pub struct OctofitApp {
    state: State,
}

impl OctofitApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }
}

impl eframe::App for OctofitApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply fetch results before drawing.
        self.state.sync_views();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            widgets::resource_tabs(ui, &mut self.state.active);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.state.mount_active();

            if let Some(view) = self.state.view(self.state.active) {
                widgets::collection_table(ui, view);
            }
        });

        // Fetches resolve off the UI thread; keep frames coming until they land.
        if self.state.has_pending_fetch() {
            ctx.request_repaint_after(PENDING_REPAINT_INTERVAL);
        }
    }
}
