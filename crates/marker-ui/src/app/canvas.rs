//! The click canvas and the instruction bar above it.

use eframe::egui;

use super::App;

impl App {
    /// Records primary clicks as new positions and paints the marker at the
    /// current one.
    pub(crate) fn show_canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click());

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.history.add_state(pos);
                tracing::debug!(x = pos.x, y = pos.y, "Position added");
            }
        }

        // Panels drawn before the canvas show last frame's history
        if self.marker.sync(&self.history) {
            ui.ctx().request_repaint();
        }
        self.marker
            .paint(&painter, self.marker_radius, self.marker_color);
    }

    pub(crate) fn show_instructions_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add(
                egui::Label::new(format!("{} = Undo", self.undo_shortcut)).selectable(false),
            );
            ui.separator();
            ui.add(
                egui::Label::new(format!("{} = Redo", self.redo_shortcut)).selectable(false),
            );
        });
    }
}
