//! Status bar showing the history size, the cursor, and the marker position.

use eframe::egui;

use super::App;

/// Formats the cursor as a 1-based step counted from the newest state.
pub(crate) fn format_history_position(index: usize, len: usize) -> String {
    if len == 0 {
        "No positions".to_string()
    } else {
        format!("Step {} of {}", index + 1, len)
    }
}

impl App {
    pub(crate) fn show_status_bar(&mut self, ui: &mut egui::Ui) {
        let history_label =
            format_history_position(self.history.current_index(), self.history.len());
        let marker_label = match self.marker.position() {
            Some(pos) => format!("x: {:.0}, y: {:.0}", pos.x, pos.y),
            None => "Click anywhere to place the marker".to_string(),
        };

        ui.horizontal(|ui| {
            ui.add(egui::Label::new(history_label).selectable(false));
            ui.separator();
            ui.add(egui::Label::new(marker_label).selectable(false));
        });
    }
}
