//! Undo/redo keyboard handling.
//!
//! Key presses matching the configured shortcuts move the history cursor.
//! Failed moves are reported as toasts and never interrupt the frame.

use eframe::egui;

use super::App;

impl App {
    /// Applies every undo/redo shortcut pressed this frame, in order.
    pub(crate) fn handle_history_shortcuts(&mut self, ctx: &egui::Context) {
        let (now, presses) = ctx.input(|i| {
            let presses: Vec<(egui::Key, egui::Modifiers)> = i
                .events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        modifiers,
                        ..
                    } => Some((*key, *modifiers)),
                    _ => None,
                })
                .collect();
            (i.time, presses)
        });

        for (key, modifiers) in presses {
            let result = if self.undo_shortcut.matches(key, modifiers) {
                self.history.previous_state()
            } else if self.redo_shortcut.matches(key, modifiers) {
                self.history.next_state()
            } else {
                continue;
            };

            match result {
                Ok(()) => tracing::debug!(
                    index = self.history.current_index(),
                    len = self.history.len(),
                    "History cursor moved"
                ),
                Err(e) => self.report_error(&e, now),
            }
        }
    }
}
