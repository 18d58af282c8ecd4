//! The on-screen marker and how it follows the position history.

use eframe::egui;
use egui::{Color32, Pos2};
use marker_history::StateHistory;

/// Marker placement derived from a [`StateHistory`] of positions.
#[derive(Debug, Clone, Default)]
pub struct Marker {
    /// Where the marker is drawn; `None` until the first click.
    position: Option<Pos2>,
    /// History revision the position was last synced from.
    synced_revision: Option<u64>,
}

impl Marker {
    pub fn position(&self) -> Option<Pos2> {
        self.position
    }

    pub fn is_visible(&self) -> bool {
        self.position.is_some()
    }

    /// Moves the marker to the history's current state if the history has
    /// changed since the last sync. An emptied history leaves the marker
    /// where it was. Returns `true` if the history changed.
    pub fn sync(&mut self, history: &StateHistory<Pos2>) -> bool {
        if self.synced_revision == Some(history.revision()) {
            return false;
        }
        self.synced_revision = Some(history.revision());

        if let Some(&pos) = history.current() {
            self.position = Some(pos);
        }
        true
    }

    pub fn paint(&self, painter: &egui::Painter, radius: f32, color: Color32) {
        let Some(center) = self.position else {
            return;
        };
        painter.circle_filled(center, radius, color.gamma_multiply(0.35));
        painter.circle_stroke(center, radius, egui::Stroke::new(2.0, color));
    }
}
