//! Transient notifications shown at the bottom of the window.
//!
//! Toasts are keyed by an id (the message itself for error reports), so
//! reporting the same problem repeatedly refreshes one toast instead of
//! stacking copies.

use eframe::egui;
use egui::{Color32, RichText};

/// Message shown when an error carries no text of its own.
pub const FALLBACK_MESSAGE: &str = "Ops! Something went wrong.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: String,
    pub text: String,
    pub level: ToastLevel,
    /// Context time (seconds) after which the toast disappears.
    pub expires_at: f64,
}

/// Queue of active toasts, oldest first.
#[derive(Debug, Clone)]
pub struct Toasts {
    items: Vec<Toast>,
    duration_secs: f64,
}

impl Toasts {
    pub fn new(duration_secs: f64) -> Self {
        Self {
            items: Vec::new(),
            duration_secs,
        }
    }

    /// Shows `text` as a warning, or refreshes the existing toast with the
    /// same `id`.
    pub fn warn(&mut self, id: &str, text: impl Into<String>, now: f64) {
        self.push(id, text.into(), ToastLevel::Warning, now);
    }

    pub fn info(&mut self, id: &str, text: impl Into<String>, now: f64) {
        self.push(id, text.into(), ToastLevel::Info, now);
    }

    fn push(&mut self, id: &str, text: String, level: ToastLevel, now: f64) {
        let expires_at = now + self.duration_secs;
        if let Some(existing) = self.items.iter_mut().find(|t| t.id == id) {
            existing.text = text;
            existing.level = level;
            existing.expires_at = expires_at;
            return;
        }
        self.items.push(Toast {
            id: id.to_string(),
            text,
            level,
            expires_at,
        });
    }

    /// Drops toasts whose time is up.
    pub fn prune(&mut self, now: f64) {
        self.items.retain(|t| t.expires_at > now);
    }

    pub fn active(&self) -> &[Toast] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Paints active toasts bottom-center and schedules a repaint for the
    /// next expiry.
    pub fn show(&mut self, ctx: &egui::Context) {
        let now = ctx.input(|i| i.time);
        self.prune(now);
        let Some(next_expiry) = self
            .items
            .iter()
            .map(|t| t.expires_at)
            .min_by(f64::total_cmp)
        else {
            return;
        };

        egui::Area::new(egui::Id::new("toasts"))
            .anchor(egui::Align2::CENTER_BOTTOM, egui::Vec2::new(0.0, -36.0))
            .interactable(false)
            .show(ctx, |ui| {
                for toast in &self.items {
                    let accent = match toast.level {
                        ToastLevel::Info => Color32::from_rgb(52, 152, 219),
                        ToastLevel::Warning => Color32::from_rgb(241, 196, 15),
                    };
                    egui::Frame::new()
                        .fill(Color32::from_rgb(18, 18, 18))
                        .stroke(egui::Stroke::new(1.0, accent))
                        .corner_radius(egui::CornerRadius::same(6))
                        .inner_margin(egui::Margin::symmetric(12, 8))
                        .show(ui, |ui| {
                            ui.add(
                                egui::Label::new(RichText::new(&toast.text).color(Color32::WHITE))
                                    .selectable(false),
                            );
                        });
                    ui.add_space(4.0);
                }
            });

        let remaining = (next_expiry - now).max(0.0);
        ctx.request_repaint_after(std::time::Duration::from_secs_f64(remaining));
    }
}
