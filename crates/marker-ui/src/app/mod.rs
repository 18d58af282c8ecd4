//! Top-level application tying together the canvas, shortcuts, status bar,
//! and notifications around one position history.

mod canvas;
mod shortcuts;
mod status_bar;

use std::path::PathBuf;

use eframe::egui;
use egui::{Color32, Pos2};

use marker_config::{AppConfig, ThemeChoice};
use marker_history::{HistoryConfig, StateHistory};

use crate::marker::Marker;
use crate::shortcut::Shortcut;
use crate::toast::{Toasts, FALLBACK_MESSAGE};

/// Arguments passed from the command line to the application.
#[derive(Debug, Clone, Default)]
pub struct StartupArgs {
    /// Config file to use instead of the one next to the executable.
    pub config_path: Option<PathBuf>,
    /// Overrides `max_history_depth` from the config.
    pub max_history: Option<usize>,
}

/// The main application state.
pub struct App {
    /// Marker positions, newest first.
    pub history: StateHistory<Pos2>,
    pub marker: Marker,
    pub toasts: Toasts,
    pub undo_shortcut: Shortcut,
    pub redo_shortcut: Shortcut,
    pub marker_radius: f32,
    pub marker_color: Color32,
    pub show_instructions: bool,
}

impl App {
    /// Creates the application, loading config from disk.
    pub fn new(cc: &eframe::CreationContext<'_>, args: StartupArgs) -> Self {
        let config_path = args.config_path.unwrap_or_else(AppConfig::config_path);
        let mut config = AppConfig::load_or_create(&config_path);
        if let Some(depth) = args.max_history {
            config.max_history_depth = depth;
        }
        Self::with_config(cc, config)
    }

    /// Creates the application from an already loaded config.
    pub fn with_config(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        Self::apply_theme_visuals(&cc.egui_ctx, config.theme_choice());

        let undo_shortcut = Shortcut::parse_or(&config.undo_shortcut, Shortcut::ctrl(egui::Key::Z));
        let redo_shortcut = Shortcut::parse_or(&config.redo_shortcut, Shortcut::ctrl(egui::Key::Y));
        if undo_shortcut == redo_shortcut {
            tracing::warn!("Undo and redo share the shortcut {undo_shortcut}; redo is unreachable");
        }

        let c = config.marker_color;
        tracing::info!(
            max_history_depth = config.max_history_depth,
            %undo_shortcut,
            %redo_shortcut,
            "Application ready"
        );

        Self {
            history: StateHistory::new(HistoryConfig::with_max_depth(config.max_history_depth)),
            marker: Marker::default(),
            toasts: Toasts::new(config.toast_duration_secs as f64),
            undo_shortcut,
            redo_shortcut,
            marker_radius: config.marker_radius,
            marker_color: Color32::from_rgb(c.r, c.g, c.b),
            show_instructions: config.show_instructions,
        }
    }

    fn apply_theme_visuals(ctx: &egui::Context, theme: ThemeChoice) {
        let dark_mode = match theme {
            ThemeChoice::Dark => true,
            ThemeChoice::Light => false,
            ThemeChoice::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        };
        let visuals = if dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        ctx.set_visuals(visuals);
    }

    /// Logs an error and surfaces it as a warning toast. Repeated reports of
    /// the same message refresh the existing toast.
    pub(crate) fn report_error(&mut self, err: &dyn std::fmt::Display, now: f64) {
        let mut message = err.to_string();
        if message.is_empty() {
            message = FALLBACK_MESSAGE.to_string();
        }
        tracing::warn!("Error: {message}");
        self.toasts.warn(&message, format!("Error: {message}"), now);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_history_shortcuts(ctx);

        let panel_fill = ctx.style().visuals.panel_fill;
        let extreme_bg = ctx.style().visuals.extreme_bg_color;

        if self.show_instructions {
            egui::TopBottomPanel::top("instructions")
                .frame(
                    egui::Frame::new()
                        .fill(panel_fill)
                        .inner_margin(egui::Margin::symmetric(8, 4)),
                )
                .show(ctx, |ui| {
                    self.show_instructions_bar(ui);
                });
        }

        egui::TopBottomPanel::bottom("status_bar")
            .max_height(24.0)
            .frame(
                egui::Frame::new()
                    .fill(panel_fill)
                    .inner_margin(egui::Margin::symmetric(8, 3)),
            )
            .show(ctx, |ui| {
                self.show_status_bar(ui);
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(extreme_bg))
            .show(ctx, |ui| {
                self.show_canvas(ui);
            });

        self.toasts.show(ctx);
    }

    // Required by eframe 0.34; all rendering happens in `update`, which the
    // runtime still invokes before `ui` each frame.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}
}
