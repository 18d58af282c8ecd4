use egui_kittest::Harness;
use marker_config::AppConfig;
use marker_ui::App;

/// Creates a standard test harness with the app at 800x600 and default config.
pub fn create_harness() -> Harness<'static, App> {
    create_harness_with(AppConfig::default())
}

pub fn create_harness_with(config: AppConfig) -> Harness<'static, App> {
    Harness::builder()
        .with_size(egui::Vec2::new(800.0, 600.0))
        .build_eframe(move |cc| App::with_config(cc, config.clone()))
}

/// Clicks at `pos` with press and release batched into one frame.
pub fn click_at(harness: &mut Harness<'_, App>, pos: egui::Pos2) {
    let input = harness.input_mut();
    input.events.push(egui::Event::PointerMoved(pos));
    input.events.push(egui::Event::PointerButton {
        pos,
        button: egui::PointerButton::Primary,
        pressed: true,
        modifiers: egui::Modifiers::NONE,
    });
    input.events.push(egui::Event::PointerButton {
        pos,
        button: egui::PointerButton::Primary,
        pressed: false,
        modifiers: egui::Modifiers::NONE,
    });
    harness.run();
}

pub fn ctrl() -> egui::Modifiers {
    egui::Modifiers {
        ctrl: true,
        ..Default::default()
    }
}
