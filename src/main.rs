//! DCS DTC Editor.
//!
//! Rust-basierter Editor für Avionik-Datenkassetten (DTC) mit
//! Script-Upload in eine laufende DCS-Instanz und Telemetrie-Capture.

use dcs_dtc_editor::app::use_cases;
use dcs_dtc_editor::{ui, AppController, AppIntent, AppState, EditorOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("DCS DTC Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1100.0, 720.0])
                .with_title("DCS DTC Editor"),
            ..Default::default()
        };

        eframe::run_native(
            "DCS DTC Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.options = editor_options;

        Self {
            state,
            controller: AppController::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        // Hintergrund-Ergebnisse zuerst: Upload-Bool und Capture-Batches
        // kommen hier zurück auf den UI-Kontext.
        use_cases::upload::poll(&mut self.state);
        let sim_events = use_cases::capture::pump(&mut self.state);

        let mut events = sim_events;
        events.extend(self.collect_ui_events(ctx));

        self.process_events(events);

        // Solange Hintergrund-Arbeit läuft, weiter pollen.
        if self.state.capture.is_active() || self.state.upload.is_running() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_navpoint_panel(ctx, &self.state));
        events.extend(ui::handle_file_dialogs(&mut self.state.ui));
        events.extend(ui::show_point_dialog(ctx, &mut self.state));
        events.extend(ui::show_radio_dialog(ctx, &self.state));
        events.extend(ui::show_cm_dialog(ctx, &self.state));
        events.extend(ui::show_options_dialog(ctx, &self.state));
        events.extend(ui::show_capture_dialog(ctx, &self.state));
        events.extend(ui::show_map_window(ctx, &self.state));

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.point_count() == 0 {
                ui.centered_and_justified(|ui| {
                    ui.label("Keine Punkte. Neu anlegen oder aus dem Simulator übernehmen.");
                });
            }
        });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
