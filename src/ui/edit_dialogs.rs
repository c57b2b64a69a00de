//! Dialoge für Funk-Presets und Gegenmaßnahmen-Programme.

use crate::app::{AppIntent, AppState};
use crate::core::{RadioSlot, RADIO_PRESET_COUNT};

/// Zeigt den Funk-Preset-Dialog.
pub fn show_radio_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    if !state.ui.show_radio_dialog {
        return events;
    }

    let mut open = true;
    egui::Window::new("Funk-Presets")
        .collapsible(false)
        .open(&mut open)
        .show(ctx, |ui| {
            ui.columns(2, |columns| {
                radio_column(&mut columns[0], state, RadioSlot::Comm1, "COMM1", &mut events);
                radio_column(&mut columns[1], state, RadioSlot::Comm2, "COMM2", &mut events);
            });
        });

    if !open {
        events.push(AppIntent::CloseRadioDialogRequested);
    }

    events
}

fn radio_column(
    ui: &mut egui::Ui,
    state: &AppState,
    radio: RadioSlot,
    label: &str,
    events: &mut Vec<AppIntent>,
) {
    ui.heading(label);
    let table = state.profile.radio(radio);

    for channel in 1..=RADIO_PRESET_COUNT {
        ui.horizontal(|ui| {
            ui.label(format!("{:2}", channel));

            let mut mhz = table.preset(channel).unwrap_or(0.0);
            let drag = egui::DragValue::new(&mut mhz)
                .speed(0.025)
                .range(0.0..=400.0)
                .suffix(" MHz");

            if ui.add(drag).changed() {
                let frequency_mhz = (mhz > 0.0).then_some(mhz);
                events.push(AppIntent::RadioPresetChanged {
                    radio,
                    channel,
                    frequency_mhz,
                });
            }
        });
    }
}

/// Zeigt den Gegenmaßnahmen-Dialog (6 Programm-Slots).
pub fn show_cm_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    if !state.ui.show_cm_dialog {
        return events;
    }

    let mut open = true;
    egui::Window::new("Gegenmaßnahmen-Programme")
        .collapsible(false)
        .open(&mut open)
        .show(ctx, |ui| {
            egui::Grid::new("cm_grid").num_columns(5).show(ui, |ui| {
                ui.strong("Slot");
                ui.strong("Chaff");
                ui.strong("Flare");
                ui.strong("Intervall (1/100 s)");
                ui.strong("Wiederholungen");
                ui.end_row();

                for (i, program) in state.profile.cm_programs.iter().enumerate() {
                    let slot = i + 1;
                    let mut edited = *program;

                    ui.label(slot.to_string());
                    let mut changed = false;
                    changed |= ui
                        .add(egui::DragValue::new(&mut edited.chaff).range(0..=99))
                        .changed();
                    changed |= ui
                        .add(egui::DragValue::new(&mut edited.flare).range(0..=99))
                        .changed();
                    changed |= ui
                        .add(egui::DragValue::new(&mut edited.interval_hundredths).range(1..=500))
                        .changed();
                    changed |= ui
                        .add(egui::DragValue::new(&mut edited.repeat).range(1..=99))
                        .changed();
                    ui.end_row();

                    if changed {
                        events.push(AppIntent::CmProgramChanged {
                            slot,
                            program: edited,
                        });
                    }
                }
            });
        });

    if !open {
        events.push(AppIntent::CloseCmDialogRequested);
    }

    events
}
