//! Application Controller für zentrale Event-Verarbeitung.

use super::{use_cases, AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping und stellt
    /// anschließend anstehende Mirror-Verbs zu.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        use_cases::mirror_apply::pump_mirror(state);

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Datei-I/O ===
            AppCommand::RequestOpenProfileDialog => handlers::file_io::request_open(state),
            AppCommand::RequestSaveProfileDialog => handlers::file_io::request_save(state),
            AppCommand::NewProfile => handlers::file_io::new_profile(state),
            AppCommand::LoadProfile { path } => handlers::file_io::load(state, path)?,
            AppCommand::SaveProfile { path } => handlers::file_io::save(state, path)?,
            AppCommand::SetAirframe { airframe } => {
                handlers::profile_edit::set_airframe(state, airframe)
            }

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
            AppCommand::OpenRadioDialog => handlers::dialog::open_radio_dialog(state),
            AppCommand::CloseRadioDialog => handlers::dialog::close_radio_dialog(state),
            AppCommand::OpenCmDialog => handlers::dialog::open_cm_dialog(state),
            AppCommand::CloseCmDialog => handlers::dialog::close_cm_dialog(state),

            // === Funk & Gegenmaßnahmen ===
            AppCommand::SetRadioPreset {
                radio,
                channel,
                frequency_mhz,
            } => handlers::profile_edit::set_radio_preset(state, radio, channel, frequency_mhz),
            AppCommand::SetCmProgram { slot, program } => {
                handlers::profile_edit::set_cm_program(state, slot, program)
            }

            // === Punktliste ===
            AppCommand::SetRouteStartNumber { start } => {
                handlers::navpoints::set_start_number(state, start)
            }
            AppCommand::SelectPoint { index } => handlers::navpoints::select_point(state, index),
            AppCommand::OpenPointDialog { index } => {
                handlers::navpoints::open_point_dialog(state, index)
            }
            AppCommand::ClosePointDialog => handlers::navpoints::close_point_dialog(state),
            AppCommand::ConfirmPointDialog => handlers::navpoints::confirm_point_dialog(state),
            AppCommand::DeleteSelectedPoint => handlers::navpoints::delete_selected(state),
            AppCommand::MoveSelectedPointUp => handlers::navpoints::move_selected_up(state),
            AppCommand::MoveSelectedPointDown => handlers::navpoints::move_selected_down(state),

            // === Karte ===
            AppCommand::OpenMap => handlers::map::open(state),
            AppCommand::CloseMap => handlers::map::close(state),
            AppCommand::PickMapPoint { index } => handlers::map::pick(state, index),
            AppCommand::OpenMapPointDetail { index } => handlers::map::open_detail(state, index),
            AppCommand::BeginMapDrag { index } => handlers::map::begin_drag(state, index),
            AppCommand::DragMapPoint { index, coord } => handlers::map::drag(state, index, coord),
            AppCommand::EndMapDrag { index } => handlers::map::end_drag(state, index),
            AppCommand::AddPointAt { coord } => handlers::map::add_point_at(state, coord),
            AppCommand::PanMap { delta_world } => handlers::map::pan(state, delta_world),
            AppCommand::ZoomMap { factor } => handlers::map::zoom(state, factor),

            // === Simulator ===
            AppCommand::CompileAndUpload => handlers::upload::compile_and_upload(state)?,
            AppCommand::BeginSingleCapture => handlers::capture::begin_single(state),
            AppCommand::BeginAppendCapture => handlers::capture::begin_append(state),
            AppCommand::FinishCapture => handlers::capture::finish(state),
            AppCommand::ApplyCaptureSamples { samples } => {
                handlers::capture::apply_samples(state, &samples)
            }
        }

        Ok(())
    }
}
