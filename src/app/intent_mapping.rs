//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::NewProfileRequested => vec![AppCommand::NewProfile],
        AppIntent::OpenProfileRequested => vec![AppCommand::RequestOpenProfileDialog],
        AppIntent::SaveRequested => {
            if state.profile_path.is_some() {
                vec![AppCommand::SaveProfile { path: None }]
            } else {
                vec![AppCommand::RequestSaveProfileDialog]
            }
        }
        AppIntent::SaveAsRequested => vec![AppCommand::RequestSaveProfileDialog],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::ProfileFileSelected { path } => vec![AppCommand::LoadProfile { path }],
        AppIntent::SaveFilePathSelected { path } => {
            vec![AppCommand::SaveProfile { path: Some(path) }]
        }
        AppIntent::AirframeSelected { airframe } => vec![AppCommand::SetAirframe { airframe }],

        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],

        AppIntent::OpenRadioDialogRequested => vec![AppCommand::OpenRadioDialog],
        AppIntent::CloseRadioDialogRequested => vec![AppCommand::CloseRadioDialog],
        AppIntent::RadioPresetChanged {
            radio,
            channel,
            frequency_mhz,
        } => vec![AppCommand::SetRadioPreset {
            radio,
            channel,
            frequency_mhz,
        }],

        AppIntent::OpenCmDialogRequested => vec![AppCommand::OpenCmDialog],
        AppIntent::CloseCmDialogRequested => vec![AppCommand::CloseCmDialog],
        AppIntent::CmProgramChanged { slot, program } => {
            vec![AppCommand::SetCmProgram { slot, program }]
        }

        AppIntent::RouteStartNumberChanged { start } => {
            vec![AppCommand::SetRouteStartNumber { start }]
        }
        AppIntent::PointRowClicked { index } => vec![AppCommand::SelectPoint { index }],
        AppIntent::PointRowDoubleClicked { index } => vec![
            AppCommand::SelectPoint { index },
            AppCommand::OpenPointDialog { index: Some(index) },
        ],
        AppIntent::AddPointRequested => vec![AppCommand::OpenPointDialog { index: None }],
        AppIntent::DeletePointRequested => vec![AppCommand::DeleteSelectedPoint],
        AppIntent::MovePointUpRequested => vec![AppCommand::MoveSelectedPointUp],
        AppIntent::MovePointDownRequested => vec![AppCommand::MoveSelectedPointDown],
        AppIntent::PointDialogConfirmed => vec![AppCommand::ConfirmPointDialog],
        AppIntent::PointDialogCancelled => vec![AppCommand::ClosePointDialog],
        AppIntent::PointDialogCaptureRequested => vec![AppCommand::BeginSingleCapture],

        AppIntent::MapOpenRequested => vec![AppCommand::OpenMap],
        AppIntent::MapCloseRequested => vec![AppCommand::CloseMap],
        AppIntent::MapPointPicked { index } => vec![AppCommand::PickMapPoint { index }],
        AppIntent::MapPointDoubleClicked { index } => {
            vec![AppCommand::OpenMapPointDetail { index }]
        }
        AppIntent::MapPointDragStarted { index } => vec![AppCommand::BeginMapDrag { index }],
        AppIntent::MapPointDragged { index, coord } => {
            vec![AppCommand::DragMapPoint { index, coord }]
        }
        AppIntent::MapPointDragEnded { index } => vec![AppCommand::EndMapDrag { index }],
        AppIntent::MapAddPointRequested { coord } => vec![AppCommand::AddPointAt { coord }],
        AppIntent::MapPanned { delta_world } => vec![AppCommand::PanMap { delta_world }],
        AppIntent::MapZoomed { factor } => vec![AppCommand::ZoomMap { factor }],

        AppIntent::UploadRequested => vec![AppCommand::CompileAndUpload],

        AppIntent::CaptureAppendRequested => vec![AppCommand::BeginAppendCapture],
        AppIntent::CaptureDoneRequested | AppIntent::CaptureCancelled => {
            vec![AppCommand::FinishCapture]
        }
        AppIntent::CaptureDelivered { samples } => {
            vec![AppCommand::ApplyCaptureSamples { samples }]
        }
    }
}
