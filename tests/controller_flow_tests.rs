//! Controller-Flow-Tests: Intents → Commands → State-Änderungen.

use dcs_dtc_editor::app::state::{CaptureTarget, PointDialogState};
use dcs_dtc_editor::app::use_cases;
use dcs_dtc_editor::sim::{CaptureMode, CaptureSample};
use dcs_dtc_editor::{AppCommand, AppController, AppIntent, AppState, Coordinate, NavPoint};

fn state_with_points(count: usize) -> AppState {
    let mut state = AppState::new();
    let route = state.profile.route_mut("Primary").unwrap();
    for i in 0..count {
        route.push(NavPoint::new(
            format!("WP{}", i + 1),
            Coordinate::new(41.0 + i as f64 * 0.1, 41.0),
        ));
    }
    state
}

fn sample(lat: f64, is_ownship: bool) -> CaptureSample {
    CaptureSample {
        latitude: lat,
        longitude: 20.0,
        elevation_m: 100.0,
        is_ownship,
    }
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);

    let last = state
        .command_log
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::RequestExit => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_save_without_path_requests_dialog() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::SaveRequested)
        .expect("SaveRequested sollte ohne Fehler durchlaufen");

    assert!(state.ui.pending_save_dialog);
    match state.command_log.last() {
        Some(AppCommand::RequestSaveProfileDialog) => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_point_dialog_confirm_adds_point() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::AddPointRequested)
        .unwrap();
    assert!(state.list_ui.dialog.is_some(), "Dialog ist offen");

    {
        let dialog = state.list_ui.dialog.as_mut().unwrap();
        dialog.name = "Ziel".to_string();
        dialog.coord_text = "41.61, 41.60".to_string();
        dialog.elevation_text = "500".to_string();
    }

    controller
        .handle_intent(&mut state, AppIntent::PointDialogConfirmed)
        .unwrap();

    assert!(state.list_ui.dialog.is_none(), "Dialog schliesst");
    assert_eq!(state.point_count(), 1);

    let route = state.active_route().unwrap();
    let point = route.get(1).unwrap();
    assert_eq!(point.name, "Ziel");
    assert_eq!(point.number, 1);
    assert_eq!(point.elevation_ft, Some(500));
}

#[test]
fn test_point_dialog_rejects_bad_coordinate() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::AddPointRequested)
        .unwrap();
    state.list_ui.dialog.as_mut().unwrap().coord_text = "quatsch".to_string();

    controller
        .handle_intent(&mut state, AppIntent::PointDialogConfirmed)
        .unwrap();

    assert!(state.list_ui.dialog.is_some(), "Dialog bleibt offen");
    assert_eq!(state.point_count(), 0);
    assert!(state.ui.status_message.is_some());
}

#[test]
fn test_renumbering_stays_contiguous_through_edits() {
    let mut controller = AppController::new();
    let mut state = state_with_points(4);

    // Punkt 2 löschen, Punkt 3 (vorher 4) nach oben schieben.
    controller
        .handle_intent(&mut state, AppIntent::PointRowClicked { index: 2 })
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::DeletePointRequested)
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::PointRowClicked { index: 3 })
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::MovePointUpRequested)
        .unwrap();

    let numbers: Vec<u32> = state
        .active_route()
        .unwrap()
        .points()
        .iter()
        .map(|p| p.number)
        .collect();
    assert_eq!(numbers, vec![1, 2, 3], "lückenlos aufsteigend ab Startnummer");
}

#[test]
fn test_start_number_change_renumbers() {
    let mut controller = AppController::new();
    let mut state = state_with_points(2);

    controller
        .handle_intent(&mut state, AppIntent::RouteStartNumberChanged { start: 80 })
        .unwrap();

    let numbers: Vec<u32> = state
        .active_route()
        .unwrap()
        .points()
        .iter()
        .map(|p| p.number)
        .collect();
    assert_eq!(numbers, vec![80, 81]);
}

#[test]
fn test_multi_capture_appends_points_in_order() {
    let mut state = state_with_points(0);
    state.capture.active = Some(dcs_dtc_editor::app::state::ActiveCapture {
        mode: CaptureMode::Multiple,
        target: CaptureTarget::AppendRoute {
            tag: "Primary".to_string(),
        },
        token: state.capture.channel.subscribe(CaptureMode::Multiple, |_| {
            dcs_dtc_editor::sim::CaptureFlow::Stay
        }),
    });

    let samples = [sample(10.0, false), sample(10.5, false), sample(11.0, false)];
    use_cases::capture::apply_delivery(&mut state, &samples);

    let route = state.active_route().unwrap();
    assert_eq!(route.len(), 3);
    let names: Vec<&str> = route.points().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["CAP1", "CAP2", "CAP3"], "deterministische Namen");
    assert_eq!(route.get(2).unwrap().number, 2);
    assert!(
        state.capture.is_active(),
        "Mehrfach-Capture bleibt bis zum expliziten Ende aktiv"
    );
}

#[test]
fn test_multi_capture_skips_ownship_and_respects_limit() {
    let mut state = state_with_points(0);
    state.options.capture_append_limit = 2;
    state.capture.active = Some(dcs_dtc_editor::app::state::ActiveCapture {
        mode: CaptureMode::Multiple,
        target: CaptureTarget::AppendRoute {
            tag: "Primary".to_string(),
        },
        token: state.capture.channel.subscribe(CaptureMode::Multiple, |_| {
            dcs_dtc_editor::sim::CaptureFlow::Stay
        }),
    });

    let samples = [
        sample(10.0, true),
        sample(10.5, false),
        sample(11.0, false),
        sample(11.5, false),
    ];
    use_cases::capture::apply_delivery(&mut state, &samples);

    assert_eq!(
        state.active_route().unwrap().len(),
        2,
        "Ownship übersprungen, Limit kappt den Rest"
    );
}

#[test]
fn test_single_capture_fills_open_dialog() {
    let mut state = state_with_points(0);
    state.list_ui.dialog = Some(PointDialogState::default());
    state.capture.active = Some(dcs_dtc_editor::app::state::ActiveCapture {
        mode: CaptureMode::Single,
        target: CaptureTarget::PointDialog,
        token: state
            .capture
            .channel
            .subscribe(CaptureMode::Single, |_| dcs_dtc_editor::sim::CaptureFlow::Stay),
    });

    let samples = [sample(41.61, false), sample(50.0, false)];
    use_cases::capture::apply_delivery(&mut state, &samples);

    let dialog = state.list_ui.dialog.as_ref().unwrap();
    assert!(dialog.coord_text.starts_with("N 41°"), "sample[0] übernommen");
    assert_eq!(dialog.elevation_text, "328", "100 m → 328 ft");
    assert!(!state.capture.is_active(), "Einzel-Capture endet nach Anwendung");
}

#[test]
fn test_stale_delivery_after_cancel_is_ignored() {
    let mut state = state_with_points(0);

    // Kein aktives Abo: nachlaufende Zustellung darf nichts anrichten.
    use_cases::capture::apply_delivery(&mut state, &[sample(10.0, false)]);

    assert_eq!(state.active_route().unwrap().len(), 0);
}

#[test]
fn test_upload_intent_reports_unreachable_simulator() {
    let mut controller = AppController::new();
    let mut state = state_with_points(1);
    // Niemand lauscht auf dem Port: Ergebnis ist false, kein Fehler.
    state.options.script_port = 47813;

    controller
        .handle_intent(&mut state, AppIntent::UploadRequested)
        .expect("Transport-Fehler ist kein harter Fehler");

    assert!(state.upload.is_running());

    let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
    while state.upload.is_running() {
        assert!(std::time::Instant::now() < deadline, "Upload-Timeout");
        std::thread::sleep(std::time::Duration::from_millis(20));
        use_cases::upload::poll(&mut state);
    }

    assert_eq!(state.upload.last_result, Some(false));
    assert!(!state.sim.sim_reachable);
}

#[test]
fn test_airframe_switch_rebuilds_registry() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::AirframeSelected {
                airframe: dcs_dtc_editor::Airframe::Hornet,
            },
        )
        .unwrap();

    assert_eq!(
        state.registry.resolve("UFC", "ENTR").unwrap().device_id,
        23,
        "Hornet-Register aktiv"
    );
}
