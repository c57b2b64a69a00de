//! Tests für Script-Kompilierung und Wire-Format.

use std::io::Read;
use std::net::TcpListener;

use dcs_dtc_editor::script::{ScriptError, INVOCATIONS_PER_POINT};
use dcs_dtc_editor::{
    compile_profile, registry_for, Airframe, BuildContext, Coordinate, DelayPlan, DtcProfile,
    NavPoint, ScriptLink,
};

fn context(registry: &dcs_dtc_editor::script::CommandRegistry) -> BuildContext<'_> {
    BuildContext::new(registry, DelayPlan::for_airframe(registry.airframe(), 1.0))
}

fn two_point_profile() -> DtcProfile {
    let mut profile = DtcProfile::new(Airframe::Viper, 1);
    let route = profile.route_mut("Primary").expect("Primary existiert");
    route.push(NavPoint::new("WP1", Coordinate::new(10.0, 20.0)).with_elevation(500));
    route.push(NavPoint::new("WP2", Coordinate::new(10.5, 20.5)).with_elevation(600));
    profile
}

#[test]
fn test_script_is_bracketed_by_markers() {
    let registry = registry_for(Airframe::Viper);
    let mut profile = two_point_profile();
    profile.comm1.set_preset(3, Some(251.0));
    profile.cm_programs[0].chaff = 10;

    let script = compile_profile(&profile, &context(&registry)).expect("kompilierbar");
    let invocations = script.invocations();

    let first = invocations.first().expect("nicht leer");
    let last = invocations.last().expect("nicht leer");

    // Begin-Marker: Pseudo-Gerät 0, Kommando 0; End-Marker: Kommando 1.
    assert_eq!((first.device_id, first.command_id), (0, 0));
    assert_eq!((last.device_id, last.command_id), (0, 1));

    // Marker kommen genau einmal vor
    let marker_count = invocations.iter().filter(|i| i.device_id == 0).count();
    assert_eq!(marker_count, 2);
}

#[test]
fn test_out_of_range_value_aborts_whole_compile() {
    let registry = registry_for(Airframe::Viper);
    let mut profile = two_point_profile();
    // Höhe jenseits des SCRATCH_ELEV-Bereichs [-1500, 80000]
    profile
        .route_mut("Primary")
        .unwrap()
        .get_mut(2)
        .unwrap()
        .elevation_ft = Some(99_999);

    let err = compile_profile(&profile, &context(&registry)).unwrap_err();

    assert!(matches!(err, ScriptError::ValueOutOfRange { .. }));
}

#[test]
fn test_unknown_route_is_integrity_error() {
    let registry = registry_for(Airframe::Viper);
    let mut profile = two_point_profile();
    profile.routes[0].tag = "Primary".to_string();

    let builder = dcs_dtc_editor::script::NavPointBuilder::new("Verschollen");
    let mut out = dcs_dtc_editor::CommandScript::new();
    let err = dcs_dtc_editor::script::ScriptBuilder::build(
        &builder,
        &profile,
        &context(&registry),
        &mut out,
    )
    .unwrap_err();

    assert!(matches!(err, ScriptError::UnknownRoute { .. }));
    assert!(out.is_empty());
}

#[test]
fn test_values_respect_declared_ranges() {
    let registry = registry_for(Airframe::Viper);
    let script = compile_profile(&two_point_profile(), &context(&registry)).expect("kompilierbar");

    // Jede Invocation trägt einen Wert, den das Register zulässt;
    // stichprobenartig über die Scratchpad-Kommandos geprüft.
    let lat_range = registry.resolve("UFC", "SCRATCH_LAT").unwrap().range;
    for invocation in script.invocations() {
        if invocation.device_id == 17 && invocation.command_id == 3003 {
            assert!(lat_range.contains(invocation.value));
        }
    }
}

#[test]
fn test_missing_elevation_is_skipped() {
    let registry = registry_for(Airframe::Viper);
    let mut profile = DtcProfile::new(Airframe::Viper, 1);
    profile
        .route_mut("Primary")
        .unwrap()
        .push(NavPoint::new("WP1", Coordinate::new(10.0, 20.0)));

    let script = compile_profile(&profile, &context(&registry)).expect("kompilierbar");

    // Ohne Höhe entfallen SCRATCH_ELEV + ENTR: 7 statt 9 pro Punkt.
    assert_eq!(script.len(), 7 + 2);
}

#[test]
fn test_two_waypoint_upload_end_to_end() {
    let registry = registry_for(Airframe::Viper);
    let profile = two_point_profile();
    let script = compile_profile(&profile, &context(&registry)).expect("kompilierbar");

    // 2 × Invocations pro Punkt plus die beiden Marker
    assert_eq!(script.len(), 2 * INVOCATIONS_PER_POINT + 2);

    let expected_wire = script.to_wire_string();
    assert!(expected_wire.starts_with("0,0,0,0;"));
    assert!(expected_wire.ends_with(";0,1,0,0"));

    // Mock-Listener nimmt die Transaktion an und vergleicht bit-genau.
    let listener = TcpListener::bind("127.0.0.1:0").expect("bindbar");
    let port = listener.local_addr().unwrap().port();

    let accept = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("Verbindung erwartet");
        let mut received = String::new();
        stream.read_to_string(&mut received).expect("lesbar");
        received
    });

    let link = ScriptLink::new("127.0.0.1", port);
    assert!(link.send(&script), "Versand an Mock-Listener");

    let received = accept.join().expect("Listener-Thread");
    assert_eq!(received, expected_wire);
}

#[test]
fn test_empty_profile_compiles_to_marker_only_script() {
    let registry = registry_for(Airframe::Hornet);
    let profile = DtcProfile::new(Airframe::Hornet, 1);

    let script = compile_profile(&profile, &context(&registry)).expect("kompilierbar");

    assert_eq!(script.len(), 2);
    assert!(script.is_effectively_empty());

    // Leeres Script: No-op-Erfolg ohne Verbindungsversuch.
    let link = ScriptLink::new("127.0.0.1", 9);
    assert!(link.send(&script));
}

#[test]
fn test_delay_multiplier_scales_invocations() {
    let registry = registry_for(Airframe::Viper);
    let profile = two_point_profile();

    let normal = compile_profile(
        &profile,
        &BuildContext::new(&registry, DelayPlan::for_airframe(Airframe::Viper, 1.0)),
    )
    .unwrap();
    let slow = compile_profile(
        &profile,
        &BuildContext::new(&registry, DelayPlan::for_airframe(Airframe::Viper, 2.0)),
    )
    .unwrap();

    // Marker bleiben bei 0, alle anderen Delays verdoppeln sich.
    for (a, b) in normal.invocations().iter().zip(slow.invocations()) {
        if a.device_id == 0 {
            assert_eq!(b.delay_ms, 0);
        } else {
            assert_eq!(b.delay_ms, a.delay_ms * 2);
        }
    }
}
