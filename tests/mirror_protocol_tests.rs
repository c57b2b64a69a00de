//! Tests für das Verb-Mirroring zwischen Listen- und Karten-Seite.

use std::cell::RefCell;
use std::rc::Rc;

use dcs_dtc_editor::app::state::MapViewState;
use dcs_dtc_editor::app::use_cases::mirror_apply::{pump_mirror, ListSideApply, MapSideApply};
use dcs_dtc_editor::app::use_cases::navpoints;
use dcs_dtc_editor::app::{AppController, AppIntent, AppState};
use dcs_dtc_editor::{
    Coordinate, DtcProfile, MarkerKind, MirrorLink, MirrorSide, MirrorVerb, NavPoint,
    NavPointList, PointMarker, ProfileStore, VerbHandler, VerbKind, VerbSink,
};

fn route_with_points(count: usize) -> NavPointList {
    let mut route = NavPointList::new("Primary", 1);
    for i in 0..count {
        route.push(NavPoint::new(
            format!("WP{}", i + 1),
            Coordinate::new(41.0 + i as f64 * 0.5, 41.0),
        ));
    }
    route
}

fn navpoint_marker(index: usize) -> PointMarker {
    PointMarker::navpoint("Primary", index, Coordinate::new(41.0, 41.0))
}

fn map_for(route: &NavPointList) -> MapViewState {
    let mut map = MapViewState::new("Caucasus");
    map.rebuild_from_route(route);
    map
}

/// Protokolliert Save-Aufrufe samt Punktnummern zum Save-Zeitpunkt.
#[derive(Default)]
struct SpyStore {
    saves: Rc<RefCell<Vec<(String, Vec<u32>)>>>,
}

impl ProfileStore for SpyStore {
    fn save(&mut self, profile: &DtcProfile, tag: &str) -> anyhow::Result<()> {
        let numbers = profile
            .route(tag)
            .map(|r| r.points().iter().map(|p| p.number).collect())
            .unwrap_or_default();
        self.saves.borrow_mut().push((tag.to_string(), numbers));
        Ok(())
    }
}

#[test]
fn test_selected_does_not_echo_back() {
    let mut link = MirrorLink::new();
    link.attach_map();

    let route = route_with_points(2);
    let mut map = map_for(&route);

    link.emit_from_list(MirrorVerb::selected(navpoint_marker(2)));

    let mut list_deliveries = 0;
    link.pump_with(|side, verb, sink| match side {
        MirrorSide::Map => {
            let mut handler = MapSideApply {
                map: &mut map,
                route: Some(&route),
            };
            handler.apply(verb, sink);
        }
        MirrorSide::List => list_deliveries += 1,
    });

    assert_eq!(map.selected, Some(2));
    assert_eq!(
        list_deliveries, 0,
        "eine Selektion darf höchstens eine Emission auslösen"
    );
}

#[test]
fn test_added_is_answered_with_selected_not_added() {
    let mut link = MirrorLink::new();
    link.attach_map();

    // Liste hat den Punkt 3 bereits autoritativ eingefügt.
    let route = route_with_points(3);
    let mut map = map_for(&route);
    map.remove_element(3);

    link.emit_from_list(MirrorVerb::added(navpoint_marker(3)));

    let mut list_received = Vec::new();
    link.pump_with(|side, verb, sink| match side {
        MirrorSide::Map => {
            let mut handler = MapSideApply {
                map: &mut map,
                route: Some(&route),
            };
            handler.apply(verb, sink);
        }
        MirrorSide::List => list_received.push(verb.kind),
    });

    assert_eq!(map.elements.len(), 3, "Karte zieht das Element nach");
    assert_eq!(map.selected, Some(3));
    assert_eq!(
        list_received,
        vec![VerbKind::Selected],
        "zurück geht Selected, kein Added-Echo"
    );
}

#[test]
fn test_foreign_tag_clears_selection() {
    let route = route_with_points(2);
    let mut map = map_for(&route);
    map.selected = Some(1);

    let mut handler = MapSideApply {
        map: &mut map,
        route: Some(&route),
    };
    let verb = MirrorVerb::selected(PointMarker::new(MarkerKind::Navpoint, "Alternate", 1));
    handler.apply(&verb, &mut VerbSink::new());

    assert_eq!(map.selected, None);
}

#[test]
fn test_unknown_marker_kind_clears_selection() {
    let route = route_with_points(2);
    let mut map = map_for(&route);
    map.selected = Some(2);

    let mut handler = MapSideApply {
        map: &mut map,
        route: Some(&route),
    };
    let verb = MirrorVerb::selected(PointMarker::new(MarkerKind::Unknown, "Primary", 1));
    handler.apply(&verb, &mut VerbSink::new());

    assert_eq!(map.selected, None);
}

#[test]
fn test_stale_index_is_dropped_without_effect() {
    let route = route_with_points(1);
    let mut map = map_for(&route);
    map.selected = Some(1);

    let mut handler = MapSideApply {
        map: &mut map,
        route: Some(&route),
    };
    handler.apply(
        &MirrorVerb::selected(navpoint_marker(5)),
        &mut VerbSink::new(),
    );
    handler.apply(
        &MirrorVerb::deleted(navpoint_marker(5)),
        &mut VerbSink::new(),
    );

    assert_eq!(map.selected, Some(1), "veraltete Indizes ändern nichts");
    assert_eq!(map.elements.len(), 1);
}

#[test]
fn test_moved_rereads_authoritative_point() {
    // Autoritative Route hat die neue Position; das Verb trägt absichtlich
    // eine abweichende Anzeige-Koordinate.
    let mut route = route_with_points(1);
    route.get_mut(1).unwrap().coord = Coordinate::new(42.5, 43.5);
    let mut map = map_for(&route);
    map.refresh_element(1, Coordinate::new(10.0, 10.0));

    let mut handler = MapSideApply {
        map: &mut map,
        route: Some(&route),
    };
    let marker = PointMarker::navpoint("Primary", 1, Coordinate::new(0.0, 0.0));
    handler.apply(&MirrorVerb::moved(marker), &mut VerbSink::new());

    let world = map.elements[0].world;
    assert!((world.y - 42.5).abs() < 1e-6, "Breite aus der Route");
    assert!((world.x - 43.5).abs() < 1e-6, "Länge aus der Route");
}

#[test]
fn test_list_side_deleted_closes_detail_dialog() {
    let mut state = AppState::new();
    {
        let route = state.profile.route_mut("Primary").unwrap();
        route.push(NavPoint::new("WP1", Coordinate::new(41.0, 41.0)));
        route.push(NavPoint::new("WP2", Coordinate::new(41.5, 41.0)));
    }
    state.list_ui.dialog = Some(dcs_dtc_editor::app::state::PointDialogState {
        index: Some(1),
        ..Default::default()
    });
    state.list_ui.selected_index = Some(1);

    let profile = state.profile.clone();
    let mut handler = ListSideApply {
        profile: &profile,
        list_ui: &mut state.list_ui,
    };
    handler.apply(
        &MirrorVerb::deleted(navpoint_marker(1)),
        &mut VerbSink::new(),
    );

    assert!(state.list_ui.dialog.is_none(), "Detail-Ansicht schliesst");
    assert_eq!(state.list_ui.selected_index, None);
}

#[test]
fn test_delete_renumbers_and_saves_before_emitting() {
    let mut state = AppState::new();
    {
        let route = state.profile.route_mut("Primary").unwrap();
        route.push(NavPoint::new("WP1", Coordinate::new(10.0, 20.0)));
        route.push(NavPoint::new("WP2", Coordinate::new(10.5, 20.5)));
    }

    let saves = Rc::new(RefCell::new(Vec::new()));
    state.store = Box::new(SpyStore {
        saves: Rc::clone(&saves),
    });

    // Karten-Seite anhängen, Detail-Fokus auf den zu löschenden Punkt.
    let mut controller = AppController::new();
    controller
        .handle_intent(&mut state, AppIntent::MapOpenRequested)
        .unwrap();
    state.map.as_mut().unwrap().detail_index = Some(1);
    state.map.as_mut().unwrap().selected = Some(1);

    // Löschen ohne sofortigen Pump: Verb bleibt zunächst in der Queue.
    assert!(navpoints::delete_point(&mut state, 1));

    {
        let saves = saves.borrow();
        assert_eq!(saves.len(), 1, "genau eine Sicherung");
        let (tag, numbers) = &saves[0];
        assert_eq!(tag, "Primary");
        assert_eq!(
            numbers, &vec![1],
            "WP2 ist zum Save-Zeitpunkt bereits auf Nummer 1"
        );
    }
    assert_eq!(
        state.mirror.pending(MirrorSide::Map),
        1,
        "Deleted wartet erst nach der Sicherung auf Zustellung"
    );

    // Zustellung: Karte entfernt Element 1 und schliesst die Detail-Ansicht.
    pump_mirror(&mut state);

    let map = state.map.as_ref().unwrap();
    assert_eq!(map.elements.len(), 1);
    assert_eq!(map.elements[0].marker.index, 1, "Indizes rücken nach");
    assert_eq!(map.detail_index, None, "Detail-Ansicht auf WP1 schliesst");
}

#[test]
fn test_map_originated_add_selects_on_both_sides() {
    let mut state = AppState::new();
    let mut controller = AppController::new();
    controller
        .handle_intent(&mut state, AppIntent::MapOpenRequested)
        .unwrap();

    controller
        .handle_intent(
            &mut state,
            AppIntent::MapAddPointRequested {
                coord: Coordinate::new(42.0, 41.5),
            },
        )
        .unwrap();

    assert_eq!(state.point_count(), 1, "autoritative Liste hat den Punkt");
    assert_eq!(state.list_ui.selected_index, Some(1), "Liste selektiert");
    let map = state.map.as_ref().unwrap();
    assert_eq!(map.elements.len(), 1);
    assert_eq!(map.selected, Some(1), "Karte behält die Selektion");
}

#[test]
fn test_list_emissions_without_map_are_dropped() {
    let mut state = AppState::new();
    state
        .profile
        .route_mut("Primary")
        .unwrap()
        .push(NavPoint::new("WP1", Coordinate::new(41.0, 41.0)));

    navpoints::select_point(&mut state, 1);

    assert_eq!(state.mirror.pending(MirrorSide::Map), 0);
    assert_eq!(state.list_ui.selected_index, Some(1));
}
