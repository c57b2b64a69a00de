//! Core-Domänentypen: Koordinaten, Navigationspunkte, Profile, POIs.

pub mod airframe;
pub mod coord;
/// Core-Datenmodelle für DTC-Profile
///
/// Dieses Modul definiert die Haupt-Datenstrukturen:
/// - DtcProfile: Container für Routen, Funk-Presets und CM-Programme
/// - NavPointList: autoritative Punktliste einer Route
/// - Coordinate: geografische Position mit DDM-Parsing
pub mod navpoint;
pub mod poi;
pub mod profile;
pub mod spatial;

pub use airframe::{Airframe, SimContext};
pub use coord::{Coordinate, COORD_SCALE};
pub use navpoint::{NavPoint, NavPointList};
pub use poi::{pois_for, PointOfInterest};
pub use profile::{
    CmProgram, DtcProfile, JsonProfileStore, ProfileStore, RadioSlot, RadioTable,
    CM_PROGRAM_COUNT, PRIMARY_ROUTE_TAG, RADIO_PRESET_COUNT,
};
pub use spatial::{PickIndex, PickMatch};
