//! DCS DTC Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod mirror;
pub mod script;
pub mod shared;
pub mod sim;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, CaptureTarget};
pub use core::{
    Airframe, CmProgram, Coordinate, DtcProfile, NavPoint, NavPointList, ProfileStore, RadioSlot,
    SimContext,
};
pub use mirror::{
    MarkerKind, MirrorLink, MirrorSide, MirrorVerb, PointMarker, VerbHandler, VerbKind, VerbSink,
};
pub use script::{compile_profile, registry_for, BuildContext, CommandScript, DelayPlan};
pub use shared::EditorOptions;
pub use sim::{CaptureChannel, CaptureMode, CaptureSample, ScriptLink};
