//! Simulator-Anbindung: Script-Transport und Capture-Kanal.
//!
//! Beide Richtungen kreuzen Thread-Grenzen: der Upload blockiert in
//! einem Hintergrund-Thread und meldet nur das Bool zurück, der
//! Capture-Listener liest UDP im Hintergrund und liefert Batches an den
//! UI-Thread. Gemeinsamer Zustand wird ausschließlich dort angefasst.

pub mod capture;
pub mod listener;
pub mod transport;

pub use capture::{
    parse_capture_datagram, CaptureChannel, CaptureFlow, CaptureMode, CaptureSample, CaptureToken,
};
pub use listener::CaptureListener;
pub use transport::{ScriptLink, UploadTask};
