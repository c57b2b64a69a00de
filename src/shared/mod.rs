//! Geteilte Typen für layer-übergreifende Verträge.

pub mod options;

pub use options::EditorOptions;
pub use options::{CAPTURE_PORT, ROUTE_START_NUMBER, SCRIPT_PORT};
