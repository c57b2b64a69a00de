//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod capture;
pub mod dialog;
pub mod file_io;
pub mod map;
pub mod navpoints;
pub mod profile_edit;
pub mod upload;
