//! Subsystem-Builder: ein Modul pro Konfigurations-Subsystem.

mod countermeasures;
mod navpoints;
mod radios;

pub use countermeasures::CmProgramBuilder;
pub use navpoints::{NavPointBuilder, INVOCATIONS_PER_POINT};
pub use radios::RadioBuilder;
