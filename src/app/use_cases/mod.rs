//! Use-Cases: Mutationslogik hinter den Feature-Handlern.

pub mod capture;
pub mod mirror_apply;
pub mod navpoints;
pub mod upload;
