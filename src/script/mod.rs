//! Script-Engine: Kommando-Register, Builder, Delay-Plan und Wire-Format.

pub mod builder;
pub mod builders;
pub mod delay;
pub mod error;
pub mod registry;
#[allow(clippy::module_inception)]
pub mod script;

pub use builder::{compile_profile, BuildContext, ScriptBuilder, SetupBuilder, TeardownBuilder};
pub use builders::{CmProgramBuilder, NavPointBuilder, RadioBuilder, INVOCATIONS_PER_POINT};
pub use delay::{table_for, DelayClass, DelayPlan, DelayTable};
pub use error::ScriptError;
pub use registry::{
    registry_for, Command, CommandRegistry, Device, ResolvedCommand, ValueRange, SCRIPT_BEGIN,
    SCRIPT_DEVICE, SCRIPT_END,
};
pub use script::{CommandInvocation, CommandScript, FIELD_SEPARATOR, RECORD_SEPARATOR};
