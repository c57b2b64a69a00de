//! Script-Builder: übersetzen Profil-Subsysteme in Invocation-Folgen.
//!
//! Ein Builder pro Subsystem; alle teilen sich den Ausgabe-Puffer einer
//! Transaktion. Setup und Teardown klammern das Script mit den
//! Transaktions-Markern. Jeder Fehler bricht die gesamte Kompilierung ab.

use crate::core::DtcProfile;

use super::builders::{CmProgramBuilder, NavPointBuilder, RadioBuilder};
use super::{
    CommandInvocation, CommandRegistry, CommandScript, DelayClass, DelayPlan, ScriptError,
    SCRIPT_BEGIN, SCRIPT_DEVICE, SCRIPT_END,
};

/// Expliziter Kompilier-Kontext: Register und Delay-Plan des aktiven
/// Luftfahrzeug-Typs.
pub struct BuildContext<'a> {
    /// Kommando-Register des Luftfahrzeug-Typs
    pub registry: &'a CommandRegistry,
    /// Delay-Tabelle × globaler Multiplikator
    pub delays: DelayPlan,
}

impl<'a> BuildContext<'a> {
    /// Erstellt einen Kontext.
    pub fn new(registry: &'a CommandRegistry, delays: DelayPlan) -> Self {
        Self { registry, delays }
    }

    /// Löst ein Kommando auf, prüft den Wert gegen den deklarierten
    /// Bereich und hängt die Invocation an den Puffer an.
    pub fn emit(
        &self,
        out: &mut CommandScript,
        device: &str,
        command: &str,
        value: i32,
        class: DelayClass,
    ) -> Result<(), ScriptError> {
        self.emit_with_delay(out, device, command, value, self.delays.ms(class))
    }

    /// Wie [`emit`](Self::emit), aber mit expliziter Wartezeit
    /// (Transaktions-Marker laufen ohne Delay).
    pub fn emit_with_delay(
        &self,
        out: &mut CommandScript,
        device: &str,
        command: &str,
        value: i32,
        delay_ms: u32,
    ) -> Result<(), ScriptError> {
        let resolved = self.registry.resolve(device, command)?;

        if !resolved.range.contains(value) {
            return Err(ScriptError::ValueOutOfRange {
                device: device.to_string(),
                command: command.to_string(),
                value,
                min: resolved.range.min,
                max: resolved.range.max,
            });
        }

        out.push(CommandInvocation {
            device_id: resolved.device_id,
            command_id: resolved.command_id,
            value,
            delay_ms,
        });

        Ok(())
    }
}

/// Ein Builder kompiliert genau ein Konfigurations-Subsystem.
///
/// Builder mutieren ausschließlich den Ausgabe-Puffer, nie das Profil.
/// Felder im Auslieferungszustand werden übersprungen; jeder Builder
/// schließt einen geöffneten Menü-Kontext selbst wieder, damit ein
/// übersprungenes Feld das Gerät nie in einem mehrdeutigen Zustand
/// zurücklässt.
pub trait ScriptBuilder {
    /// Name für Log-Ausgaben.
    fn name(&self) -> &'static str;

    /// Hängt die Invocations des Subsystems an den Puffer an.
    fn build(
        &self,
        profile: &DtcProfile,
        ctx: &BuildContext,
        out: &mut CommandScript,
    ) -> Result<(), ScriptError>;
}

/// Emittiert den Transaktions-Begin-Marker.
pub struct SetupBuilder;

impl ScriptBuilder for SetupBuilder {
    fn name(&self) -> &'static str {
        "setup"
    }

    fn build(
        &self,
        _profile: &DtcProfile,
        ctx: &BuildContext,
        out: &mut CommandScript,
    ) -> Result<(), ScriptError> {
        ctx.emit_with_delay(out, SCRIPT_DEVICE, SCRIPT_BEGIN, 0, 0)
    }
}

/// Emittiert den Transaktions-End-Marker.
pub struct TeardownBuilder;

impl ScriptBuilder for TeardownBuilder {
    fn name(&self) -> &'static str {
        "teardown"
    }

    fn build(
        &self,
        _profile: &DtcProfile,
        ctx: &BuildContext,
        out: &mut CommandScript,
    ) -> Result<(), ScriptError> {
        ctx.emit_with_delay(out, SCRIPT_DEVICE, SCRIPT_END, 0, 0)
    }
}

/// Kompiliert das gesamte Profil in ein Command-Script.
///
/// Feste Subsystem-Reihenfolge: Routen, Funkgeräte, CM-Programme.
/// Bei jedem Fehler wird abgebrochen und kein Script zurückgegeben —
/// Teil-Scripts werden nie versendet.
pub fn compile_profile(
    profile: &DtcProfile,
    ctx: &BuildContext,
) -> Result<CommandScript, ScriptError> {
    let mut builders: Vec<Box<dyn ScriptBuilder>> = vec![Box::new(SetupBuilder)];

    for route in &profile.routes {
        builders.push(Box::new(NavPointBuilder::new(route.tag.clone())));
    }
    builders.push(Box::new(RadioBuilder::comm1()));
    builders.push(Box::new(RadioBuilder::comm2()));
    for slot in 1..=profile.cm_programs.len() {
        builders.push(Box::new(CmProgramBuilder::new(slot)));
    }
    builders.push(Box::new(TeardownBuilder));

    let mut script = CommandScript::new();
    for builder in &builders {
        let before = script.len();
        builder.build(profile, ctx, &mut script)?;
        log::debug!(
            "Builder '{}': {} Invocations",
            builder.name(),
            script.len() - before
        );
    }

    Ok(script)
}
