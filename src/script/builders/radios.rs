//! Builder für die Preset-Tabellen der Funkgeräte.

use crate::core::{DtcProfile, RadioTable};
use crate::script::{BuildContext, CommandScript, DelayClass, ScriptBuilder, ScriptError};

/// Kompiliert die Preset-Tabelle eines Funkgeräts.
///
/// Nicht konfigurierte Kanäle werden übersprungen. Ist kein einziger
/// Kanal gesetzt, emittiert der Builder nichts; andernfalls wird das
/// Preset-Menü geöffnet und am Ende wieder geschlossen.
pub struct RadioBuilder {
    device: &'static str,
}

impl RadioBuilder {
    /// Builder für COMM1.
    pub fn comm1() -> Self {
        Self { device: "COMM1" }
    }

    /// Builder für COMM2.
    pub fn comm2() -> Self {
        Self { device: "COMM2" }
    }

    fn table<'a>(&self, profile: &'a DtcProfile) -> &'a RadioTable {
        match self.device {
            "COMM1" => &profile.comm1,
            _ => &profile.comm2,
        }
    }
}

impl ScriptBuilder for RadioBuilder {
    fn name(&self) -> &'static str {
        "radios"
    }

    fn build(
        &self,
        profile: &DtcProfile,
        ctx: &BuildContext,
        out: &mut CommandScript,
    ) -> Result<(), ScriptError> {
        let table = self.table(profile);
        if table.is_empty() {
            return Ok(());
        }

        ctx.emit(out, self.device, "MENU", 1, DelayClass::MenuOpen)?;

        for (channel, frequency_mhz) in table.configured() {
            let khz = (frequency_mhz * 1000.0).round() as i32;

            ctx.emit(
                out,
                self.device,
                "PRESET_SELECT",
                channel as i32,
                DelayClass::ListNavigate,
            )?;
            ctx.emit(out, self.device, "FREQ_SET", khz, DelayClass::EnterValue)?;
            ctx.emit(out, self.device, "LOAD", 1, DelayClass::Confirm)?;
        }

        // Menü wieder schließen, Gerät bleibt in Ruhelage.
        ctx.emit(out, self.device, "MENU", 0, DelayClass::SwitchFlip)?;

        Ok(())
    }
}
