//! Builder für ein einzelnes Gegenmaßnahmen-Programm.

use crate::core::DtcProfile;
use crate::script::{BuildContext, CommandScript, DelayClass, ScriptBuilder, ScriptError};

/// Kompiliert einen Programm-Slot des CMDS-Panels.
///
/// Ein Builder pro Programm: Slots im Auslieferungszustand werden
/// komplett übersprungen, aktive Programme immer vollständig geschrieben
/// und mit `SAVE` abgeschlossen.
pub struct CmProgramBuilder {
    /// 1-basierter Programm-Slot
    slot: usize,
}

impl CmProgramBuilder {
    /// Builder für den übergebenen Slot (1-basiert).
    pub fn new(slot: usize) -> Self {
        Self { slot }
    }
}

impl ScriptBuilder for CmProgramBuilder {
    fn name(&self) -> &'static str {
        "countermeasures"
    }

    fn build(
        &self,
        profile: &DtcProfile,
        ctx: &BuildContext,
        out: &mut CommandScript,
    ) -> Result<(), ScriptError> {
        let Some(program) = self.slot.checked_sub(1).and_then(|i| profile.cm_programs.get(i))
        else {
            return Ok(());
        };

        if program.is_default() {
            return Ok(());
        }

        ctx.emit(
            out,
            "CMDS",
            "PROG_SELECT",
            self.slot as i32,
            DelayClass::MenuOpen,
        )?;
        ctx.emit(
            out,
            "CMDS",
            "CHAFF_QTY",
            program.chaff as i32,
            DelayClass::EnterValue,
        )?;
        ctx.emit(
            out,
            "CMDS",
            "FLARE_QTY",
            program.flare as i32,
            DelayClass::EnterValue,
        )?;
        ctx.emit(
            out,
            "CMDS",
            "INTERVAL",
            program.interval_hundredths as i32,
            DelayClass::EnterValue,
        )?;
        ctx.emit(
            out,
            "CMDS",
            "REPEAT",
            program.repeat as i32,
            DelayClass::EnterValue,
        )?;
        ctx.emit(out, "CMDS", "SAVE", 1, DelayClass::Confirm)?;

        Ok(())
    }
}
