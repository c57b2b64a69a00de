//! Command-Script: geordnete, getimte Invocation-Folge mit Wire-Format.

/// Feld-Trenner innerhalb eines Records.
pub const FIELD_SEPARATOR: char = ',';
/// Record-Trenner im Wire-Format (letzter Trenner entfällt).
pub const RECORD_SEPARATOR: char = ';';

/// Eine konkrete Kommando-Ausführung im Script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandInvocation {
    /// Geräte-Id
    pub device_id: u32,
    /// Kommando-Id
    pub command_id: u32,
    /// Zu setzender Wert
    pub value: i32,
    /// Wartezeit nach der Ausführung in Millisekunden
    pub delay_ms: u32,
}

impl CommandInvocation {
    fn to_wire_record(self) -> String {
        format!(
            "{}{sep}{}{sep}{}{sep}{}",
            self.device_id,
            self.command_id,
            self.value,
            self.delay_ms,
            sep = FIELD_SEPARATOR
        )
    }
}

/// Write-once-Puffer einer Upload-Transaktion.
///
/// Wird in einem Durchlauf von den Buildern befüllt, an den Transport
/// übergeben und danach verworfen. Die Emissions-Reihenfolge ist eine
/// harte Korrektheitsanforderung: der Interpreter führt strikt
/// sequenziell aus.
#[derive(Debug, Clone, Default)]
pub struct CommandScript {
    invocations: Vec<CommandInvocation>,
}

impl CommandScript {
    /// Erstellt ein leeres Script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt eine Invocation ans Ende an.
    pub fn push(&mut self, invocation: CommandInvocation) {
        self.invocations.push(invocation);
    }

    /// Anzahl der Invocations.
    pub fn len(&self) -> usize {
        self.invocations.len()
    }

    /// Gibt `true` zurück, wenn das Script keine Invocations enthält.
    pub fn is_empty(&self) -> bool {
        self.invocations.is_empty()
    }

    /// Gibt `true` zurück, wenn das Script außer den beiden Markern
    /// nichts enthält. Solche Scripts werden nicht versendet.
    pub fn is_effectively_empty(&self) -> bool {
        self.invocations.len() <= 2
    }

    /// Read-only Sicht auf alle Invocations.
    pub fn invocations(&self) -> &[CommandInvocation] {
        &self.invocations
    }

    /// Serialisiert das Script als flachen Record-Strom:
    /// `deviceId,commandId,value,delayMs` je Record, Records mit `;`
    /// getrennt, ohne abschließenden Trenner und ohne Längen-Präfix.
    pub fn to_wire_string(&self) -> String {
        self.invocations
            .iter()
            .map(|inv| inv.to_wire_record())
            .collect::<Vec<_>>()
            .join(&RECORD_SEPARATOR.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format_is_flat_and_trimmed() {
        let mut script = CommandScript::new();
        script.push(CommandInvocation {
            device_id: 0,
            command_id: 0,
            value: 0,
            delay_ms: 0,
        });
        script.push(CommandInvocation {
            device_id: 17,
            command_id: 3002,
            value: 5,
            delay_ms: 80,
        });
        script.push(CommandInvocation {
            device_id: 0,
            command_id: 1,
            value: 0,
            delay_ms: 0,
        });

        assert_eq!(script.to_wire_string(), "0,0,0,0;17,3002,5,80;0,1,0,0");
    }

    #[test]
    fn negative_values_serialize_with_sign() {
        let mut script = CommandScript::new();
        script.push(CommandInvocation {
            device_id: 17,
            command_id: 3003,
            value: -123_456,
            delay_ms: 120,
        });

        assert_eq!(script.to_wire_string(), "17,3003,-123456,120");
    }

    #[test]
    fn marker_only_script_is_effectively_empty() {
        let mut script = CommandScript::new();
        script.push(CommandInvocation {
            device_id: 0,
            command_id: 0,
            value: 0,
            delay_ms: 0,
        });
        script.push(CommandInvocation {
            device_id: 0,
            command_id: 1,
            value: 0,
            delay_ms: 0,
        });

        assert!(script.is_effectively_empty());
        assert!(!script.is_empty());
    }
}
