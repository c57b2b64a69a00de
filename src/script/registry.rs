//! Kommando-Register: statische Geräte/Kommando-Tabelle pro Luftfahrzeug.
//!
//! Das Register wird einmal beim Wechsel des Luftfahrzeug-Typs gebaut und
//! danach nie mutiert. Die Auflösung von Namen zu Ids ist rein und ohne
//! Seiteneffekte; ein unbekannter Name ist ein Register/Builder-Mismatch
//! und bricht die Kompilierung des Subsystems hart ab.

use indexmap::IndexMap;

use crate::core::Airframe;

use super::ScriptError;

/// Pseudo-Gerät für die Transaktions-Marker des Script-Interpreters.
pub const SCRIPT_DEVICE: &str = "SCRIPT";
/// Begin-Marker-Kommando.
pub const SCRIPT_BEGIN: &str = "BEGIN";
/// End-Marker-Kommando.
pub const SCRIPT_END: &str = "END";

/// Zulässiger Wertebereich eines Kommandos (inklusive Grenzen).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRange {
    /// Untere Grenze
    pub min: i32,
    /// Obere Grenze
    pub max: i32,
}

impl ValueRange {
    /// Erstellt einen Bereich.
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Bereich für einen einfachen Taster.
    pub const fn push_button() -> Self {
        Self::new(0, 1)
    }

    /// Gibt `true` zurück, wenn der Wert im Bereich liegt.
    pub fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Ein benanntes, setzbares Kommando eines Geräts.
#[derive(Debug, Clone)]
pub struct Command {
    /// Geräte-relative Kommando-Id
    pub id: u32,
    /// Symbolischer Name
    pub name: String,
    /// Zulässiger Wertebereich
    pub range: ValueRange,
}

/// Ein adressierbares Cockpit-Panel oder -Subsystem.
#[derive(Debug, Clone)]
pub struct Device {
    /// Simulator-definierte Geräte-Id
    pub id: u32,
    /// Anzeigename
    pub name: String,
    commands: IndexMap<String, Command>,
}

impl Device {
    fn new(id: u32, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            commands: IndexMap::new(),
        }
    }

    /// Registriert ein Kommando am Gerät (nur während des Register-Aufbaus).
    pub fn add_command(&mut self, id: u32, name: &str, range: ValueRange) -> &mut Self {
        self.commands
            .insert(name.to_string(), Command { id, name: name.to_string(), range });
        self
    }

    /// Kommando per Name.
    pub fn command(&self, name: &str) -> Option<&Command> {
        self.commands.get(name)
    }
}

/// Aufgelöstes Kommando für die Script-Emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedCommand {
    /// Geräte-Id
    pub device_id: u32,
    /// Kommando-Id
    pub command_id: u32,
    /// Wertebereich des Kommandos
    pub range: ValueRange,
}

/// Statische Geräte-Tabelle eines Luftfahrzeug-Typs.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    airframe: Airframe,
    devices: IndexMap<String, Device>,
}

impl CommandRegistry {
    fn new(airframe: Airframe) -> Self {
        Self {
            airframe,
            devices: IndexMap::new(),
        }
    }

    /// Luftfahrzeug-Typ, für den das Register gebaut wurde.
    pub fn airframe(&self) -> Airframe {
        self.airframe
    }

    /// Registriert ein Gerät und gibt es zum Befüllen zurück.
    pub fn register_device(&mut self, id: u32, name: &str) -> &mut Device {
        self.devices
            .entry(name.to_string())
            .or_insert_with(|| Device::new(id, name))
    }

    /// Gerät per Name.
    pub fn device(&self, name: &str) -> Option<&Device> {
        self.devices.get(name)
    }

    /// Löst Geräte- und Kommandoname zu Ids und Wertebereich auf.
    ///
    /// Rein und deterministisch; unbekannte Namen sind ein harter
    /// Konfigurationsfehler.
    pub fn resolve(&self, device: &str, command: &str) -> Result<ResolvedCommand, ScriptError> {
        let dev = self
            .devices
            .get(device)
            .ok_or_else(|| ScriptError::UnknownDevice {
                device: device.to_string(),
            })?;

        let cmd = dev.command(command).ok_or_else(|| ScriptError::UnknownCommand {
            device: device.to_string(),
            command: command.to_string(),
        })?;

        Ok(ResolvedCommand {
            device_id: dev.id,
            command_id: cmd.id,
            range: cmd.range,
        })
    }
}

/// Baut das Register für den übergebenen Luftfahrzeug-Typ.
pub fn registry_for(airframe: Airframe) -> CommandRegistry {
    let mut registry = CommandRegistry::new(airframe);

    // Transaktions-Marker (identisch für alle Typen)
    registry
        .register_device(0, SCRIPT_DEVICE)
        .add_command(0, SCRIPT_BEGIN, ValueRange::new(0, 0))
        .add_command(1, SCRIPT_END, ValueRange::new(0, 0));

    match airframe {
        Airframe::Viper => build_viper(&mut registry),
        Airframe::Hornet => build_hornet(&mut registry),
    }

    registry
}

fn build_viper(registry: &mut CommandRegistry) {
    registry
        .register_device(17, "UFC")
        .add_command(3001, "NAV_PAGE", ValueRange::push_button())
        .add_command(3002, "STPT_SELECT", ValueRange::new(1, 699))
        .add_command(3003, "SCRATCH_LAT", ValueRange::new(-900_000, 900_000))
        .add_command(3004, "SCRATCH_LON", ValueRange::new(-1_800_000, 1_800_000))
        .add_command(3005, "SCRATCH_ELEV", ValueRange::new(-1_500, 80_000))
        .add_command(3006, "ENTR", ValueRange::push_button())
        .add_command(3007, "RTN", ValueRange::push_button());

    registry
        .register_device(38, "COMM1")
        .add_command(3000, "MENU", ValueRange::push_button())
        .add_command(3001, "PRESET_SELECT", ValueRange::new(1, 20))
        .add_command(3002, "FREQ_SET", ValueRange::new(100_000, 399_975))
        .add_command(3003, "LOAD", ValueRange::push_button());

    registry
        .register_device(39, "COMM2")
        .add_command(3000, "MENU", ValueRange::push_button())
        .add_command(3001, "PRESET_SELECT", ValueRange::new(1, 20))
        .add_command(3002, "FREQ_SET", ValueRange::new(100_000, 399_975))
        .add_command(3003, "LOAD", ValueRange::push_button());

    registry
        .register_device(32, "CMDS")
        .add_command(3001, "PROG_SELECT", ValueRange::new(1, 6))
        .add_command(3002, "CHAFF_QTY", ValueRange::new(0, 99))
        .add_command(3003, "FLARE_QTY", ValueRange::new(0, 99))
        .add_command(3004, "INTERVAL", ValueRange::new(1, 500))
        .add_command(3005, "REPEAT", ValueRange::new(1, 99))
        .add_command(3006, "SAVE", ValueRange::push_button());
}

fn build_hornet(registry: &mut CommandRegistry) {
    registry
        .register_device(23, "UFC")
        .add_command(3001, "NAV_PAGE", ValueRange::push_button())
        .add_command(3002, "STPT_SELECT", ValueRange::new(1, 59))
        .add_command(3003, "SCRATCH_LAT", ValueRange::new(-900_000, 900_000))
        .add_command(3004, "SCRATCH_LON", ValueRange::new(-1_800_000, 1_800_000))
        .add_command(3005, "SCRATCH_ELEV", ValueRange::new(-1_500, 80_000))
        .add_command(3006, "ENTR", ValueRange::push_button())
        .add_command(3007, "RTN", ValueRange::push_button());

    registry
        .register_device(37, "COMM1")
        .add_command(3000, "MENU", ValueRange::push_button())
        .add_command(3001, "PRESET_SELECT", ValueRange::new(1, 20))
        .add_command(3002, "FREQ_SET", ValueRange::new(100_000, 399_975))
        .add_command(3003, "LOAD", ValueRange::push_button());

    registry
        .register_device(40, "COMM2")
        .add_command(3000, "MENU", ValueRange::push_button())
        .add_command(3001, "PRESET_SELECT", ValueRange::new(1, 20))
        .add_command(3002, "FREQ_SET", ValueRange::new(100_000, 399_975))
        .add_command(3003, "LOAD", ValueRange::push_button());

    registry
        .register_device(54, "CMDS")
        .add_command(3001, "PROG_SELECT", ValueRange::new(1, 6))
        .add_command(3002, "CHAFF_QTY", ValueRange::new(0, 99))
        .add_command(3003, "FLARE_QTY", ValueRange::new(0, 99))
        .add_command(3004, "INTERVAL", ValueRange::new(1, 500))
        .add_command(3005, "REPEAT", ValueRange::new(1, 99))
        .add_command(3006, "SAVE", ValueRange::push_button());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_known_command() {
        let registry = registry_for(Airframe::Viper);
        let resolved = registry.resolve("UFC", "STPT_SELECT").expect("bekannt");

        assert_eq!(resolved.device_id, 17);
        assert_eq!(resolved.command_id, 3002);
        assert!(resolved.range.contains(1));
        assert!(!resolved.range.contains(700));
    }

    #[test]
    fn resolve_unknown_device_fails() {
        let registry = registry_for(Airframe::Viper);
        let err = registry.resolve("RADAR", "POWER").unwrap_err();

        assert!(matches!(err, ScriptError::UnknownDevice { .. }));
    }

    #[test]
    fn resolve_unknown_command_fails() {
        let registry = registry_for(Airframe::Hornet);
        let err = registry.resolve("UFC", "EJECT").unwrap_err();

        assert!(matches!(err, ScriptError::UnknownCommand { .. }));
    }

    #[test]
    fn airframes_differ_in_device_ids() {
        let viper = registry_for(Airframe::Viper);
        let hornet = registry_for(Airframe::Hornet);

        assert_ne!(
            viper.resolve("UFC", "ENTR").unwrap().device_id,
            hornet.resolve("UFC", "ENTR").unwrap().device_id
        );
    }
}
