//! DTC-Profil: Container für alle Konfigurations-Subsysteme.
//!
//! Ein Profil bündelt Routen, Funkgeräte-Presets und
//! Gegenmaßnahmen-Programme für einen Luftfahrzeug-Typ und wird als
//! JSON-Datei gespeichert.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{Airframe, NavPointList};

/// Anzahl der Preset-Kanäle pro Funkgerät.
pub const RADIO_PRESET_COUNT: usize = 20;
/// Anzahl der Gegenmaßnahmen-Programme.
pub const CM_PROGRAM_COUNT: usize = 6;
/// Tag der Standard-Route.
pub const PRIMARY_ROUTE_TAG: &str = "Primary";

/// Preset-Tabelle eines Funkgeräts. `None` = Kanal nicht konfiguriert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadioTable {
    /// Frequenzen in MHz, Index = Kanal - 1
    presets: Vec<Option<f64>>,
}

impl RadioTable {
    /// Erstellt eine leere Preset-Tabelle.
    pub fn new() -> Self {
        Self {
            presets: vec![None; RADIO_PRESET_COUNT],
        }
    }

    /// Frequenz eines Kanals (1-basiert).
    pub fn preset(&self, channel: usize) -> Option<f64> {
        channel
            .checked_sub(1)
            .and_then(|i| self.presets.get(i))
            .copied()
            .flatten()
    }

    /// Setzt die Frequenz eines Kanals (1-basiert). `None` löscht den Kanal.
    pub fn set_preset(&mut self, channel: usize, frequency_mhz: Option<f64>) {
        if let Some(slot) = channel.checked_sub(1).and_then(|i| self.presets.get_mut(i)) {
            *slot = frequency_mhz;
        }
    }

    /// Alle konfigurierten Kanäle als `(Kanal, MHz)`-Paare in Kanal-Reihenfolge.
    pub fn configured(&self) -> Vec<(usize, f64)> {
        self.presets
            .iter()
            .enumerate()
            .filter_map(|(i, f)| f.map(|mhz| (i + 1, mhz)))
            .collect()
    }

    /// Gibt `true` zurück, wenn kein Kanal konfiguriert ist.
    pub fn is_empty(&self) -> bool {
        self.presets.iter().all(Option::is_none)
    }
}

impl Default for RadioTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Auswahl eines der beiden Funkgeräte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadioSlot {
    /// Primäres Funkgerät
    Comm1,
    /// Sekundäres Funkgerät
    Comm2,
}

/// Ein Gegenmaßnahmen-Programm (Chaff/Flare).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CmProgram {
    /// Chaff-Anzahl pro Auslösung
    pub chaff: u32,
    /// Flare-Anzahl pro Auslösung
    pub flare: u32,
    /// Intervall in Hundertstel-Sekunden
    pub interval_hundredths: u32,
    /// Wiederholungen pro Programmlauf
    pub repeat: u32,
}

impl CmProgram {
    /// Gibt `true` zurück, wenn das Programm dem Auslieferungszustand
    /// entspricht und beim Upload übersprungen wird.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

impl Default for CmProgram {
    fn default() -> Self {
        Self {
            chaff: 0,
            flare: 0,
            interval_hundredths: 100,
            repeat: 1,
        }
    }
}

/// Vollständiges DTC-Profil eines Luftfahrzeugs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DtcProfile {
    /// Luftfahrzeug-Typ, für den das Profil gebaut wurde
    pub airframe: Airframe,
    /// Routen, eine Punktliste pro Tag
    pub routes: Vec<NavPointList>,
    /// Preset-Tabelle COMM1
    pub comm1: RadioTable,
    /// Preset-Tabelle COMM2
    pub comm2: RadioTable,
    /// Gegenmaßnahmen-Programme (Slots 1..=6)
    pub cm_programs: Vec<CmProgram>,
}

impl DtcProfile {
    /// Erstellt ein leeres Profil mit der Standard-Route.
    pub fn new(airframe: Airframe, start_number: u32) -> Self {
        Self {
            airframe,
            routes: vec![NavPointList::new(PRIMARY_ROUTE_TAG, start_number)],
            comm1: RadioTable::new(),
            comm2: RadioTable::new(),
            cm_programs: vec![CmProgram::default(); CM_PROGRAM_COUNT],
        }
    }

    /// Route per Tag.
    pub fn route(&self, tag: &str) -> Option<&NavPointList> {
        self.routes.iter().find(|r| r.tag == tag)
    }

    /// Mutable Route per Tag.
    pub fn route_mut(&mut self, tag: &str) -> Option<&mut NavPointList> {
        self.routes.iter_mut().find(|r| r.tag == tag)
    }

    /// Preset-Tabelle eines Funkgeräts.
    pub fn radio(&self, slot: RadioSlot) -> &RadioTable {
        match slot {
            RadioSlot::Comm1 => &self.comm1,
            RadioSlot::Comm2 => &self.comm2,
        }
    }

    /// Mutable Preset-Tabelle eines Funkgeräts.
    pub fn radio_mut(&mut self, slot: RadioSlot) -> &mut RadioTable {
        match slot {
            RadioSlot::Comm1 => &mut self.comm1,
            RadioSlot::Comm2 => &mut self.comm2,
        }
    }

    /// Lädt ein Profil aus einer JSON-Datei.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let profile: DtcProfile = serde_json::from_str(&content)?;
        log::info!("Profil geladen aus: {}", path.display());
        Ok(profile)
    }

    /// Speichert das Profil als JSON-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Profil gespeichert nach: {}", path.display());
        Ok(())
    }
}

/// Persistenz-Schnittstelle für die Listen-Seite des Mirror-Protokolls.
///
/// Nach jedem Renumbering wird die autoritative Konfiguration über diese
/// Schnittstelle gesichert, bevor ein Verb über den Mirror emittiert wird.
pub trait ProfileStore {
    /// Sichert das Profil nach einer Änderung an der Route `tag`.
    fn save(&mut self, profile: &DtcProfile, tag: &str) -> anyhow::Result<()>;
}

/// Standard-Store: schreibt das Profil als JSON an den bekannten Pfad.
/// Ohne Pfad (ungespeichertes Profil) ist `save` ein No-op.
#[derive(Debug, Default)]
pub struct JsonProfileStore {
    /// Zielpfad; None solange das Profil noch nie gespeichert wurde
    pub path: Option<PathBuf>,
}

impl ProfileStore for JsonProfileStore {
    fn save(&mut self, profile: &DtcProfile, tag: &str) -> anyhow::Result<()> {
        match &self.path {
            Some(path) => {
                profile.save_to_file(path)?;
                log::debug!("Route '{}' gesichert", tag);
                Ok(())
            }
            None => {
                log::debug!("Route '{}' geändert, Profil noch ohne Pfad", tag);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radio_table_channel_access_is_one_based() {
        let mut table = RadioTable::new();
        table.set_preset(1, Some(251.0));
        table.set_preset(20, Some(305.5));
        table.set_preset(0, Some(999.0));

        assert_eq!(table.preset(1), Some(251.0));
        assert_eq!(table.preset(20), Some(305.5));
        assert_eq!(table.configured(), vec![(1, 251.0), (20, 305.5)]);
    }

    #[test]
    fn default_cm_program_is_skippable() {
        assert!(CmProgram::default().is_default());

        let custom = CmProgram {
            chaff: 2,
            ..CmProgram::default()
        };
        assert!(!custom.is_default());
    }

    #[test]
    fn new_profile_has_primary_route() {
        let profile = DtcProfile::new(Airframe::Viper, 1);

        assert!(profile.route(PRIMARY_ROUTE_TAG).is_some());
        assert!(profile.route("Unbekannt").is_none());
        assert_eq!(profile.cm_programs.len(), CM_PROGRAM_COUNT);
    }
}
