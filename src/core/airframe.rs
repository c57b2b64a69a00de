//! Luftfahrzeug-Typen und expliziter Simulator-Kontext.

use serde::{Deserialize, Serialize};

/// Unterstützte Luftfahrzeug-Typen. Pro Typ existiert ein eigenes
/// Kommando-Register und eine eigene Delay-Tabelle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Airframe {
    /// F-16C
    #[default]
    Viper,
    /// F/A-18C
    Hornet,
}

impl Airframe {
    /// Anzeigename für Menü und Statuszeile.
    pub fn display_name(&self) -> &'static str {
        match self {
            Airframe::Viper => "F-16C Viper",
            Airframe::Hornet => "F/A-18C Hornet",
        }
    }

    /// Alle wählbaren Typen in Menü-Reihenfolge.
    pub fn all() -> [Airframe; 2] {
        [Airframe::Viper, Airframe::Hornet]
    }
}

/// Expliziter Kontext statt globalem App-Singleton: trägt den aktiven
/// Luftfahrzeug-Typ und den zuletzt beobachteten Simulator-Status.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimContext {
    /// Aktiver Luftfahrzeug-Typ
    pub airframe: Airframe,
    /// Ob der letzte Kontakt zum Simulator erfolgreich war
    pub sim_reachable: bool,
}

impl SimContext {
    /// Erstellt einen Kontext für den übergebenen Typ.
    pub fn new(airframe: Airframe) -> Self {
        Self {
            airframe,
            sim_reachable: false,
        }
    }
}
