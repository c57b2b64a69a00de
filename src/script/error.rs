//! Strukturelle Fehler der Script-Kompilierung.
//!
//! Diese Fehler zeigen eine Unstimmigkeit zwischen Register und Builder
//! bzw. einen Wert außerhalb des Kommando-Bereichs an. Sie brechen die
//! gesamte Kompilierung ab; ein Teil-Script wird nie versendet.

/// Fehler beim Auflösen oder Emittieren eines Kommandos.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    /// Gerätename existiert nicht im Register (Register/Builder-Mismatch).
    #[error("Unbekanntes Gerät '{device}' im Kommando-Register")]
    UnknownDevice {
        /// Angefragter Gerätename
        device: String,
    },

    /// Kommandoname existiert nicht am Gerät.
    #[error("Unbekanntes Kommando '{device}/{command}'")]
    UnknownCommand {
        /// Gerätename
        device: String,
        /// Angefragter Kommandoname
        command: String,
    },

    /// Wert liegt außerhalb des deklarierten Bereichs des Kommandos.
    #[error("Wert {value} außerhalb [{min}, {max}] für '{device}/{command}'")]
    ValueOutOfRange {
        /// Gerätename
        device: String,
        /// Kommandoname
        command: String,
        /// Abgelehnter Wert
        value: i32,
        /// Untere Bereichsgrenze
        min: i32,
        /// Obere Bereichsgrenze
        max: i32,
    },

    /// Builder referenziert eine Route, die das Profil nicht enthält.
    #[error("Route '{tag}' existiert nicht im Profil")]
    UnknownRoute {
        /// Angefragter Routen-Tag
        tag: String,
    },
}
