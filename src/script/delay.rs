//! Delay-Vokabular für Script-Invocations.
//!
//! Jede Invocation-Kategorie hat eine eigene Grundwartezeit (ein Menü
//! braucht länger zum Aufklappen als ein Kippschalter). Die Grundwerte
//! sind pro Luftfahrzeug-Typ hinterlegt und werden mit einem globalen,
//! benutzergesteuerten Multiplikator skaliert.

use crate::core::Airframe;

/// Kategorie einer Invocation für die Delay-Wahl.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayClass {
    /// Menü/Seite öffnen
    MenuOpen,
    /// Durch Listen/Einträge navigieren
    ListNavigate,
    /// Wert ins Scratchpad eingeben
    EnterValue,
    /// Eingabe bestätigen
    Confirm,
    /// Diskreten Schalter umlegen
    SwitchFlip,
}

/// Grundwartezeiten eines Luftfahrzeug-Typs in Millisekunden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayTable {
    /// Menü/Seite öffnen
    pub menu_open_ms: u32,
    /// Listen-Navigation
    pub list_navigate_ms: u32,
    /// Werteingabe
    pub enter_value_ms: u32,
    /// Bestätigung
    pub confirm_ms: u32,
    /// Schalter
    pub switch_flip_ms: u32,
}

impl DelayTable {
    /// Grundwert für eine Kategorie.
    pub fn base_ms(&self, class: DelayClass) -> u32 {
        match class {
            DelayClass::MenuOpen => self.menu_open_ms,
            DelayClass::ListNavigate => self.list_navigate_ms,
            DelayClass::EnterValue => self.enter_value_ms,
            DelayClass::Confirm => self.confirm_ms,
            DelayClass::SwitchFlip => self.switch_flip_ms,
        }
    }
}

/// Delay-Tabelle des übergebenen Luftfahrzeug-Typs.
pub fn table_for(airframe: Airframe) -> DelayTable {
    match airframe {
        Airframe::Viper => DelayTable {
            menu_open_ms: 300,
            list_navigate_ms: 80,
            enter_value_ms: 120,
            confirm_ms: 150,
            switch_flip_ms: 60,
        },
        Airframe::Hornet => DelayTable {
            menu_open_ms: 350,
            list_navigate_ms: 100,
            enter_value_ms: 140,
            confirm_ms: 160,
            switch_flip_ms: 60,
        },
    }
}

/// Delay-Tabelle plus globaler Multiplikator.
#[derive(Debug, Clone, Copy)]
pub struct DelayPlan {
    table: DelayTable,
    multiplier: f32,
}

impl DelayPlan {
    /// Erstellt einen Plan. Der Multiplikator wird auf sinnvolle
    /// Grenzen geklemmt.
    pub fn new(table: DelayTable, multiplier: f32) -> Self {
        Self {
            table,
            multiplier: multiplier.clamp(0.1, 10.0),
        }
    }

    /// Plan für einen Luftfahrzeug-Typ.
    pub fn for_airframe(airframe: Airframe, multiplier: f32) -> Self {
        Self::new(table_for(airframe), multiplier)
    }

    /// Skalierte Wartezeit für eine Kategorie.
    pub fn ms(&self, class: DelayClass) -> u32 {
        (self.table.base_ms(class) as f32 * self.multiplier).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplier_scales_all_classes() {
        let plan = DelayPlan::for_airframe(Airframe::Viper, 2.0);

        assert_eq!(plan.ms(DelayClass::MenuOpen), 600);
        assert_eq!(plan.ms(DelayClass::ListNavigate), 160);
    }

    #[test]
    fn multiplier_is_clamped() {
        let plan = DelayPlan::for_airframe(Airframe::Viper, 0.0);

        // 0.0 wird auf 0.1 angehoben, Delays bleiben > 0
        assert!(plan.ms(DelayClass::Confirm) > 0);
    }

    #[test]
    fn airframes_have_distinct_tables() {
        assert_ne!(
            table_for(Airframe::Viper).menu_open_ms,
            table_for(Airframe::Hornet).menu_open_ms
        );
    }
}
