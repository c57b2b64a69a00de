//! Zentrale Konfiguration für den DTC-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Simulator-Endpunkte ─────────────────────────────────────────────

/// Host der Scripting-Bridge.
pub const SCRIPT_HOST: &str = "127.0.0.1";
/// TCP-Port der Scripting-Bridge.
pub const SCRIPT_PORT: u16 = 7778;
/// UDP-Port für Capture-Telemetrie.
pub const CAPTURE_PORT: u16 = 7779;

// ── Script-Timing ───────────────────────────────────────────────────

/// Globaler Delay-Multiplikator (1.0 = Tabellenwerte).
pub const DELAY_MULTIPLIER: f32 = 1.0;

// ── Routen ──────────────────────────────────────────────────────────

/// Startnummer für das Renumbering der Punktlisten.
pub const ROUTE_START_NUMBER: u32 = 1;
/// Obergrenze für Punkte, die eine Mehrfach-Capture anhängen darf.
pub const CAPTURE_APPEND_LIMIT: usize = 99;

// ── Karte ───────────────────────────────────────────────────────────

/// Pick-Radius in Screen-Pixeln.
pub const MAP_PICK_RADIUS_PX: f32 = 12.0;
/// Punktradius in Screen-Pixeln.
pub const MAP_POINT_RADIUS_PX: f32 = 5.0;
/// Standard-Zoom in Pixeln pro Grad.
pub const MAP_ZOOM_DEFAULT: f32 = 250.0;
/// Minimaler Zoom in Pixeln pro Grad.
pub const MAP_ZOOM_MIN: f32 = 20.0;
/// Maximaler Zoom in Pixeln pro Grad.
pub const MAP_ZOOM_MAX: f32 = 20_000.0;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const MAP_SCROLL_ZOOM_STEP: f32 = 1.1;
/// Farbe für Routen-Punkte (RGBA: Cyan).
pub const MAP_COLOR_NAVPOINT: [f32; 4] = [0.0, 0.8, 1.0, 1.0];
/// Farbe für selektierte Punkte (RGBA: Magenta).
pub const MAP_COLOR_SELECTED: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
/// Farbe für Core-POIs (RGBA: Grau).
pub const MAP_COLOR_POI: [f32; 4] = [0.7, 0.7, 0.7, 1.0];
/// Farbe für die Routen-Linie (RGBA: Grün).
pub const MAP_COLOR_ROUTE_LINE: [f32; 4] = [0.2, 0.9, 0.2, 1.0];

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `dcs_dtc_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Simulator ───────────────────────────────────────────────
    /// Host der Scripting-Bridge
    pub script_host: String,
    /// TCP-Port der Scripting-Bridge
    pub script_port: u16,
    /// UDP-Port für Capture-Telemetrie
    pub capture_port: u16,
    /// Globaler Delay-Multiplikator für Script-Invocations
    pub delay_multiplier: f32,

    // ── Routen ──────────────────────────────────────────────────
    /// Startnummer für das Renumbering
    pub route_start_number: u32,
    /// Obergrenze für Punkte pro Mehrfach-Capture
    #[serde(default = "default_capture_append_limit")]
    pub capture_append_limit: usize,

    // ── Karte ───────────────────────────────────────────────────
    /// Schauplatz für die POI-Overlays
    pub theater: String,
    /// Pick-Radius für Klick-Selektion in Screen-Pixeln
    pub map_pick_radius_px: f32,
    /// Punktradius in Screen-Pixeln
    pub map_point_radius_px: f32,
    /// Farbe für Routen-Punkte
    pub map_color_navpoint: [f32; 4],
    /// Farbe für selektierte Punkte
    pub map_color_selected: [f32; 4],
    /// Farbe für Core-POIs
    pub map_color_poi: [f32; 4],
    /// Farbe für die Routen-Linie
    pub map_color_route_line: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            script_host: SCRIPT_HOST.to_string(),
            script_port: SCRIPT_PORT,
            capture_port: CAPTURE_PORT,
            delay_multiplier: DELAY_MULTIPLIER,

            route_start_number: ROUTE_START_NUMBER,
            capture_append_limit: CAPTURE_APPEND_LIMIT,

            theater: "Caucasus".to_string(),
            map_pick_radius_px: MAP_PICK_RADIUS_PX,
            map_point_radius_px: MAP_POINT_RADIUS_PX,
            map_color_navpoint: MAP_COLOR_NAVPOINT,
            map_color_selected: MAP_COLOR_SELECTED,
            map_color_poi: MAP_COLOR_POI,
            map_color_route_line: MAP_COLOR_ROUTE_LINE,
        }
    }
}

/// Serde-Default für `capture_append_limit` (Abwärtskompatibilität).
fn default_capture_append_limit() -> usize {
    CAPTURE_APPEND_LIMIT
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("dcs_dtc_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("dcs_dtc_editor.toml")
    }
}
