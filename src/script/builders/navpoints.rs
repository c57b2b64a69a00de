//! Builder für die Navigationspunkte einer Route.

use crate::core::DtcProfile;
use crate::script::{BuildContext, CommandScript, DelayClass, ScriptBuilder, ScriptError};

/// Anzahl der Invocations pro vollständigem Punkt (mit Höhe).
pub const INVOCATIONS_PER_POINT: usize = 9;

/// Kompiliert eine Punktliste in die Cockpit-Eingabesequenz.
///
/// Der Simulator bietet keinen wahlfreien Zugriff: jeder Punkt wird über
/// denselben Menüpfad eingegeben, den ein Pilot klicken würde — Seite
/// öffnen, Nummer anwählen, Koordinaten ins Scratchpad, bestätigen,
/// zurück zur Ruhelage.
pub struct NavPointBuilder {
    route_tag: String,
}

impl NavPointBuilder {
    /// Builder für die Route mit dem übergebenen Tag.
    pub fn new(route_tag: impl Into<String>) -> Self {
        Self {
            route_tag: route_tag.into(),
        }
    }
}

impl ScriptBuilder for NavPointBuilder {
    fn name(&self) -> &'static str {
        "navpoints"
    }

    fn build(
        &self,
        profile: &DtcProfile,
        ctx: &BuildContext,
        out: &mut CommandScript,
    ) -> Result<(), ScriptError> {
        let route = profile
            .route(&self.route_tag)
            .ok_or_else(|| ScriptError::UnknownRoute {
                tag: self.route_tag.clone(),
            })?;

        for point in route.points() {
            ctx.emit(out, "UFC", "NAV_PAGE", 1, DelayClass::MenuOpen)?;
            ctx.emit(
                out,
                "UFC",
                "STPT_SELECT",
                point.number as i32,
                DelayClass::ListNavigate,
            )?;

            ctx.emit(
                out,
                "UFC",
                "SCRATCH_LAT",
                point.coord.lat_scaled(),
                DelayClass::EnterValue,
            )?;
            ctx.emit(out, "UFC", "ENTR", 1, DelayClass::Confirm)?;

            ctx.emit(
                out,
                "UFC",
                "SCRATCH_LON",
                point.coord.lon_scaled(),
                DelayClass::EnterValue,
            )?;
            ctx.emit(out, "UFC", "ENTR", 1, DelayClass::Confirm)?;

            // Höhe ist optional; ohne Wert wird die Zeile übersprungen.
            if let Some(elevation) = point.elevation_ft {
                ctx.emit(out, "UFC", "SCRATCH_ELEV", elevation, DelayClass::EnterValue)?;
                ctx.emit(out, "UFC", "ENTR", 1, DelayClass::Confirm)?;
            }

            // Zurück zur Ruhelage, damit der nächste Punkt (oder Builder)
            // auf einem definierten Zustand aufsetzt.
            ctx.emit(out, "UFC", "RTN", 1, DelayClass::SwitchFlip)?;
        }

        Ok(())
    }
}
