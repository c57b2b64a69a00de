//! Capture-Kanal: Fan-out von Telemetrie-Samples an Abonnenten.
//!
//! Der Kanal läuft vollständig auf dem UI-Kontext; die Netzwerk-Seite
//! (UDP-Listener-Thread) liefert Batches über einen crossbeam-Kanal an,
//! die der Frame-Pump hier einspeist. Abonnenten sehen Samples damit
//! immer auf demselben Kontext wie ihren eigenen Zustand.

/// Ein Telemetrie-Sample aus dem Simulator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureSample {
    /// Breite in Grad
    pub latitude: f64,
    /// Länge in Grad
    pub longitude: f64,
    /// Höhe in Metern
    pub elevation_m: f64,
    /// `true` = eigene Position/Ziel des Spielers, `false` = angefragte
    /// Wegpunkt-Kopie
    pub is_ownship: bool,
}

/// Abo-Modus eines Abonnenten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureMode {
    /// Nur `sample[0]` des ersten Events konsumieren, danach automatisch
    /// abmelden
    Single,
    /// Alle Events konsumieren, bis der Abonnent explizit schließt
    Multiple,
}

/// Rückgabe eines Abonnenten nach einer Zustellung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureFlow {
    /// Abonniert bleiben
    Stay,
    /// Abo beenden (Selbst-Abmeldung während der Zustellung)
    Close,
}

/// Handle auf ein Abo, für die externe Abmeldung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureToken(u64);

type CaptureCallback = Box<dyn FnMut(&[CaptureSample]) -> CaptureFlow>;

struct CaptureSubscription {
    token: u64,
    mode: CaptureMode,
    callback: CaptureCallback,
}

/// Prozessweiter Verteilpunkt für Capture-Events.
///
/// Mehrere gleichzeitige Abonnenten sind erlaubt; Aufrufer halten ihr
/// Abo-Fenster eng (anmelden unmittelbar vor dem Capture-Dialog,
/// abmelden auf jedem Ausgang). Die Abonnenten-Liste verträgt
/// Abmeldungen während einer laufenden Zustellung über eine
/// Token-Schnappschuss-Iteration.
#[derive(Default)]
pub struct CaptureChannel {
    subscribers: Vec<CaptureSubscription>,
    next_token: u64,
}

impl CaptureChannel {
    /// Erstellt einen Kanal ohne Abonnenten.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert einen Abonnenten.
    pub fn subscribe(
        &mut self,
        mode: CaptureMode,
        callback: impl FnMut(&[CaptureSample]) -> CaptureFlow + 'static,
    ) -> CaptureToken {
        self.next_token += 1;
        let token = self.next_token;

        self.subscribers.push(CaptureSubscription {
            token,
            mode,
            callback: Box::new(callback),
        });

        log::debug!("Capture-Abo {} registriert ({:?})", token, mode);
        CaptureToken(token)
    }

    /// Entfernt ein Abo. Gibt `false` zurück, wenn es nicht (mehr)
    /// existiert — etwa weil ein Single-Abo sich bereits selbst
    /// abgemeldet hat.
    pub fn unsubscribe(&mut self, token: CaptureToken) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| s.token != token.0);

        let removed = self.subscribers.len() != before;
        if removed {
            log::debug!("Capture-Abo {} entfernt", token.0);
        }
        removed
    }

    /// Anzahl aktiver Abos.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Stellt ein Capture-Event an alle Abonnenten zu.
    ///
    /// Leere Events werden kommentarlos verworfen (der Simulator sendet
    /// gelegentlich Heartbeats ohne Daten). Single-Abos werden nach der
    /// ersten Zustellung automatisch entfernt.
    pub fn dispatch(&mut self, samples: &[CaptureSample]) {
        if samples.is_empty() {
            log::debug!("Leeres Capture-Event verworfen");
            return;
        }

        // Schnappschuss der Tokens: Callbacks dürfen Abos schließen,
        // ohne die laufende Iteration zu stören.
        let tokens: Vec<u64> = self.subscribers.iter().map(|s| s.token).collect();

        for token in tokens {
            let Some(pos) = self.subscribers.iter().position(|s| s.token == token) else {
                continue;
            };

            let flow = (self.subscribers[pos].callback)(samples);
            let auto_close = self.subscribers[pos].mode == CaptureMode::Single;

            if flow == CaptureFlow::Close || auto_close {
                self.subscribers.retain(|s| s.token != token);
                log::debug!("Capture-Abo {} geschlossen", token);
            }
        }
    }
}

/// Parst ein Capture-Datagramm.
///
/// Format: Records `lat,lon,elev,flag`, mit `;` getrennt. Fehlerhafte
/// Records werden einzeln verworfen; ein komplett leeres oder
/// unlesbares Datagramm ergibt eine leere Liste.
pub fn parse_capture_datagram(text: &str) -> Vec<CaptureSample> {
    text.trim()
        .split(';')
        .filter(|record| !record.trim().is_empty())
        .filter_map(parse_record)
        .collect()
}

fn parse_record(record: &str) -> Option<CaptureSample> {
    let fields: Vec<&str> = record.trim().split(',').map(str::trim).collect();
    if fields.len() != 4 {
        log::debug!("Capture-Record mit {} Feldern verworfen", fields.len());
        return None;
    }

    let latitude: f64 = fields[0].parse().ok()?;
    let longitude: f64 = fields[1].parse().ok()?;
    let elevation_m: f64 = fields[2].parse().ok()?;
    let is_ownship = match fields[3] {
        "0" => false,
        "1" => true,
        other => {
            log::debug!("Unbekanntes Ownship-Flag '{}' verworfen", other);
            return None;
        }
    };

    if latitude.abs() > 90.0 || longitude.abs() > 180.0 {
        return None;
    }

    Some(CaptureSample {
        latitude,
        longitude,
        elevation_m,
        is_ownship,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn sample(lat: f64) -> CaptureSample {
        CaptureSample {
            latitude: lat,
            longitude: 20.0,
            elevation_m: 500.0,
            is_ownship: false,
        }
    }

    #[test]
    fn single_subscription_closes_after_first_event() {
        let mut channel = CaptureChannel::new();
        let seen = Rc::new(RefCell::new(0usize));

        let seen_cb = Rc::clone(&seen);
        channel.subscribe(CaptureMode::Single, move |samples| {
            *seen_cb.borrow_mut() += samples.len();
            CaptureFlow::Stay
        });

        channel.dispatch(&[sample(1.0), sample(2.0), sample(3.0)]);
        channel.dispatch(&[sample(4.0)]);

        assert_eq!(*seen.borrow(), 3, "nur das erste Event wird zugestellt");
        assert_eq!(channel.subscriber_count(), 0);
    }

    #[test]
    fn multiple_subscription_stays_until_closed() {
        let mut channel = CaptureChannel::new();
        let events = Rc::new(RefCell::new(0usize));

        let events_cb = Rc::clone(&events);
        let token = channel.subscribe(CaptureMode::Multiple, move |_| {
            *events_cb.borrow_mut() += 1;
            CaptureFlow::Stay
        });

        channel.dispatch(&[sample(1.0)]);
        channel.dispatch(&[sample(2.0)]);
        assert_eq!(*events.borrow(), 2);
        assert_eq!(channel.subscriber_count(), 1);

        assert!(channel.unsubscribe(token));
        channel.dispatch(&[sample(3.0)]);
        assert_eq!(*events.borrow(), 2);
    }

    #[test]
    fn callback_can_close_itself() {
        let mut channel = CaptureChannel::new();
        channel.subscribe(CaptureMode::Multiple, |_| CaptureFlow::Close);

        channel.dispatch(&[sample(1.0)]);

        assert_eq!(channel.subscriber_count(), 0);
    }

    #[test]
    fn empty_event_is_dropped_silently() {
        let mut channel = CaptureChannel::new();
        let called = Rc::new(RefCell::new(false));

        let called_cb = Rc::clone(&called);
        channel.subscribe(CaptureMode::Single, move |_| {
            *called_cb.borrow_mut() = true;
            CaptureFlow::Stay
        });

        channel.dispatch(&[]);

        assert!(!*called.borrow());
        assert_eq!(channel.subscriber_count(), 1, "Abo bleibt bestehen");
    }

    #[test]
    fn parse_datagram_drops_malformed_records() {
        let samples =
            parse_capture_datagram("10.0,20.0,500,0;kaputt;10.5,20.5,600,1;95.0,0.0,0,0;;");

        assert_eq!(samples.len(), 2);
        assert!(!samples[0].is_ownship);
        assert!(samples[1].is_ownship);
    }

    #[test]
    fn parse_empty_datagram_is_empty() {
        assert!(parse_capture_datagram("").is_empty());
        assert!(parse_capture_datagram("  \n ").is_empty());
    }
}
