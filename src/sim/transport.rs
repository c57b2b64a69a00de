//! Transport: einmaliger, synchroner Versand eines Command-Scripts.
//!
//! Ein fehlgeschlagener Versand ist nie fatal — der Simulator läuft
//! möglicherweise einfach nicht. Das Ergebnis ist ein Bool; was der
//! Benutzer davon sieht, entscheidet der Aufrufer.

use std::io::Write;
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use crossbeam_channel::{bounded, Receiver};

use crate::script::CommandScript;

/// Verbindungs-Timeout für den Script-Versand.
const CONNECT_TIMEOUT: Duration = Duration::from_millis(1500);
/// Schreib-Timeout auf der offenen Verbindung.
const WRITE_TIMEOUT: Duration = Duration::from_millis(2000);

/// Endpunkt der Scripting-Bridge im Simulator.
#[derive(Debug, Clone)]
pub struct ScriptLink {
    host: String,
    port: u16,
}

impl ScriptLink {
    /// Erstellt einen Link auf den übergebenen Endpunkt.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Zieladresse als String (für Logs und Statuszeile).
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Sendet das Script einmalig und synchron.
    ///
    /// Ein Script ohne Invocations jenseits der beiden Marker ist ein
    /// No-op-Erfolg ohne Verbindungsversuch. Wiederholtes Senden
    /// desselben Scripts ist unkritisch: die Marker klammern eine in
    /// sich abgeschlossene Transaktion.
    pub fn send(&self, script: &CommandScript) -> bool {
        if script.is_effectively_empty() {
            log::info!("Leeres Script, Versand übersprungen");
            return true;
        }

        let wire = script.to_wire_string();
        match self.send_wire(&wire) {
            Ok(()) => {
                log::info!(
                    "Script mit {} Invocations an {} gesendet",
                    script.len(),
                    self.endpoint()
                );
                true
            }
            Err(e) => {
                log::warn!("Script-Versand an {} fehlgeschlagen: {}", self.endpoint(), e);
                false
            }
        }
    }

    fn send_wire(&self, wire: &str) -> std::io::Result<()> {
        let addr = self.resolve()?;
        let mut stream = TcpStream::connect_timeout(&addr, CONNECT_TIMEOUT)?;
        stream.set_write_timeout(Some(WRITE_TIMEOUT))?;
        stream.write_all(wire.as_bytes())?;
        stream.shutdown(std::net::Shutdown::Write)?;
        Ok(())
    }

    fn resolve(&self) -> std::io::Result<SocketAddr> {
        (self.host.as_str(), self.port)
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::AddrNotAvailable,
                    "Endpunkt nicht auflösbar",
                )
            })
    }
}

/// Ein laufender Upload abseits des UI-Threads.
///
/// Der blockierende Netzwerk-Teil läuft in einem eigenen Thread; zurück
/// auf den UI-Kontext kommt nur das Bool-Ergebnis über den Kanal.
pub struct UploadTask {
    rx: Receiver<bool>,
}

impl UploadTask {
    /// Startet den Versand im Hintergrund.
    pub fn spawn(link: ScriptLink, script: CommandScript) -> Self {
        let (tx, rx) = bounded(1);

        std::thread::spawn(move || {
            let ok = link.send(&script);
            // Empfänger kann bereits weg sein (App beendet) — egal.
            let _ = tx.send(ok);
        });

        Self { rx }
    }

    /// Fragt das Ergebnis ab, ohne zu blockieren.
    pub fn poll(&self) -> Option<bool> {
        self.rx.try_recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::CommandInvocation;

    fn marker(command_id: u32) -> CommandInvocation {
        CommandInvocation {
            device_id: 0,
            command_id,
            value: 0,
            delay_ms: 0,
        }
    }

    #[test]
    fn empty_script_is_noop_success() {
        // Port 9 (discard) ist nicht gebunden; der Kurzschluss greift vorher.
        let link = ScriptLink::new("127.0.0.1", 9);
        let mut script = CommandScript::new();
        script.push(marker(0));
        script.push(marker(1));

        assert!(link.send(&script));
    }

    #[test]
    fn unreachable_endpoint_returns_false() {
        let link = ScriptLink::new("127.0.0.1", 1);
        let mut script = CommandScript::new();
        script.push(marker(0));
        script.push(CommandInvocation {
            device_id: 17,
            command_id: 3001,
            value: 1,
            delay_ms: 100,
        });
        script.push(marker(1));

        assert!(!link.send(&script));
    }
}
