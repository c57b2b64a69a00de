//! UDP-Listener für Capture-Events aus dem Simulator.
//!
//! Der Listener liest auf einem eigenen Thread und reicht geparste
//! Sample-Batches über einen crossbeam-Kanal an den UI-Thread weiter.
//! Zustellung an Abonnenten passiert erst dort.

use std::net::UdpSocket;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, Sender};

use super::capture::{parse_capture_datagram, CaptureSample};

/// Maximale Datagramm-Größe.
const MAX_DATAGRAM_SIZE: usize = 8192;
/// Poll-Intervall, in dem der Thread das Shutdown-Flag prüft.
const RECV_TIMEOUT: Duration = Duration::from_millis(200);

/// Laufender Capture-Listener.
pub struct CaptureListener {
    rx: Receiver<Vec<CaptureSample>>,
    shutdown: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
    port: u16,
}

impl CaptureListener {
    /// Bindet den UDP-Port und startet den Empfangs-Thread.
    /// Port 0 bindet einen freien Port (Tests).
    pub fn spawn(port: u16) -> anyhow::Result<Self> {
        let socket = UdpSocket::bind(("127.0.0.1", port))?;
        let port = socket.local_addr()?.port();
        socket.set_read_timeout(Some(RECV_TIMEOUT))?;

        let (tx, rx) = unbounded();
        let shutdown = Arc::new(AtomicBool::new(false));
        let thread_shutdown = Arc::clone(&shutdown);

        let handle = std::thread::spawn(move || run_loop(socket, tx, thread_shutdown));

        log::info!("Capture-Listener auf Port {} gestartet", port);
        Ok(Self {
            rx,
            shutdown,
            handle: Some(handle),
            port,
        })
    }

    /// Gebundener Port.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Holt das nächste wartende Sample-Batch, ohne zu blockieren.
    pub fn try_recv(&self) -> Option<Vec<CaptureSample>> {
        self.rx.try_recv().ok()
    }
}

impl Drop for CaptureListener {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::warn!("Capture-Listener-Thread unsauber beendet");
            }
        }
        log::info!("Capture-Listener auf Port {} gestoppt", self.port);
    }
}

fn run_loop(socket: UdpSocket, tx: Sender<Vec<CaptureSample>>, shutdown: Arc<AtomicBool>) {
    let mut buffer = [0u8; MAX_DATAGRAM_SIZE];

    loop {
        if shutdown.load(Ordering::Relaxed) {
            break;
        }

        match socket.recv_from(&mut buffer) {
            Ok((len, _)) => {
                let text = String::from_utf8_lossy(&buffer[..len]);
                let samples = parse_capture_datagram(&text);

                if samples.is_empty() {
                    // Heartbeat oder unlesbares Datagramm
                    log::debug!("Capture-Datagramm ohne verwertbare Samples");
                    continue;
                }

                if tx.send(samples).is_err() {
                    // UI-Seite weg, Thread kann enden
                    break;
                }
            }
            Err(e)
                if e.kind() == std::io::ErrorKind::WouldBlock
                    || e.kind() == std::io::ErrorKind::TimedOut =>
            {
                continue;
            }
            Err(e) => {
                log::warn!("Capture-Empfangsfehler: {}", e);
                std::thread::sleep(Duration::from_millis(100));
            }
        }
    }
}
