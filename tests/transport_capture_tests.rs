//! Tests für Capture-Kanal, UDP-Listener und Transport-Fehlerpfade.

use std::cell::RefCell;
use std::net::UdpSocket;
use std::rc::Rc;
use std::time::{Duration, Instant};

use dcs_dtc_editor::sim::{CaptureFlow, CaptureListener};
use dcs_dtc_editor::{CaptureChannel, CaptureMode, CaptureSample, ScriptLink};

fn sample(lat: f64, is_ownship: bool) -> CaptureSample {
    CaptureSample {
        latitude: lat,
        longitude: 20.0,
        elevation_m: 500.0,
        is_ownship,
    }
}

#[test]
fn test_single_mode_consumes_first_event_then_unsubscribes() {
    let mut channel = CaptureChannel::new();
    let applied = Rc::new(RefCell::new(Vec::new()));

    // Einzel-Modus: Aufrufer wertet nur sample[0] aus.
    let applied_cb = Rc::clone(&applied);
    channel.subscribe(CaptureMode::Single, move |samples| {
        applied_cb.borrow_mut().push(samples[0].latitude);
        CaptureFlow::Stay
    });

    let event = [sample(1.0, false), sample(2.0, false), sample(3.0, false)];
    channel.dispatch(&event);

    assert_eq!(*applied.borrow(), vec![1.0], "nur sample[0] angewendet");
    assert_eq!(
        channel.subscriber_count(),
        0,
        "Single-Abo meldet sich nach dem ersten Event selbst ab"
    );

    // Nachlaufendes Event erreicht niemanden mehr.
    channel.dispatch(&[sample(9.0, false)]);
    assert_eq!(*applied.borrow(), vec![1.0]);
}

#[test]
fn test_multiple_mode_consumes_all_and_stays_subscribed() {
    let mut channel = CaptureChannel::new();
    let applied = Rc::new(RefCell::new(Vec::new()));

    let applied_cb = Rc::clone(&applied);
    let token = channel.subscribe(CaptureMode::Multiple, move |samples| {
        for s in samples.iter().filter(|s| !s.is_ownship) {
            applied_cb.borrow_mut().push(s.latitude);
        }
        CaptureFlow::Stay
    });

    channel.dispatch(&[sample(1.0, false), sample(2.0, true), sample(3.0, false)]);
    assert_eq!(*applied.borrow(), vec![1.0, 3.0], "Ownship wird übergangen");
    assert_eq!(channel.subscriber_count(), 1, "Abo bleibt bestehen");

    channel.dispatch(&[sample(4.0, false)]);
    assert_eq!(*applied.borrow(), vec![1.0, 3.0, 4.0]);

    channel.unsubscribe(token);
    assert_eq!(channel.subscriber_count(), 0);
}

#[test]
fn test_both_modes_receive_same_event() {
    let mut channel = CaptureChannel::new();
    let single_seen = Rc::new(RefCell::new(0usize));
    let multi_seen = Rc::new(RefCell::new(0usize));

    let single_cb = Rc::clone(&single_seen);
    channel.subscribe(CaptureMode::Single, move |_| {
        *single_cb.borrow_mut() += 1;
        CaptureFlow::Stay
    });
    let multi_cb = Rc::clone(&multi_seen);
    channel.subscribe(CaptureMode::Multiple, move |_| {
        *multi_cb.borrow_mut() += 1;
        CaptureFlow::Stay
    });

    channel.dispatch(&[sample(1.0, false)]);
    channel.dispatch(&[sample(2.0, false)]);

    assert_eq!(*single_seen.borrow(), 1);
    assert_eq!(*multi_seen.borrow(), 2);
}

#[test]
fn test_listener_parses_datagram_end_to_end() {
    let listener = CaptureListener::spawn(0).expect("Listener auf freiem Port");

    let sender = UdpSocket::bind("127.0.0.1:0").expect("Sender-Socket");
    sender
        .send_to(
            b"10.0,20.0,500,0;10.5,20.5,600,1;kaputt",
            ("127.0.0.1", listener.port()),
        )
        .expect("Datagramm gesendet");

    let deadline = Instant::now() + Duration::from_secs(3);
    let batch = loop {
        if let Some(batch) = listener.try_recv() {
            break batch;
        }
        assert!(Instant::now() < deadline, "Timeout beim Listener-Empfang");
        std::thread::sleep(Duration::from_millis(20));
    };

    assert_eq!(batch.len(), 2, "fehlerhafter Record wird verworfen");
    assert!(!batch[0].is_ownship);
    assert!(batch[1].is_ownship);
    assert!((batch[1].elevation_m - 600.0).abs() < f64::EPSILON);
}

#[test]
fn test_send_returns_false_without_listener() {
    // Kein Listener auf dem Port: Transport-Fehler ist ein Bool, kein Panic.
    let link = ScriptLink::new("127.0.0.1", 47812);

    let mut script = dcs_dtc_editor::CommandScript::new();
    for (device_id, command_id) in [(0, 0), (17, 3001), (0, 1)] {
        script.push(dcs_dtc_editor::script::CommandInvocation {
            device_id,
            command_id,
            value: 0,
            delay_ms: 0,
        });
    }

    assert!(!link.send(&script));
}
