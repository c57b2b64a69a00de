//! Verb-Mirror-Protokoll zwischen Listen-Editor und Karten-Overlay.
//!
//! Beide Seiten bleiben über transiente Verbs (`Selected`, `Opened`,
//! `Moved`, `Added`, `Deleted`) konsistent, ohne dass die Reaktion auf ein
//! eingehendes Verb dasselbe Verb zurück emittiert. Der Rückkopplungs-Schutz
//! ist als expliziter Zustandsautomat pro Seite umgesetzt und damit isoliert
//! testbar.

mod handler;
mod link;
mod marker;
mod suppress;
mod verb;

pub use handler::{VerbHandler, VerbSink};
pub use link::{MirrorLink, MirrorSide};
pub use marker::{MarkerKind, PointMarker};
pub use suppress::{MirrorState, SuppressionGate};
pub use verb::{MirrorVerb, VerbKind};
