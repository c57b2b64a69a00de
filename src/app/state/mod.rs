//! App-State und Teilzustände.

mod app_state;
mod capture;
mod dialogs;
mod list;
mod map;
mod upload;

pub use app_state::AppState;
pub use capture::{ActiveCapture, CaptureState, CaptureTarget};
pub use dialogs::UiState;
pub use list::{ListUiState, PointDialogState};
pub use map::{MapElement, MapViewState};
pub use upload::UploadState;
