//! Session flow: the screen state machine and the loading sequence behind it.

mod orchestrator;
mod screen;

pub use orchestrator::FETCH_FAILED_MESSAGE;
pub use orchestrator::FETCH_FAILED_TITLE;
pub use orchestrator::Orchestrator;
pub use orchestrator::PERMISSION_DENIED_MESSAGE;
pub use orchestrator::PERMISSION_DENIED_TITLE;
pub use orchestrator::playlists_for;
pub use orchestrator::select_playlists;
pub use screen::Event;
pub use screen::Screen;
