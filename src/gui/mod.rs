mod app;
mod message;
pub mod screens;
mod state;
mod widgets;

pub use app::FolioApp;
pub use message::Message;
pub use state::AppState;

use crate::core::store::JsonFileStore;

/// Runs the desktop app. With a store given up front the landing step is
/// skipped and the record is loaded immediately.
pub fn run(initial: Option<JsonFileStore>) -> iced::Result {
    iced::application(
        move || FolioApp::new(initial.clone()),
        FolioApp::update,
        FolioApp::view,
    )
    .title(FolioApp::title)
    .theme(FolioApp::theme)
    .run()
}
