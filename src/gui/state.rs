use crate::core::store::JsonFileStore;

/// Cross-screen application state: the one open portfolio store, injected
/// into whichever screen needs to read or write the record.
#[derive(Debug, Default)]
pub struct AppState {
    pub store: Option<JsonFileStore>,
}
