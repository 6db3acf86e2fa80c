use crate::core::store::JsonFileStore;
use crate::gui::screens::{
    ScreenData, ScreenMessage, data_entry::DataEntryScreen, landing_page::LandingPageScreen,
    loading_page::LoadingPageScreen, portfolio::PortfolioScreen,
};
use crate::models::PortfolioRecord;

#[derive(Debug, Clone)]
pub enum Message {
    LandingPage(ScreenMessage<LandingPageScreen>),
    LoadingPage(ScreenMessage<LoadingPageScreen>),
    DataEntry(ScreenMessage<DataEntryScreen>),
    Portfolio(ScreenMessage<PortfolioScreen>),
    ChangeScreen(ScreenData),
    /// Result of reading a newly opened store; routes to the editor on first
    /// run and to the rendered portfolio otherwise.
    StoreLoaded(JsonFileStore, Result<Option<PortfolioRecord>, String>),
}
