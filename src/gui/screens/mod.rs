pub mod data_entry;
pub mod landing_page;
pub mod loading_page;
pub mod portfolio;

use iced::{Element, Task};

use crate::core::draft::Draft;
use crate::core::store::{JsonFileStore, PortfolioStore};
use crate::gui::{AppState, Message};

use data_entry::DataEntryScreen;
use landing_page::LandingPageScreen;
use loading_page::LoadingPageScreen;
use portfolio::PortfolioScreen;

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug + Clone;
    type ParentMessage: std::fmt::Debug + Clone;
    fn view(&self) -> Element<'_, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

#[derive(Debug, Clone)]
pub enum ScreenData {
    LandingPage(LandingPageScreen),
    LoadingPage(LoadingPageScreen),
    DataEntryPage(DataEntryScreen),
    PortfolioPage(PortfolioScreen),
}

/// Reads the record out of `store` off the update loop and reports back
/// through [`Message::StoreLoaded`].
pub fn open_store(store: JsonFileStore) -> Task<ScreenMessage<ScreenData>> {
    Task::perform(
        async move {
            let result = store.load().map_err(|e| e.to_string());
            (store, result)
        },
        |(store, result)| ScreenMessage::ScreenMessage(Message::StoreLoaded(store, result)),
    )
}

impl Screen for ScreenData {
    type Message = Message;
    type ParentMessage = std::convert::Infallible;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        match self {
            ScreenData::LandingPage(screen) => screen.view().map(Message::LandingPage),
            ScreenData::LoadingPage(screen) => screen.view().map(Message::LoadingPage),
            ScreenData::DataEntryPage(screen) => screen.view().map(Message::DataEntry),
            ScreenData::PortfolioPage(screen) => screen.view().map(Message::Portfolio),
        }
        .map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match (self, message) {
            (x, Message::ChangeScreen(screen)) => {
                *x = screen;
                Task::none()
            }
            (x, Message::StoreLoaded(store, result)) => {
                match result {
                    Err(error) => {
                        *x = ScreenData::LandingPage(LandingPageScreen::with_error(error));
                    }
                    Ok(None) => {
                        // First run: nothing saved yet, go straight to the form.
                        state.store = Some(store);
                        *x = ScreenData::DataEntryPage(DataEntryScreen::new(Draft::new()));
                    }
                    Ok(Some(record)) => {
                        state.store = Some(store);
                        *x = ScreenData::PortfolioPage(PortfolioScreen::new(record));
                    }
                }
                Task::none()
            }
            (ScreenData::LandingPage(page), Message::LandingPage(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::LandingPage)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(landing_page::ParentMessage::OpenedPortfolio(
                    path,
                )) => Task::done(ScreenMessage::ScreenMessage(Message::ChangeScreen(
                    ScreenData::LoadingPage(LoadingPageScreen),
                )))
                .chain(open_store(JsonFileStore::new(path))),
            },
            (ScreenData::DataEntryPage(page), Message::DataEntry(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::DataEntry)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent) => match parent {
                    data_entry::ParentMessage::Saved(record) => {
                        Task::done(ScreenMessage::ScreenMessage(Message::ChangeScreen(
                            ScreenData::PortfolioPage(PortfolioScreen::new(record)),
                        )))
                    }
                    data_entry::ParentMessage::PreviewRequested => {
                        // Leaving without saving only works when an earlier
                        // save exists to render.
                        let saved = state
                            .store
                            .as_ref()
                            .and_then(|store| store.load().ok().flatten());
                        match saved {
                            Some(record) => {
                                Task::done(ScreenMessage::ScreenMessage(Message::ChangeScreen(
                                    ScreenData::PortfolioPage(PortfolioScreen::new(record)),
                                )))
                            }
                            None => Task::none(),
                        }
                    }
                },
            },
            (ScreenData::PortfolioPage(page), Message::Portfolio(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::Portfolio)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(portfolio::ParentMessage::EditRequested(record)) => {
                    Task::done(ScreenMessage::ScreenMessage(Message::ChangeScreen(
                        ScreenData::DataEntryPage(DataEntryScreen::new(Draft::from_record(record))),
                    )))
                }
            },
            _ => Task::none(),
        }
    }
}
