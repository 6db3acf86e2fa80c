use iced::{Element, Task, Theme};

use super::screens::{self, Screen, ScreenData, ScreenMessage};
use super::{AppState, Message};
use crate::core::store::JsonFileStore;
use crate::gui::screens::landing_page::LandingPageScreen;
use crate::gui::screens::loading_page::LoadingPageScreen;

pub struct FolioApp {
    screen: ScreenData,
    state: AppState,
}

impl FolioApp {
    pub fn new(initial: Option<JsonFileStore>) -> (Self, Task<Message>) {
        match initial {
            Some(store) => (
                Self {
                    screen: ScreenData::LoadingPage(LoadingPageScreen),
                    state: AppState::default(),
                },
                screens::open_store(store).map(unwrap_screen),
            ),
            None => (
                Self {
                    screen: ScreenData::LandingPage(LandingPageScreen::default()),
                    state: AppState::default(),
                },
                Task::none(),
            ),
        }
    }

    pub fn title(&self) -> String {
        match &self.screen {
            ScreenData::PortfolioPage(page) if !page.record().name.is_empty() => {
                format!("{} - Folio", page.record().name)
            }
            _ => "Folio - Portfolio Builder".to_string(),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.screen
            .update(message, &mut self.state)
            .map(unwrap_screen)
    }

    pub fn view(&self) -> Element<'_, Message> {
        self.screen.view().map(unwrap_screen)
    }

    pub fn theme(&self) -> Theme {
        match &self.screen {
            ScreenData::PortfolioPage(page) if page.dark_mode() => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

fn unwrap_screen(message: ScreenMessage<ScreenData>) -> Message {
    match message {
        ScreenMessage::ScreenMessage(message) => message,
        ScreenMessage::ParentMessage(never) => match never {},
    }
}
