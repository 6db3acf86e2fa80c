use std::path::PathBuf;

use iced::{
    Alignment::Center,
    Element, Task,
    widget::{button, column, container, row, text},
};
use rfd::AsyncFileDialog;

use crate::core::store::{JsonFileStore, STORE_FILE_NAME};
use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
};

#[derive(Debug, Clone, Default)]
pub struct LandingPageScreen {
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum LandingPageMessage {
    OpenPortfolio,
    CreatePortfolio,
    UseDefaultLocation,
    None,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    OpenedPortfolio(PathBuf),
}

impl LandingPageScreen {
    pub fn with_error(error: String) -> Self {
        Self { error: Some(error) }
    }
}

impl Screen for LandingPageScreen {
    type Message = LandingPageMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let mut content = column![
            text("Folio").size(32),
            text("Build a portfolio site from your own data"),
            row![
                button("Open Portfolio").on_press(ScreenMessage::ScreenMessage(
                    LandingPageMessage::OpenPortfolio
                )),
                button("New Portfolio").on_press(ScreenMessage::ScreenMessage(
                    LandingPageMessage::CreatePortfolio
                )),
            ]
            .spacing(20),
            button("Use the default location").on_press(ScreenMessage::ScreenMessage(
                LandingPageMessage::UseDefaultLocation
            )),
        ]
        .spacing(20)
        .padding(20)
        .align_x(Center);

        if let Some(error) = &self.error {
            content = content.push(text(error).style(text::danger));
        }

        container(content)
            .center_x(iced::Length::Fill)
            .center_y(iced::Length::Fill)
            .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            LandingPageMessage::OpenPortfolio => Task::perform(
                AsyncFileDialog::new()
                    .add_filter("Portfolio data", &["json"])
                    .pick_file(),
                |handle| match handle {
                    Some(file) => ScreenMessage::ParentMessage(ParentMessage::OpenedPortfolio(
                        file.path().to_path_buf(),
                    )),
                    None => ScreenMessage::ScreenMessage(LandingPageMessage::None),
                },
            ),
            LandingPageMessage::CreatePortfolio => Task::perform(
                AsyncFileDialog::new()
                    .set_title("Create New Portfolio")
                    .set_file_name(STORE_FILE_NAME)
                    .add_filter("Portfolio data", &["json"])
                    .save_file(),
                |handle| match handle {
                    Some(file) => ScreenMessage::ParentMessage(ParentMessage::OpenedPortfolio(
                        file.path().to_path_buf(),
                    )),
                    None => ScreenMessage::ScreenMessage(LandingPageMessage::None),
                },
            ),
            LandingPageMessage::UseDefaultLocation => match JsonFileStore::default_data_file() {
                Ok(path) => Task::done(ScreenMessage::ParentMessage(
                    ParentMessage::OpenedPortfolio(path),
                )),
                Err(e) => {
                    self.error = Some(e.to_string());
                    Task::none()
                }
            },
            LandingPageMessage::None => Task::none(),
        }
    }
}
