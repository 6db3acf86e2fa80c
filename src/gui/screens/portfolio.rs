use iced::{
    Alignment::Center,
    Border, Element, Length, Task, Theme,
    widget::{
        button, column, container, image, mouse_area, row, scrollable, text, text_input, toggler,
        Space,
    },
};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::core::board::ProjectBoard;
use crate::core::contact::{self, ContactMessage};
use crate::gui::{
    AppState, widgets,
    screens::{Screen, ScreenMessage},
};
use crate::models::{PortfolioRecord, Project};

/// The rendered single-page portfolio: hero, about, reorderable projects,
/// contact form and footer. Project cards are dragged with the pointer; a
/// completed drop persists the new order through the open store right away.
#[derive(Debug, Clone)]
pub struct PortfolioScreen {
    board: ProjectBoard,
    dark_mode: bool,
    contact: ContactMessage,
    contact_state: ContactState,
    status: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
enum ContactState {
    Editing,
    Submitting,
    Sent,
    Failed(String),
}

#[derive(Debug, Clone)]
pub enum PortfolioMessage {
    DarkModeToggled(bool),
    Edit,

    DragStart(Uuid),
    DragOver(Uuid),
    DragLeave(Uuid),
    DroppedOn(Uuid),
    DragEnd,

    ContactNameChanged(String),
    ContactEmailChanged(String),
    ContactBodyChanged(String),
    SubmitContact,
    ContactSubmitted(Result<(), String>),
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    /// Go back to the form, editing the currently rendered record.
    EditRequested(PortfolioRecord),
}

fn msg(message: PortfolioMessage) -> ScreenMessage<PortfolioScreen> {
    ScreenMessage::ScreenMessage(message)
}

impl PortfolioScreen {
    pub fn new(record: PortfolioRecord) -> Self {
        Self {
            board: ProjectBoard::new(record),
            dark_mode: false,
            contact: ContactMessage::default(),
            contact_state: ContactState::Editing,
            status: None,
        }
    }

    pub fn record(&self) -> &PortfolioRecord {
        self.board.record()
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    fn nav_bar(&self) -> Element<'_, ScreenMessage<Self>> {
        row![
            text(&self.record().name).size(20),
            Space::new().width(Length::Fill),
            toggler(self.dark_mode)
                .label("Dark mode")
                .on_toggle(|v| msg(PortfolioMessage::DarkModeToggled(v))),
            button("Edit")
                .style(button::secondary)
                .on_press(msg(PortfolioMessage::Edit)),
        ]
        .spacing(20)
        .align_y(Center)
        .into()
    }

    fn hero_section(&self) -> Element<'_, ScreenMessage<Self>> {
        let record = self.record();
        let mut hero = column![].spacing(15).align_x(Center).width(Length::Fill);

        if let Some(handle) = record.profile_pic.as_deref().and_then(widgets::image_handle) {
            hero = hero.push(image(handle).width(140).height(140));
        }
        hero = hero
            .push(text(&record.name).size(48))
            .push(text(&record.tagline).size(24));

        hero.into()
    }

    fn about_section(&self) -> Element<'_, ScreenMessage<Self>> {
        let record = self.record();
        let mut section = column![
            widgets::section_heading("About Me"),
            text(&record.about),
            text("My Skills").size(18),
            row(record.skill_tags().into_iter().map(widgets::tag_pill)).spacing(8),
        ]
        .spacing(15);

        let interests = record.interest_tags();
        if !interests.is_empty() {
            section = section
                .push(text("Interests").size(18))
                .push(row(interests.into_iter().map(widgets::tag_pill)).spacing(8));
        }

        section.into()
    }

    fn projects_section(&self) -> Element<'_, ScreenMessage<Self>> {
        let record = self.record();
        let mut section = column![widgets::section_heading("My Projects")].spacing(15);

        if !record.git_hub_username.is_empty() {
            section = section.push(
                text(format!(
                    "Showing projects from GitHub: @{}",
                    record.git_hub_username
                ))
                .size(14),
            );
        }

        for project in self.board.projects() {
            section = section.push(self.project_card(project));
        }
        section = section
            .push(text("Tip: drag and drop project cards to reorder them").size(14));

        if let Some(status) = &self.status {
            section = section.push(text(status.clone()).style(text::danger));
        }

        section.into()
    }

    fn project_card<'a>(&'a self, project: &'a Project) -> Element<'a, ScreenMessage<Self>> {
        let id = project.id;
        let is_source = self.board.is_drag_source(id);
        let is_target = self.board.is_drop_target(id);

        let mut body = column![].spacing(10);
        if let Some(handle) = project.image.as_deref().and_then(widgets::image_handle) {
            body = body.push(image(handle).height(150));
        }
        body = body
            .push(text(&project.title).size(20))
            .push(text(&project.description));
        if !project.github_url.is_empty() {
            body = body.push(text(format!("View on GitHub: {}", project.github_url)).size(14));
        }

        let card = container(body)
            .padding(15)
            .width(Length::Fill)
            .style(move |theme: &Theme| card_style(theme, is_source, is_target));

        mouse_area(card)
            .on_press(msg(PortfolioMessage::DragStart(id)))
            .on_enter(msg(PortfolioMessage::DragOver(id)))
            .on_exit(msg(PortfolioMessage::DragLeave(id)))
            .on_release(msg(PortfolioMessage::DroppedOn(id)))
            .into()
    }

    fn contact_section(&self) -> Element<'_, ScreenMessage<Self>> {
        let submitting = self.contact_state == ContactState::Submitting;
        let submit = button(if submitting { "Sending..." } else { "Send Message" })
            .width(Length::Fill)
            .on_press_maybe(
                (!submitting && self.contact.is_complete())
                    .then(|| msg(PortfolioMessage::SubmitContact)),
            );

        let mut section = column![
            widgets::section_heading("Get In Touch"),
            text("Name").size(14),
            text_input("Your name", &self.contact.name)
                .on_input(|v| msg(PortfolioMessage::ContactNameChanged(v))),
            text("Email").size(14),
            text_input("you@example.com", &self.contact.email)
                .on_input(|v| msg(PortfolioMessage::ContactEmailChanged(v))),
            text("Message").size(14),
            text_input("Your message", &self.contact.message)
                .on_input(|v| msg(PortfolioMessage::ContactBodyChanged(v))),
            submit,
        ]
        .spacing(10)
        .max_width(500);

        section = match &self.contact_state {
            ContactState::Sent => {
                section.push(text("Message sent. Thanks for reaching out!").style(text::success))
            }
            ContactState::Failed(error) => section.push(text(error.clone()).style(text::danger)),
            _ => section,
        };

        section.into()
    }

    fn footer(&self) -> Element<'_, ScreenMessage<Self>> {
        let record = self.record();
        let year = OffsetDateTime::now_local()
            .unwrap_or_else(|_| OffsetDateTime::now_utc())
            .year();

        let mut footer = column![].spacing(10).align_x(Center).width(Length::Fill);
        if !record.social_links.is_empty() {
            footer = footer.push(
                row(record
                    .social_links
                    .iter()
                    .map(|link| widgets::tag_pill(format!("{}  {}", link.name, link.url))))
                .spacing(10),
            );
        }
        footer = footer.push(
            text(format!("(c) {year} {}. All rights reserved.", record.name)).size(14),
        );
        footer.into()
    }
}

impl Screen for PortfolioScreen {
    type Message = PortfolioMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let content = column![
            self.nav_bar(),
            self.hero_section(),
            self.about_section(),
            self.projects_section(),
            self.contact_section(),
            self.footer(),
        ]
        .spacing(40)
        .max_width(900);

        // The outer area catches releases that land between cards, ending a
        // drag that never reached a drop target.
        mouse_area(scrollable(
            container(content).center_x(Length::Fill).padding(30),
        ))
        .on_release(msg(PortfolioMessage::DragEnd))
        .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            PortfolioMessage::DarkModeToggled(enabled) => {
                self.dark_mode = enabled;
                Task::none()
            }
            PortfolioMessage::Edit => Task::done(ScreenMessage::ParentMessage(
                ParentMessage::EditRequested(self.record().clone()),
            )),

            PortfolioMessage::DragStart(id) => {
                self.board.drag_start(id);
                Task::none()
            }
            PortfolioMessage::DragOver(id) => {
                self.board.drag_over(id);
                Task::none()
            }
            PortfolioMessage::DragLeave(id) => {
                self.board.drag_leave(id);
                Task::none()
            }
            PortfolioMessage::DroppedOn(id) => {
                match state.store.as_ref() {
                    Some(store) => {
                        if let Err(e) = self.board.drop_on(id, store) {
                            self.status = Some(format!("Could not save the new order: {e}"));
                        } else {
                            self.status = None;
                        }
                    }
                    None => self.board.drag_end(),
                }
                Task::none()
            }
            PortfolioMessage::DragEnd => {
                self.board.drag_end();
                Task::none()
            }

            PortfolioMessage::ContactNameChanged(value) => {
                self.contact.name = value;
                Task::none()
            }
            PortfolioMessage::ContactEmailChanged(value) => {
                self.contact.email = value;
                Task::none()
            }
            PortfolioMessage::ContactBodyChanged(value) => {
                self.contact.message = value;
                Task::none()
            }
            PortfolioMessage::SubmitContact => {
                self.contact_state = ContactState::Submitting;
                let message = self.contact.clone();
                Task::perform(
                    async move {
                        let client = reqwest::Client::new();
                        contact::submit(&client, &message)
                            .await
                            .map_err(|e| e.to_string())
                    },
                    |result| msg(PortfolioMessage::ContactSubmitted(result)),
                )
            }
            PortfolioMessage::ContactSubmitted(Ok(())) => {
                self.contact_state = ContactState::Sent;
                self.contact = ContactMessage::default();
                Task::none()
            }
            PortfolioMessage::ContactSubmitted(Err(error)) => {
                self.contact_state = ContactState::Failed(error);
                Task::none()
            }
        }
    }
}

fn card_style(theme: &Theme, is_source: bool, is_target: bool) -> container::Style {
    let palette = theme.extended_palette();
    let base = container::bordered_box(theme);
    if is_target {
        base.border(Border {
            color: palette.primary.strong.color,
            width: 3.0,
            ..base.border
        })
    } else if is_source {
        base.background(palette.background.weak.color)
    } else {
        base
    }
}
