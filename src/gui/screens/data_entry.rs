use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, checkbox, column, container, image, row, scrollable, text, text_input},
};
use rfd::AsyncFileDialog;
use uuid::Uuid;

use crate::core::data_uri;
use crate::core::draft::{Draft, ProfileField, ProjectField, SocialField};
use crate::core::github;
use crate::gui::{
    AppState, widgets,
    screens::{Screen, ScreenMessage},
};
use crate::models::{PortfolioRecord, Project, SocialLink};

/// The data-entry form: one working [`Draft`] plus the transient state of the
/// GitHub fetch. Saving commits the whole draft through the open store and
/// hands the record to the rendered view.
#[derive(Debug, Clone)]
pub struct DataEntryScreen {
    draft: Draft,
    use_github: bool,
    fetching: bool,
    fetch_status: Option<Result<String, String>>,
    save_error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum DataEntryMessage {
    ProfileChanged(ProfileField, String),
    PickProfilePic,
    /// `None` means the file dialog was dismissed.
    ProfilePicLoaded(Option<String>),
    ClearProfilePic,

    AddProject,
    ProjectChanged(Uuid, ProjectField, String),
    PickProjectImage(Uuid),
    ProjectImageLoaded(Uuid, Option<String>),
    ClearProjectImage(Uuid),
    RemoveProject(Uuid),

    AddSocialLink,
    SocialChanged(Uuid, SocialField, String),
    RemoveSocialLink(Uuid),

    UseGithubToggled(bool),
    FetchRepos,
    ReposFetched(Result<Vec<Project>, String>),

    Save,
    Preview,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    /// The draft was written to the store; the record is ready to render.
    Saved(PortfolioRecord),
    /// Leave the form without saving.
    PreviewRequested,
}

fn msg(message: DataEntryMessage) -> ScreenMessage<DataEntryScreen> {
    ScreenMessage::ScreenMessage(message)
}

impl DataEntryScreen {
    pub fn new(draft: Draft) -> Self {
        // A stored username means the project list came from GitHub last time.
        let use_github = !draft.record().git_hub_username.is_empty();
        Self {
            draft,
            use_github,
            fetching: false,
            fetch_status: None,
            save_error: None,
        }
    }

    fn can_save(&self) -> bool {
        let record = self.draft.record();
        !record.name.trim().is_empty()
            && !record.tagline.trim().is_empty()
            && !record.about.trim().is_empty()
    }

    fn fetch_repos(&mut self) -> Task<ScreenMessage<Self>> {
        let username = self.draft.record().git_hub_username.clone();
        self.fetching = true;
        self.fetch_status = None;
        Task::perform(
            async move {
                let client = reqwest::Client::new();
                github::fetch_repos(&client, &username, github::DEFAULT_REPO_LIMIT)
                    .await
                    .map(|repos| repos.into_iter().map(Project::from).collect::<Vec<_>>())
                    .map_err(|e| e.to_string())
            },
            |result| msg(DataEntryMessage::ReposFetched(result)),
        )
    }

    fn profile_section(&self) -> Element<'_, ScreenMessage<Self>> {
        let record = self.draft.record();

        let profile_pic: Element<'_, ScreenMessage<Self>> = match &record.profile_pic {
            Some(uri) => {
                let preview: Element<'_, ScreenMessage<Self>> = match widgets::image_handle(uri) {
                    Some(handle) => image(handle).height(120).into(),
                    None => text("(unreadable image)").into(),
                };
                row![
                    preview,
                    button("Remove").on_press(msg(DataEntryMessage::ClearProfilePic)),
                ]
                .spacing(10)
                .align_y(Center)
                .into()
            }
            None => button("Upload a profile picture")
                .on_press(msg(DataEntryMessage::PickProfilePic))
                .into(),
        };

        card(column![
            text("Personal Information").size(20),
            field(
                "Your Name",
                text_input("John Doe", &record.name)
                    .on_input(|v| msg(DataEntryMessage::ProfileChanged(ProfileField::Name, v))),
            ),
            field(
                "Tagline",
                text_input("Web Developer & Designer", &record.tagline)
                    .on_input(|v| msg(DataEntryMessage::ProfileChanged(ProfileField::Tagline, v))),
            ),
            field("Profile Picture", profile_pic),
            field(
                "About Me",
                text_input("Tell us about yourself...", &record.about)
                    .on_input(|v| msg(DataEntryMessage::ProfileChanged(ProfileField::About, v))),
            ),
            field(
                "Skills (comma separated)",
                text_input("HTML, CSS, JavaScript, React", &record.skills)
                    .on_input(|v| msg(DataEntryMessage::ProfileChanged(ProfileField::Skills, v))),
            ),
            field(
                "Interests (comma separated)",
                text_input("Coding, Reading, Travel, Photography", &record.interests).on_input(
                    |v| msg(DataEntryMessage::ProfileChanged(ProfileField::Interests, v)),
                ),
            ),
        ]
        .spacing(15))
    }

    fn projects_section(&self) -> Element<'_, ScreenMessage<Self>> {
        let record = self.draft.record();

        let mut section = column![
            text("Projects").size(20),
            checkbox(self.use_github)
                .label("Use GitHub projects")
                .on_toggle(|v| msg(DataEntryMessage::UseGithubToggled(v))),
        ]
        .spacing(15);

        if self.use_github {
            let fetch = button(if self.fetching {
                "Loading..."
            } else {
                "Fetch Projects"
            })
            .on_press_maybe((!self.fetching).then(|| msg(DataEntryMessage::FetchRepos)));

            section = section.push(
                row![
                    text_input("GitHub Username", &record.git_hub_username).on_input(|v| {
                        msg(DataEntryMessage::ProfileChanged(
                            ProfileField::GitHubUsername,
                            v,
                        ))
                    }),
                    fetch,
                ]
                .spacing(10)
                .align_y(Center),
            );

            if let Some(status) = &self.fetch_status {
                section = section.push(match status {
                    Ok(note) => text(note.clone()).style(text::success),
                    Err(error) => text(error.clone()).style(text::danger),
                });
            }

            if !record.projects.is_empty() {
                let mut listing = column![
                    text(format!(
                        "Showing {} projects from GitHub.",
                        record.projects.len()
                    ))
                    .size(14)
                ]
                .spacing(5);
                for project in &record.projects {
                    listing = listing.push(text(format!("- {}", project.title)).size(14));
                }
                listing = listing
                    .push(text("Switch to manual mode to add project images.").size(14));
                section = section.push(listing);
            }
        } else {
            for project in &record.projects {
                section = section.push(self.project_card(project));
            }
            section = section.push(
                button("Add Project")
                    .width(Length::Fill)
                    .on_press(msg(DataEntryMessage::AddProject)),
            );
        }

        card(section)
    }

    fn project_card<'a>(&'a self, project: &'a Project) -> Element<'a, ScreenMessage<Self>> {
        let id = project.id;

        let image_row: Element<'_, ScreenMessage<Self>> = match &project.image {
            Some(uri) => {
                let preview: Element<'_, ScreenMessage<Self>> = match widgets::image_handle(uri) {
                    Some(handle) => image(handle).height(100).into(),
                    None => text("(unreadable image)").into(),
                };
                row![
                    preview,
                    button("Remove").on_press(msg(DataEntryMessage::ClearProjectImage(id))),
                ]
                .spacing(10)
                .align_y(Center)
                .into()
            }
            None => button("Upload an image")
                .on_press(msg(DataEntryMessage::PickProjectImage(id)))
                .into(),
        };

        card(column![
            row![
                text("Project").size(16),
                button("Remove")
                    .style(button::danger)
                    .on_press(msg(DataEntryMessage::RemoveProject(id))),
            ]
            .spacing(10)
            .align_y(Center),
            field(
                "Title",
                text_input("Project Title", &project.title).on_input(move |v| {
                    msg(DataEntryMessage::ProjectChanged(id, ProjectField::Title, v))
                }),
            ),
            field(
                "Description",
                text_input("Project Description", &project.description).on_input(move |v| {
                    msg(DataEntryMessage::ProjectChanged(
                        id,
                        ProjectField::Description,
                        v,
                    ))
                }),
            ),
            field("Project Image", image_row),
            field(
                "GitHub URL",
                text_input("https://github.com/yourusername/project", &project.github_url)
                    .on_input(move |v| {
                        msg(DataEntryMessage::ProjectChanged(
                            id,
                            ProjectField::GithubUrl,
                            v,
                        ))
                    }),
            ),
        ]
        .spacing(10))
    }

    fn social_links_section(&self) -> Element<'_, ScreenMessage<Self>> {
        let record = self.draft.record();

        let mut section = column![text("Social Links").size(20)].spacing(15);
        for link in &record.social_links {
            section = section.push(self.social_link_card(link));
        }
        section = section.push(
            button("Add Social Link")
                .width(Length::Fill)
                .on_press(msg(DataEntryMessage::AddSocialLink)),
        );

        card(section)
    }

    fn social_link_card<'a>(&'a self, link: &'a SocialLink) -> Element<'a, ScreenMessage<Self>> {
        let id = link.id;
        card(column![
            row![
                text("Link").size(16),
                button("Remove")
                    .style(button::danger)
                    .on_press(msg(DataEntryMessage::RemoveSocialLink(id))),
            ]
            .spacing(10)
            .align_y(Center),
            field(
                "Platform Name",
                text_input("LinkedIn, GitHub, Twitter, ...", &link.name).on_input(move |v| {
                    msg(DataEntryMessage::SocialChanged(id, SocialField::Name, v))
                }),
            ),
            field(
                "URL",
                text_input("https://linkedin.com/in/yourusername", &link.url).on_input(
                    move |v| msg(DataEntryMessage::SocialChanged(id, SocialField::Url, v)),
                ),
            ),
        ]
        .spacing(10))
    }
}

impl Screen for DataEntryScreen {
    type Message = DataEntryMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let mut actions = row![
            button("Preview")
                .style(button::secondary)
                .on_press(msg(DataEntryMessage::Preview)),
            button("Save and Preview")
                .on_press_maybe(self.can_save().then(|| msg(DataEntryMessage::Save))),
        ]
        .spacing(20);
        if !self.can_save() {
            actions = actions.push(text("Name, tagline and about are required").size(14));
        }

        let mut content = column![
            text("Create Your Portfolio").size(32),
            self.profile_section(),
            self.projects_section(),
            self.social_links_section(),
            actions,
        ]
        .spacing(20)
        .max_width(800);

        if let Some(error) = &self.save_error {
            content = content.push(text(error.clone()).style(text::danger));
        }

        scrollable(container(content).center_x(Length::Fill).padding(30)).into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            DataEntryMessage::ProfileChanged(profile_field, value) => {
                self.draft.set_field(profile_field, value);
                Task::none()
            }
            DataEntryMessage::PickProfilePic => Task::perform(pick_image(), |uri| {
                msg(DataEntryMessage::ProfilePicLoaded(uri))
            }),
            DataEntryMessage::ProfilePicLoaded(Some(uri)) => {
                self.draft.set_profile_pic(Some(uri));
                Task::none()
            }
            DataEntryMessage::ProfilePicLoaded(None) => Task::none(),
            DataEntryMessage::ClearProfilePic => {
                self.draft.set_profile_pic(None);
                Task::none()
            }

            DataEntryMessage::AddProject => {
                self.draft.add_project();
                Task::none()
            }
            DataEntryMessage::ProjectChanged(id, project_field, value) => {
                self.draft.update_project(id, project_field, value);
                Task::none()
            }
            DataEntryMessage::PickProjectImage(id) => Task::perform(pick_image(), move |uri| {
                msg(DataEntryMessage::ProjectImageLoaded(id, uri))
            }),
            DataEntryMessage::ProjectImageLoaded(id, Some(uri)) => {
                self.draft.set_project_image(id, Some(uri));
                Task::none()
            }
            DataEntryMessage::ProjectImageLoaded(_, None) => Task::none(),
            DataEntryMessage::ClearProjectImage(id) => {
                self.draft.set_project_image(id, None);
                Task::none()
            }
            DataEntryMessage::RemoveProject(id) => {
                self.draft.remove_project(id);
                Task::none()
            }

            DataEntryMessage::AddSocialLink => {
                self.draft.add_social_link();
                Task::none()
            }
            DataEntryMessage::SocialChanged(id, social_field, value) => {
                self.draft.update_social_link(id, social_field, value);
                Task::none()
            }
            DataEntryMessage::RemoveSocialLink(id) => {
                self.draft.remove_social_link(id);
                Task::none()
            }

            DataEntryMessage::UseGithubToggled(enabled) => {
                self.use_github = enabled;
                self.fetch_status = None;
                if enabled && !self.draft.record().git_hub_username.trim().is_empty() {
                    self.fetch_repos()
                } else {
                    Task::none()
                }
            }
            DataEntryMessage::FetchRepos => self.fetch_repos(),
            DataEntryMessage::ReposFetched(Ok(projects)) => {
                self.fetching = false;
                self.fetch_status = Some(Ok(format!(
                    "Successfully loaded {} projects from GitHub",
                    projects.len()
                )));
                self.draft.replace_projects(projects);
                Task::none()
            }
            DataEntryMessage::ReposFetched(Err(error)) => {
                // The previously known project list stays as it was.
                self.fetching = false;
                self.fetch_status = Some(Err(error));
                Task::none()
            }

            DataEntryMessage::Save => {
                let Some(store) = state.store.as_ref() else {
                    self.save_error = Some("no portfolio file is open".to_string());
                    return Task::none();
                };
                match self.draft.save(store) {
                    Ok(()) => {
                        self.save_error = None;
                        Task::done(ScreenMessage::ParentMessage(ParentMessage::Saved(
                            self.draft.record().clone(),
                        )))
                    }
                    Err(e) => {
                        self.save_error = Some(e.to_string());
                        Task::none()
                    }
                }
            }
            DataEntryMessage::Preview => {
                Task::done(ScreenMessage::ParentMessage(ParentMessage::PreviewRequested))
            }
        }
    }
}

async fn pick_image() -> Option<String> {
    let file = AsyncFileDialog::new()
        .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp"])
        .pick_file()
        .await?;
    let bytes = file.read().await;
    Some(data_uri::encode(
        data_uri::mime_for_path(file.path()),
        &bytes,
    ))
}

fn card<'a>(
    content: impl Into<Element<'a, ScreenMessage<DataEntryScreen>>>,
) -> Element<'a, ScreenMessage<DataEntryScreen>> {
    container(content)
        .padding(15)
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
}

fn field<'a>(
    label: &'a str,
    input: impl Into<Element<'a, ScreenMessage<DataEntryScreen>>>,
) -> Element<'a, ScreenMessage<DataEntryScreen>> {
    column![text(label).size(14), input.into()].spacing(5).into()
}
