use uuid::Uuid;

use crate::core::store::PortfolioStore;
use crate::models::{PortfolioRecord, Project, SocialLink};

/// Scalar fields of the profile section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Tagline,
    About,
    Skills,
    Interests,
    GitHubUsername,
}

/// Text fields of one project entry. The image is set separately since it is
/// not free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Title,
    Description,
    GithubUrl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialField {
    Name,
    Url,
}

/// In-memory working copy of a [`PortfolioRecord`] being edited.
///
/// Nothing here validates content; required fields are enforced at the form
/// boundary. Mutations keyed by an unknown id are ignored rather than
/// panicking, since the id may have gone stale through an earlier removal in
/// the same session.
#[derive(Debug, Clone, Default)]
pub struct Draft {
    record: PortfolioRecord,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_record(record: PortfolioRecord) -> Self {
        Self { record }
    }

    /// Stored record, or a fresh default on first run.
    pub fn load(store: &impl PortfolioStore) -> anyhow::Result<Self> {
        Ok(Self {
            record: store.load()?.unwrap_or_default(),
        })
    }

    pub fn record(&self) -> &PortfolioRecord {
        &self.record
    }

    pub fn set_field(&mut self, field: ProfileField, value: String) {
        match field {
            ProfileField::Name => self.record.name = value,
            ProfileField::Tagline => self.record.tagline = value,
            ProfileField::About => self.record.about = value,
            ProfileField::Skills => self.record.skills = value,
            ProfileField::Interests => self.record.interests = value,
            ProfileField::GitHubUsername => self.record.git_hub_username = value,
        }
    }

    pub fn set_profile_pic(&mut self, image: Option<String>) {
        self.record.profile_pic = image;
    }

    /// Appends an empty project and returns its id.
    pub fn add_project(&mut self) -> Uuid {
        let project = Project::default();
        let id = project.id;
        self.record.projects.push(project);
        id
    }

    pub fn update_project(&mut self, id: Uuid, field: ProjectField, value: String) -> bool {
        let Some(project) = self.project_mut(id) else {
            return false;
        };
        match field {
            ProjectField::Title => project.title = value,
            ProjectField::Description => project.description = value,
            ProjectField::GithubUrl => project.github_url = value,
        }
        true
    }

    pub fn set_project_image(&mut self, id: Uuid, image: Option<String>) -> bool {
        let Some(project) = self.project_mut(id) else {
            return false;
        };
        project.image = image;
        true
    }

    pub fn remove_project(&mut self, id: Uuid) -> bool {
        let Some(position) = self.record.project_position(id) else {
            return false;
        };
        self.record.projects.remove(position);
        true
    }

    /// Appends an empty social link and returns its id.
    pub fn add_social_link(&mut self) -> Uuid {
        let link = SocialLink::default();
        let id = link.id;
        self.record.social_links.push(link);
        id
    }

    pub fn update_social_link(&mut self, id: Uuid, field: SocialField, value: String) -> bool {
        let Some(link) = self
            .record
            .social_links
            .iter_mut()
            .find(|link| link.id == id)
        else {
            return false;
        };
        match field {
            SocialField::Name => link.name = value,
            SocialField::Url => link.url = value,
        }
        true
    }

    pub fn remove_social_link(&mut self, id: Uuid) -> bool {
        let Some(position) = self.record.social_link_position(id) else {
            return false;
        };
        self.record.social_links.remove(position);
        true
    }

    /// Wholesale replacement used by the GitHub path. Listings carry no image
    /// data, so locally uploaded project images are discarded with the old
    /// list.
    pub fn replace_projects(&mut self, projects: Vec<Project>) {
        self.record.projects = projects;
    }

    /// Commits the whole draft; the record becomes visible to the renderer on
    /// its next load.
    pub fn save(&self, store: &impl PortfolioStore) -> anyhow::Result<()> {
        store.save(&self.record)
    }

    fn project_mut(&mut self, id: Uuid) -> Option<&mut Project> {
        self.record
            .projects
            .iter_mut()
            .find(|project| project.id == id)
    }
}
