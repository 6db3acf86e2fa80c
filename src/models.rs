use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The single persisted document describing one portfolio site.
///
/// The wire format keeps the camelCase field names of the original browser
/// build, so a `portfolio.json` exported from it loads unchanged. List items
/// saved without ids get fresh ones on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioRecord {
    pub name: String,
    pub tagline: String,
    pub about: String,
    /// Data URI, when a picture was uploaded.
    pub profile_pic: Option<String>,
    /// Comma-separated tag list, free text.
    pub skills: String,
    /// Comma-separated tag list, free text.
    pub interests: String,
    /// Empty when the project list is maintained by hand.
    pub git_hub_username: String,
    pub projects: Vec<Project>,
    pub social_links: Vec<SocialLink>,
}

impl PortfolioRecord {
    pub fn skill_tags(&self) -> Vec<String> {
        split_tags(&self.skills)
    }

    pub fn interest_tags(&self) -> Vec<String> {
        split_tags(&self.interests)
    }

    pub fn project_position(&self, id: Uuid) -> Option<usize> {
        self.projects.iter().position(|project| project.id == id)
    }

    pub fn social_link_position(&self, id: Uuid) -> Option<usize> {
        self.social_links.iter().position(|link| link.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Data URI, when an image was uploaded.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub github_url: String,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            title: String::new(),
            description: String::new(),
            image: None,
            github_url: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Platform label ("GitHub", "LinkedIn", ...).
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl Default for SocialLink {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            url: String::new(),
        }
    }
}

fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
