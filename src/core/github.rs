use anyhow::{Context, ensure};
use serde::Deserialize;
use uuid::Uuid;

use crate::models::Project;

/// Matches the original build: the portfolio shows the four most recently
/// updated repositories.
pub const DEFAULT_REPO_LIMIT: u8 = 4;

const API_BASE: &str = "https://api.github.com";
// The listing endpoint rejects requests without a User-Agent.
const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));

/// One entry of the public repository listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RepoListing {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
}

/// Fetches up to `limit` repositories for `username`, most recently updated
/// first. A non-success status is an error; the caller keeps its current
/// project list on any failure.
pub async fn fetch_repos(
    client: &reqwest::Client,
    username: &str,
    limit: u8,
) -> anyhow::Result<Vec<RepoListing>> {
    let username = username.trim();
    ensure!(!username.is_empty(), "GitHub username is required");

    let url = format!("{API_BASE}/users/{username}/repos?sort=updated&per_page={limit}");
    let response = client
        .get(&url)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .send()
        .await
        .with_context(|| format!("failed to reach the repository listing for {username}"))?;
    ensure!(
        response.status().is_success(),
        "GitHub API error: {}",
        response.status()
    );
    response
        .json()
        .await
        .context("unexpected repository listing payload")
}

impl From<RepoListing> for Project {
    fn from(repo: RepoListing) -> Self {
        Project {
            id: Uuid::new_v4(),
            title: repo.name,
            description: repo
                .description
                .unwrap_or_else(|| "No description provided".to_string()),
            // The listing carries no repository images.
            image: None,
            github_url: repo.html_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_maps_to_project_without_image() {
        let repo = RepoListing {
            id: 42,
            name: "folio".to_string(),
            description: Some("A portfolio builder".to_string()),
            html_url: "https://github.com/octocat/folio".to_string(),
        };
        let project = Project::from(repo);
        assert_eq!(project.title, "folio");
        assert_eq!(project.description, "A portfolio builder");
        assert_eq!(project.image, None);
        assert_eq!(project.github_url, "https://github.com/octocat/folio");
    }

    #[test]
    fn missing_description_gets_placeholder() {
        let repo = RepoListing {
            id: 7,
            name: "dotfiles".to_string(),
            description: None,
            html_url: "https://github.com/octocat/dotfiles".to_string(),
        };
        assert_eq!(Project::from(repo).description, "No description provided");
    }

    #[test]
    fn listing_deserializes_from_api_payload() {
        let json = r#"[
            {
                "id": 1296269,
                "name": "Hello-World",
                "full_name": "octocat/Hello-World",
                "description": null,
                "html_url": "https://github.com/octocat/Hello-World",
                "fork": false
            }
        ]"#;
        let repos: Vec<RepoListing> = serde_json::from_str(json).unwrap();
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].name, "Hello-World");
        assert_eq!(repos[0].description, None);
    }

    #[tokio::test]
    async fn empty_username_is_rejected_before_any_request() {
        let client = reqwest::Client::new();
        let result = fetch_repos(&client, "   ", DEFAULT_REPO_LIMIT).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("username"));
    }
}
