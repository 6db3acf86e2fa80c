pub mod core;
pub mod models;

pub use crate::core::board::{DragState, ProjectBoard};
pub use crate::core::contact::ContactMessage;
pub use crate::core::draft::{Draft, ProfileField, ProjectField, SocialField};
pub use crate::core::github::RepoListing;
pub use crate::core::store::{JsonFileStore, PortfolioStore};
pub use models::{PortfolioRecord, Project, SocialLink};

#[cfg(feature = "gui")]
pub mod gui;
