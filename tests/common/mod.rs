mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from folio for tests
pub use folio::{
    Draft, DragState, JsonFileStore, PortfolioRecord, PortfolioStore, Project, ProjectBoard,
    SocialLink,
};
