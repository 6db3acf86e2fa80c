pub mod board;
pub mod contact;
pub mod data_uri;
pub mod draft;
pub mod github;
pub mod store;
