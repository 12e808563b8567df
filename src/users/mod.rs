pub mod password;
mod repo;
mod repo_types;

pub use repo_types::{User, DEFAULT_ROLE};
