pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod users;

pub use config::AppConfig;
pub use db::AppState;
pub use error::StoreError;
pub use users::{User, DEFAULT_ROLE};
