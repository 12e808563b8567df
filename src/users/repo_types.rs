use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// Role assigned when a user is created without an explicit one.
pub const DEFAULT_ROLE: &str = "user";

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,                    // database-assigned, stable for the row's lifetime
    pub email: String,              // unique across all users
    #[serde(skip_serializing)]
    pub password: String,           // opaque credential material, not exposed in JSON
    pub role: String,               // free-form label, "user" unless set otherwise
    pub created_at: OffsetDateTime, // set by the database at insert
}
