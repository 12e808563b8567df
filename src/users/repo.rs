use sqlx::PgPool;

use crate::error::StoreError;
use crate::users::repo_types::{User, DEFAULT_ROLE};

impl User {
    /// Insert a new user. `id` and `created_at` are assigned by the database;
    /// a missing `role` falls back to [`DEFAULT_ROLE`].
    pub async fn create(
        db: &PgPool,
        email: &str,
        password: &str,
        role: Option<&str>,
    ) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password, role)
            VALUES ($1, $2, $3)
            RETURNING id, email, password, role, created_at
            "#,
        )
        .bind(email)
        .bind(password)
        .bind(role.unwrap_or(DEFAULT_ROLE))
        .fetch_one(db)
        .await
        .map_err(|e| StoreError::on_write(e, email))?;
        tracing::debug!(user_id = user.id, email = %user.email, role = %user.role, "user created");
        Ok(user)
    }

    /// Find a user by id.
    pub async fn find_by_id(db: &PgPool, id: i32) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password, role, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Find a user by email.
    pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password, role, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// List users, newest first.
    pub async fn list(db: &PgPool, limit: i64, offset: i64) -> Result<Vec<User>, StoreError> {
        let rows = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password, role, created_at
            FROM users
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    /// Change a user's role. Returns the updated record, `None` if no such user.
    pub async fn set_role(db: &PgPool, id: i32, role: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET role = $2
            WHERE id = $1
            RETURNING id, email, password, role, created_at
            "#,
        )
        .bind(id)
        .bind(role)
        .fetch_optional(db)
        .await?;
        if let Some(u) = &user {
            tracing::debug!(user_id = u.id, role = %u.role, "role updated");
        }
        Ok(user)
    }

    /// Replace a user's stored credential material.
    pub async fn set_password(
        db: &PgPool,
        id: i32,
        password: &str,
    ) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET password = $2
            WHERE id = $1
            RETURNING id, email, password, role, created_at
            "#,
        )
        .bind(id)
        .bind(password)
        .fetch_optional(db)
        .await?;
        if let Some(u) = &user {
            tracing::debug!(user_id = u.id, "password updated");
        }
        Ok(user)
    }

    /// Change a user's email. Fails like [`User::create`] when the new email
    /// is already taken.
    pub async fn set_email(db: &PgPool, id: i32, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET email = $2
            WHERE id = $1
            RETURNING id, email, password, role, created_at
            "#,
        )
        .bind(id)
        .bind(email)
        .fetch_optional(db)
        .await
        .map_err(|e| StoreError::on_write(e, email))?;
        Ok(user)
    }

    /// Delete a user. Returns whether a row was removed.
    pub async fn delete(db: &PgPool, id: i32) -> Result<bool, StoreError> {
        let result = sqlx::query(
            r#"
            DELETE FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(db)
        .await?;
        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::debug!(user_id = id, "user deleted");
        }
        Ok(deleted)
    }
}
