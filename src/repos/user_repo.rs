/*
 * Responsibility
 * - SQLx operations for the users table
 * - Takes a PgPool and provides lookup/creation of principals
 * - The unique index on "username" is the authority on uniqueness;
 *   a 23505 violation comes back as RepoError::Conflict
 */
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoError;

#[derive(Debug, FromRow)]
pub struct UserRow {
    #[sqlx(rename = "userId")]
    pub id: Uuid,
    pub username: String,
    pub name: String,
    #[sqlx(rename = "passwordHash")]
    pub password_hash: String,
}

pub async fn list(db: &PgPool) -> Result<Vec<UserRow>, RepoError> {
    let rows = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT "userId", "username", "name", "passwordHash"
        FROM users
        ORDER BY "createdAt" DESC
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn create(
    db: &PgPool,
    username: &str,
    name: &str,
    password_hash: &str,
) -> Result<UserRow, RepoError> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        INSERT INTO users ("username", "name", "passwordHash")
        VALUES ($1, $2, $3)
        RETURNING "userId", "username", "name", "passwordHash"
        "#,
    )
    .bind(username)
    .bind(name)
    .bind(password_hash)
    .fetch_one(db)
    .await
    .map_err(RepoError::from_sqlx)?;

    Ok(row)
}

pub async fn get(db: &PgPool, user_id: Uuid) -> Result<Option<UserRow>, RepoError> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT "userId", "username", "name", "passwordHash"
        FROM users
        WHERE "userId" = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn find_by_username(db: &PgPool, username: &str) -> Result<Option<UserRow>, RepoError> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT "userId", "username", "name", "passwordHash"
        FROM users
        WHERE "username" = $1
        "#,
    )
    .bind(username)
    .fetch_optional(db)
    .await?;

    Ok(row)
}
