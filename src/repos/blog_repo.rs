/*
 * Responsibility
 * - blogs CRUD
 * - "userId" is the recorded owner (nullable: legacy rows have none);
 *   ownership is written in the same INSERT that creates the row, so the
 *   owner linkage cannot be half-persisted
 * - list/get join the owner's username so handlers can expand the owner
 *   to a minimal projection without a second round trip
 */
use sqlx::PgPool;
use uuid::Uuid;

use crate::repos::error::RepoError;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BlogRow {
    #[sqlx(rename = "blogId")]
    pub blog_id: i64,

    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i32,

    #[sqlx(rename = "userId")]
    pub user_id: Option<Uuid>,
}

/// Blog row with the owner's username joined in (None when the row has no
/// recorded owner).
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BlogWithOwnerRow {
    #[sqlx(rename = "blogId")]
    pub blog_id: i64,

    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i32,

    #[sqlx(rename = "userId")]
    pub user_id: Option<Uuid>,

    #[sqlx(rename = "ownerUsername")]
    pub owner_username: Option<String>,
}

pub async fn list(db: &PgPool) -> Result<Vec<BlogWithOwnerRow>, RepoError> {
    let rows = sqlx::query_as::<_, BlogWithOwnerRow>(
        r#"
        SELECT
            b."blogId", b.title, b.author, b.url, b.likes, b."userId",
            u."username" AS "ownerUsername"
        FROM blogs b
        LEFT JOIN users u ON u."userId" = b."userId"
        ORDER BY b."blogId" DESC
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn get(db: &PgPool, blog_id: i64) -> Result<Option<BlogWithOwnerRow>, RepoError> {
    let row = sqlx::query_as::<_, BlogWithOwnerRow>(
        r#"
        SELECT
            b."blogId", b.title, b.author, b.url, b.likes, b."userId",
            u."username" AS "ownerUsername"
        FROM blogs b
        LEFT JOIN users u ON u."userId" = b."userId"
        WHERE b."blogId" = $1
        "#,
    )
    .bind(blog_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn create(
    db: &PgPool,
    title: &str,
    author: Option<&str>,
    url: &str,
    likes: i32,
    user_id: Uuid,
) -> Result<BlogRow, RepoError> {
    let row = sqlx::query_as::<_, BlogRow>(
        r#"
        INSERT INTO blogs (title, author, url, likes, "userId")
        VALUES ($1, $2, $3, $4, $5)
        RETURNING "blogId", title, author, url, likes, "userId"
        "#,
    )
    .bind(title)
    .bind(author)
    .bind(url)
    .bind(likes)
    .bind(user_id)
    .fetch_one(db)
    .await?;

    Ok(row)
}

pub async fn update_likes(
    db: &PgPool,
    blog_id: i64,
    likes: i32,
) -> Result<Option<BlogRow>, RepoError> {
    let row = sqlx::query_as::<_, BlogRow>(
        r#"
        UPDATE blogs
        SET likes = $2
        WHERE "blogId" = $1
        RETURNING "blogId", title, author, url, likes, "userId"
        "#,
    )
    .bind(blog_id)
    .bind(likes)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn delete(db: &PgPool, blog_id: i64) -> Result<bool, RepoError> {
    let result = sqlx::query(
        r#"
        DELETE FROM blogs
        WHERE "blogId" = $1
        "#,
    )
    .bind(blog_id)
    .execute(db)
    .await?;

    Ok(result.rows_affected() > 0)
}
