/**
 * Responsibility
 * - The meaning a repo reports upward
 */
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("db error")]
    Db(#[from] sqlx::Error),
    #[error("conflict")]
    Conflict,
}

impl RepoError {
    pub fn from_sqlx(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(dbe) = &e
            && dbe.code().as_deref() == Some("23505")
        {
            return RepoError::Conflict;
        }
        RepoError::Db(e)
    }
}
