pub mod book_records;
pub mod recommendations;

use crate::domain::RepositoryError;

pub(crate) fn db_err(err: sqlx::Error) -> RepositoryError {
    RepositoryError::unexpected(err.to_string())
}
