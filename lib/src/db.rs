use crate::config::{self, Config};
use crate::configrefs;
use crate::types::{Book, BookId, BookPatch, NewBook};

mod sqlite;
pub mod util;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DbError {
    #[error("book does not exist: {0}")]
    NotFound(BookId),
    /// The request can never succeed as given.
    #[error("{0}")]
    Invalid(String),
    #[error("{0}")]
    Internal(String),
}

pub type DbResult<T> = Result<T, DbError>;
pub type DbResults<T> = DbResult<Vec<T>>;

pub trait Db {
    /// Store a new book and return it with its assigned ID.
    fn create_book(&self, book: &NewBook) -> DbResult<Book>;

    /// Sorted by ID.
    fn get_all_books(&self) -> DbResults<Book>;

    /// Books which don't exist are left out of the result.
    fn get_books(&self, ids: &[BookId]) -> DbResults<Book>;

    /// Change only the fields set in `patch`, and return the book as stored
    /// afterwards.
    ///
    /// Fails with [`DbError::NotFound`] before looking at `patch` if there is
    /// no book with the ID.
    fn update_book(&self, id: BookId, patch: &BookPatch) -> DbResult<Book>;

    /// Returns the number of books deleted.
    fn delete_all_books(&self) -> DbResult<usize>;
}

pub fn open(cfg: &dyn Config) -> Result<impl Db, String> {
    let db_path = config::get_ref(cfg, &configrefs::DB_SQLITE_PATH)?;
    sqlite::open(&db_path).map_err(|e| e.to_string())
}
