use rusqlite::Row;
use crate::db::{DbError, DbResult};
use crate::types::Book;

pub fn internal_err<T>(r: rusqlite::Result<T>) -> DbResult<T> {
    r.map_err(|e| DbError::Internal(format!("internal error: {e}")))
}

pub fn internal_err_fn<T, F>(f: F) -> DbResult<T>
where
    F: FnOnce() -> rusqlite::Result<T>
{
    internal_err(f())
}

pub fn row_get<T>(r: &Row, i: usize) -> DbResult<T>
where
    T: rusqlite::types::FromSql
{
    internal_err(r.get(i))
}

pub const BOOKS_SQL: &str = "id, title, author, price";

/// for result selected by [`BOOKS_SQL`]
pub fn book(r: &Row) -> DbResult<Book> {
    Ok(Book {
        id: row_get(r, 0)?,
        title: row_get(r, 1)?,
        author: row_get(r, 2)?,
        price: row_get(r, 3)?,
    })
}
