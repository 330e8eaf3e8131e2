use std::rc::Rc;
use rusqlite::{Connection, OptionalExtension, named_params, types::Value};
use crate::db::{DbError, DbResult, DbResults};
use crate::types::{Book, BookId};
use super::dbtypes::table::BOOKS;
use super::fromdb::{self, BOOKS_SQL};
use super::todb;

pub fn get_all_books(conn: &Connection) -> DbResults<Book> {
    fromdb::internal_err_fn(|| {
        let mut stmt = conn.prepare(format!("
            SELECT {BOOKS_SQL} FROM {BOOKS}
            ORDER BY id
        ").as_ref())?;
        let rows = stmt.query_map((), todb::mapper(fromdb::book))?;
        rows.collect()
    })
}

pub fn get_books(conn: &Connection, dbids: Rc<Vec<Value>>)
-> DbResults<Book> {
    fromdb::internal_err_fn(|| {
        let mut stmt = conn.prepare(format!("
            SELECT {BOOKS_SQL} FROM {BOOKS}
            WHERE id IN rarray(:ids)
            ORDER BY id
        ").as_ref())?;
        let rows = stmt.query_map(
            named_params! { ":ids": dbids },
            todb::mapper(fromdb::book))?;
        rows.collect()
    })
}

pub fn get_book(conn: &Connection, id: BookId) -> DbResult<Book> {
    let book = fromdb::internal_err_fn(|| {
        conn.query_row(format!("
            SELECT {BOOKS_SQL} FROM {BOOKS}
            WHERE id = :id
        ").as_ref(), named_params! { ":id": id }, todb::mapper(fromdb::book))
            .optional()
    })?;
    book.ok_or(DbError::NotFound(id))
}
