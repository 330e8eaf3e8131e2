//! Helpers for writing to the database.

use rusqlite::{Connection, ToSql, named_params};
use crate::db::{DbError, DbResult};
use crate::types::{Book, BookId, BookPatch, NewBook};
use super::dbtypes::table::BOOKS;

pub fn create_book(conn: &Connection, book: &NewBook) -> DbResult<Book> {
    conn.execute(format!("
        INSERT INTO {BOOKS} (title, author, price)
        VALUES (:title, :author, :price)
    ").as_ref(), named_params! {
        ":title": book.title,
        ":author": book.author,
        ":price": book.price,
    })
        .map(|_| book.clone().with_id(conn.last_insert_rowid()))
        .map_err(|e| DbError::Internal(
            format!("error creating book ({book:?}): {e}")))
}

/// Only the fields set in `patch` appear in the statement.
///
/// Returns the number of rows changed.
pub fn update_book(conn: &Connection, id: BookId, patch: &BookPatch)
-> DbResult<usize> {
    patch.validate().map_err(DbError::Invalid)?;

    let mut sets: Vec<&str> = Vec::new();
    let mut params: Vec<(&str, &dyn ToSql)> = vec![(":id", &id as &dyn ToSql)];
    if let Some(title) = &patch.title {
        sets.push("title = :title");
        params.push((":title", title as &dyn ToSql));
    }
    if let Some(author) = &patch.author {
        sets.push("author = :author");
        params.push((":author", author as &dyn ToSql));
    }
    if let Some(price) = &patch.price {
        sets.push("price = :price");
        params.push((":price", price as &dyn ToSql));
    }
    if sets.is_empty() {
        return Err(DbError::Invalid("No fields to update".to_owned()));
    }

    conn.execute(format!("
        UPDATE {BOOKS}
        SET {}
        WHERE id = :id
    ", sets.join(", ")).as_ref(), params.as_slice())
        .map_err(|e| DbError::Internal(
            format!("error updating book ({id}, {patch:?}): {e}")))
}

pub fn delete_all_books(conn: &Connection) -> DbResult<usize> {
    conn.execute(format!("
        DELETE FROM {BOOKS}
    ").as_ref(), ())
        .map_err(|e| DbError::Internal(format!("error deleting books: {e}")))
}
