//! SQLite database implementation.

use std::fs;
use std::path::Path;
use rusqlite::{Connection, Transaction, TransactionBehavior};
use crate::db::{DbError, DbResult, DbResults};
use crate::types::{Book, BookId, BookPatch, NewBook};

mod dbtypes;
mod fromdb;
mod read;
mod todb;
mod write;

/// SQLite [`Db`](crate::db::Db) implementation.
///
/// The connection is closed when this is dropped.
#[derive(Debug)]
pub struct Db { conn: Connection }

fn init_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(&dbtypes::schema())
        .map_err(|e| DbError::Internal(
            format!("error initialising database schema: {e}")))
}

fn connect(db_path: &Path) -> DbResult<Connection> {
    if db_path == Path::new(dbtypes::MEMORY_PATH) {
        return fromdb::internal_err(Connection::open_in_memory());
    }

    let db_path_parent = db_path.parent()
        .map(|p| if p.as_os_str().is_empty() { Path::new(".") } else { p })
        .unwrap_or(db_path);

    fs::create_dir_all(db_path_parent)
        .map_err(|e| DbError::Internal(
            format!("error creating directory ({}): {e}",
                    db_path_parent.display())))?;
    Connection::open(db_path)
        .map_err(|e| DbError::Internal(
            format!("error opening database ({}): {e}", db_path.display())))
}

/// Connect to the database and perform any required initialisation.
pub fn open(db_path: &Path) -> DbResult<Db> {
    let conn = connect(db_path)?;
    fromdb::internal_err(rusqlite::vtab::array::load_module(&conn))?;
    init_schema(&conn)?;
    log::debug!("opened database ({})", db_path.display());
    Ok(Db { conn })
}

impl crate::db::Db for Db {
    fn create_book(&self, book: &NewBook) -> DbResult<Book> {
        book.validate().map_err(DbError::Invalid)?;
        let book = write::create_book(&self.conn, book)?;
        log::debug!("created book {}", book.id);
        Ok(book)
    }

    fn get_all_books(&self) -> DbResults<Book> {
        read::get_all_books(&self.conn)
    }

    fn get_books(&self, ids: &[BookId]) -> DbResults<Book> {
        read::get_books(&self.conn, todb::ids(ids))
    }

    fn update_book(&self, id: BookId, patch: &BookPatch) -> DbResult<Book> {
        // take the write lock up front, so waiting for other writers goes
        // through the busy timeout instead of failing on lock upgrade
        let tx = fromdb::internal_err(Transaction::new_unchecked(
            &self.conn, TransactionBehavior::Immediate))?;

        read::get_book(&tx, id)?;
        if write::update_book(&tx, id, patch)? == 0 {
            return Err(DbError::NotFound(id));
        }
        let book = read::get_book(&tx, id)?;

        fromdb::internal_err(tx.commit())?;
        log::debug!("updated book {id}");
        Ok(book)
    }

    fn delete_all_books(&self) -> DbResult<usize> {
        let count = write::delete_all_books(&self.conn)?;
        log::debug!("deleted {count} books");
        Ok(count)
    }
}
