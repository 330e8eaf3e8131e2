use crate::types::{Book, BookId};
use super::{Db, DbError, DbResult, DbResults};

fn get_single_helper<T>(id: BookId, r: DbResults<T>) -> DbResult<T> {
    r.map(|bs| bs.into_iter().next())
        .transpose()
        .unwrap_or(Err(DbError::NotFound(id)))
}

pub fn get_book(db: &(impl Db + ?Sized), id: BookId) -> DbResult<Book> {
    get_single_helper(id, db.get_books(&[id]))
}
