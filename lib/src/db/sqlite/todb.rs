use std::rc::Rc;
use rusqlite::{Row, types::{Type, Value}};
use crate::types::BookId;
use crate::db::DbResult;

/// For binding to `rarray(...)`.
pub fn ids(ids: &[BookId]) -> Rc<Vec<Value>> {
    Rc::new(ids.iter().copied().map(Value::from).collect())
}

/// Adapt a row reader for `query_map`/`query_row`.  Errors come back out of
/// rusqlite as conversion failures carrying the original message.
pub fn mapper<T, F>(f: F) -> impl Fn(&Row<'_>) -> rusqlite::Result<T>
where
    F: Fn(&Row<'_>) -> DbResult<T>,
{
    move |r| f(r).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, Type::Null, Box::new(e))
    })
}
