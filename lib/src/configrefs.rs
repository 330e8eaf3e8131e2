use std::path::PathBuf;
use crate::config::{ValueRef, parse};

pub const DB_SQLITE_PATH: ValueRef<'_, PathBuf> = ValueRef {
    names: &["db", "sqlite", "db-path"],
    def: "/var/lib/bookstore/db.sqlite",
    type_: &parse::FILE_PATH,
    validators: &[],
};
