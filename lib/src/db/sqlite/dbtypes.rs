pub mod table {
    pub const BOOKS: &str = "books";
}

/// Path which opens a private in-memory database rather than a file.
pub const MEMORY_PATH: &str = ":memory:";

pub fn schema() -> String {
    format!("
        CREATE TABLE IF NOT EXISTS {} (
            id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL CHECK (title != ''),
            author TEXT NOT NULL CHECK (author != ''),
            price REAL NOT NULL DEFAULT 0
        );
    ", table::BOOKS)
}
