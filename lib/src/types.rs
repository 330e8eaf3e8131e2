use serde::{Deserialize, Serialize};

pub type BookId = i64;

/// A book as stored in the database.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub price: f64,
}

/// A book that has not been stored yet, so has no ID.
///
/// Missing `title` and `author` deserialise as empty strings so that
/// [`NewBook::validate`] can report them.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct NewBook {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub price: f64,
}

impl NewBook {
    pub fn validate(&self) -> Result<(), String> {
        if self.title.is_empty() || self.author.is_empty() {
            Err("Title and Author field are required.".to_owned())
        } else {
            Ok(())
        }
    }

    /// Attach the ID assigned by the database.
    pub fn with_id(self, id: BookId) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            price: self.price,
        }
    }
}

/// Changes to apply to a stored book.
///
/// `None` leaves the field unchanged.  A field set to `null` in JSON is the
/// same as a missing field.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct BookPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl BookPatch {
    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.price.is_none()
    }

    /// Check supplied fields only; an empty patch is valid here.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.as_deref() == Some("") {
            return Err("Title cannot be empty.".to_owned());
        }
        if self.author.as_deref() == Some("") {
            return Err("Author cannot be empty.".to_owned());
        }
        Ok(())
    }
}
