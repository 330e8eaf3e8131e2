use actix_web::{web, HttpResponse, Responder};
use bookstore::db::util;
use bookstore::types::{BookId, BookPatch, NewBook};
use crate::server;
use super::{ApiError, BookResponse, BooksResponse, Response};

pub async fn post(data: web::Data<server::State>, book: web::Json<NewBook>)
-> Result<impl Responder, ApiError> {
    let book = book.into_inner();
    book.validate().map_err(ApiError::Validation)?;
    let book = data.db.create_book(&book)
        .map_err(|e| ApiError::from_db(e, "Error creating book"))?;
    Ok(HttpResponse::Created()
        .json(BookResponse::success("Book created successfully", book)))
}

pub async fn list(data: web::Data<server::State>)
-> Result<impl Responder, ApiError> {
    let books = data.db.get_all_books()
        .map_err(|e| ApiError::from_db(e, "Error fetching books from database"))?;
    let message = if books.is_empty() { "No books found" }
                  else { "Books retrieved successfully" };
    Ok(web::Json(BooksResponse::success(message, books)))
}

pub async fn get(data: web::Data<server::State>, id: web::Path<BookId>)
-> Result<impl Responder, ApiError> {
    let book = util::get_book(data.db.as_ref(), id.into_inner())
        .map_err(|e| ApiError::from_db(e, "Error fetching book"))?;
    Ok(web::Json(BookResponse::success("Book retrieved successfully", book)))
}

pub async fn put(
    data: web::Data<server::State>,
    id: web::Path<BookId>,
    patch: web::Json<BookPatch>,
) -> Result<impl Responder, ApiError> {
    let patch = patch.into_inner();
    patch.validate().map_err(ApiError::Validation)?;
    let book = data.db.update_book(id.into_inner(), &patch)
        .map_err(|e| ApiError::from_db(e, "Error updating book"))?;
    Ok(web::Json(BookResponse::success("Book updated successfully", book)))
}

/// `PUT` without an ID in the path.
pub async fn put_missing_id() -> Result<HttpResponse, ApiError> {
    Err(ApiError::Validation("Book ID is required".to_owned()))
}

pub async fn delete_all(data: web::Data<server::State>)
-> Result<impl Responder, ApiError> {
    let count = data.db.delete_all_books()
        .map_err(|e| ApiError::from_db(e, "Error deleting books from database"))?;
    let message = if count == 0 { "No books to delete" }
                  else { "All books deleted successfully" };
    Ok(web::Json(Response::new(message)))
}
