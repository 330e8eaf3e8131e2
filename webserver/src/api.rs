use actix_web::dev::HttpServiceFactory;
use actix_web::web;
use bookstore::types::Book;
use serde::Serialize;

mod book;
mod check;
pub mod error;
pub mod notfound;

pub use error::ApiError;

pub const CHECK: &str = "check";
pub const BOOK: &str = "book";
pub const BOOK_BY_ID: &str = "book by id";
pub const BOOKS: &str = "books";

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Response body for book endpoints.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub status: Status,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn success(message: &str, data: T) -> Envelope<T> {
        Envelope {
            status: Status::Success,
            message: message.to_owned(),
            data: Some(data),
        }
    }

    pub fn error(message: String) -> Envelope<T> {
        Envelope { status: Status::Error, message, data: None }
    }
}

pub type BookResponse = Envelope<Book>;
pub type BooksResponse = Envelope<Vec<Book>>;

/// Response body with only a message.
#[derive(Debug, Serialize)]
pub struct Response {
    pub message: String,
}

impl Response {
    pub fn new(message: &str) -> Response {
        Response { message: message.to_owned() }
    }
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| {
            log::debug!("invalid request body: {err}");
            ApiError::Validation("Invalid request body.".to_owned()).into()
        })
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| {
            log::debug!("invalid path: {err}");
            ApiError::Validation("Book ID must be an integer".to_owned()).into()
        })
}

/// All API routes, under `root_path`.
pub fn service(root_path: &str) -> impl HttpServiceFactory {
    web::scope(root_path.trim_end_matches('/'))
        .app_data(json_config())
        .app_data(path_config())
        .service(web::resource("/check").name(CHECK).get(check::get))
        .service(web::resource("/book").name(BOOK)
            .post(book::post)
            .put(book::put_missing_id))
        .service(web::resource("/book/{id}").name(BOOK_BY_ID)
            .get(book::get)
            .put(book::put))
        .service(web::resource("/books").name(BOOKS)
            .get(book::list)
            .delete(book::delete_all))
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test};
    use bookstore::config::map;
    use serde_json::{json, Value};
    use crate::server;
    use super::*;

    fn state() -> web::Data<server::State> {
        let cfg = map::from_pairs(&[("db.sqlite.db-path", ":memory:")]);
        web::Data::new(server::State::new(&cfg).unwrap())
    }

    macro_rules! test_app {
        () => { test_app!("/") };
        ($root:expr) => {
            test::init_service(App::new()
                .app_data(state())
                .service(service($root))
                .default_service(web::to(notfound::get))).await
        };
    }

    macro_rules! call {
        ($app:expr, $req:expr) => {{
            let resp = test::call_service(&$app, $req.to_request()).await;
            let status = resp.status();
            let body: Value = test::read_body_json(resp).await;
            (status, body)
        }};
    }

    fn dune() -> Value {
        json!({"title": "Dune", "author": "Herbert", "price": 9.99})
    }

    #[actix_web::test]
    async fn check() {
        let app = test_app!();
        let (status, body) = call!(app, test::TestRequest::get().uri("/check"));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Hello, there"}));
    }

    #[actix_web::test]
    async fn create_book() {
        let app = test_app!();
        let (status, body) = call!(app, test::TestRequest::post()
            .uri("/book").set_json(dune()));
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["status"], "success");
        assert!(body["data"]["id"].as_i64().unwrap() > 0);
        assert_eq!(body["data"]["title"], "Dune");
        assert_eq!(body["data"]["price"], 9.99);

        let id = body["data"]["id"].as_i64().unwrap();
        let (status, body) = call!(app, test::TestRequest::get()
            .uri(&format!("/book/{id}")));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["author"], "Herbert");
    }

    #[actix_web::test]
    async fn create_book_default_price() {
        let app = test_app!();
        let (status, body) = call!(app, test::TestRequest::post()
            .uri("/book").set_json(json!({"title": "Emma", "author": "Austen"})));
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["price"], 0.0);
    }

    #[actix_web::test]
    async fn create_book_missing_fields() {
        let app = test_app!();
        for book in [
            json!({"title": "", "author": "Herbert"}),
            json!({"title": "Dune", "author": ""}),
            json!({"title": "Dune"}),
        ] {
            let (status, body) = call!(app, test::TestRequest::post()
                .uri("/book").set_json(book));
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["status"], "error");
            assert_eq!(body["message"], "Title and Author field are required.");
            assert!(body.get("data").is_none());
        }

        let (_, body) = call!(app, test::TestRequest::get().uri("/books"));
        assert_eq!(body["data"], json!([]));
    }

    #[actix_web::test]
    async fn create_book_malformed_body() {
        let app = test_app!();
        let (status, body) = call!(app, test::TestRequest::post()
            .uri("/book")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"title\": "));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid request body.");
    }

    #[actix_web::test]
    async fn create_book_without_content_type() {
        let app = test_app!();
        let (status, _) = call!(app, test::TestRequest::post()
            .uri("/book")
            .set_payload(dune().to_string()));
        assert_eq!(status, StatusCode::CREATED);
    }

    #[actix_web::test]
    async fn list_empty() {
        let app = test_app!();
        let (status, body) = call!(app, test::TestRequest::get().uri("/books"));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "success");
        assert_eq!(body["message"], "No books found");
        assert_eq!(body["data"], json!([]));
    }

    #[actix_web::test]
    async fn list_books() {
        let app = test_app!();
        call!(app, test::TestRequest::post().uri("/book").set_json(dune()));
        call!(app, test::TestRequest::post().uri("/book")
            .set_json(json!({"title": "Emma", "author": "Austen", "price": 4.5})));

        let (status, body) = call!(app, test::TestRequest::get().uri("/books"));
        assert_eq!(status, StatusCode::OK);
        let titles: Vec<&str> = body["data"].as_array().unwrap().iter()
            .map(|b| b["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, vec!["Dune", "Emma"]);
    }

    #[actix_web::test]
    async fn get_missing_book() {
        let app = test_app!();
        let (status, body) = call!(app, test::TestRequest::get().uri("/book/5"));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], "error");
    }

    #[actix_web::test]
    async fn update_price_only() {
        let app = test_app!();
        let (_, created) = call!(app, test::TestRequest::post()
            .uri("/book").set_json(dune()));
        let id = created["data"]["id"].as_i64().unwrap();

        let (status, body) = call!(app, test::TestRequest::put()
            .uri(&format!("/book/{id}")).set_json(json!({"price": 12.5})));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Book updated successfully");
        assert_eq!(body["data"]["id"], id);
        assert_eq!(body["data"]["price"], 12.5);
        assert_eq!(body["data"]["title"], "Dune");
        assert_eq!(body["data"]["author"], "Herbert");
    }

    #[actix_web::test]
    async fn update_price_to_zero() {
        let app = test_app!();
        let (_, created) = call!(app, test::TestRequest::post()
            .uri("/book").set_json(dune()));
        let id = created["data"]["id"].as_i64().unwrap();

        let (status, body) = call!(app, test::TestRequest::put()
            .uri(&format!("/book/{id}")).set_json(json!({"price": 0})));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["price"], 0.0);
    }

    #[actix_web::test]
    async fn update_missing_book() {
        let app = test_app!();
        let (status, body) = call!(app, test::TestRequest::put()
            .uri("/book/99").set_json(json!({"title": "Dune"})));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Book not found");
    }

    #[actix_web::test]
    async fn update_no_fields() {
        let app = test_app!();
        let (_, created) = call!(app, test::TestRequest::post()
            .uri("/book").set_json(dune()));
        let id = created["data"]["id"].as_i64().unwrap();

        for patch in [json!({}), json!({"title": null}), json!({"isbn": "x"})] {
            let (status, body) = call!(app, test::TestRequest::put()
                .uri(&format!("/book/{id}")).set_json(patch));
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["message"], "No fields to update");
        }

        let (status, _) = call!(app, test::TestRequest::put()
            .uri(&format!("/book/{id}")).set_json(json!({"author": ""})));
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, body) = call!(app, test::TestRequest::get()
            .uri(&format!("/book/{id}")));
        assert_eq!(body["data"], created["data"]);
    }

    #[actix_web::test]
    async fn update_bad_id() {
        let app = test_app!();
        let (status, body) = call!(app, test::TestRequest::put()
            .uri("/book/abc").set_json(json!({"price": 1.0})));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Book ID must be an integer");

        let (status, body) = call!(app, test::TestRequest::put()
            .uri("/book").set_json(json!({"price": 1.0})));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Book ID is required");
    }

    #[actix_web::test]
    async fn delete_all() {
        let app = test_app!();
        let (status, body) = call!(app, test::TestRequest::delete().uri("/books"));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "No books to delete"}));

        call!(app, test::TestRequest::post().uri("/book").set_json(dune()));
        let (status, body) = call!(app, test::TestRequest::delete().uri("/books"));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "All books deleted successfully"}));

        let (_, body) = call!(app, test::TestRequest::get().uri("/books"));
        assert_eq!(body["data"], json!([]));
    }

    #[actix_web::test]
    async fn unknown_path() {
        let app = test_app!();
        let (status, body) = call!(app, test::TestRequest::get().uri("/nothing"));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"message": "Not found"}));
    }

    #[actix_web::test]
    async fn root_path() {
        let app = test_app!("/api/");
        let (status, _) = call!(app, test::TestRequest::get().uri("/api/check"));
        assert_eq!(status, StatusCode::OK);
        let (status, _) = call!(app, test::TestRequest::get().uri("/check"));
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
