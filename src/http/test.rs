use super::*;
use crate::config::{FaultConfig, SeedSet, StoreConfig};
use crate::store::{Book, Shelf};
use actix_web::{test, App};
use serde_json::{json, Value};

fn state_with(seed: SeedSet) -> AppState {
    AppState::new(
        Arc::new(Store::from_config(&StoreConfig {
            seed,
            default_theme: None,
        })),
        Arc::new(FaultInjector::new(&FaultConfig::default())),
    )
}

macro_rules! bookstore_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state.clone()))
                .configure(configure),
        )
        .await
    };
}

#[actix_web::test]
async fn test_list_shelves_seeded() {
    let state = state_with(SeedSet::Demo);
    let app = bookstore_app!(state);

    let req = test::TestRequest::get().uri("/shelves").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(
        body,
        json!({"shelves": [{"id": 1, "theme": "Fiction"}, {"id": 2, "theme": "Fantasy"}]})
    );
}

#[actix_web::test]
async fn test_create_then_get_shelf() {
    let state = state_with(SeedSet::Empty);
    let app = bookstore_app!(state);

    let req = test::TestRequest::post()
        .uri("/shelves")
        .set_json(json!({"theme": "Fiction"}))
        .to_request();
    let created: Shelf = test::call_and_read_body_json(&app, req).await;
    assert_eq!(created.theme, "Fiction");

    let req = test::TestRequest::get()
        .uri(&format!("/shelves/{}", created.id))
        .to_request();
    let fetched: Shelf = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched, created);
}

#[actix_web::test]
async fn test_create_shelf_validation() {
    let state = state_with(SeedSet::Empty);
    let app = bookstore_app!(state);

    let req = test::TestRequest::post()
        .uri("/shelves")
        .set_json(json!({"name": "no theme"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = test::read_body_json(resp).await;
    assert_eq!(
        body,
        ErrorBody {
            error: 400,
            message: "Shelf resource is missing required 'theme'.".to_string(),
        }
    );

    let req = test::TestRequest::post().uri("/shelves").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = test::read_body_json(resp).await;
    assert_eq!(body.message, "Missing request body.");

    assert!(state.store.list_shelves().is_empty());
}

#[actix_web::test]
async fn test_get_missing_shelf() {
    let state = state_with(SeedSet::Empty);
    let app = bookstore_app!(state);

    let req = test::TestRequest::get().uri("/shelves/7").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorBody = test::read_body_json(resp).await;
    assert_eq!(body.error, 404);
    assert_eq!(body.message, "Cannot find shelf shelves/7");
}

#[actix_web::test]
async fn test_non_numeric_id_is_not_found() {
    let state = state_with(SeedSet::Demo);
    let app = bookstore_app!(state);

    let req = test::TestRequest::get().uri("/shelves/fiction").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorBody = test::read_body_json(resp).await;
    assert_eq!(body.message, "Cannot find shelves/fiction");
}

#[actix_web::test]
async fn test_delete_shelf_twice() {
    let state = state_with(SeedSet::Demo);
    let app = bookstore_app!(state);

    let req = test::TestRequest::delete().uri("/shelves/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::delete().uri("/shelves/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // The book that lived on shelf 1 went with it
    let req = test::TestRequest::get().uri("/shelves/1/books/3").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_book_lifecycle() {
    let state = state_with(SeedSet::Demo);
    let app = bookstore_app!(state);

    let req = test::TestRequest::post()
        .uri("/shelves/2/books/")
        .set_json(json!({"author": "Ursula K. Le Guin", "title": "A Wizard of Earthsea"}))
        .to_request();
    let created: Book = test::call_and_read_body_json(&app, req).await;
    assert_eq!(created.id, 5);
    assert_eq!(created.title, "A Wizard of Earthsea");

    let req = test::TestRequest::get().uri("/shelves/2/books").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let titles: Vec<&str> = body["books"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["A Game of Thrones", "A Wizard of Earthsea"]);

    let req = test::TestRequest::get().uri("/shelves/2/books/5").to_request();
    let fetched: Book = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched, created);

    let req = test::TestRequest::delete().uri("/shelves/2/books/5").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::delete().uri("/shelves/2/books/5").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorBody = test::read_body_json(resp).await;
    assert_eq!(body.message, "Cannot find book shelves/2/books/5");
}

#[actix_web::test]
async fn test_create_book_validation_order() {
    let state = state_with(SeedSet::Demo);
    let app = bookstore_app!(state);
    let before = state.store.snapshot();

    let req = test::TestRequest::post()
        .uri("/shelves/1/books")
        .set_json(json!({"title": "No Author"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = test::read_body_json(resp).await;
    assert_eq!(body.message, "Book resource is missing required 'author'.");

    let req = test::TestRequest::post()
        .uri("/shelves/1/books")
        .set_json(json!({"author": "No Title"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: ErrorBody = test::read_body_json(resp).await;
    assert_eq!(body.message, "Book resource is missing required 'title'.");

    // Validation runs before the shelf lookup
    let req = test::TestRequest::post()
        .uri("/shelves/99/books/")
        .set_json(json!({}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/shelves/99/books/")
        .set_json(json!({"author": "A", "title": "T"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    assert_eq!(state.store.snapshot(), before);
}

#[actix_web::test]
async fn test_wrong_shelf_for_book_matches_missing_shelf() {
    let state = state_with(SeedSet::Demo);
    let app = bookstore_app!(state);

    // Book 3 lives on shelf 1, not shelf 2
    let req = test::TestRequest::get().uri("/shelves/2/books/3").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/shelves/42/books/3").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorBody = test::read_body_json(resp).await;
    assert_eq!(body.message, "Cannot find book shelves/42/books/3");
}

#[actix_web::test]
async fn test_fault_header_short_circuits() {
    let state = state_with(SeedSet::Demo);
    let app = bookstore_app!(state);
    let before = state.store.snapshot();

    let cases = [("ABORTED", 409), ("INTERNAL", 500), ("DATA_LOSS", 500)];
    for (fault, status) in cases {
        let req = test::TestRequest::delete()
            .uri("/shelves/1")
            .insert_header(("x-grpc-test", fault))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), status);
        let body: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(
            body,
            ErrorBody {
                error: status,
                message: fault.to_string(),
            }
        );
    }

    // Fault takes precedence over validation too
    let req = test::TestRequest::post()
        .uri("/shelves")
        .insert_header(("x-grpc-test", "ABORTED"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CONFLICT);

    assert_eq!(state.store.snapshot(), before);
}

#[actix_web::test]
async fn test_unknown_fault_header_passes_through() {
    let state = state_with(SeedSet::Demo);
    let app = bookstore_app!(state);

    let req = test::TestRequest::get()
        .uri("/shelves/1")
        .insert_header(("x-grpc-test", "SOMETHING_ELSE"))
        .to_request();
    let shelf: Shelf = test::call_and_read_body_json(&app, req).await;
    assert_eq!(shelf.theme, "Fiction");
}

#[actix_web::test]
async fn test_version_echoes_headers() {
    let state = state_with(SeedSet::Empty);
    let app = bookstore_app!(state);

    let req = test::TestRequest::get()
        .uri("/version")
        .insert_header(("x-forwarded-for", "10.0.0.1"))
        .append_header(("x-multi", "a"))
        .append_header(("x-multi", "b"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["x-forwarded-for"], "10.0.0.1");
    assert_eq!(body["x-multi"], "a, b");
}

#[actix_web::test]
async fn test_echo_routes() {
    let state = state_with(SeedSet::Empty);
    let app = bookstore_app!(state);

    let req = test::TestRequest::put()
        .uri("/echo")
        .set_json(json!({"message": "hello"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({"message": "hello"}));

    let req = test::TestRequest::get().uri("/echo").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({}));

    let req = test::TestRequest::post()
        .uri("/echo2")
        .insert_header(("x-trace", "abc"))
        .set_json(json!([1, 2, 3]))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["body"], json!([1, 2, 3]));
    assert_eq!(body["headers"]["x-trace"], "abc");

    let req = test::TestRequest::post()
        .uri("/echo/auth")
        .set_json(json!({"k": "v"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({"k": "v"}));
}

#[actix_web::test]
async fn test_echo_token() {
    let state = state_with(SeedSet::Empty);
    let app = bookstore_app!(state);

    let req = test::TestRequest::get()
        .uri("/echo_token/disable_auth")
        .insert_header(("authorization", "Bearer token-1"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!("Bearer token-1"));

    let req = test::TestRequest::get()
        .uri("/echo_token/default_enable_auth")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, Value::Null);
}

#[actix_web::test]
async fn test_static_routes() {
    let state = state_with(SeedSet::Empty);
    let app = bookstore_app!(state);

    let req = test::TestRequest::get().uri("/restricted").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({"msg": "restricted"}));

    let req = test::TestRequest::get().uri("/quota_read").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({"msg": "ok"}));

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "bookstore");
}

#[actix_web::test]
async fn test_error_response_mapping() {
    use crate::fault::{Fault, SyntheticError};
    use crate::store::ResourceName;
    use tonic::Code;

    assert_eq!(
        BookstoreError::NotFound(ResourceName::Shelf(1)).status_code(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        BookstoreError::Validation("bad".to_string()).status_code(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        BookstoreError::Synthetic(SyntheticError {
            fault: Fault {
                name: "UNAVAILABLE",
                code: Code::Unavailable,
            },
        })
        .status_code(),
        StatusCode::SERVICE_UNAVAILABLE
    );
    assert_eq!(
        BookstoreError::Network("down".to_string()).status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}
