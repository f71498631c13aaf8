//! REST-style HTTP surface of the bookstore.
//!
//! Errors are reported as `{"error": <status>, "message": <text>}`.

use std::sync::Arc;

use actix_web::error::{InternalError, PathError};
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};

use crate::fault::FaultInjector;
use crate::store::Store;
use crate::BookstoreError;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub faults: Arc<FaultInjector>,
}

impl AppState {
    pub fn new(store: Arc<Store>, faults: Arc<FaultInjector>) -> Self {
        Self { store, faults }
    }
}

/// Error body shared by every failing route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: u16,
    pub message: String,
}

impl ResponseError for BookstoreError {
    fn status_code(&self) -> StatusCode {
        match self {
            BookstoreError::NotFound(_) => StatusCode::NOT_FOUND,
            BookstoreError::Validation(_) => StatusCode::BAD_REQUEST,
            BookstoreError::Synthetic(synthetic) => StatusCode::from_u16(synthetic.http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = match self {
            BookstoreError::Synthetic(synthetic) => synthetic.message().to_string(),
            other => other.to_string(),
        };
        HttpResponse::build(status).json(ErrorBody {
            error: status.as_u16(),
            message,
        })
    }
}

/// Non-numeric ids can never name a resource
fn path_error(err: PathError, req: &HttpRequest) -> actix_web::Error {
    let body = ErrorBody {
        error: StatusCode::NOT_FOUND.as_u16(),
        message: format!("Cannot find {}", req.path().trim_matches('/')),
    };
    InternalError::from_response(err, HttpResponse::NotFound().json(body)).into()
}

/// Registers every bookstore route
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(path_error))
        // Health and diagnostics
        .route("/health", web::get().to(api::health))
        .route("/version", web::get().to(api::version))
        .service(web::resource("/echo").to(api::echo))
        .service(web::resource("/echo2").to(api::echo2))
        .service(
            web::resource("/echo/auth")
                .route(web::get().to(api::echo))
                .route(web::post().to(api::echo)),
        )
        .route("/echo_token/disable_auth", web::get().to(api::echo_token))
        .route(
            "/echo_token/default_enable_auth",
            web::get().to(api::echo_token),
        )
        .route("/restricted", web::get().to(api::restricted))
        .route("/quota_read", web::get().to(api::quota_read))
        // Shelves
        .service(
            web::resource("/shelves")
                .route(web::get().to(api::list_shelves))
                .route(web::post().to(api::create_shelf)),
        )
        .service(
            web::resource("/shelves/{shelf}")
                .route(web::get().to(api::get_shelf))
                .route(web::delete().to(api::delete_shelf)),
        )
        // Books
        .service(
            web::resource("/shelves/{shelf}/books")
                .route(web::get().to(api::list_books))
                .route(web::post().to(api::create_book)),
        )
        .service(web::resource("/shelves/{shelf}/books/").route(web::post().to(api::create_book)))
        .service(
            web::resource("/shelves/{shelf}/books/{book}")
                .route(web::get().to(api::get_book))
                .route(web::delete().to(api::delete_book)),
        );
}

pub mod api {
    use std::collections::BTreeMap;

    use actix_web::{web, HttpRequest, HttpResponse, Result};
    use serde::Deserialize;
    use serde_json::{json, Value};

    use super::AppState;
    use crate::store::ResourceId;
    use crate::BookstoreError;

    #[derive(Debug, Deserialize)]
    pub struct ShelfBody {
        pub theme: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    pub struct BookBody {
        pub author: Option<String>,
        pub title: Option<String>,
    }

    fn missing_body() -> BookstoreError {
        BookstoreError::Validation("Missing request body.".to_string())
    }

    /// Request headers as a JSON object, repeated headers joined by ", "
    fn headers_json(req: &HttpRequest) -> Value {
        let mut headers: BTreeMap<String, String> = BTreeMap::new();
        for (name, value) in req.headers() {
            let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
            headers
                .entry(name.as_str().to_string())
                .and_modify(|existing| {
                    existing.push_str(", ");
                    existing.push_str(&value);
                })
                .or_insert(value);
        }
        json!(headers)
    }

    fn body_json(body: &web::Bytes) -> Value {
        serde_json::from_slice(body).unwrap_or_else(|_| json!({}))
    }

    pub async fn list_shelves(
        req: HttpRequest,
        state: web::Data<AppState>,
    ) -> Result<HttpResponse> {
        let shelves = state.faults.dispatch(req.headers(), || {
            Ok::<_, BookstoreError>(state.store.list_shelves())
        })?;
        Ok(HttpResponse::Ok().json(json!({ "shelves": shelves })))
    }

    pub async fn create_shelf(
        req: HttpRequest,
        body: Option<web::Json<ShelfBody>>,
        state: web::Data<AppState>,
    ) -> Result<HttpResponse> {
        let shelf = state.faults.dispatch(req.headers(), || {
            let body = body.ok_or_else(missing_body)?;
            let theme = body.into_inner().theme.ok_or_else(|| {
                BookstoreError::Validation(
                    "Shelf resource is missing required 'theme'.".to_string(),
                )
            })?;
            Ok::<_, BookstoreError>(state.store.create_shelf(theme))
        })?;
        Ok(HttpResponse::Ok().json(shelf))
    }

    pub async fn get_shelf(
        req: HttpRequest,
        path: web::Path<ResourceId>,
        state: web::Data<AppState>,
    ) -> Result<HttpResponse> {
        let id = path.into_inner();
        let shelf = state
            .faults
            .dispatch(req.headers(), || state.store.get_shelf(id))?;
        Ok(HttpResponse::Ok().json(shelf))
    }

    pub async fn delete_shelf(
        req: HttpRequest,
        path: web::Path<ResourceId>,
        state: web::Data<AppState>,
    ) -> Result<HttpResponse> {
        let id = path.into_inner();
        state
            .faults
            .dispatch(req.headers(), || state.store.delete_shelf(id))?;
        Ok(HttpResponse::NoContent().finish())
    }

    pub async fn list_books(
        req: HttpRequest,
        path: web::Path<ResourceId>,
        state: web::Data<AppState>,
    ) -> Result<HttpResponse> {
        let shelf = path.into_inner();
        let books = state
            .faults
            .dispatch(req.headers(), || state.store.list_books(shelf))?;
        Ok(HttpResponse::Ok().json(json!({ "books": books })))
    }

    pub async fn create_book(
        req: HttpRequest,
        path: web::Path<ResourceId>,
        body: Option<web::Json<BookBody>>,
        state: web::Data<AppState>,
    ) -> Result<HttpResponse> {
        let shelf = path.into_inner();
        let book = state.faults.dispatch(req.headers(), || {
            let body = body.ok_or_else(missing_body)?.into_inner();
            let author = body.author.ok_or_else(|| {
                BookstoreError::Validation(
                    "Book resource is missing required 'author'.".to_string(),
                )
            })?;
            let title = body.title.ok_or_else(|| {
                BookstoreError::Validation(
                    "Book resource is missing required 'title'.".to_string(),
                )
            })?;
            Ok::<_, BookstoreError>(state.store.create_book(shelf, title, author)?)
        })?;
        Ok(HttpResponse::Ok().json(book))
    }

    pub async fn get_book(
        req: HttpRequest,
        path: web::Path<(ResourceId, ResourceId)>,
        state: web::Data<AppState>,
    ) -> Result<HttpResponse> {
        let (shelf, book) = path.into_inner();
        let book = state
            .faults
            .dispatch(req.headers(), || state.store.get_book(shelf, book))?;
        Ok(HttpResponse::Ok().json(book))
    }

    pub async fn delete_book(
        req: HttpRequest,
        path: web::Path<(ResourceId, ResourceId)>,
        state: web::Data<AppState>,
    ) -> Result<HttpResponse> {
        let (shelf, book) = path.into_inner();
        state
            .faults
            .dispatch(req.headers(), || state.store.delete_book(shelf, book))?;
        Ok(HttpResponse::NoContent().finish())
    }

    /// Echoes the request headers so a driver can see what the gateway forwarded
    pub async fn version(req: HttpRequest) -> Result<HttpResponse> {
        Ok(HttpResponse::Ok().json(headers_json(&req)))
    }

    pub async fn echo(body: web::Bytes) -> Result<HttpResponse> {
        Ok(HttpResponse::Ok().json(body_json(&body)))
    }

    pub async fn echo2(req: HttpRequest, body: web::Bytes) -> Result<HttpResponse> {
        Ok(HttpResponse::Ok().json(json!({
            "headers": headers_json(&req),
            "body": body_json(&body),
        })))
    }

    pub async fn echo_token(req: HttpRequest) -> Result<HttpResponse> {
        let token = req
            .headers()
            .get("authorization")
            .and_then(|value| value.to_str().ok());
        Ok(HttpResponse::Ok().json(token))
    }

    pub async fn restricted() -> Result<HttpResponse> {
        Ok(HttpResponse::Ok().json(json!({"msg": "restricted"})))
    }

    pub async fn quota_read() -> Result<HttpResponse> {
        Ok(HttpResponse::Ok().json(json!({"msg": "ok"})))
    }

    pub async fn health() -> Result<HttpResponse> {
        Ok(HttpResponse::Ok().json(json!({
            "status": "healthy",
            "service": "bookstore",
            "version": env!("CARGO_PKG_VERSION")
        })))
    }
}

#[cfg(test)]
mod test;
