use std::sync::Arc;

use tonic::{Request, Response, Status};
use tracing::debug;

use crate::fault::FaultInjector;
use crate::grpc::bookstore::{
    self as pb, bookstore_server::Bookstore, CreateBookRequest, CreateShelfRequest,
    DeleteBookRequest, DeleteShelfRequest, GetBookRequest, GetShelfRequest, ListBooksRequest,
    ListBooksResponse, ListShelvesResponse,
};
use crate::store::{Book, Shelf, Store};
use crate::BookstoreError;

pub struct BookstoreServiceImpl {
    store: Arc<Store>,
    faults: Arc<FaultInjector>,
    log_requests: bool,
}

impl BookstoreServiceImpl {
    pub fn new(store: Arc<Store>, faults: Arc<FaultInjector>) -> Self {
        Self {
            store,
            faults,
            log_requests: false,
        }
    }

    /// Log the method and inbound metadata of every call
    pub fn with_request_logging(mut self, enabled: bool) -> Self {
        self.log_requests = enabled;
        self
    }

    /// Runs `op` against the store behind the fault check for this call
    fn guard<M, T, E, F>(&self, method: &str, request: &Request<M>, op: F) -> Result<T, Status>
    where
        F: FnOnce(&Store) -> Result<T, E>,
        BookstoreError: From<E>,
    {
        if self.log_requests {
            debug!(method, metadata = ?request.metadata(), "gRPC bookstore request");
        }
        self.faults
            .dispatch(request.metadata(), || op(self.store.as_ref()))
            .map_err(to_status)
    }
}

/// Maps a bookstore outcome onto the gRPC status it is reported as
pub fn to_status(err: BookstoreError) -> Status {
    match err {
        BookstoreError::NotFound(_) => Status::not_found(err.to_string()),
        BookstoreError::Validation(message) => Status::invalid_argument(message),
        BookstoreError::Synthetic(synthetic) => Status::new(synthetic.code(), synthetic.message()),
        other => Status::internal(other.to_string()),
    }
}

impl From<Shelf> for pb::Shelf {
    fn from(shelf: Shelf) -> Self {
        pb::Shelf {
            id: shelf.id,
            theme: shelf.theme,
        }
    }
}

impl From<Book> for pb::Book {
    fn from(book: Book) -> Self {
        pb::Book {
            id: book.id,
            author: book.author,
            title: book.title,
        }
    }
}

impl From<pb::Shelf> for Shelf {
    fn from(shelf: pb::Shelf) -> Self {
        Shelf {
            id: shelf.id,
            theme: shelf.theme,
        }
    }
}

impl From<pb::Book> for Book {
    fn from(book: pb::Book) -> Self {
        Book {
            id: book.id,
            title: book.title,
            author: book.author,
        }
    }
}

#[tonic::async_trait]
impl Bookstore for BookstoreServiceImpl {
    async fn list_shelves(
        &self,
        request: Request<()>,
    ) -> Result<Response<ListShelvesResponse>, Status> {
        let shelves = self.guard("ListShelves", &request, |store| {
            Ok::<_, BookstoreError>(store.list_shelves())
        })?;

        Ok(Response::new(ListShelvesResponse {
            shelves: shelves.into_iter().map(Into::into).collect(),
        }))
    }

    async fn create_shelf(
        &self,
        request: Request<CreateShelfRequest>,
    ) -> Result<Response<pb::Shelf>, Status> {
        let shelf = self.guard("CreateShelf", &request, |store| {
            // Any id in the request is ignored, the store assigns one
            let shelf = request.get_ref().shelf.as_ref().ok_or_else(|| {
                BookstoreError::Validation("Request is missing required 'shelf'.".to_string())
            })?;
            Ok::<_, BookstoreError>(store.create_shelf(shelf.theme.clone()))
        })?;

        Ok(Response::new(shelf.into()))
    }

    async fn get_shelf(
        &self,
        request: Request<GetShelfRequest>,
    ) -> Result<Response<pb::Shelf>, Status> {
        let id = request.get_ref().shelf;
        let shelf = self.guard("GetShelf", &request, |store| store.get_shelf(id))?;

        Ok(Response::new(shelf.into()))
    }

    async fn delete_shelf(
        &self,
        request: Request<DeleteShelfRequest>,
    ) -> Result<Response<()>, Status> {
        let id = request.get_ref().shelf;
        self.guard("DeleteShelf", &request, |store| store.delete_shelf(id))?;

        Ok(Response::new(()))
    }

    async fn list_books(
        &self,
        request: Request<ListBooksRequest>,
    ) -> Result<Response<ListBooksResponse>, Status> {
        let shelf = request.get_ref().shelf;
        let books = self.guard("ListBooks", &request, |store| store.list_books(shelf))?;

        Ok(Response::new(ListBooksResponse {
            books: books.into_iter().map(Into::into).collect(),
        }))
    }

    async fn create_book(
        &self,
        request: Request<CreateBookRequest>,
    ) -> Result<Response<pb::Book>, Status> {
        let book = self.guard("CreateBook", &request, |store| {
            let req = request.get_ref();
            let book = req.book.as_ref().ok_or_else(|| {
                BookstoreError::Validation("Request is missing required 'book'.".to_string())
            })?;
            Ok::<_, BookstoreError>(store.create_book(
                req.shelf,
                book.title.clone(),
                book.author.clone(),
            )?)
        })?;

        Ok(Response::new(book.into()))
    }

    async fn get_book(
        &self,
        request: Request<GetBookRequest>,
    ) -> Result<Response<pb::Book>, Status> {
        let (shelf, book) = (request.get_ref().shelf, request.get_ref().book);
        let book = self.guard("GetBook", &request, |store| store.get_book(shelf, book))?;

        Ok(Response::new(book.into()))
    }

    async fn delete_book(
        &self,
        request: Request<DeleteBookRequest>,
    ) -> Result<Response<()>, Status> {
        let (shelf, book) = (request.get_ref().shelf, request.get_ref().book);
        self.guard("DeleteBook", &request, |store| store.delete_book(shelf, book))?;

        Ok(Response::new(()))
    }
}
