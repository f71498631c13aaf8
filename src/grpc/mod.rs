// Generated protobuf code
pub mod bookstore {
    include!("endpoints.examples.bookstore.rs");
}

// Service implementations
pub mod services;

// Re-export commonly used types
pub use bookstore::{
    bookstore_client::BookstoreClient,
    bookstore_server::{Bookstore as BookstoreTrait, BookstoreServer},
    *,
};
