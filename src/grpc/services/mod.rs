pub mod bookstore_service;

pub use bookstore_service::{to_status, BookstoreServiceImpl};
