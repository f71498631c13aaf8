//! Bookstore - a shelf/book test backend for exercising API gateways
//!
//! The same in-memory store is served over gRPC and a REST-style HTTP API.
//! Every call first passes through a [`fault::FaultInjector`], which lets a
//! driving test force a specific failure by request metadata alone.

pub mod client;
pub mod config;
pub mod fault;
pub mod grpc;
pub mod http;
pub mod store;

pub use config::{BookstoreConfig, ConfigError, SeedSet};
pub use fault::{Fault, FaultInjector, SignalSource, SyntheticError};
pub use store::{Book, ResourceId, ResourceName, Shelf, Store, StoreError};

/// Result every transport adapter encodes onto the wire
pub type Outcome<T> = Result<T, BookstoreError>;

#[derive(thiserror::Error, Debug)]
pub enum BookstoreError {
    #[error("Cannot find {} {}", .0.kind(), .0)]
    NotFound(ResourceName),

    #[error("{0}")]
    Validation(String),

    #[error("Synthetic fault: {0}")]
    Synthetic(SyntheticError),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl From<StoreError> for BookstoreError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(name) => BookstoreError::NotFound(name),
        }
    }
}

impl From<SyntheticError> for BookstoreError {
    fn from(err: SyntheticError) -> Self {
        BookstoreError::Synthetic(err)
    }
}

// Tests are in individual modules and integration tests
