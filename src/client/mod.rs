use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::config::DEFAULT_SIGNAL_KEY;
use crate::fault::{Fault, SyntheticError, DEFAULT_FAULTS};
use crate::http::ErrorBody;
use crate::store::{Book, ResourceId, ResourceName, Shelf};
use crate::BookstoreError;

/// Client for the bookstore HTTP API
pub struct BookstoreClient {
    client: Client,
    base_url: String,
    signal_key: String,
    fault: Option<String>,
    known_faults: Vec<Fault>,
}

#[derive(Deserialize)]
struct ShelvesBody {
    shelves: Vec<Shelf>,
}

#[derive(Deserialize)]
struct BooksBody {
    books: Vec<Book>,
}

/// Accepts `host:port` as well as a full `http(s)://` URL
fn normalize_base_url(addr: &str) -> String {
    let addr = addr.trim_end_matches('/');
    if addr.starts_with("http://") || addr.starts_with("https://") {
        addr.to_string()
    } else {
        format!("http://{addr}")
    }
}

/// Decodes a successful response body
fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, BookstoreError> {
    Ok(serde_json::from_slice(body)?)
}

/// Turns a failed response back into the error the server reported.
///
/// A fault is only recognised when its name is in `known_faults`; an
/// unrecognised fault name is reported as a `Network` error.
fn decode_error(
    status: u16,
    body: &str,
    resource: Option<ResourceName>,
    known_faults: &[Fault],
) -> BookstoreError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|error| error.message)
        .unwrap_or_else(|_| body.to_string());

    if let Some(fault) = known_faults
        .iter()
        .find(|fault| fault.name == message && fault.http_status() == status)
    {
        return BookstoreError::Synthetic(SyntheticError { fault: *fault });
    }

    match (status, resource) {
        (404, Some(name)) => BookstoreError::NotFound(name),
        (400, _) => BookstoreError::Validation(message),
        _ => BookstoreError::Network(format!(
            "Request failed with status {status}: {message}"
        )),
    }
}

impl BookstoreClient {
    /// Create a new client for the server at `addr`
    pub fn new(addr: &str) -> Result<Self, BookstoreError> {
        Self::with_timeout(addr, Duration::from_secs(30))
    }

    pub fn with_timeout(addr: &str, timeout: Duration) -> Result<Self, BookstoreError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BookstoreError::Network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: normalize_base_url(addr),
            signal_key: DEFAULT_SIGNAL_KEY.to_string(),
            fault: None,
            known_faults: DEFAULT_FAULTS.to_vec(),
        })
    }

    /// Ask the server to fail every following call with `fault`
    pub fn with_fault(mut self, fault: impl Into<String>) -> Self {
        self.fault = Some(fault.into());
        self
    }

    /// Recognise `fault` in error responses, matching a server fault table
    /// extended with `FaultInjector::with_fault`
    pub fn with_known_fault(mut self, fault: Fault) -> Self {
        self.known_faults.retain(|known| known.name != fault.name);
        self.known_faults.push(fault);
        self
    }

    /// Header the fault signal is sent under
    pub fn with_signal_key(mut self, key: impl Into<String>) -> Self {
        self.signal_key = key.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn fault(&self) -> Option<&str> {
        self.fault.as_deref()
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("Sending {} {}", method, url);

        let builder = self.client.request(method, url);
        match &self.fault {
            Some(fault) => builder.header(self.signal_key.as_str(), fault.as_str()),
            None => builder,
        }
    }

    async fn send(
        &self,
        builder: RequestBuilder,
        resource: Option<ResourceName>,
    ) -> Result<Response, BookstoreError> {
        let response = builder.send().await.map_err(|e| {
            BookstoreError::Network(format!("Failed to connect to {}: {}", self.base_url, e))
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(decode_error(
            status.as_u16(),
            &body,
            resource,
            &self.known_faults,
        ))
    }

    async fn json<T: DeserializeOwned>(response: Response) -> Result<T, BookstoreError> {
        let body = response
            .bytes()
            .await
            .map_err(|e| BookstoreError::Network(format!("Failed to read response: {e}")))?;
        parse_body(&body)
    }

    pub async fn list_shelves(&self) -> Result<Vec<Shelf>, BookstoreError> {
        let response = self.send(self.request(Method::GET, "/shelves"), None).await?;
        Ok(Self::json::<ShelvesBody>(response).await?.shelves)
    }

    pub async fn create_shelf(&self, theme: &str) -> Result<Shelf, BookstoreError> {
        let builder = self
            .request(Method::POST, "/shelves")
            .json(&json!({ "theme": theme }));
        Self::json(self.send(builder, None).await?).await
    }

    pub async fn get_shelf(&self, shelf: ResourceId) -> Result<Shelf, BookstoreError> {
        let name = ResourceName::Shelf(shelf);
        let builder = self.request(Method::GET, &format!("/{name}"));
        Self::json(self.send(builder, Some(name)).await?).await
    }

    pub async fn delete_shelf(&self, shelf: ResourceId) -> Result<(), BookstoreError> {
        let name = ResourceName::Shelf(shelf);
        let builder = self.request(Method::DELETE, &format!("/{name}"));
        self.send(builder, Some(name)).await?;
        Ok(())
    }

    pub async fn list_books(&self, shelf: ResourceId) -> Result<Vec<Book>, BookstoreError> {
        let name = ResourceName::Shelf(shelf);
        let builder = self.request(Method::GET, &format!("/{name}/books"));
        let response = self.send(builder, Some(name)).await?;
        Ok(Self::json::<BooksBody>(response).await?.books)
    }

    pub async fn create_book(
        &self,
        shelf: ResourceId,
        title: &str,
        author: &str,
    ) -> Result<Book, BookstoreError> {
        let name = ResourceName::Shelf(shelf);
        let builder = self
            .request(Method::POST, &format!("/{name}/books/"))
            .json(&json!({ "title": title, "author": author }));
        Self::json(self.send(builder, Some(name)).await?).await
    }

    pub async fn get_book(
        &self,
        shelf: ResourceId,
        book: ResourceId,
    ) -> Result<Book, BookstoreError> {
        let name = ResourceName::Book { shelf, book };
        let builder = self.request(Method::GET, &format!("/{name}"));
        Self::json(self.send(builder, Some(name)).await?).await
    }

    pub async fn delete_book(
        &self,
        shelf: ResourceId,
        book: ResourceId,
    ) -> Result<(), BookstoreError> {
        let name = ResourceName::Book { shelf, book };
        let builder = self.request(Method::DELETE, &format!("/{name}"));
        self.send(builder, Some(name)).await?;
        Ok(())
    }

    /// Headers the server received, as echoed by `/version`
    pub async fn version(&self) -> Result<serde_json::Value, BookstoreError> {
        Self::json(self.send(self.request(Method::GET, "/version"), None).await?).await
    }
}
