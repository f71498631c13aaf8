use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::{SeedSet, StoreConfig};

/// Identifier shared by shelves and books
pub type ResourceId = i64;

/// Issues identifiers from one process-wide sequence.
///
/// Shelves and books draw from the same counter, so a book id never
/// collides with another book on a different shelf.
#[derive(Debug, Default)]
pub struct IdAllocator {
    last: AtomicI64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an id strictly greater than every id returned before
    pub fn next(&self) -> ResourceId {
        self.last.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Makes every later `next()` return something greater than `id`
    pub fn reserve_through(&self, id: ResourceId) {
        self.last.fetch_max(id, Ordering::SeqCst);
    }

    /// The most recently issued (or reserved) id, 0 when nothing was issued
    pub fn last(&self) -> ResourceId {
        self.last.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shelf {
    pub id: ResourceId,
    pub theme: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: ResourceId,
    pub title: String,
    pub author: String,
}

/// Name of an addressed resource, `shelves/{id}` or `shelves/{id}/books/{id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceName {
    Shelf(ResourceId),
    Book { shelf: ResourceId, book: ResourceId },
}

impl ResourceName {
    pub fn kind(&self) -> &'static str {
        match self {
            ResourceName::Shelf(_) => "shelf",
            ResourceName::Book { .. } => "book",
        }
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceName::Shelf(id) => write!(f, "shelves/{id}"),
            ResourceName::Book { shelf, book } => write!(f, "shelves/{shelf}/books/{book}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Cannot find {} {}", .0.kind(), .0)]
    NotFound(ResourceName),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Point-in-time copy of everything the store holds
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub last_id: ResourceId,
    pub shelves: Vec<ShelfSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShelfSnapshot {
    pub shelf: Shelf,
    pub books: Vec<Book>,
}

#[derive(Debug)]
struct ShelfEntry {
    theme: String,
    books: BTreeMap<ResourceId, Book>,
}

impl ShelfEntry {
    fn to_shelf(&self, id: ResourceId) -> Shelf {
        Shelf {
            id,
            theme: self.theme.clone(),
        }
    }
}

/// In-memory shelf/book hierarchy.
///
/// Ids only grow, so iterating the id-keyed maps yields creation order.
/// One mutex covers the whole hierarchy and id allocation happens while it
/// is held, so no operation ever sees another one half applied.
#[derive(Debug)]
pub struct Store {
    ids: IdAllocator,
    shelves: Mutex<BTreeMap<ResourceId, ShelfEntry>>,
    default_theme: Option<String>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Empty store that keeps empty themes verbatim
    pub fn new() -> Self {
        Self {
            ids: IdAllocator::new(),
            shelves: Mutex::new(BTreeMap::new()),
            default_theme: None,
        }
    }

    /// Store seeded and configured according to `config`
    pub fn from_config(config: &StoreConfig) -> Self {
        let mut store = Self::new();
        store.default_theme = config.default_theme.clone();
        store.seed(config.seed);
        store
    }

    fn seed(&self, seed: SeedSet) {
        match seed {
            SeedSet::Demo => {
                let fiction = self.create_shelf("Fiction");
                let fantasy = self.create_shelf("Fantasy");
                // Shelves were created just above
                let _ = self.create_book(fiction.id, "REAMDE", "Neal Stephenson");
                let _ = self.create_book(fantasy.id, "A Game of Thrones", "George R.R. Martin");
            }
            SeedSet::Classic => {
                self.insert_fixed(100, "Kids", 1001, "Alphabet", "");
                self.insert_fixed(200, "Classic", 2001, "Hamlet", "Shakspeare");
            }
            SeedSet::Empty => {}
        }
        info!(?seed, last_id = self.ids.last(), "Seeded bookstore");
    }

    fn insert_fixed(
        &self,
        shelf_id: ResourceId,
        theme: &str,
        book_id: ResourceId,
        title: &str,
        author: &str,
    ) {
        let mut shelves = self.lock();
        let mut books = BTreeMap::new();
        books.insert(
            book_id,
            Book {
                id: book_id,
                title: title.to_string(),
                author: author.to_string(),
            },
        );
        shelves.insert(
            shelf_id,
            ShelfEntry {
                theme: theme.to_string(),
                books,
            },
        );
        self.ids.reserve_through(shelf_id.max(book_id));
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<ResourceId, ShelfEntry>> {
        // Every mutation is a single insert or remove, a panic cannot leave
        // the map half-updated
        self.shelves.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn list_shelves(&self) -> Vec<Shelf> {
        self.lock()
            .iter()
            .map(|(id, entry)| entry.to_shelf(*id))
            .collect()
    }

    pub fn create_shelf(&self, theme: impl Into<String>) -> Shelf {
        let mut theme = theme.into();
        if theme.is_empty() {
            if let Some(default) = &self.default_theme {
                theme = default.clone();
            }
        }

        let mut shelves = self.lock();
        let id = self.ids.next();
        let shelf = Shelf {
            id,
            theme: theme.clone(),
        };
        shelves.insert(
            id,
            ShelfEntry {
                theme,
                books: BTreeMap::new(),
            },
        );
        debug!(shelf = id, theme = %shelf.theme, "Created shelf");
        shelf
    }

    pub fn get_shelf(&self, shelf: ResourceId) -> StoreResult<Shelf> {
        self.lock()
            .get(&shelf)
            .map(|entry| entry.to_shelf(shelf))
            .ok_or(StoreError::NotFound(ResourceName::Shelf(shelf)))
    }

    /// Removes the shelf and every book on it
    pub fn delete_shelf(&self, shelf: ResourceId) -> StoreResult<()> {
        let removed = self
            .lock()
            .remove(&shelf)
            .ok_or(StoreError::NotFound(ResourceName::Shelf(shelf)))?;
        debug!(shelf, books = removed.books.len(), "Deleted shelf");
        Ok(())
    }

    pub fn list_books(&self, shelf: ResourceId) -> StoreResult<Vec<Book>> {
        self.lock()
            .get(&shelf)
            .map(|entry| entry.books.values().cloned().collect())
            .ok_or(StoreError::NotFound(ResourceName::Shelf(shelf)))
    }

    pub fn create_book(
        &self,
        shelf: ResourceId,
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> StoreResult<Book> {
        let mut shelves = self.lock();
        let entry = shelves
            .get_mut(&shelf)
            .ok_or(StoreError::NotFound(ResourceName::Shelf(shelf)))?;

        let book = Book {
            id: self.ids.next(),
            title: title.into(),
            author: author.into(),
        };
        entry.books.insert(book.id, book.clone());
        debug!(shelf, book = book.id, "Created book");
        Ok(book)
    }

    /// A missing shelf and a missing book report the same error
    pub fn get_book(&self, shelf: ResourceId, book: ResourceId) -> StoreResult<Book> {
        self.lock()
            .get(&shelf)
            .and_then(|entry| entry.books.get(&book))
            .cloned()
            .ok_or(StoreError::NotFound(ResourceName::Book { shelf, book }))
    }

    pub fn delete_book(&self, shelf: ResourceId, book: ResourceId) -> StoreResult<()> {
        self.lock()
            .get_mut(&shelf)
            .and_then(|entry| entry.books.remove(&book))
            .ok_or(StoreError::NotFound(ResourceName::Book { shelf, book }))?;
        debug!(shelf, book, "Deleted book");
        Ok(())
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        let shelves = self.lock();
        StoreSnapshot {
            last_id: self.ids.last(),
            shelves: shelves
                .iter()
                .map(|(id, entry)| ShelfSnapshot {
                    shelf: entry.to_shelf(*id),
                    books: entry.books.values().cloned().collect(),
                })
                .collect(),
        }
    }
}
