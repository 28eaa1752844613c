//! # Storage Layer
//!
//! The [`ArticleStore`] trait is the only thing the command layer knows about where
//! articles live. It owns one invariant: at most one article per id.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: the session store, ordered by id
//!   - No persistence
//!   - Replacing a record is a single map insert, so readers never see a
//!     half-updated article
//!
//! ## Ordering
//!
//! [`ArticleStore::list_articles`] yields articles by ascending id (byte-wise string
//! order). Listing and search output rely on this rather than sorting themselves.

use crate::error::Result;
use crate::model::Article;

pub mod memory;

/// Abstract interface for article storage.
pub trait ArticleStore {
    /// Insert a new article. Fails with `DuplicateId` if the id is taken.
    fn add_article(&mut self, article: Article) -> Result<()>;

    /// Get an article by id
    fn get_article(&self, id: &str) -> Result<Article>;

    fn contains_article(&self, id: &str) -> bool;

    /// Swap the stored article with the same id for `article`, returning the old one.
    /// Fails with `NotFound` if the id is unknown.
    fn replace_article(&mut self, article: Article) -> Result<Article>;

    /// Remove an article permanently, returning it
    fn delete_article(&mut self, id: &str) -> Result<Article>;

    /// All articles ordered by id. Recomputed on every call.
    fn list_articles(&self) -> impl Iterator<Item = &Article>;
}
