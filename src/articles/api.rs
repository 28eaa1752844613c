//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point
//! for every article operation, whatever UI sits on top.
//!
//! The facade:
//! - **Dispatches** to the matching command function
//! - **Normalizes inputs**: raw search values become typed queries
//! - **Returns structured types** (`Result<CmdResult>`), never strings for display
//!
//! `ArticlesApi<S: ArticleStore>` is generic over the storage backend and owns it, so
//! the lifetime of the collection is the lifetime of the API value.

use crate::commands;
use crate::error::Result;
use crate::model::{Article, ArticleUpdate, SearchField, SearchQuery};
use crate::store::ArticleStore;

pub use commands::CmdResult;

pub struct ArticlesApi<S: ArticleStore> {
    store: S,
}

impl<S: ArticleStore> ArticlesApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn seed_demo_data(&mut self) -> Result<commands::CmdResult> {
        commands::seed::run(&mut self.store)
    }

    pub fn create_article(
        &mut self,
        id: String,
        name: String,
        price: f64,
        codes: Vec<String>,
    ) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, id, name, price, codes)
    }

    pub fn list_articles(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    /// Lazy view over all articles ordered by id, without cloning.
    pub fn articles(&self) -> impl Iterator<Item = &Article> {
        self.store.list_articles()
    }

    pub fn article_exists(&self, id: &str) -> bool {
        self.store.contains_article(id)
    }

    pub fn get_article(&self, id: &str) -> Result<Article> {
        self.store.get_article(id)
    }

    pub fn update_article(
        &mut self,
        id: &str,
        update: &ArticleUpdate,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, update)
    }

    pub fn find_articles(&self, query: &SearchQuery) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, query)
    }

    /// Search with a raw comparison value. Price values must be numeric.
    pub fn find_articles_by(&self, field: SearchField, value: &str) -> Result<commands::CmdResult> {
        let query = SearchQuery::parse(field, value)?;
        self.find_articles(&query)
    }

    pub fn delete_article(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }
}
