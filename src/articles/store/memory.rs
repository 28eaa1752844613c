use super::ArticleStore;
use crate::error::{ArticleError, Result};
use crate::model::Article;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// In-memory storage for a single session.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    articles: BTreeMap<String, Article>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

impl ArticleStore for InMemoryStore {
    fn add_article(&mut self, article: Article) -> Result<()> {
        match self.articles.entry(article.id.clone()) {
            Entry::Occupied(entry) => Err(ArticleError::DuplicateId(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(article);
                Ok(())
            }
        }
    }

    fn get_article(&self, id: &str) -> Result<Article> {
        self.articles
            .get(id)
            .cloned()
            .ok_or_else(|| ArticleError::NotFound(id.to_string()))
    }

    fn contains_article(&self, id: &str) -> bool {
        self.articles.contains_key(id)
    }

    fn replace_article(&mut self, article: Article) -> Result<Article> {
        match self.articles.get_mut(&article.id) {
            Some(slot) => Ok(std::mem::replace(slot, article)),
            None => Err(ArticleError::NotFound(article.id)),
        }
    }

    fn delete_article(&mut self, id: &str) -> Result<Article> {
        self.articles
            .remove(id)
            .ok_or_else(|| ArticleError::NotFound(id.to_string()))
    }

    fn list_articles(&self) -> impl Iterator<Item = &Article> {
        self.articles.values()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::commands::seed;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_demo_articles(mut self) -> Self {
            seed::run(&mut self.store).unwrap();
            self
        }

        pub fn with_article(mut self, id: &str, name: &str, price: f64, codes: &[&str]) -> Self {
            let codes = codes.iter().map(|c| c.to_string()).collect();
            self.store
                .add_article(Article::new(id, name, price, codes))
                .unwrap();
            self
        }
    }
}
