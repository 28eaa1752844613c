use crate::model::Article;

pub mod create;
pub mod delete;
pub mod list;
pub mod search;
pub mod seed;
pub mod update;

/// What a command did. Listing commands fill `listed_articles` (ordered by id),
/// mutating commands fill `affected_articles` with the records as they now stand
/// (or, for delete, as they were).
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_articles: Vec<Article>,
    pub listed_articles: Vec<Article>,
}

impl CmdResult {
    pub fn with_affected_articles(mut self, articles: Vec<Article>) -> Self {
        self.affected_articles = articles;
        self
    }

    pub fn with_listed_articles(mut self, articles: Vec<Article>) -> Self {
        self.listed_articles = articles;
        self
    }
}
