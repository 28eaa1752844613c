use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::SearchQuery;
use crate::store::ArticleStore;
use tracing::debug;

/// Exact-match search. Results keep the store's id order.
pub fn run<S: ArticleStore>(store: &S, query: &SearchQuery) -> Result<CmdResult> {
    let matches: Vec<_> = store
        .list_articles()
        .filter(|article| query.matches(article))
        .cloned()
        .collect();
    debug!(?query, hits = matches.len(), "article search");
    Ok(CmdResult::default().with_listed_articles(matches))
}
