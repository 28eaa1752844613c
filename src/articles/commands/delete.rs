use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::ArticleStore;
use tracing::debug;

pub fn run<S: ArticleStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let removed = store.delete_article(id)?;
    debug!(id, "article deleted");
    Ok(CmdResult::default().with_affected_articles(vec![removed]))
}
