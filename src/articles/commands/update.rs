use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::ArticleUpdate;
use crate::store::ArticleStore;
use tracing::debug;

pub fn run<S: ArticleStore>(store: &mut S, id: &str, update: &ArticleUpdate) -> Result<CmdResult> {
    let current = store.get_article(id)?;
    // Build the whole replacement first; a bad price must not touch the store.
    let article = update.apply(&current)?;
    store.replace_article(article.clone())?;
    debug!(id, "article updated");
    Ok(CmdResult::default().with_affected_articles(vec![article]))
}
