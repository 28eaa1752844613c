use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::ArticleStore;

pub fn run<S: ArticleStore>(store: &S) -> Result<CmdResult> {
    let listed = store.list_articles().cloned().collect();
    Ok(CmdResult::default().with_listed_articles(listed))
}
