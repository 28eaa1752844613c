use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Article;
use crate::store::ArticleStore;
use tracing::debug;

pub fn run<S: ArticleStore>(
    store: &mut S,
    id: String,
    name: String,
    price: f64,
    codes: Vec<String>,
) -> Result<CmdResult> {
    let article = Article::new(id, name, price, codes);
    store.add_article(article.clone())?;
    debug!(id = %article.id, "article created");
    Ok(CmdResult::default().with_affected_articles(vec![article]))
}
