use crate::commands::{create, CmdResult};
use crate::error::Result;
use crate::model::Article;
use crate::store::ArticleStore;
use tracing::info;

/// The records a demo session starts with.
pub fn demo_articles() -> Vec<Article> {
    let codes = |cs: &[&str]| cs.iter().map(|c| c.to_string()).collect::<Vec<_>>();
    vec![
        Article::new(
            "1001",
            "Apfel grün",
            1.99,
            codes(&["1234567890128", "9876543210986"]),
        ),
        Article::new(
            "1002",
            "Apfel rot",
            2.99,
            codes(&["5678901234565", "3456789012340"]),
        ),
        Article::new("1003", "Banane", 3.49, codes(&["7890123456789"])),
    ]
}

/// Inserts the demo articles through the normal create path.
pub fn run<S: ArticleStore>(store: &mut S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for article in demo_articles() {
        let created = create::run(store, article.id, article.name, article.price, article.codes)?;
        result.affected_articles.extend(created.affected_articles);
    }
    info!(count = result.affected_articles.len(), "seeded demo articles");
    Ok(result)
}
