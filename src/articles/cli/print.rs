use articles::error::ArticleError;
use articles::model::Article;
use colored::Colorize;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

const ID_WIDTH: usize = 10;
const NAME_WIDTH: usize = 12;
const PRICE_WIDTH: usize = 8;
const CODE_WIDTH: usize = 13;
const SEPARATOR: &str = " | ";

pub(super) const MSG_NUMBERS_ONLY: &str = "Invalid input: only numbers allowed.";
pub(super) const MSG_MAIN_RANGE: &str = "Invalid input: only numbers between 0 and 5 allowed.";
pub(super) const MSG_SEARCH_RANGE: &str = "Invalid input: only numbers 0 - 4 allowed.";
pub(super) const MSG_DUPLICATE_ID: &str = "Invalid input: ID already exists.";

pub(super) fn missing_article_message(id: &str) -> String {
    format!("Invalid input: article with ID {} does not exist.", id)
}

/// The line shown to the user for an error caused by their input.
/// `None` for I/O failures, which end the session instead.
pub(super) fn user_message(err: &ArticleError) -> Option<String> {
    match err {
        ArticleError::InvalidInput(_) => Some(MSG_NUMBERS_ONLY.to_string()),
        ArticleError::DuplicateId(_) => Some(MSG_DUPLICATE_ID.to_string()),
        ArticleError::NotFound(id) => Some(missing_article_message(id)),
        ArticleError::Io(_) => None,
    }
}

pub(super) fn print_error<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{}", message.red())
}

pub(super) fn print_banner<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "{}", title.bold())
}

/// Writes `label` without a newline and flushes, so the cursor waits after it.
pub(super) fn print_prompt<W: Write>(out: &mut W, label: &str) -> io::Result<()> {
    write!(out, "{}", label)?;
    out.flush()
}

pub(super) fn print_articles<W: Write>(out: &mut W, articles: &[Article]) -> io::Result<()> {
    writeln!(out, "{}", format_header())?;
    for article in articles {
        writeln!(out, "{}", format_row(article))?;
    }
    Ok(())
}

pub(super) fn format_header() -> String {
    [
        align_left("ID", ID_WIDTH),
        align_left("NAME", NAME_WIDTH),
        align_left("PREIS", PRICE_WIDTH),
        align_left("EANS", CODE_WIDTH),
    ]
    .join(SEPARATOR)
}

pub(super) fn format_row(article: &Article) -> String {
    let codes: Vec<String> = article
        .codes
        .iter()
        .map(|code| align_right(code, CODE_WIDTH))
        .collect();
    format!(
        "{}{}{}{}{:>width$.2}{}{}",
        align_right(&article.id, ID_WIDTH),
        SEPARATOR,
        align_right(&article.name, NAME_WIDTH),
        SEPARATOR,
        article.price,
        SEPARATOR,
        codes.join(SEPARATOR),
        width = PRICE_WIDTH
    )
}

// Column padding counts display width, not bytes.
fn align_right(s: &str, width: usize) -> String {
    format!("{}{}", " ".repeat(width.saturating_sub(s.width())), s)
}

fn align_left(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}
