//! The interactive menu, as an explicit state machine.
//!
//! Every operation state runs its prompts to completion and hands control back to
//! [`MenuState::MainMenu`]. [`MenuState::Exiting`] is terminal; it is reached by selecting
//! `0` or when the input stream ends.

use super::print::{
    missing_article_message, print_articles, print_banner, print_error, print_prompt,
    user_message, MSG_DUPLICATE_ID, MSG_MAIN_RANGE, MSG_NUMBERS_ONLY, MSG_SEARCH_RANGE,
};
use articles::api::ArticlesApi;
use articles::error::Result;
use articles::model::{ArticleUpdate, SearchField};
use articles::store::ArticleStore;
use articles::validation::{is_numeric, parse_codes, parse_price, parse_selection, SelectionError};
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    MainMenu,
    Creating,
    Listing,
    Updating,
    Searching,
    SearchBy(SearchField),
    Deleting,
    Exiting,
}

const MAIN_TITLE: &str = "--- article management ---";
const MAIN_RANGE: RangeInclusive<i64> = 0..=5;
const MAIN_ENTRIES: &[(i64, &str, MenuState)] = &[
    (1, "create article", MenuState::Creating),
    (2, "list articles", MenuState::Listing),
    (3, "update article", MenuState::Updating),
    (4, "search article", MenuState::Searching),
    (5, "delete article", MenuState::Deleting),
    (0, "quit", MenuState::Exiting),
];

const SEARCH_RANGE: RangeInclusive<i64> = 0..=4;
const SEARCH_ENTRIES: &[(i64, &str, MenuState)] = &[
    (1, "search by id", MenuState::SearchBy(SearchField::Id)),
    (2, "search by name", MenuState::SearchBy(SearchField::Name)),
    (3, "search by price", MenuState::SearchBy(SearchField::Price)),
    (4, "search by ean/code", MenuState::SearchBy(SearchField::Code)),
    (0, "cancel", MenuState::MainMenu),
];

const CHOICE_PROMPT: &str = "choose >";

fn lookup(entries: &[(i64, &str, MenuState)], selection: i64) -> MenuState {
    entries
        .iter()
        .find(|(value, _, _)| *value == selection)
        .map(|(_, _, state)| *state)
        .unwrap_or(MenuState::MainMenu)
}

/// Reads answers from `input`, writes prompts and results to `output`.
pub struct Menu<S: ArticleStore, R: BufRead, W: Write> {
    api: ArticlesApi<S>,
    input: R,
    output: W,
}

/// Ends the current operation when the input stream is exhausted.
macro_rules! answer {
    ($menu:expr, $label:expr) => {
        match $menu.prompt($label)? {
            Some(line) => line,
            None => return Ok(MenuState::Exiting),
        }
    };
}

impl<S: ArticleStore, R: BufRead, W: Write> Menu<S, R, W> {
    pub fn new(api: ArticlesApi<S>, input: R, output: W) -> Self {
        Self { api, input, output }
    }

    pub fn api(&self) -> &ArticlesApi<S> {
        &self.api
    }

    /// Drives the state machine until it exits.
    pub fn run(&mut self) -> Result<()> {
        let mut state = MenuState::MainMenu;
        while state != MenuState::Exiting {
            state = self.step(state)?;
        }
        Ok(())
    }

    pub fn step(&mut self, state: MenuState) -> Result<MenuState> {
        debug!(?state, "menu step");
        match state {
            MenuState::MainMenu => self.main_menu(),
            MenuState::Creating => self.create(),
            MenuState::Listing => self.list(),
            MenuState::Updating => self.update(),
            MenuState::Searching => self.search_menu(),
            MenuState::SearchBy(field) => self.search_by(field),
            MenuState::Deleting => self.delete(),
            MenuState::Exiting => Ok(MenuState::Exiting),
        }
    }

    /// Prompts and reads one trimmed line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        print_prompt(&mut self.output, label)?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn print_entries(&mut self, entries: &[(i64, &str, MenuState)]) -> Result<()> {
        for (value, label, _) in entries {
            writeln!(self.output, "  {} - {}", value, label)?;
        }
        Ok(())
    }

    fn main_menu(&mut self) -> Result<MenuState> {
        writeln!(self.output)?;
        print_banner(&mut self.output, MAIN_TITLE)?;
        self.print_entries(MAIN_ENTRIES)?;
        let input = answer!(self, CHOICE_PROMPT);

        match parse_selection(&input, &MAIN_RANGE) {
            Ok(selection) => Ok(lookup(MAIN_ENTRIES, selection)),
            Err(SelectionError::NotAnInteger) => {
                print_error(&mut self.output, MSG_NUMBERS_ONLY)?;
                Ok(MenuState::MainMenu)
            }
            Err(SelectionError::OutOfRange) => {
                print_error(&mut self.output, MSG_MAIN_RANGE)?;
                Ok(MenuState::MainMenu)
            }
        }
    }

    fn create(&mut self) -> Result<MenuState> {
        print_banner(&mut self.output, "---- create article ----")?;
        let id = answer!(self, "ID:");
        if self.api.article_exists(&id) {
            print_error(&mut self.output, MSG_DUPLICATE_ID)?;
            return Ok(MenuState::MainMenu);
        }
        let name = answer!(self, "NAME:");
        let price = loop {
            let input = answer!(self, "PRICE:");
            match parse_price(&input) {
                Ok(price) => break price,
                Err(_) => print_error(&mut self.output, MSG_NUMBERS_ONLY)?,
            }
        };
        let codes = parse_codes(&answer!(self, "EANS:"));

        let outcome = self.api.create_article(id, name, price, codes).map(|_| ());
        self.finish(outcome)
    }

    fn list(&mut self) -> Result<MenuState> {
        print_banner(&mut self.output, "---- list articles ----")?;
        let result = self.api.list_articles()?;
        print_articles(&mut self.output, &result.listed_articles)?;
        Ok(MenuState::MainMenu)
    }

    fn update(&mut self) -> Result<MenuState> {
        print_banner(&mut self.output, "---- update article ----")?;
        let id = answer!(self, "ID:");
        if !self.api.article_exists(&id) {
            print_error(&mut self.output, &missing_article_message(&id))?;
            return Ok(MenuState::MainMenu);
        }
        let name = answer!(self, "NAME:");
        // Empty keeps the current price; anything else must be a number.
        let price = loop {
            let input = answer!(self, "PRICE:");
            if input.is_empty() || is_numeric(&input) {
                break input;
            }
            print_error(&mut self.output, MSG_NUMBERS_ONLY)?;
        };
        let codes = answer!(self, "EANS:");

        let update = ArticleUpdate::from_input(&name, &price, &codes);
        let outcome = self.api.update_article(&id, &update).map(|_| ());
        self.finish(outcome)
    }

    fn search_menu(&mut self) -> Result<MenuState> {
        print_banner(&mut self.output, "---- search article ----")?;
        self.print_entries(SEARCH_ENTRIES)?;
        let input = answer!(self, CHOICE_PROMPT);

        match parse_selection(&input, &SEARCH_RANGE) {
            Ok(selection) => Ok(lookup(SEARCH_ENTRIES, selection)),
            Err(_) => {
                print_error(&mut self.output, MSG_SEARCH_RANGE)?;
                Ok(MenuState::MainMenu)
            }
        }
    }

    fn search_by(&mut self, field: SearchField) -> Result<MenuState> {
        let value = answer!(self, &format!("{}:", field.label()));
        match self.api.find_articles_by(field, &value) {
            Ok(result) if !result.listed_articles.is_empty() => {
                print_articles(&mut self.output, &result.listed_articles)?;
                Ok(MenuState::MainMenu)
            }
            Ok(_) => Ok(MenuState::MainMenu),
            Err(e) => self.finish(Err(e)),
        }
    }

    fn delete(&mut self) -> Result<MenuState> {
        print_banner(&mut self.output, "---- delete article ----")?;
        let id = answer!(self, "ID:");
        let outcome = self.api.delete_article(&id).map(|_| ());
        self.finish(outcome)
    }

    /// Reports a failed operation to the user and returns to the main menu.
    /// Only I/O failures escape.
    fn finish(&mut self, outcome: Result<()>) -> Result<MenuState> {
        let Err(e) = outcome else {
            return Ok(MenuState::MainMenu);
        };
        match user_message(&e) {
            Some(message) => {
                print_error(&mut self.output, &message)?;
                Ok(MenuState::MainMenu)
            }
            None => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use articles::model::Article;
    use articles::store::memory::InMemoryStore;
    use std::io::Cursor;

    type TestMenu = Menu<InMemoryStore, Cursor<Vec<u8>>, Vec<u8>>;

    fn menu(input: &str, seed: bool) -> TestMenu {
        let mut api = ArticlesApi::new(InMemoryStore::new());
        if seed {
            api.seed_demo_data().unwrap();
        }
        Menu::new(api, Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn run_session(input: &str, seed: bool) -> (TestMenu, String) {
        let mut menu = menu(input, seed);
        menu.run().unwrap();
        let output = String::from_utf8(menu.output.clone()).unwrap();
        (menu, output)
    }

    fn ids(menu: &TestMenu) -> Vec<String> {
        menu.api().articles().map(|a| a.id.clone()).collect()
    }

    #[test]
    fn main_menu_transitions() {
        let cases = [
            ("0\n", MenuState::Exiting),
            ("1\n", MenuState::Creating),
            ("2\n", MenuState::Listing),
            ("3\n", MenuState::Updating),
            ("4\n", MenuState::Searching),
            ("5\n", MenuState::Deleting),
            ("6\n", MenuState::MainMenu),
            ("x\n", MenuState::MainMenu),
            ("", MenuState::Exiting),
        ];
        for (input, expected) in cases {
            let mut menu = menu(input, false);
            assert_eq!(
                menu.step(MenuState::MainMenu).unwrap(),
                expected,
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn search_menu_transitions() {
        let cases = [
            ("0\n", MenuState::MainMenu),
            ("1\n", MenuState::SearchBy(SearchField::Id)),
            ("3\n", MenuState::SearchBy(SearchField::Price)),
            ("2\n", MenuState::SearchBy(SearchField::Name)),
            ("4\n", MenuState::SearchBy(SearchField::Code)),
            ("5\n", MenuState::MainMenu),
            ("name\n", MenuState::MainMenu),
            ("", MenuState::Exiting),
        ];
        for (input, expected) in cases {
            let mut menu = menu(input, false);
            assert_eq!(menu.step(MenuState::Searching).unwrap(), expected);
        }
    }

    #[test]
    fn rejects_bad_selections_with_messages() {
        let (_, output) = run_session("abc\n9\n0\n", false);
        assert!(output.contains(MSG_NUMBERS_ONLY));
        assert!(output.contains(MSG_MAIN_RANGE));
    }

    #[test]
    fn create_reprompts_for_price() {
        let (menu, output) = run_session("1\n7\nKiwi\nfree\n0.5\n111,222\n0\n", false);
        assert_eq!(output.matches("PRICE:").count(), 2);
        assert_eq!(
            menu.api().get_article("7").unwrap(),
            Article::new("7", "Kiwi", 0.5, vec!["111".into(), "222".into()])
        );
    }

    #[test]
    fn create_with_duplicate_id_returns_to_main_menu() {
        let (menu, output) = run_session("1\n1001\n0\n", true);
        assert!(output.contains(MSG_DUPLICATE_ID));
        assert!(!output.contains("NAME:"));
        assert_eq!(menu.api().get_article("1001").unwrap().name, "Apfel grün");
    }

    #[test]
    fn list_prints_sorted_rows() {
        let (_, output) = run_session("2\n0\n", true);
        let first = output.find("      1001 |").unwrap();
        let second = output.find("      1002 |").unwrap();
        let third = output.find("      1003 |").unwrap();
        assert!(first < second && second < third);
        assert!(output.contains("ID         | NAME"));
    }

    #[test]
    fn update_keeps_blank_fields() {
        let (menu, _) = run_session("3\n1003\n\n4.49\n\n0\n", true);
        assert_eq!(
            menu.api().get_article("1003").unwrap(),
            Article::new("1003", "Banane", 4.49, vec!["7890123456789".into()])
        );
    }

    #[test]
    fn update_reprompts_only_price() {
        let (menu, output) = run_session("3\n1001\nBirne\nabc\n\nX\n0\n", true);
        assert_eq!(output.matches("PRICE:").count(), 2);
        assert_eq!(output.matches("NAME:").count(), 1);
        let updated = menu.api().get_article("1001").unwrap();
        assert_eq!(updated.name, "Birne");
        assert_eq!(updated.price, 1.99);
        assert_eq!(updated.codes, vec!["X"]);
    }

    #[test]
    fn update_reprompts_for_non_ascii_digit_price() {
        let (menu, output) = run_session("3\n1003\nKiwi\n٣\n5.00\n\n0\n", true);
        assert_eq!(output.matches("PRICE:").count(), 2);
        assert!(output.contains(MSG_NUMBERS_ONLY));
        assert_eq!(
            menu.api().get_article("1003").unwrap(),
            Article::new("1003", "Kiwi", 5.0, vec!["7890123456789".into()])
        );
    }

    #[test]
    fn non_ascii_digit_selection_is_not_a_number() {
        let (_, output) = run_session("٣\n0\n", true);
        assert!(output.contains(MSG_NUMBERS_ONLY));
        assert!(!output.contains(MSG_MAIN_RANGE));
    }

    #[test]
    fn update_unknown_id_aborts() {
        let (_, output) = run_session("3\n42\n0\n", true);
        assert!(output.contains("Invalid input: article with ID 42 does not exist."));
        assert!(!output.contains("NAME:"));
    }

    #[test]
    fn search_by_price_prints_matches() {
        let (_, output) = run_session("4\n3\n2.99\n0\n", true);
        assert!(output.contains("      1002 |    Apfel rot |     2.99 |"));
        assert!(!output.contains("      1001 |"));
    }

    #[test]
    fn search_by_id_prints_single_row() {
        let (_, output) = run_session("4\n1\n1003\n0\n", true);
        assert!(output.contains("ID:"));
        assert!(output.contains("      1003 |       Banane |     3.49 | 7890123456789"));
        assert!(!output.contains("      1001 |"));
    }

    #[test]
    fn search_by_name_prints_exact_matches() {
        let (_, output) = run_session("4\n2\nApfel rot\n0\n", true);
        assert!(output.contains("NAME:"));
        assert!(output.contains("      1002 |    Apfel rot |"));
        assert!(!output.contains("      1001 |"));
    }

    #[test]
    fn search_by_code_prints_owner() {
        let (_, output) = run_session("4\n4\n9876543210986\n0\n", true);
        assert!(output.contains("EAN:"));
        assert!(output.contains("      1001 |   Apfel grün |"));
        assert!(!output.contains("      1002 |"));
    }

    #[test]
    fn search_with_non_integer_selection_reports() {
        let (_, output) = run_session("4\nid\n0\n", true);
        assert!(output.contains(MSG_SEARCH_RANGE));
        assert!(!output.contains("ID:"));
    }

    #[test]
    fn search_without_matches_prints_nothing() {
        let (_, output) = run_session("4\n2\nKiwi\n0\n", true);
        assert!(!output.contains("ID         | NAME"));
    }

    #[test]
    fn search_cancel_and_bad_price() {
        let (_, output) = run_session("4\n0\n4\n3\ncheap\n0\n", true);
        assert_eq!(output.matches("PRICE:").count(), 1);
        assert!(output.contains(MSG_NUMBERS_ONLY));
    }

    #[test]
    fn delete_removes_silently() {
        let (menu, output) = run_session("5\n1002\n0\n", true);
        assert_eq!(ids(&menu), vec!["1001", "1003"]);
        assert!(!output.contains("Invalid input"));
    }

    #[test]
    fn delete_unknown_id_reports() {
        let (menu, output) = run_session("5\n1\n0\n", true);
        assert!(output.contains("Invalid input: article with ID 1 does not exist."));
        assert_eq!(ids(&menu).len(), 3);
    }

    #[test]
    fn end_of_input_mid_operation_exits() {
        let (menu, _) = run_session("1\n9\nHalf", false);
        assert!(!menu.api().article_exists("9"));
    }
}
