use crate::error::Result;
use crate::validation::{parse_codes, parse_price};

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub codes: Vec<String>,
}

impl Article {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        codes: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            codes,
        }
    }

    pub fn has_code(&self, code: &str) -> bool {
        self.codes.iter().any(|c| c == code)
    }
}

/// The field an article search compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    Id,
    Name,
    Price,
    Code,
}

impl SearchField {
    /// Prompt label shown when asking for the comparison value.
    pub fn label(&self) -> &'static str {
        match self {
            SearchField::Id => "ID",
            SearchField::Name => "NAME",
            SearchField::Price => "PRICE",
            SearchField::Code => "EAN",
        }
    }
}

/// A typed, exact-match comparison value.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchQuery {
    Id(String),
    Name(String),
    Price(f64),
    Code(String),
}

impl SearchQuery {
    /// Builds a query from a raw input value. Price values must be numeric.
    pub fn parse(field: SearchField, value: &str) -> Result<Self> {
        Ok(match field {
            SearchField::Id => SearchQuery::Id(value.to_string()),
            SearchField::Name => SearchQuery::Name(value.to_string()),
            SearchField::Price => SearchQuery::Price(parse_price(value)?),
            SearchField::Code => SearchQuery::Code(value.to_string()),
        })
    }

    pub fn matches(&self, article: &Article) -> bool {
        match self {
            SearchQuery::Id(id) => article.id == *id,
            SearchQuery::Name(name) => article.name == *name,
            // Exact comparison, no epsilon.
            SearchQuery::Price(price) => article.price == *price,
            SearchQuery::Code(code) => article.has_code(code),
        }
    }
}

/// Replacement values for an update. `None` keeps the existing value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleUpdate {
    pub name: Option<String>,
    pub price: Option<String>,
    pub codes: Option<Vec<String>>,
}

impl ArticleUpdate {
    /// Maps raw prompt answers to an update: empty answers mean "keep".
    pub fn from_input(name: &str, price: &str, codes: &str) -> Self {
        let given = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Self {
            name: given(name),
            price: given(price),
            codes: (!codes.is_empty()).then(|| parse_codes(codes)),
        }
    }

    /// Builds the full replacement record. Fails before anything is changed if the price is
    /// not numeric.
    pub fn apply(&self, current: &Article) -> Result<Article> {
        let price = match &self.price {
            Some(raw) => parse_price(raw)?,
            None => current.price,
        };
        Ok(Article {
            id: current.id.clone(),
            name: self.name.clone().unwrap_or_else(|| current.name.clone()),
            price,
            codes: self.codes.clone().unwrap_or_else(|| current.codes.clone()),
        })
    }
}
