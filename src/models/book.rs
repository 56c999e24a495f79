use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::DomainError;

/// Server-assigned book identifier. The client never mints one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub i64);

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(BookId)
    }
}

/// A catalog record as returned by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub isbn: String,
    pub year: i32,
    pub price: f64,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// The editable fields of a book, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookField {
    Title,
    Author,
    Isbn,
    Year,
    Price,
}

impl BookField {
    pub const ALL: [BookField; 5] = [
        BookField::Title,
        BookField::Author,
        BookField::Isbn,
        BookField::Year,
        BookField::Price,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BookField::Title => "title",
            BookField::Author => "author",
            BookField::Isbn => "isbn",
            BookField::Year => "year",
            BookField::Price => "price",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BookField::Title => "Title",
            BookField::Author => "Author",
            BookField::Isbn => "ISBN",
            BookField::Year => "Year",
            BookField::Price => "Price",
        }
    }
}

impl fmt::Display for BookField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BookField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BookField::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown field: {}", s))
    }
}

/// Locally edited, not-yet-persisted copy of a book's fields.
///
/// Every field is kept as the text the user typed; numbers are only coerced
/// when the draft is turned into a [`BookPayload`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub year: String,
    pub price: String,
}

impl BookDraft {
    pub fn get(&self, field: BookField) -> &str {
        match field {
            BookField::Title => &self.title,
            BookField::Author => &self.author,
            BookField::Isbn => &self.isbn,
            BookField::Year => &self.year,
            BookField::Price => &self.price,
        }
    }

    /// Replace exactly one field; the others are left untouched.
    pub fn set(&mut self, field: BookField, value: impl Into<String>) {
        let slot = match field {
            BookField::Title => &mut self.title,
            BookField::Author => &mut self.author,
            BookField::Isbn => &mut self.isbn,
            BookField::Year => &mut self.year,
            BookField::Price => &mut self.price,
        };
        *slot = value.into();
    }

    pub fn missing_fields(&self) -> Vec<BookField> {
        BookField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    /// Presence check plus numeric coercion of year and price.
    pub fn validate(&self) -> Result<BookPayload, DomainError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(|f| f.name()).collect();
            return Err(DomainError::Validation(format!(
                "missing required fields: {}",
                names.join(", ")
            )));
        }

        let year: i32 = self.year.trim().parse().map_err(|_| {
            DomainError::Validation(format!("year is not a whole number: {}", self.year))
        })?;

        let price: f64 = self
            .price
            .trim()
            .parse()
            .ok()
            .filter(|p: &f64| p.is_finite())
            .ok_or_else(|| {
                DomainError::Validation(format!("price is not a number: {}", self.price))
            })?;

        Ok(BookPayload {
            title: self.title.clone(),
            author: self.author.clone(),
            isbn: self.isbn.clone(),
            year,
            price,
        })
    }
}

impl From<&Book> for BookDraft {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            isbn: book.isbn.clone(),
            year: book.year.to_string(),
            price: book.price.to_string(),
        }
    }
}

/// JSON body sent on create and update
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookPayload {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub year: i32,
    pub price: f64,
}
