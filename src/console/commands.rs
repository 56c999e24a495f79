//! Console command lines, parsed with clap one line at a time

use std::str::FromStr;

use clap::{Parser, Subcommand};

use crate::models::{BookField, BookId};

/// Which book a list command refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// 1-based row number in the visible table
    Row(usize),
    /// `#<id>`
    Id(BookId),
}

impl FromStr for Selector {
    type Err = String;

    fn from_str(arg: &str) -> Result<Self, Self::Err> {
        if let Some(id) = arg.strip_prefix('#') {
            return id
                .parse()
                .map(Selector::Id)
                .map_err(|_| format!("not a book id: {}", arg));
        }
        match arg.parse::<usize>() {
            Ok(row) if row > 0 => Ok(Selector::Row(row)),
            _ => Err(format!("not a row number: {}", arg)),
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "books",
    no_binary_name = true,
    arg_required_else_help = true,
    disable_version_flag = true
)]
struct ListLine {
    #[command(subcommand)]
    command: ListCommand,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum ListCommand {
    /// Filter by title, author or ISBN
    #[command(visible_alias = "s")]
    Search {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        term: Vec<String>,
    },
    /// Show every book again
    Clear,
    /// Edit a book
    #[command(visible_alias = "e")]
    Edit {
        /// Row number, or #id
        book: Selector,
    },
    /// Delete a book
    #[command(visible_alias = "rm")]
    Delete {
        /// Row number, or #id
        book: Selector,
    },
    /// Add a new book
    #[command(visible_alias = "new")]
    Add,
    /// Reload the list
    #[command(visible_alias = "refresh")]
    Retry,
    /// No session to end; does nothing
    Logout,
    /// Leave the back office
    #[command(visible_aliases = ["exit", "q"])]
    Quit,
}

impl ListCommand {
    /// Parse one input line. `Err` carries clap's rendered usage or help.
    pub fn parse(line: &str) -> Result<Self, String> {
        ListLine::try_parse_from(words(line))
            .map(|l| l.command)
            .map_err(|e| e.to_string().trim_end().to_string())
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "form",
    no_binary_name = true,
    arg_required_else_help = true,
    disable_version_flag = true
)]
struct FormLine {
    #[command(subcommand)]
    command: FormCommand,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum FormCommand {
    /// Change title, author, isbn, year or price
    Set {
        field: BookField,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Save the book
    Save,
    /// Discard the changes
    Cancel,
    /// Return to the list after a load error
    Back,
    /// Leave the back office
    #[command(visible_aliases = ["exit", "q"])]
    Quit,
}

impl FormCommand {
    pub fn parse(line: &str) -> Result<Self, String> {
        FormLine::try_parse_from(words(line))
            .map(|l| l.command)
            .map_err(|e| e.to_string().trim_end().to_string())
    }
}

/// Whitespace-separated words, the command word lower-cased
fn words(line: &str) -> Vec<String> {
    let mut words: Vec<String> = line.split_whitespace().map(String::from).collect();
    if let Some(first) = words.first_mut() {
        *first = first.to_lowercase();
    }
    words
}

/// Rebuild a free-text argument. Runs of whitespace become one space.
pub fn join_words(words: &[String]) -> String {
    words.join(" ")
}
