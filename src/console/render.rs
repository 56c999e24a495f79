//! Plain-text rendering of the views

use unicode_width::UnicodeWidthStr;

use crate::models::{Book, BookField};
use crate::views::{BookListView, FormState, ListState};

pub const LOADING: &str = "Loading...";

const HEADER: [&str; 6] = ["#", "Title", "Author", "ISBN", "Year", "Price (฿)"];

pub fn book_list(view: &BookListView) -> String {
    match view.state() {
        ListState::Loading => LOADING.to_string(),
        ListState::Failed(message) => {
            format!("Error: {}\nType `retry` to try again.", message)
        }
        ListState::Ready(catalog) => {
            let mut out = String::from("BookStore - BackOffice\n\n");
            if !catalog.term().is_empty() {
                out.push_str(&format!("Search: {}\n", catalog.term()));
            }
            out.push_str(&format!("Total books: {}\n", catalog.filtered().len()));
            out.push_str(&book_table(catalog.filtered()));
            out
        }
    }
}

/// Table with a 1-based row number, in the order given
pub fn book_table(books: &[Book]) -> String {
    let rows: Vec<[String; 6]> = books
        .iter()
        .enumerate()
        .map(|(i, b)| {
            [
                (i + 1).to_string(),
                b.title.clone(),
                b.author.clone(),
                b.isbn.clone(),
                b.year.to_string(),
                format!("{:.2}", b.price),
            ]
        })
        .collect();

    // Terminal columns, not chars: Thai vowel and tone marks take no column
    let mut widths = HEADER.map(|h| h.width());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.width());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADER.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');

    if rows.is_empty() {
        out.push_str("No books found\n");
    }
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 6], widths: &[usize; 6]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| {
            let pad = w.saturating_sub(cell.width());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();
    out.push_str(padded.join(" | ").trim_end());
    out.push('\n');
}

/// Edit/add form, or the loading and error screens around it
pub fn book_form(heading: &str, state: &FormState) -> String {
    match state {
        FormState::Loading => LOADING.to_string(),
        FormState::Failed(message) => {
            format!("Error: {}\nType `back` to return to the book list.", message)
        }
        FormState::Closed => String::new(),
        FormState::Ready { draft, error } => {
            let mut out = format!("{}\n\n", heading);
            for field in BookField::ALL {
                out.push_str(&format!("  {:<7} * {}\n", field.label(), draft.get(field)));
            }
            if let Some(error) = error {
                out.push_str(&format!("\nLast save failed: {}\n", error));
            }
            out
        }
        FormState::Submitting { .. } => "Saving...".to_string(),
    }
}
