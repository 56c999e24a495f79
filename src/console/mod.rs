//! Terminal front end for the back office
//!
//! Drives one view at a time and follows the [`Route`] each view hands back.
//! Entering the list screen always fetches the catalog again.

pub mod commands;
pub mod render;
pub mod terminal;

use std::io::{BufRead, Write};
use std::sync::Arc;

pub use terminal::Terminal;

use crate::domain::BookRepository;
use crate::models::{Book, BookField, BookId};
use crate::views::{BookAddView, BookEditView, BookListView, FormState, Route};
use commands::{FormCommand, ListCommand, Selector, join_words};

pub struct Console<R, W> {
    repo: Arc<dyn BookRepository>,
    term: Terminal<R, W>,
}

/// The form screens share their command loop
enum FormScreen {
    Edit(BookEditView),
    Add(BookAddView),
}

impl FormScreen {
    fn heading(&self) -> String {
        match self {
            FormScreen::Edit(view) => format!("Edit book #{}", view.id()),
            FormScreen::Add(_) => "Add book".to_string(),
        }
    }

    fn state(&self) -> &FormState {
        match self {
            FormScreen::Edit(view) => view.state(),
            FormScreen::Add(view) => view.state(),
        }
    }

    fn set_field(&mut self, field: BookField, value: String) -> bool {
        match self {
            FormScreen::Edit(view) => view.set_field(field, value),
            FormScreen::Add(view) => view.set_field(field, value),
        }
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(repo: Arc<dyn BookRepository>, term: Terminal<R, W>) -> Self {
        Self { repo, term }
    }

    /// Run until the user quits or input ends
    pub async fn run(&mut self) {
        let mut route = Route::BookList;
        loop {
            tracing::debug!("Navigating to {:?}", route);
            let next = match route {
                Route::BookList => self.list_screen().await,
                Route::EditBook(id) => {
                    let mut view = BookEditView::new(self.repo.clone(), id);
                    self.term.println(render::LOADING);
                    view.activate().await;
                    self.form_screen(FormScreen::Edit(view)).await
                }
                Route::AddBook => {
                    let view = BookAddView::new(self.repo.clone());
                    self.form_screen(FormScreen::Add(view)).await
                }
            };

            match next {
                Some(next) => route = next,
                None => break,
            }
        }
        tracing::info!("Console closed");
    }

    pub fn into_terminal(self) -> Terminal<R, W> {
        self.term
    }

    /// `None` means quit
    async fn list_screen(&mut self) -> Option<Route> {
        let mut view = BookListView::new(self.repo.clone());
        self.term.println(render::LOADING);
        view.activate().await;

        loop {
            self.term.println(&render::book_list(&view));
            let line = self.term.read_line("books> ")?;

            let command = match ListCommand::parse(&line) {
                Ok(command) => command,
                Err(msg) => {
                    self.term.println(&msg);
                    continue;
                }
            };

            match command {
                ListCommand::Search { term } => view.search(&join_words(&term)),
                ListCommand::Clear => view.search(""),
                ListCommand::Edit { book } => match select(&view, book) {
                    Some(book) => return Some(view.edit(book.id)),
                    None => self.term.println("No such book"),
                },
                ListCommand::Delete { book } => match select(&view, book) {
                    Some(book) => {
                        view.delete(&book, &self.term).await;
                    }
                    None => self.term.println("No such book"),
                },
                ListCommand::Add => return Some(view.add()),
                ListCommand::Retry => {
                    self.term.println(render::LOADING);
                    view.retry().await;
                }
                ListCommand::Logout => {
                    if let Some(route) = view.logout() {
                        return Some(route);
                    }
                }
                ListCommand::Quit => return None,
            }
        }
    }

    async fn form_screen(&mut self, mut screen: FormScreen) -> Option<Route> {
        loop {
            self.term
                .println(&render::book_form(&screen.heading(), screen.state()));
            let line = self.term.read_line("form> ")?;

            let command = match FormCommand::parse(&line) {
                Ok(command) => command,
                Err(msg) => {
                    self.term.println(&msg);
                    continue;
                }
            };

            let route = match command {
                FormCommand::Set { field, value } => {
                    if !screen.set_field(field, join_words(&value)) {
                        self.term.println("Nothing to edit here");
                    }
                    None
                }
                FormCommand::Save => match &mut screen {
                    FormScreen::Edit(view) => view.submit(&self.term).await,
                    FormScreen::Add(view) => view.submit(&self.term).await,
                },
                FormCommand::Cancel => match &mut screen {
                    FormScreen::Edit(view) => view.cancel(&self.term),
                    FormScreen::Add(view) => view.cancel(&self.term),
                },
                FormCommand::Back => {
                    let route = match &mut screen {
                        FormScreen::Edit(view) => view.back(),
                        FormScreen::Add(_) => None,
                    };
                    if route.is_none() {
                        self.term.println("Use `cancel` to leave the form");
                    }
                    route
                }
                FormCommand::Quit => return None,
            };

            if route.is_some() {
                return route;
            }
        }
    }
}

/// Resolve a selector against the rows currently shown
fn select(view: &BookListView, selector: Selector) -> Option<Book> {
    let shown = view.catalog()?.filtered();
    match selector {
        Selector::Row(row) => shown.get(row - 1).cloned(),
        Selector::Id(id) => find_by_id(shown, id),
    }
}

fn find_by_id(books: &[Book], id: BookId) -> Option<Book> {
    books.iter().find(|b| b.id == id).cloned()
}
