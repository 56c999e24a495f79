use crate::models::Book;

/// Does `book` match the search term?
///
/// Title and author match case-insensitively, ISBN as a case-sensitive
/// substring. The empty term matches everything.
pub fn matches(book: &Book, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    let needle = term.to_lowercase();
    book.title.to_lowercase().contains(&needle)
        || book.author.to_lowercase().contains(&needle)
        || (!book.isbn.is_empty() && book.isbn.contains(term))
}

/// Subset of `books` matching `term`, in the original order
pub fn filter_books(books: &[Book], term: &str) -> Vec<Book> {
    books.iter().filter(|b| matches(b, term)).cloned().collect()
}
