use std::io::Cursor;
use std::sync::Arc;

use backoffice::console::{Console, Terminal};
use backoffice::infrastructure::HttpBookRepository;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn two_books_json() -> serde_json::Value {
    serde_json::json!([
        {"id": 1, "title": "A", "author": "X", "isbn": "1", "year": 2000, "price": 10},
        {"id": 2, "title": "B", "author": "Y", "isbn": "2", "year": 2001, "price": 20}
    ])
}

async fn mount_list(server: &MockServer, books: serde_json::Value, times: u64) {
    Mock::given(method("GET"))
        .and(path("/api/v1/books"))
        .respond_with(ResponseTemplate::new(200).set_body_json(books))
        .expect(times)
        .mount(server)
        .await;
}

// Run the console against the mock server with scripted input, return what it printed
async fn run_console(server: &MockServer, input: &str) -> String {
    let repo = Arc::new(HttpBookRepository::new(format!("{}/api/v1", server.uri())));
    let terminal = Terminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());

    let mut console = Console::new(repo, terminal);
    console.run().await;

    String::from_utf8(console.into_terminal().into_output()).expect("utf-8 output")
}

#[tokio::test]
async fn test_search_then_confirmed_delete() {
    let server = MockServer::start().await;
    mount_list(&server, two_books_json(), 1).await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/books/1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_console(&server, "search b\nclear\ndelete #1\ny\nquit\n").await;

    assert!(output.contains("Search: b\nTotal books: 1"));
    assert!(output.contains("Do you want to delete \"A\"? [y/N]"));
    assert!(output.contains("! Book deleted."));

    // The last table drawn only has the second book left
    let last_table = output.rsplit("Total books:").next().unwrap();
    assert!(last_table.starts_with(" 1\n"));
    assert!(last_table.contains("1 | B"));
    assert!(!last_table.contains("| A "));
}

#[tokio::test]
async fn test_declined_delete_sends_nothing() {
    let server = MockServer::start().await;
    mount_list(&server, two_books_json(), 1).await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let output = run_console(&server, "delete 2\nn\nquit\n").await;
    assert!(output.contains("Do you want to delete \"B\"?"));
    assert!(!output.contains("Book deleted."));
}

#[tokio::test]
async fn test_list_failure_then_retry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/books"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_list(&server, two_books_json(), 1).await;

    let output = run_console(&server, "retry\nquit\n").await;

    assert!(output.contains("Error: Could not load the book list"));
    assert!(output.contains("Total books: 2"));
}

#[tokio::test]
async fn test_edit_load_failure_then_back() {
    let server = MockServer::start().await;
    mount_list(
        &server,
        serde_json::json!([
            {"id": 5, "title": "Five", "author": "F", "isbn": "5", "year": 2005, "price": 5}
        ]),
        2,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/books/5"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let output = run_console(&server, "edit #5\nsave\nback\nquit\n").await;

    assert!(output.contains("Error: Could not load the book"));
    assert!(output.contains("Type `back` to return to the book list."));
}

#[tokio::test]
async fn test_edit_and_save_returns_to_refreshed_list() {
    let server = MockServer::start().await;
    mount_list(&server, two_books_json(), 2).await;
    Mock::given(method("GET"))
        .and(path("/api/v1/books/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_books_json()[0].clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/books/1"))
        .and(body_json(serde_json::json!({
            "title": "A revised",
            "author": "X",
            "isbn": "1",
            "year": 2000,
            "price": 12.5
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let input = "edit 1\nset title A revised\nset price 12.5\nsave\nquit\n";
    let output = run_console(&server, input).await;

    assert!(output.contains("Edit book #1"));
    assert!(output.contains("! Book updated."));
}

#[tokio::test]
async fn test_save_with_empty_field_is_blocked() {
    let server = MockServer::start().await;
    mount_list(&server, two_books_json(), 1).await;
    Mock::given(method("GET"))
        .and(path("/api/v1/books/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_books_json()[1].clone()))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let output = run_console(&server, "edit 2\nset isbn\nsave\nquit\n").await;
    assert!(output.contains("! Please fill in every field"));
}

#[tokio::test]
async fn test_add_book() {
    let server = MockServer::start().await;
    mount_list(&server, serde_json::json!([]), 2).await;
    Mock::given(method("POST"))
        .and(path("/api/v1/books"))
        .and(body_json(serde_json::json!({
            "title": "Kindred",
            "author": "Octavia E. Butler",
            "isbn": "978-0807083697",
            "year": 1979,
            "price": 16.0
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let input = "add\n\
        set title Kindred\n\
        set author Octavia E. Butler\n\
        set isbn 978-0807083697\n\
        set year 1979\n\
        set price 16\n\
        save\n\
        quit\n";
    let output = run_console(&server, input).await;

    assert!(output.contains("No books found"));
    assert!(output.contains("Add book"));
    assert!(output.contains("! Book added."));
}

#[tokio::test]
async fn test_cancel_edit_after_confirmation() {
    let server = MockServer::start().await;
    mount_list(&server, two_books_json(), 2).await;
    Mock::given(method("GET"))
        .and(path("/api/v1/books/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_books_json()[0].clone()))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let output = run_console(&server, "edit 1\nset title Z\ncancel\nn\ncancel\ny\nquit\n").await;
    assert_eq!(
        output.matches("Do you want to discard your changes?").count(),
        2
    );
}

#[tokio::test]
async fn test_logout_does_nothing() {
    let server = MockServer::start().await;
    mount_list(&server, two_books_json(), 1).await;

    let output = run_console(&server, "logout\nquit\n").await;
    assert_eq!(output.matches("Total books: 2").count(), 2);
}

#[tokio::test]
async fn test_help_and_padded_search() {
    let server = MockServer::start().await;
    mount_list(&server, two_books_json(), 1).await;

    let output = run_console(&server, "help\nsearch   b  \nquit\n").await;

    assert!(output.contains("Usage: books <COMMAND>"));
    assert!(output.contains("No session to end; does nothing"));
    assert!(output.contains("Search: b\nTotal books: 1"));
}
