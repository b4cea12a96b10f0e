use crate::cli::support::{json_output, titles, Fixture};

fn fixture() -> Fixture {
    let fx = Fixture::new();
    fx.add_file("/org/books.org", "Books")
        .add_node(
            "b1",
            "/org/books.org",
            2,
            "Dune Messiah",
            r#"(("ITEM" . "[[https://gr.example.com/dune-messiah][Dune Messiah]]"))"#,
            Some(r#"("Read")"#),
        )
        .add_node(
            "b2",
            "/org/books.org",
            2,
            "Neuromancer",
            r#"(("ITEM" . "[[https://gr.example.com/neuromancer][Neuromancer]]"))"#,
            Some(r#"("Read")"#),
        );
    fx
}

#[test]
fn test_books_search_entry_then_matching_books() {
    let fx = fixture();
    let value = json_output(fx.cmd().args(["books", "--query", "dune"]));
    assert_eq!(titles(&value), vec!["dune", "Dune Messiah"]);

    let search = &value["items"][0];
    assert_eq!(search["subtitle"], "search goodreads for dune");
    assert_eq!(search["arg"], "https://www.goodreads.com/search?q=dune");
    assert_eq!(search["autocomplete"], "dune");
    assert_eq!(search["variables"]["profile"], "home");
    assert_eq!(search["variables"]["query"], "dune");
    assert_eq!(
        search["variables"]["hist_item"],
        r#"{"title":"dune","subtitle":"search goodreads for dune","autocomplete":"dune","arg":"https://www.goodreads.com/search?q=dune","variables":{"profile":"home","query":"dune"}}"#
    );

    let book = &value["items"][1];
    assert_eq!(book["autocomplete"], "Dune Messiah");
    assert_eq!(book["arg"], "https://gr.example.com/dune-messiah");
    assert!(book["variables"].get("hist_item").is_none());
}

#[test]
fn test_books_include_remembered_picks() {
    let fx = fixture();
    fx.cmd()
        .args([
            "history",
            "add",
            "--trigger",
            "books",
            "--query",
            "dune",
            "--item",
            r#"{"title":"Dune","arg":"https://gr.example.com/dune"}"#,
        ])
        .assert()
        .success();

    let value = json_output(fx.cmd().args(["books", "--trigger", "books", "--query", "dune"]));
    assert_eq!(titles(&value), vec!["dune", "-minute: Dune", "Dune Messiah"]);
    assert_eq!(value["items"][1]["arg"], "https://gr.example.com/dune");

    // Picks are scoped to their trigger.
    let other = json_output(fx.cmd().args(["books", "--trigger", "films", "--query", "dune"]));
    assert_eq!(titles(&other), vec!["dune", "Dune Messiah"]);
}

#[test]
fn test_books_survive_unusable_history() {
    let fx = fixture();
    let value = json_output(
        fx.cmd_with_stores(&fx.db_path(), fx.dir.path())
            .args(["books", "--query", "neuro"]),
    );
    assert_eq!(titles(&value), vec!["neuro", "Neuromancer"]);
}
