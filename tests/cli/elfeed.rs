use crate::cli::support::{json_output, titles, Fixture};
use predicates::prelude::*;

fn fixture() -> Fixture {
    let fx = Fixture::new();
    fx.add_file("/org/feeds.org", "Feeds")
        .add_node(
            "f1",
            "/org/feeds.org",
            2,
            "Rust",
            r#"(("ALLTAGS" . #(":feeds:fomo:" 0 12 (inherited t))) ("ITEM" . "[[elfeed: +unread +rust][Rust news]]"))"#,
            Some(r#"("Tech")"#),
        )
        .add_node(
            "f2",
            "/org/feeds.org",
            2,
            "Later",
            r#"(("ALLTAGS" . ":feeds:") ("ITEM" . "[[elfeed:+later][Later]]"))"#,
            Some(r#"("Tech")"#),
        );
    fx
}

#[test]
fn test_elfeed_items() {
    let fx = fixture();
    let value = json_output(fx.cmd().args(["elfeed", "items"]));
    assert_eq!(titles(&value), vec!["Rust news"]);
    assert_eq!(value["items"][0]["arg"], "+unread +rust ");
    assert_eq!(value["items"][0]["subtitle"], "+unread +rust");
}

#[test]
fn test_elfeed_resolve_prints_search_string() {
    let fx = fixture();
    fx.cmd()
        .args(["elfeed", "resolve", "Rust news"])
        .assert()
        .success()
        .stdout("+unread +rust ");
}

#[test]
fn test_elfeed_resolve_unknown_title() {
    let fx = fixture();
    fx.cmd()
        .args(["elfeed", "resolve", "Later"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("feed not found: Later"));
}
