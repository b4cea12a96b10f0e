use crate::cli::support::{json_output, titles, Fixture};
use predicates::prelude::*;

fn add(fx: &Fixture, trigger: &str, query: &str, item: &str) {
    fx.cmd()
        .args(["history", "add", "--trigger", trigger, "--query", query, "--item", item])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_history_add_creates_store() {
    let fx = Fixture::new();
    assert!(!fx.history_path().exists());
    add(&fx, "t", "q", r#"{"title":"x"}"#);
    assert!(fx.history_path().exists());
}

#[test]
fn test_history_find_dedups_and_orders_newest_first() {
    let fx = Fixture::new();
    add(&fx, "t", "rust", r#"{"title":"Book","arg":"1"}"#);
    add(&fx, "t", "rust", r#"{"title":"Book","arg":"1"}"#);
    add(&fx, "t", "garden", r#"{"title":"Shovel","arg":"2"}"#);

    let value = json_output(fx.cmd().args(["history", "find", "--trigger", "t", "--query", "rust garden"]));
    assert_eq!(titles(&value), vec!["-minute: Shovel", "-minute: Book"]);

    let only_rust = json_output(fx.cmd().args(["history", "find", "--trigger", "t", "--query", "rust"]));
    assert_eq!(titles(&only_rust), vec!["-minute: Book"]);
}

#[test]
fn test_history_find_on_fresh_store_is_empty() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["history", "find", "--query", "anything"])
        .assert()
        .success()
        .stdout("{\"items\":[]}\n");
}

#[test]
fn test_history_add_rejects_invalid_item() {
    let fx = Fixture::new();
    for item in ["not json", "42"] {
        fx.cmd()
            .args(["history", "add", "--trigger", "t", "--item", item])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("invalid history item"));
    }
    assert!(!fx.history_path().exists());
}
