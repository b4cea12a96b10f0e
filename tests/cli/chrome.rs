use crate::cli::support::{json_output, roam_alfred, titles, Fixture};
use predicates::prelude::*;

fn fixture() -> Fixture {
    let fx = Fixture::new();
    fx.add_file("/org/chrome.org", "Chrome")
        .add_node(
            "c-home",
            "/org/chrome.org",
            1,
            "Home",
            r#"(("CATEGORY" . "home") ("ITEM" . "Home"))"#,
            None,
        )
        .add_node(
            "c1",
            "/org/chrome.org",
            2,
            "Mail",
            r#"(("CATEGORY" . "home") ("ITEM" . "[[https://mail.example.com][Mail]]") ("BROWSER_OVERRIDE" . "Safari") ("NEW_WINDOW" . "t"))"#,
            Some(r#"("Home")"#),
        )
        .add_node(
            "c2",
            "/org/chrome.org",
            2,
            "Calendar",
            r#"(("CATEGORY" . "home") ("ITEM" . "[[https://cal.example.com][Calendar]]") ("ALIASES" . "schedule meetings"))"#,
            Some(r#"("Home")"#),
        )
        .add_node(
            "c3",
            "/org/chrome.org",
            2,
            "Work mail",
            r#"(("CATEGORY" . "goog") ("ITEM" . "[[https://work.example.com][Work mail]]"))"#,
            Some(r#"("Work")"#),
        );
    fx
}

#[test]
fn test_chrome_lists_category_bookmarks() {
    let fx = fixture();
    let value = json_output(fx.cmd().args(["chrome", "--category", "home"]));
    assert_eq!(titles(&value), vec!["Mail", "Calendar"]);

    let mail = &value["items"][0];
    assert_eq!(mail["arg"], "https://mail.example.com");
    assert_eq!(mail["subtitle"], "https://mail.example.com");
    assert_eq!(mail["autocomplete"], "https://mail.example.com");
    assert_eq!(mail["variables"]["browser_override"], "Safari");
    assert_eq!(mail["variables"]["new_window"], "t");
    assert_eq!(mail["variables"]["profile"], "home");
    assert!(mail.get("icon").is_none());
}

#[test]
fn test_chrome_dynamic_entries_follow_first_match() {
    let fx = fixture();
    let value = json_output(fx.cmd().args(["chrome", "--category", "home", "--query", "SCHED"]));
    assert_eq!(
        titles(&value),
        vec![
            "Calendar",
            "search google for \"SCHED\"",
            "search map for \"SCHED\"",
            "search youtube for \"SCHED\"",
        ]
    );
    for item in value["items"].as_array().unwrap() {
        assert_eq!(item["variables"]["profile"], "home");
    }
}

#[test]
fn test_chrome_url_query_without_match() {
    let fx = fixture();
    let value = json_output(fx.cmd().args([
        "chrome",
        "--category",
        "goog",
        "--query",
        "chrome://settings",
    ]));
    assert_eq!(titles(&value), vec!["open \"chrome://settings\""]);
    assert_eq!(value["items"][0]["arg"], "chrome://settings");
    assert_eq!(value["items"][0]["variables"]["profile"], "goog");
}

#[test]
fn test_chrome_icon_from_title() {
    let fx = fixture();
    let icon = fx.add_icon("Mail");
    let value = json_output(fx.cmd().args(["chrome", "--category", "home", "--query", "mail"]));
    assert_eq!(value["items"][0]["icon"]["path"], icon.to_string_lossy().as_ref());
}

#[test]
fn test_chrome_requires_category() {
    roam_alfred()
        .args(["chrome", "--query", "x"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--category"));
}
