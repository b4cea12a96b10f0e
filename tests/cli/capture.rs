use crate::cli::support::{json_output, titles, Fixture};
use predicates::prelude::*;

#[test]
fn test_capture_home_with_meeting() {
    let fx = Fixture::new();
    let value = json_output(
        fx.cmd()
            .env("meeting", "standup")
            .args(["capture", "--category", "home", "--query", "buy milk"]),
    );
    assert_eq!(
        titles(&value),
        vec!["capture meeting notes for \"standup\"", "capture note into inbox"]
    );
    let meeting = &value["items"][0];
    assert_eq!(meeting["subtitle"], "continue editing");
    assert_eq!(meeting["arg"], "buy milk");
    assert_eq!(meeting["valid"], true);
    assert_eq!(meeting["variables"]["action"], "capture");
    assert_eq!(meeting["variables"]["arg"], "e");
    assert_eq!(value["variables"]["meeting"], "standup");
}

#[test]
fn test_capture_goog_with_page_and_clock() {
    let fx = Fixture::new();
    let value = json_output(
        fx.cmd()
            .env("browser_state", r#"{"url":"https://docs.example.com/d","title":"Design doc"}"#)
            .env("clocked_in_task", "yes")
            .args(["capture", "-c", "goog", "-q", ""]),
    );
    let templates: Vec<&str> = value["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["variables"]["arg"].as_str().unwrap())
        .collect();
    assert_eq!(templates, vec!["g", "c", "bg", "bd", "bf", "bc", "f", "e"]);
    assert_eq!(value["items"][0]["valid"], false);
    assert_eq!(value["items"][2]["title"], "capture \"Design doc\" into inbox");
    assert_eq!(value["variables"]["clocked_in_task"], "yes");
}

#[test]
fn test_capture_unknown_category_is_usage_error() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["capture", "--category", "work", "--query", "x"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unknown capture category: work"));
}
