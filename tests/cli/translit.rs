use crate::cli::support::Fixture;
use predicates::prelude::*;

#[test]
fn test_translit_outputs_copyable_item() {
    Fixture::new()
        .cmd()
        .args(["translit", "shhuka", "zhuk"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "{\"items\":[{\"title\":\"щукажук\",\"text\":{\"copy\":\"щукажук\",\"largetype\":\"щукажук\"},\"arg\":\"щукажук\"}]}\n",
        ));
}

#[test]
fn test_translit_passes_unmapped_characters() {
    let output = Fixture::new()
        .cmd()
        .args(["translit", "mat', 42!"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["items"][0]["title"], "мать, 42!");
}
