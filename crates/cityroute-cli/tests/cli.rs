use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/sample_traffic.csv")
}

fn cityroute() -> Command {
    Command::cargo_bin("cityroute").expect("binary builds")
}

#[test]
fn filtered_route_takes_the_long_way() {
    cityroute()
        .arg("--data")
        .arg(fixture_path())
        .args(["--hour", "17", "route", "--from", "Madison", "--to", "Peterson"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Kinzie")
                .and(predicate::str::contains("Michigan"))
                .and(predicate::str::contains("3 hops")),
        );
}

#[test]
fn unfiltered_route_uses_the_express_sample() {
    cityroute()
        .arg("--data")
        .arg(fixture_path())
        .args(["route", "--from", "Madison", "--to", "Peterson"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 hops"));
}

#[test]
fn route_json_is_machine_readable() {
    let output = cityroute()
        .arg("--data")
        .arg(fixture_path())
        .args(["route", "--from", "Madison", "--to", "Peterson", "--json"])
        .output()
        .expect("binary runs");

    assert!(output.status.success());
    let summary: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(summary["start"], "Madison");
    assert_eq!(summary["end"], "Peterson");
    assert_eq!(summary["steps"].as_array().expect("steps array").len(), 2);
}

#[test]
fn unknown_street_suggests_alternatives() {
    cityroute()
        .arg("--data")
        .arg(fixture_path())
        .args(["route", "--from", "Madisn", "--to", "Peterson"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("unknown street")
                .and(predicate::str::contains("Did you mean")),
        );
}

#[test]
fn reachable_lists_only_the_selected_component() {
    cityroute()
        .arg("--data")
        .arg(fixture_path())
        .args(["reachable", "--from", "Pulaski"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Racine").and(predicate::str::contains("Madison").not()),
        );
}

#[test]
fn streets_lists_sorted_names() {
    cityroute()
        .arg("--data")
        .arg(fixture_path())
        .arg("streets")
        .assert()
        .success()
        .stdout(predicate::str::contains("Kinzie\nMadison\nMichigan\nPeterson"));
}
