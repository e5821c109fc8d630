use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn bitpad(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("bitpad").unwrap();
    cmd.env("BITPAD_HOME", home);
    cmd
}

fn register(home: &Path, username: &str, email: &str) {
    bitpad(home)
        .args(["register", username, email, "--password", "hunter2"])
        .assert()
        .success()
        .stdout(predicates::str::contains("signed in"));
}

#[test]
fn fresh_home_seeds_a_public_sample() {
    let temp_dir = tempfile::tempdir().unwrap();

    bitpad(temp_dir.path())
        .arg("explore")
        .assert()
        .success()
        .stdout(predicates::str::contains("Rainbow Button"))
        .stdout(predicates::str::contains("42 views"));
}

#[test]
fn register_create_list_view_flow() {
    let temp_dir = tempfile::tempdir().unwrap();
    register(temp_dir.path(), "ada", "ada@x.com");

    bitpad(temp_dir.path())
        .args([
            "new",
            "Spinning",
            "Card",
            "--no-editor",
            "--html",
            "<div class=card>flip</div>",
            "--css",
            ".card { transform: rotate(3deg); }",
        ])
        .assert()
        .success()
        .stdout(predicates::str::contains("Bit created: Spinning Card"));

    bitpad(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Spinning Card"))
        .stdout(predicates::str::contains("0 views"));

    // Each detail view counts.
    bitpad(temp_dir.path())
        .args(["view", "1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("1 views"))
        .stdout(predicates::str::contains(".card { transform"));
    bitpad(temp_dir.path())
        .args(["view", "1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("2 views"));
}

#[test]
fn duplicate_registration_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();
    register(temp_dir.path(), "ada", "ada@x.com");

    bitpad(temp_dir.path())
        .args(["register", "ada", "other@x.com", "--password", "hunter2"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("already taken"));
}

#[test]
fn wrong_password_does_not_sign_in() {
    let temp_dir = tempfile::tempdir().unwrap();
    register(temp_dir.path(), "ada", "ada@x.com");
    bitpad(temp_dir.path()).arg("logout").assert().success();

    bitpad(temp_dir.path())
        .args(["login", "ada@x.com", "--password", "wrong"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Invalid email or password"));

    bitpad(temp_dir.path())
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicates::str::contains("Not signed in"));
}

#[test]
fn publish_makes_a_bit_visible_to_everyone() {
    let temp_dir = tempfile::tempdir().unwrap();
    register(temp_dir.path(), "ada", "ada@x.com");

    bitpad(temp_dir.path())
        .args(["new", "Hidden Gem", "--no-editor", "--html", "<p>gem</p>"])
        .assert()
        .success();

    bitpad(temp_dir.path())
        .arg("explore")
        .assert()
        .success()
        .stdout(predicates::str::contains("Hidden Gem").not());

    bitpad(temp_dir.path())
        .args(["publish", "1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Bit published"));

    // Signed-out browsing sees it too.
    bitpad(temp_dir.path()).arg("logout").assert().success();
    bitpad(temp_dir.path())
        .arg("explore")
        .assert()
        .success()
        .stdout(predicates::str::contains("Hidden Gem"));
}

#[test]
fn preview_writes_the_composed_document_and_edits_refresh_it() {
    let temp_dir = tempfile::tempdir().unwrap();
    register(temp_dir.path(), "ada", "ada@x.com");

    bitpad(temp_dir.path())
        .args([
            "new",
            "Red Box",
            "--no-editor",
            "--html",
            "<div id=box>boxed</div>",
            "--css",
            "#box { background: red; }",
            "--js",
            "document.getElementById('box').textContent = 'ready'",
        ])
        .assert()
        .success();

    let output = bitpad(temp_dir.path())
        .args(["preview", "1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Preview rendered"))
        .get_output()
        .stdout
        .clone();

    let path = String::from_utf8(output)
        .unwrap()
        .lines()
        .next()
        .unwrap()
        .to_string();
    let document = std::fs::read_to_string(&path).unwrap();
    assert!(document.starts_with("<!DOCTYPE html>"));
    assert!(document.contains("<div id=box>boxed</div>"));
    assert!(document.contains("#box { background: red; }"));
    assert!(document.contains("try {"));

    // An edit re-presents the existing surface.
    bitpad(temp_dir.path())
        .args(["edit", "1", "--css", "--set", "#box { background: blue; }"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Preview refreshed"));

    let document = std::fs::read_to_string(&path).unwrap();
    assert!(document.contains("#box { background: blue; }"));
    assert!(!document.contains("background: red"));
}

#[test]
fn snippet_error_handler_is_baked_into_the_document() {
    let temp_dir = tempfile::tempdir().unwrap();
    register(temp_dir.path(), "ada", "ada@x.com");

    bitpad(temp_dir.path())
        .args([
            "new",
            "Boom",
            "--no-editor",
            "--html",
            "<h1>still here</h1>",
            "--js",
            "throw new Error('boom')",
        ])
        .assert()
        .success();

    let output = bitpad(temp_dir.path())
        .args(["preview", "1"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let path = String::from_utf8(output)
        .unwrap()
        .lines()
        .next()
        .unwrap()
        .to_string();

    let document = std::fs::read_to_string(path).unwrap();
    // The static markup renders before the throwing script, and the catch
    // block appends the red banner with the message.
    assert!(document.contains("<h1>still here</h1>"));
    assert!(document.contains("throw new Error('boom')"));
    assert!(document.contains("catch (error)"));
    assert!(document.contains("background: #fee"));
}

#[test]
fn delete_removes_the_bit_from_listings() {
    let temp_dir = tempfile::tempdir().unwrap();
    register(temp_dir.path(), "ada", "ada@x.com");

    bitpad(temp_dir.path())
        .args(["new", "Doomed", "--no-editor"])
        .assert()
        .success();
    bitpad(temp_dir.path())
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Bit deleted: Doomed"));

    bitpad(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No bits found."));
}

#[test]
fn profile_updates_reach_the_durable_account() {
    let temp_dir = tempfile::tempdir().unwrap();
    register(temp_dir.path(), "ada", "ada@x.com");

    bitpad(temp_dir.path())
        .args(["profile", "--username", "lovelace"])
        .assert()
        .success()
        .stdout(predicates::str::contains("lovelace"));

    // The rename survives a sign-out/sign-in cycle; the credential and
    // email are untouched.
    bitpad(temp_dir.path()).arg("logout").assert().success();
    bitpad(temp_dir.path())
        .args(["login", "ada@x.com", "--password", "hunter2"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Signed in as lovelace"));
}

#[test]
fn theme_preference_persists_while_signed_out() {
    let temp_dir = tempfile::tempdir().unwrap();

    bitpad(temp_dir.path())
        .args(["theme", "--toggle"])
        .assert()
        .success()
        .stdout(predicates::str::contains("dark"));

    bitpad(temp_dir.path())
        .arg("theme")
        .assert()
        .success()
        .stdout(predicates::str::contains("dark"));
}

#[test]
fn config_round_trips_through_the_cli() {
    let temp_dir = tempfile::tempdir().unwrap();

    bitpad(temp_dir.path())
        .args(["config", "auto-refresh", "false"])
        .assert()
        .success();

    bitpad(temp_dir.path())
        .args(["config", "auto-refresh"])
        .assert()
        .success()
        .stdout(predicates::str::contains("auto-refresh = false"));
}
