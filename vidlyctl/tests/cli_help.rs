use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::PathBuf;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/movies.json")
}

fn vidlyctl() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("vidlyctl");
    cmd.env("RUST_LOG", "error")
        .env_remove("VIDLY_CONFIG_PATH")
        .env_remove("VIDLY_CONFIG_JSON")
        .env_remove("VIDLY_PAGE_SIZE")
        .env_remove("VIDLY_API_URL")
        .env_remove("VIDLY_TIMEOUT_SECS");
    cmd
}

#[test]
fn movies_help_mentions_filters() {
    let output = vidlyctl()
        .arg("movies")
        .arg("--help")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&output);
    for flag in ["--search", "--pattern", "--genre", "--sort", "--order", "--page-size"] {
        assert!(text.contains(flag), "movies help missing {flag}");
    }
}

#[test]
fn first_page_of_fixture() {
    vidlyctl()
        .arg("--fixture")
        .arg(fixture())
        .arg("movies")
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 9 movies in the database."))
        .stdout(predicate::str::contains("Airplane"))
        .stdout(predicate::str::contains("Page 1 of 3"))
        .stdout(predicate::str::contains("Wedding Crashers").not());
}

#[test]
fn search_and_genre_filter_fixture() {
    vidlyctl()
        .args(["movies", "--search", "the", "--genre", "thriller"])
        .arg("--fixture")
        .arg(fixture())
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 1 movies in the database."))
        .stdout(predicate::str::contains("The Sixth Sense"));
}

#[test]
fn json_output_is_a_page_result() {
    let output = vidlyctl()
        .args(["movies", "--sort", "dailyRentalRate", "--order", "desc", "--json"])
        .arg("--fixture")
        .arg(fixture())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let page: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(page["totalCount"], 9);
    assert_eq!(page["items"][0]["title"], "Gone Girl");
    assert_eq!(page["items"].as_array().unwrap().len(), 4);
}

#[test]
fn unknown_sort_column_fails() {
    vidlyctl()
        .args(["movies", "--sort", "year"])
        .arg("--fixture")
        .arg(fixture())
        .assert()
        .failure()
        .stderr(predicate::str::contains("year"));
}

#[test]
fn genres_start_with_all_genres() {
    vidlyctl()
        .arg("genres")
        .arg("--fixture")
        .arg(fixture())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("All Genres\nAction"));
}

#[test]
fn delete_rewrites_fixture() {
    let dir = tempfile::tempdir().unwrap();
    let copy = dir.path().join("movies.json");
    std::fs::copy(fixture(), &copy).unwrap();

    vidlyctl()
        .args(["delete", "5b21ca3eeb7f6fbccd47181a", "--fixture"])
        .arg(&copy)
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted \"Airplane\""));

    let raw = std::fs::read_to_string(&copy).unwrap();
    assert!(!raw.contains("Airplane"));

    vidlyctl()
        .args(["delete", "5b21ca3eeb7f6fbccd47181a", "--fixture"])
        .arg(&copy)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn zero_timeout_from_environment_is_rejected() {
    vidlyctl()
        .env("VIDLY_TIMEOUT_SECS", "0")
        .arg("genres")
        .arg("--fixture")
        .arg(fixture())
        .assert()
        .failure()
        .stderr(predicate::str::contains("timeout must be at least one second"));
}

#[test]
fn table_header_marks_sort_column() {
    vidlyctl()
        .args(["movies", "--sort", "numberInStock", "--order", "desc"])
        .arg("--fixture")
        .arg(fixture())
        .assert()
        .success()
        .stdout(predicate::str::contains("Stock↓"))
        .stdout(predicate::str::contains("Title↑").not());
}
