use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn shelf_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("shelf"))
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    shelf_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GraphQL"));
}

#[test]
fn test_version() {
    shelf_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("shelf"));
}

// =============================================================================
// Schema
// =============================================================================

#[test]
fn test_schema_prints_sdl() {
    shelf_cmd()
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("type Book"))
        .stdout(predicate::str::contains("addAuthor(name: String!, id: Int!): Author!"))
        .stdout(predicate::str::contains("book(id: Int): Book"));
}

// =============================================================================
// Query & Mutate
// =============================================================================

#[test]
fn test_query_against_seed_data() {
    shelf_cmd()
        .arg("query")
        .arg("{ book(id: 1) { name author { name } } }")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sorcerers Stone"))
        .stdout(predicate::str::contains("J. K. Rowling"));
}

#[test]
fn test_query_with_variables() {
    shelf_cmd()
        .arg("query")
        .arg("query($id: Int) { author(id: $id) { name } }")
        .arg("--variables")
        .arg(r#"{"id": 2}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("C.S. Lewis"));
}

#[test]
fn test_query_with_bad_variables_fails() {
    shelf_cmd()
        .arg("query")
        .arg("{ books { id } }")
        .arg("--variables")
        .arg("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--variables"));
}

#[test]
fn test_invalid_query_fails() {
    shelf_cmd()
        .arg("query")
        .arg("{ nope }")
        .assert()
        .failure()
        .stdout(predicate::str::contains("errors"));
}

#[test]
fn test_mutate_wraps_selection() {
    shelf_cmd()
        .arg("mutate")
        .arg(r#"addBook(name: "Goblet of Fire", authorId: 1) { id authorID }"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": 9"))
        .stdout(predicate::str::contains("\"authorID\": 1"));
}

// =============================================================================
// Serve
// =============================================================================

#[test]
fn test_serve_rejects_invalid_host() {
    let temp_dir = TempDir::new().unwrap();

    shelf_cmd()
        .arg("serve")
        .arg("--host")
        .arg("not-an-ip")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid listen address"));
}

#[test]
fn test_serve_reports_missing_config_file() {
    let temp_dir = TempDir::new().unwrap();

    shelf_cmd()
        .arg("serve")
        .arg("--config")
        .arg("missing.yml")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load shelf configuration"));
}

#[test]
fn test_serve_fails_when_port_is_taken() {
    let temp_dir = TempDir::new().unwrap();
    let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = taken.local_addr().unwrap().port();

    shelf_cmd()
        .arg("serve")
        .arg("--host")
        .arg("127.0.0.1")
        .arg("--port")
        .arg(port.to_string())
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(format!("127.0.0.1:{port}")));
}
