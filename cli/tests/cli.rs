use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::json;

fn cli(server: &MockServer) -> Command {
    let mut cmd = Command::cargo_bin("blog-cli").unwrap();
    cmd.env_remove("BLOG_API_URL")
        .env_remove("BLOG_API_TIMEOUT_SECS")
        .env("RUST_LOG", "off")
        .arg("--base-url")
        .arg(server.base_url());
    cmd
}

#[test]
fn list_prints_posts_in_server_order() {
    let server = MockServer::start();
    let list = server.mock(|when, then| {
        when.method(GET).path("/posts");
        then.status(200).json_body(json!([
            {"_id": "2", "title": "Second", "content": "b"},
            {"_id": "1", "title": "First", "content": "a"}
        ]));
    });

    cli(&server)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?s)\[2\] Second.*\[1\] First").unwrap());
    list.assert();
}

#[test]
fn create_posts_the_draft_and_prints_the_result() {
    let server = MockServer::start();
    let create = server.mock(|when, then| {
        when.method(POST)
            .path("/posts")
            .json_body(json!({"title": "Hello", "content": "World"}));
        then.status(201)
            .json_body(json!({"_id": "1", "title": "Hello", "content": "World"}));
    });

    cli(&server)
        .args(["create", "--title", "Hello", "--content", "World"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[1] Hello"));
    create.assert();
}

#[test]
fn update_sends_full_post_with_changed_field() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/posts");
        then.status(200)
            .json_body(json!([{"_id": "1", "title": "A", "content": "B"}]));
    });
    let update = server.mock(|when, then| {
        when.method(PUT)
            .path("/posts/1")
            .json_body(json!({"_id": "1", "title": "A2", "content": "B"}));
        then.status(200)
            .json_body(json!({"_id": "1", "title": "A2", "content": "B"}));
    });

    cli(&server)
        .args(["update", "1", "--title", "A2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[1] A2"));
    update.assert();
}

#[test]
fn update_of_unknown_id_fails_without_request() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/posts");
        then.status(200).json_body(json!([]));
    });
    let update = server.mock(|when, then| {
        when.method(PUT);
        then.status(200);
    });

    cli(&server)
        .args(["update", "404", "--title", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no post with id 404"));
    update.assert_hits(0);
}

#[test]
fn delete_not_found_is_reported() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/posts");
        then.status(200)
            .json_body(json!([{"_id": "1", "title": "A", "content": "B"}]));
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/posts/1");
        then.status(404);
    });

    cli(&server)
        .args(["delete", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("resource not found"));
}

#[test]
fn shell_adds_a_post_from_stdin() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/posts");
        then.status(200).json_body(json!([]));
    });
    let create = server.mock(|when, then| {
        when.method(POST)
            .path("/posts")
            .json_body(json!({"title": "Hello", "content": "line one\nline two"}));
        then.status(201).json_body(
            json!({"_id": "1", "title": "Hello", "content": "line one\nline two"}),
        );
    });

    cli(&server)
        .arg("shell")
        .write_stdin("title Hello\ncontent line one\\nline two\nadd\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("My Blog"))
        .stdout(predicate::str::contains("No posts yet."))
        .stdout(predicate::str::contains("added [1] Hello\n    line one\n    line two"));
    create.assert();
}

#[test]
fn shell_failure_is_shown_once_with_default_logging() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/posts");
        then.status(200).json_body(json!([]));
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/posts/1");
        then.status(404);
    });

    cli(&server)
        .env_remove("RUST_LOG")
        .env_remove("LOG_FORMAT")
        .arg("shell")
        .write_stdin("delete 1\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error deleting post: resource not found"))
        .stderr(predicate::str::contains("Request failed").not());
}

#[test]
fn invalid_base_url_is_rejected() {
    Command::cargo_bin("blog-cli")
        .unwrap()
        .env("RUST_LOG", "off")
        .args(["list", "--base-url", "ftp://example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid client configuration"));
}
