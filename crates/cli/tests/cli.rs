// ABOUTME: Integration tests for the doogle-cli binary.
// ABOUTME: Tests content extraction against a mock server and failure exit codes.

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo::CommandCargoExt;
use httpmock::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn cli_cmd() -> Command {
    Command::cargo_bin("doogle-cli").unwrap()
}

#[test]
fn extracts_article_text() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/article");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(
                "<html><body><nav>Menu</nav><article>Hello <b>World</b></article>\
                 <footer>Copyright</footer></body></html>",
            );
    });

    cli_cmd()
        .arg("--allow-private-networks")
        .arg(server.url("/article"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello World"))
        .stdout(predicate::str::contains("Menu").not());

    mock.assert();
}

#[test]
fn json_flag_outputs_content_field() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/page");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body("<html><body><main>Body text</main></body></html>");
    });

    cli_cmd()
        .arg("--json")
        .arg("--allow-private-networks")
        .arg(server.url("/page"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"content\""))
        .stdout(predicate::str::contains("Body text"));

    mock.assert();
}

#[test]
fn upstream_error_fails_with_message() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/gone");
        then.status(404).body("not found");
    });

    cli_cmd()
        .arg("--allow-private-networks")
        .arg(server.url("/gone"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("404"));

    mock.assert();
}

#[test]
fn no_urls_fails() {
    cli_cmd().assert().failure();
}
