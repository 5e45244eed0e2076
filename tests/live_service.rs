//! End-to-end runs of the binary against a mock wallpaper service.

use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::json;

const TINY_PNG: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

fn cmd(server: &MockServer) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("wallgen");
    cmd.env("WALLGEN_CONFIG", "/nonexistent/wallgen/config.toml")
        .env("WALLGEN_SERVICE_URL", server.base_url())
        .env_remove("WALLGEN_REPLAY")
        .env_remove("WALLGEN_REC");
    cmd
}

#[test]
fn generate_sends_default_backend_fields() {
    let server = MockServer::start();
    let gen_mock = server.mock(|when, then| {
        when.method(POST).path("/GenImg").json_body(json!({
            "server": "10.176.33.52",
            "port": 7860,
            "prompt": "a quiet harbor",
            "OutputDir": "C:\\GeneratedPictures",
        }));
        then.status(200).json_body(json!({
            "ImagePath": "C:\\GeneratedPictures\\harbor.png",
            "ImageContent": TINY_PNG,
        }));
    });

    cmd(&server)
        .args(["generate", "a quiet harbor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("C:\\GeneratedPictures\\harbor.png"));

    gen_mock.assert();
}

#[test]
fn generate_apply_sets_returned_path() {
    let server = MockServer::start();
    let gen_mock = server.mock(|when, then| {
        when.method(POST).path("/GenImg");
        then.status(200).json_body(json!({
            "ImagePath": "C:\\GeneratedPictures\\harbor.png",
            "ImageContent": TINY_PNG,
        }));
    });
    let set_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/SetWallpaper")
            .json_body(json!({ "imagePath": "C:\\GeneratedPictures\\harbor.png" }));
        then.status(200);
    });

    cmd(&server).args(["generate", "--apply", "a quiet harbor"]).assert().success();

    gen_mock.assert();
    set_mock.assert();
}

#[test]
fn config_file_backend_values_are_sent() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(
        &config,
        "[backend]\nserver = \"gpu-box\"\nport = 7000\noutput_dir = \"E:\\\\art\"\n",
    )
    .unwrap();

    let server = MockServer::start();
    let gen_mock = server.mock(|when, then| {
        when.method(POST).path("/GenImg").json_body(json!({
            "server": "gpu-box",
            "port": 7000,
            "prompt": "dunes",
            "OutputDir": "E:\\art",
        }));
        then.status(200).json_body(json!({ "ImagePath": "E:\\art\\dunes.png", "ImageContent": "" }));
    });

    cmd(&server)
        .env("WALLGEN_CONFIG", config.to_str().unwrap())
        .args(["generate", "dunes"])
        .assert()
        .success();

    gen_mock.assert();
}

#[test]
fn set_reports_service_failure_status() {
    let server = MockServer::start();
    let set_mock = server.mock(|when, then| {
        when.method(POST).path("/SetWallpaper");
        then.status(500).body("could not open image");
    });

    cmd(&server)
        .args(["set", "C:\\GeneratedPictures\\missing.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Service error (500): could not open image"));

    set_mock.assert();
}

#[test]
fn failed_generation_skips_apply() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/GenImg");
        then.status(502).body("backend down");
    });
    let set_mock = server.mock(|when, then| {
        when.method(POST).path("/SetWallpaper");
        then.status(200);
    });

    cmd(&server).args(["generate", "--apply", "a quiet harbor"]).assert().failure();

    set_mock.assert_hits(0);
}

#[test]
fn recording_mode_writes_cassette() {
    let work_dir = tempfile::tempdir().unwrap();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/SetWallpaper");
        then.status(200).body("applied");
    });

    cmd(&server)
        .env("WALLGEN_REC", "1")
        .current_dir(work_dir.path())
        .args(["set", "C:\\GeneratedPictures\\harbor.png"])
        .assert()
        .success()
        .stdout(predicate::str::contains("applied"))
        .stderr(predicate::str::contains("Cassette saved:"));

    let sessions: Vec<_> = std::fs::read_dir(work_dir.path().join(".wallgen/cassettes"))
        .unwrap()
        .flatten()
        .collect();
    assert_eq!(sessions.len(), 1, "exactly one recording session");

    let cassette = sessions[0].path().join("wallpaper_service.cassette.yaml");
    let content = std::fs::read_to_string(cassette).unwrap();
    assert!(content.contains("set_wallpaper"));
    assert!(content.contains("imagePath"));
    assert!(content.contains("applied"));
}

#[test]
fn apply_with_empty_image_path_never_posts_set_wallpaper() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/GenImg");
        then.status(200).json_body(json!({ "ImagePath": "", "ImageContent": TINY_PNG }));
    });
    let set_mock = server.mock(|when, then| {
        when.method(POST).path("/SetWallpaper");
        then.status(200);
    });

    cmd(&server)
        .args(["generate", "--apply", "a quiet harbor"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Service returned an empty image path"));

    set_mock.assert_hits(0);
}
