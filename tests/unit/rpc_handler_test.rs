//! Unit tests for the RPC handler, covering all JSON-RPC methods dispatched by `handle_method`.
//!
//! These tests exercise every RPC method through the same code path used by the
//! real `securepass-rpc` binary, with the App's files in a temporary directory.

use std::io::Cursor;
use std::sync::Mutex;

use serde_json::{json, Value};
use tempfile::TempDir;

use securepass::app::{App, CONFIG_FILE, PASSWORD_FILE};
use securepass::rpc_handler::{handle_method, serve};

/// Create a fresh App rooted in a temp directory.
fn setup() -> (Mutex<App>, TempDir) {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let app = App::with_seed(tmp.path(), 7);
    (Mutex::new(app), tmp)
}

// ─── Ping ───

#[test]
fn test_ping() {
    let (app, _tmp) = setup();
    let res = handle_method(&app, "ping", &json!({})).unwrap();
    assert_eq!(res, json!({"pong": true}));
}

// ─── Unknown method ───

#[test]
fn test_unknown_method_returns_error() {
    let (app, _tmp) = setup();
    let res = handle_method(&app, "nonexistent.method", &json!({}));
    assert!(res.is_err());
    assert!(res.unwrap_err().contains("unknown method"));
}

// ─── Generate ───

#[test]
fn test_generate_with_defaults() {
    let (app, _tmp) = setup();
    let res = handle_method(&app, "password.generate", &json!({})).unwrap();
    let pw = res["password"].as_str().unwrap();
    assert_eq!(pw.chars().count(), 12);
}

#[test]
fn test_generate_with_params() {
    let (app, _tmp) = setup();
    let res = handle_method(&app, "password.generate", &json!({
        "length": 20,
        "upper": false,
        "lower": false,
        "digits": true,
        "special": false
    })).unwrap();
    let pw = res["password"].as_str().unwrap();
    assert_eq!(pw.len(), 20);
    assert!(pw.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn test_generate_no_classes() {
    let (app, _tmp) = setup();
    let res = handle_method(&app, "password.generate", &json!({
        "upper": false, "lower": false, "digits": false, "special": false
    }));
    assert_eq!(res.unwrap_err(), "Select at least one character class");
}

#[test]
fn test_generate_bad_params() {
    let (app, _tmp) = setup();
    assert!(handle_method(&app, "password.generate", &json!({"length": 2})).is_err());
    assert!(handle_method(&app, "password.generate", &json!({"length": "ten"})).is_err());
    assert!(handle_method(&app, "password.generate", &json!({"length": -5})).is_err());
    assert!(handle_method(&app, "password.generate", &json!({"upper": "yes"})).is_err());
}

#[test]
fn test_generate_is_reproducible_with_seed() {
    let dir_a = TempDir::new().unwrap();
    let dir_b = TempDir::new().unwrap();
    let a = Mutex::new(App::with_seed(dir_a.path(), 11));
    let b = Mutex::new(App::with_seed(dir_b.path(), 11));

    let ra = handle_method(&a, "password.generate", &json!({})).unwrap();
    let rb = handle_method(&b, "password.generate", &json!({})).unwrap();
    assert_eq!(ra, rb);
}

// ─── Save / List ───

#[test]
fn test_save_and_list() {
    let (app, tmp) = setup();

    let res = handle_method(&app, "password.save", &json!({"password": "abc123"})).unwrap();
    assert_eq!(res, json!({"ok": true}));
    assert!(tmp.path().join(PASSWORD_FILE).exists());

    let list = handle_method(&app, "password.list", &json!({})).unwrap();
    assert_eq!(list["status"], "loaded");
    let items = list["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["password"], "abc123");
    let line = list["lines"][0].as_str().unwrap();
    assert!(line.ends_with(": abc123"));
}

#[test]
fn test_save_empty_password() {
    let (app, tmp) = setup();
    let res = handle_method(&app, "password.save", &json!({"password": ""}));
    assert_eq!(res.unwrap_err(), "No password to save");
    assert!(!tmp.path().join(PASSWORD_FILE).exists());
}

#[test]
fn test_save_missing_param() {
    let (app, _tmp) = setup();
    let res = handle_method(&app, "password.save", &json!({}));
    assert_eq!(res.unwrap_err(), "missing password");
}

#[test]
fn test_save_non_string_password() {
    let (app, tmp) = setup();
    let res = handle_method(&app, "password.save", &json!({"password": 123}));
    assert_eq!(res.unwrap_err(), "invalid password: expected string");
    assert!(!tmp.path().join(PASSWORD_FILE).exists());
}

#[test]
fn test_list_without_file() {
    let (app, _tmp) = setup();
    let list = handle_method(&app, "password.list", &json!({})).unwrap();
    assert_eq!(list["status"], "missing");
    assert_eq!(list["items"], json!([]));
    assert_eq!(list["lines"], json!(["No saved passwords."]));
}

#[test]
fn test_list_corrupt_file() {
    let (app, tmp) = setup();
    std::fs::write(tmp.path().join(PASSWORD_FILE), "{{{").unwrap();

    let list = handle_method(&app, "password.list", &json!({})).unwrap();
    assert_eq!(list["status"], "corrupt");
    assert_eq!(list["items"], json!([]));
}

// ─── Settings ───

#[test]
fn test_settings_default() {
    let (app, _tmp) = setup();
    let res = handle_method(&app, "settings.get", &json!({})).unwrap();
    assert_eq!(res, json!({"dark_mode": false}));
}

#[test]
fn test_settings_set_and_get() {
    let (app, tmp) = setup();
    handle_method(&app, "settings.set", &json!({"dark_mode": true})).unwrap();

    let res = handle_method(&app, "settings.get", &json!({})).unwrap();
    assert_eq!(res["dark_mode"], true);
    assert!(tmp.path().join(CONFIG_FILE).exists());

    // a new App over the same directory starts with the saved value
    let reopened = Mutex::new(App::new(tmp.path()));
    let res = handle_method(&reopened, "settings.get", &json!({})).unwrap();
    assert_eq!(res["dark_mode"], true);
}

#[test]
fn test_settings_set_missing_value() {
    let (app, _tmp) = setup();
    assert!(handle_method(&app, "settings.set", &json!({})).is_err());
    assert!(handle_method(&app, "settings.set", &json!({"dark_mode": "on"})).is_err());
}

// ─── Request loop ───

fn run_lines(app: &Mutex<App>, input: &[u8]) -> Vec<Value> {
    let mut out = Vec::new();
    serve(app, Cursor::new(input.to_vec()), &mut out).unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

#[test]
fn test_serve_answers_each_request() {
    let (app, _tmp) = setup();
    let responses = run_lines(
        &app,
        b"{\"id\":1,\"method\":\"ping\"}\n\n{\"id\":2,\"method\":\"nope\"}\n",
    );

    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0], json!({"id": 1, "result": {"pong": true}}));
    assert_eq!(responses[1]["id"], 2);
    assert_eq!(responses[1]["error"], "unknown method: nope");
}

#[test]
fn test_serve_survives_non_utf8_line() {
    let (app, _tmp) = setup();
    let responses = run_lines(&app, b"\xff\xfe\n{\"id\":1,\"method\":\"ping\"}\n");

    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["id"], Value::Null);
    assert!(responses[0]["error"].as_str().unwrap().starts_with("parse error: "));
    assert_eq!(responses[1], json!({"id": 1, "result": {"pong": true}}));
}

#[test]
fn test_serve_reports_invalid_json_and_continues() {
    let (app, _tmp) = setup();
    let responses = run_lines(&app, b"{not json\n{\"id\":3,\"method\":\"settings.get\"}");

    assert_eq!(responses.len(), 2);
    assert!(responses[0]["error"].as_str().unwrap().starts_with("parse error: "));
    assert_eq!(responses[1], json!({"id": 3, "result": {"dark_mode": false}}));
}
