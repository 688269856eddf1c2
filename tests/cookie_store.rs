mod common;

use std::fs;

use common::LogCapture;
use serde_json::Value;
use tempfile::TempDir;
use webview_session::{CookieRecord, CookieStore, Error, LiveCookie};

fn store(dir: &TempDir) -> CookieStore {
    CookieStore::new(dir.path().join("cookies.json"), ".grok.com")
}

fn full_cookie(name: &str, value: &str) -> LiveCookie {
    LiveCookie {
        name: name.into(),
        value: value.into(),
        domain: Some("accounts.grok.com".into()),
        path: Some("/auth".into()),
        expires: Some(1893456000),
        secure: Some(true),
        http_only: Some(true),
    }
}

#[test]
fn missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);
    assert_eq!(store.load().unwrap(), Vec::<CookieRecord>::new());
    assert!(store.load_or_default().is_empty());
}

#[test]
fn bare_string_is_malformed() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);
    fs::write(store.path(), r#""not a list""#).unwrap();
    assert!(matches!(store.load(), Err(Error::Parse { .. })));
}

#[test]
fn invalid_syntax_is_malformed() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);
    fs::write(store.path(), "[{\"name\": \"a\",").unwrap();
    assert!(matches!(store.load(), Err(Error::Parse { .. })));
}

#[test]
fn entry_without_name_is_malformed() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);
    fs::write(store.path(), r#"[{"value": "x"}]"#).unwrap();
    assert!(store.load().is_err());
}

#[test]
fn malformed_file_logs_one_error_and_yields_nothing() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);
    fs::write(store.path(), "{ definitely not json").unwrap();

    let logs = LogCapture::default();
    let records = logs.scope(|| store.load_or_default());

    assert!(records.is_empty());
    assert_eq!(logs.lines_with("ERROR"), 1, "logs: {}", logs.contents());
}

#[test]
fn save_then_load_keeps_every_field() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);
    let jar = vec![full_cookie("sso", "abc"), full_cookie("theme", "dark")];

    assert_eq!(store.save(&jar).unwrap(), 2);
    let records = store.load().unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "sso");
    assert_eq!(records[1].name, "theme");
    for r in &records {
        assert_eq!(r.domain, "accounts.grok.com");
        assert_eq!(r.path, "/auth");
        assert_eq!(r.expires, 1893456000);
        assert!(r.secure);
        assert!(r.http_only);
    }
}

#[test]
fn save_substitutes_defaults() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);
    store.save(&[LiveCookie::new("sid", "1")]).unwrap();

    let records = store.load().unwrap();
    assert_eq!(
        records,
        vec![CookieRecord {
            name: "sid".into(),
            value: "1".into(),
            domain: ".grok.com".into(),
            path: "/".into(),
            expires: -1,
            secure: false,
            http_only: false,
        }]
    );
}

#[test]
fn saved_file_has_one_object_per_cookie_with_all_keys() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);
    let jar = vec![
        LiveCookie::new("a", "1"),
        full_cookie("b", "2"),
        LiveCookie {
            secure: Some(true),
            ..LiveCookie::new("c", "3")
        },
    ];
    store.save(&jar).unwrap();

    let raw = fs::read_to_string(store.path()).unwrap();
    assert!(raw.contains("\n  {\n    \"name\""), "not 2-space pretty: {raw}");

    let parsed: Value = serde_json::from_str(&raw).unwrap();
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    for entry in entries {
        let obj = entry.as_object().unwrap();
        for key in ["name", "value", "domain", "path", "expires", "secure", "httpOnly"] {
            assert!(obj.contains_key(key), "missing {key} in {entry}");
        }
        assert_eq!(obj.len(), 7);
    }
}

#[test]
fn save_overwrites_previous_jar() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);
    store
        .save(&[LiveCookie::new("old", "1"), LiveCookie::new("older", "2")])
        .unwrap();
    store.save(&[LiveCookie::new("new", "3")]).unwrap();

    let names: Vec<_> = store.load().unwrap().into_iter().map(|r| r.name).collect();
    assert_eq!(names, ["new"]);
}

#[test]
fn fractional_and_missing_fields_load_with_defaults() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);
    fs::write(
        store.path(),
        r#"[{"name": "a", "value": "1", "expires": 1893456000.75},
            {"name": "b", "value": "2", "expires": null, "httpOnly": true}]"#,
    )
    .unwrap();

    let records = store.load().unwrap();
    assert_eq!(records[0].expires, 1893456000);
    assert_eq!(records[0].domain, ".grok.com");
    assert_eq!(records[1].expires, -1);
    assert!(records[1].http_only);
}

#[test]
fn save_into_missing_directory_fails_without_panicking() {
    let dir = TempDir::new().unwrap();
    let store = CookieStore::new(dir.path().join("nope").join("cookies.json"), ".grok.com");
    assert!(matches!(
        store.save(&[LiveCookie::new("a", "1")]),
        Err(Error::Write { .. })
    ));
}

#[test]
fn missing_file_logs_nothing() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);

    let logs = LogCapture::default();
    let records = logs.scope(|| store.load_or_default());

    assert!(records.is_empty());
    assert!(logs.contents().is_empty(), "logs: {}", logs.contents());
}

#[test]
fn unreadable_path_is_a_read_error_not_an_empty_jar() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);
    fs::create_dir(store.path()).unwrap();

    assert!(matches!(store.load(), Err(Error::Read { .. })));

    let logs = LogCapture::default();
    assert!(logs.scope(|| store.load_or_default()).is_empty());
    assert_eq!(logs.lines_with("ERROR"), 1, "logs: {}", logs.contents());
}

#[test]
fn existing_file_logs_the_loaded_count() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);
    store.save(&[LiveCookie::new("sid", "1")]).unwrap();

    let logs = LogCapture::default();
    let records = logs.scope(|| store.load_or_default());

    assert_eq!(records.len(), 1);
    assert!(logs.contents().contains("cookies loaded"));
    assert_eq!(logs.lines_with("ERROR"), 0);
}
