use std::{fs, path::PathBuf, time::Duration};

use super::{load_settings_from, Settings};

fn no_env() -> Vec<(String, String)> {
    Vec::new()
}

fn env(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn defaults_match_site_timings() {
    let timings = Settings::default().timings();
    assert_eq!(timings.search_delay, Duration::from_millis(300));
    assert_eq!(timings.result_announcement_ttl, Duration::from_millis(3000));
    assert_eq!(timings.selection_announcement_ttl, Duration::from_millis(1000));
}

#[test]
fn file_values_override_defaults_and_env_overrides_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("summit.toml");
    fs::write(
        &path,
        "search_debounce_ms = 150\nexport_dir = \"/tmp/receipts\"\nwindow_width = 900.5\n",
    )
    .expect("write config");

    let settings = load_settings_from(
        Some(&path),
        env(&[
            ("SUMMIT__SEARCH_DEBOUNCE_MS", "75"),
            ("SUMMIT__ANNOUNCEMENT_TTL_MS", "5000"),
            ("UNRELATED", "1"),
        ]),
    )
    .expect("settings");

    assert_eq!(settings.search_debounce_ms, 75);
    assert_eq!(settings.announcement_ttl_ms, 5000);
    assert_eq!(settings.export_dir, Some(PathBuf::from("/tmp/receipts")));
    assert_eq!(settings.window_width, 900.5);
    assert_eq!(settings.selection_announcement_ttl_ms, 1000);
}

#[test]
fn malformed_values_are_ignored() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("summit.toml");
    fs::write(&path, "announcement_ttl_ms = \"soon\"\nmystery = true\n").expect("write config");

    let settings = load_settings_from(
        Some(&path),
        env(&[("SUMMIT__SEARCH_DEBOUNCE_MS", "-4")]),
    )
    .expect("settings");
    assert_eq!(settings, Settings::default());
}

#[test]
fn empty_export_dir_clears_it() {
    let settings =
        load_settings_from(None, env(&[("SUMMIT__EXPORT_DIR", "  ")])).expect("settings");
    assert_eq!(settings.export_dir, None);
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = load_settings_from(Some(&dir.path().join("absent.toml")), no_env()).unwrap_err();
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn invalid_toml_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("summit.toml");
    fs::write(&path, "search_debounce_ms = = 3").expect("write config");
    assert!(load_settings_from(Some(&path), no_env()).is_err());
}
