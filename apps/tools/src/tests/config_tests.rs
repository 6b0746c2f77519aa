use super::*;

use std::{collections::HashMap, io::Write};

fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_do_not_validate_details() {
    let settings = Settings::default();
    assert!(!settings.require_complete_details);
    assert_eq!(settings.log_level, "info");
    assert!(settings.corpus_path.is_none());
}

#[test]
fn file_values_override_defaults() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "corpus_path = \"content/posts.json\"\nrequire_complete_details = true"
    )
    .expect("write settings");

    let mut settings = Settings::default();
    apply_file(&mut settings, file.path()).expect("apply file");
    assert_eq!(settings.corpus_path, Some(PathBuf::from("content/posts.json")));
    assert!(settings.require_complete_details);
    assert_eq!(settings.log_level, "info");
}

#[test]
fn malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "require_complete_details = \"sometimes\"").expect("write settings");

    let mut settings = Settings::default();
    let err = apply_file(&mut settings, file.path()).expect_err("bad type");
    assert!(err.to_string().contains("invalid settings file"));
}

#[test]
fn env_overrides_file() {
    let mut settings = Settings {
        corpus_path: Some(PathBuf::from("from-file.json")),
        require_complete_details: true,
        log_level: "warn".into(),
    };
    apply_env(
        &mut settings,
        env_of(&[
            ("APP__CORPUS_PATH", "from-env.json"),
            ("APP__REQUIRE_COMPLETE_DETAILS", "off"),
            ("APP__LOG_LEVEL", "debug"),
        ]),
    );
    assert_eq!(settings.corpus_path, Some(PathBuf::from("from-env.json")));
    assert!(!settings.require_complete_details);
    assert_eq!(settings.log_level, "debug");
}

#[test]
fn unparseable_env_flag_is_ignored() {
    let mut settings = Settings::default();
    apply_env(
        &mut settings,
        env_of(&[("APP__REQUIRE_COMPLETE_DETAILS", "maybe")]),
    );
    assert!(!settings.require_complete_details);
}
