use pretty_assertions::assert_eq;
use rainersoft_utils::{Locale, UtilsConfig, UtilsError};
use std::io::Write;

// ── from_json ────────────────────────────────────────────────────

#[test]
fn empty_document_gives_defaults() {
    let config = UtilsConfig::from_json("{}").unwrap();
    assert_eq!(config, UtilsConfig::default());
    assert_eq!(config.locale, Locale::PtBr);
    assert_eq!(config.fuzzy_threshold, 0.6);
    assert!(!config.case_sensitive_search);
}

#[test]
fn partial_document_overrides_only_given_keys() {
    let config =
        UtilsConfig::from_json(r#"{"locale":"en-US","password":{"min_length":12}}"#).unwrap();
    assert_eq!(config.locale, Locale::EnUs);
    assert_eq!(config.password.min_length, 12);
    assert!(config.password.require_uppercase);
}

#[test]
fn out_of_range_threshold_is_rejected() {
    let err = UtilsConfig::from_json(r#"{"fuzzy_threshold":1.5}"#).unwrap_err();
    assert!(matches!(
        err,
        UtilsError::Types(rainersoft_utils::Error::InvalidConfig(_))
    ));
    assert!(err.to_string().contains("fuzzy_threshold"));
}

#[test]
fn zero_min_length_is_rejected() {
    let err = UtilsConfig::from_json(r#"{"password":{"min_length":0}}"#).unwrap_err();
    assert!(err.to_string().contains("min_length"));
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let err = UtilsConfig::from_json("{locale:").unwrap_err();
    assert!(matches!(
        err,
        UtilsError::Types(rainersoft_utils::Error::Serialization(_))
    ));
}

#[test]
fn unknown_locale_tag_fails_to_parse() {
    assert!(UtilsConfig::from_json(r#"{"locale":"fr-FR"}"#).is_err());
}

// ── load ─────────────────────────────────────────────────────────

#[test]
fn load_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"locale":"es-ES","case_sensitive_search":true}}"#).unwrap();

    let config = UtilsConfig::load(file.path()).unwrap();
    assert_eq!(config.locale, Locale::EsEs);
    assert!(config.case_sensitive_search);
}

#[test]
fn load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = UtilsConfig::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, UtilsError::Io(_)));
}

#[test]
fn config_round_trips_through_json() {
    let config = UtilsConfig::default().with_locale(Locale::EnUs);
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(UtilsConfig::from_json(&json).unwrap(), config);
}
