use super::*;

#[test]
fn default_enables_everything() {
    let config = LintConfig::default();
    assert_eq!(config.checks, Checks::all());
    assert!(config.report_balanced_bidi);
}

#[test]
fn empty_settings_resolve_to_default() {
    assert_eq!(LintSettings::default().to_config(), LintConfig::default());
}

#[test]
fn settings_disable_individual_checks() {
    let settings = LintSettings {
        homoglyph: Some(false),
        report_balanced_bidi: Some(false),
        ..LintSettings::default()
    };
    let config = settings.to_config();
    assert_eq!(config.checks, Checks::BIDI | Checks::INVISIBLE);
    assert!(!config.report_balanced_bidi);
}

#[test]
fn builder_methods() {
    let config = LintConfig::default()
        .with_checks(Checks::INVISIBLE)
        .with_balanced_bidi(false);
    assert_eq!(config.checks, Checks::INVISIBLE);
    assert!(!config.report_balanced_bidi);
}

#[test]
fn settings_deserialize_from_camel_case() {
    let settings: LintSettings =
        serde_json::from_str(r#"{"invisible": false, "reportBalancedBidi": false}"#).unwrap();
    assert_eq!(settings.invisible, Some(false));
    assert_eq!(settings.report_balanced_bidi, Some(false));
    assert_eq!(settings.bidi, None);
}

#[test]
fn settings_ignore_unknown_fields() {
    let settings: LintSettings =
        serde_json::from_str(r#"{"showNotifications": "off", "homoglyph": true}"#).unwrap();
    assert_eq!(settings.homoglyph, Some(true));
}
