use super::*;
use crate::catalog::NO_ARGS;
use crate::diagnostics::Severity;
use pretty_assertions::assert_eq;

fn reporter(verify: Verify) -> Reporter {
    Reporter::new(ReportConfig::default().with_verify(verify))
}

#[test]
fn test_ignore_policy_records_nothing() {
    let mut r = reporter(Verify::Ignore);
    r.warn("W01", ["bad uri"], Position::at(1, 1)).unwrap();
    assert!(r.diagnostics().is_empty());
    assert_eq!(r.emitted_count(Code::warning(1)), 0);
}

#[test]
fn test_ignore_policy_still_rejects_unknown_codes() {
    let mut r = reporter(Verify::Ignore);
    let err = r.warn("W99", NO_ARGS, Position::unknown()).unwrap_err();
    assert_eq!(err, CatalogError::UnknownCode("W99".into()));
}

#[test]
fn test_warn_policy_records_rendered_warning() {
    let mut r = Reporter::new(
        ReportConfig::default()
            .with_verify(Verify::Warn)
            .with_source("caps.xml"),
    );
    r.warn("W01", ["http:::bad"], Position::at(4, 9)).unwrap();

    let diags = r.diagnostics().diagnostics();
    assert_eq!(diags.len(), 1);
    assert_eq!(
        diags[0].formatted(),
        "caps.xml:4:9: W01: 'http:::bad' is not a valid URI"
    );
    assert_eq!(diags[0].severity, Severity::Warning);
}

#[test]
fn test_position_source_overrides_config_source() {
    let mut r = Reporter::new(
        ReportConfig::default()
            .with_verify(Verify::Warn)
            .with_source("default.xml"),
    );
    r.warn("W03", NO_ARGS, Position::at(1, 2).with_source("inline.xml"))
        .unwrap();
    assert_eq!(
        r.diagnostics().diagnostics()[0].position.source.as_deref(),
        Some("inline.xml")
    );
}

#[test]
fn test_suppression_after_cap() {
    let mut config = ReportConfig::default().with_verify(Verify::Warn);
    config.max_warnings = 3;
    let mut r = Reporter::new(config);

    for i in 0..5 {
        r.warn("W04", [format!("flag{}", i)], Position::at(i + 1, 1))
            .unwrap();
    }
    r.warn("W03", NO_ARGS, Position::unknown()).unwrap();

    let w04: Vec<_> = r.diagnostics().with_code(Code::warning(4)).collect();
    assert_eq!(w04.len(), 3);
    assert!(!w04[1].message.ends_with(SUPPRESSION_NOTICE));
    assert_eq!(
        w04[2].message,
        format!("'flag2' is not a recognized flag{}", SUPPRESSION_NOTICE)
    );
    assert_eq!(r.emitted_count(Code::warning(4)), 5);
    assert_eq!(r.suppressed_count(Code::warning(4)), 2);

    // Other codes keep their own counter.
    assert_eq!(r.diagnostics().with_code(Code::warning(3)).count(), 1);
    assert_eq!(r.suppressed_count(Code::warning(3)), 0);
}

#[test]
fn test_zero_cap_records_nothing() {
    let mut config = ReportConfig::default().with_verify(Verify::Warn);
    config.max_warnings = 0;
    let mut r = Reporter::new(config);
    r.warn("W03", NO_ARGS, Position::unknown()).unwrap();
    assert!(r.diagnostics().is_empty());
    assert_eq!(r.suppressed_count(Code::warning(3)), 1);
}

#[test]
fn test_raise_returns_fatal_condition() {
    let r = reporter(Verify::Ignore);
    let err = r
        .raise::<(), _>("E07", NO_ARGS, Position::at(1, 1).with_source("x.xml"))
        .unwrap_err();

    assert!(err.is_value_error());
    let fatal = err.as_fatal().unwrap();
    assert_eq!(fatal.condition_code(), Code::fatal(7));
    assert_eq!(
        fatal.to_string(),
        "x.xml:1:1: E07: File does not appear to be a VOSITables file"
    );
}

#[test]
fn test_raise_with_bad_arguments_is_catalog_error() {
    let r = reporter(Verify::Warn);
    let err = r.raise::<(), _>("E06", ["a", "b"], Position::unknown()).unwrap_err();
    assert!(matches!(err, VosiError::Catalog(CatalogError::ArgumentCount { .. })));
    assert!(!err.is_value_error());
}

#[test]
fn test_warn_or_raise_follows_policy() {
    let mut r = reporter(Verify::Warn);
    r.warn_or_raise("W05", Some("E06"), ["table"], Position::unknown())
        .unwrap();
    assert_eq!(r.diagnostics().len(), 1);

    let mut r = reporter(Verify::Exception);
    let err = r
        .warn_or_raise("W05", Some("E06"), ["table"], Position::unknown())
        .unwrap_err();
    let fatal = err.as_fatal().unwrap();
    assert_eq!(fatal.condition_code(), Code::fatal(6));
    assert_eq!(fatal.message(), "The table element must have a name element");
    assert!(r.diagnostics().is_empty());
}

#[test]
fn test_warn_or_raise_escalates_warning_code() {
    let mut r = reporter(Verify::Exception);
    let err = r
        .warn_or_raise("W26", None, NO_ARGS, Position::unknown())
        .unwrap_err();
    let fatal = err.as_fatal().unwrap();
    assert_eq!(fatal.condition_code(), Code::warning(26));
    assert!(!fatal.is_value_error());
    assert!(!err.is_value_error());

    // Both classifications agree: no invalid-value view for a warning.
    let err = err.into_invalid_value().unwrap_err();
    assert_eq!(
        err.as_fatal().map(|f| f.condition_code()),
        Some(Code::warning(26))
    );
}

#[test]
fn test_emit_routes_by_severity() {
    let mut r = reporter(Verify::Warn);
    r.emit("W20", NO_ARGS, Position::unknown()).unwrap();
    assert_eq!(r.diagnostics().warning_count(), 1);

    let err = r.emit("E05", NO_ARGS, Position::unknown()).unwrap_err();
    assert_eq!(err.as_fatal().map(|f| f.condition_code()), Some(Code::fatal(5)));
    assert!(!r.diagnostics().has_fatal());
}

#[test]
fn test_into_diagnostics() {
    let mut r = reporter(Verify::Warn);
    r.warn("W31", NO_ARGS, Position::unknown()).unwrap();
    let bag = r.into_diagnostics();
    assert_eq!(bag.codes(), vec![Code::warning(31)]);
}

#[test]
fn test_parse_line_full() {
    let parsed = parse_line("caps.xml:12:5: W01: 'http:::bad' is not a valid URI").unwrap();
    assert_eq!(
        parsed,
        ParsedLine {
            source: Some("caps.xml".into()),
            line: Some(12),
            column: Some(5),
            code: Code::warning(1),
            message: "'http:::bad' is not a valid URI".into(),
            suppressing: false,
        }
    );
    assert!(parsed.is_warning());
    assert!(!parsed.is_fatal());
}

#[test]
fn test_parse_line_unknown_position() {
    let parsed = parse_line("?:?:?: E07: File does not appear to be a VOSITables file").unwrap();
    assert_eq!(parsed.source, None);
    assert_eq!(parsed.line, None);
    assert_eq!(parsed.column, None);
    assert!(parsed.is_fatal());
}

#[test]
fn test_parse_line_strips_suppression_notice() {
    let line = format!("t.xml:1:2: W03: Size must be positive{}", SUPPRESSION_NOTICE);
    let parsed = parse_line(&line).unwrap();
    assert!(parsed.suppressing);
    assert_eq!(parsed.message, "Size must be positive");
}

#[test]
fn test_parse_line_rejects_other_text() {
    assert!(parse_line("just some log output").is_none());
    assert!(parse_line("t.xml:1:2: X01: nope").is_none());
    assert!(parse_line("t.xml:a:2: W01: nope").is_none());
}

#[test]
fn test_rendered_lines_round_trip() {
    let mut r = Reporter::new(
        ReportConfig::default()
            .with_verify(Verify::Warn)
            .with_source("tables.xml"),
    );
    r.warn("W15", ["2.0"], Position::at(1, 40)).unwrap();
    r.warn("W13", ["table"], Position::at(9, 3)).unwrap();

    for diag in r.diagnostics().diagnostics() {
        let parsed = parse_line(&diag.formatted()).unwrap();
        assert_eq!(parsed.code, diag.code);
        assert_eq!(parsed.message, diag.message);
        assert_eq!(parsed.line, diag.position.line);
        assert_eq!(parsed.column, diag.position.column);
        assert_eq!(parsed.source, diag.position.source);
    }
}
