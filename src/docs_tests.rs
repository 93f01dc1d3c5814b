use super::*;

#[test]
fn test_explain_warning() {
    insta::assert_snapshot!(explain("W01").unwrap(), @r"
W01: 'x' is not a valid URI

Severity: warning

The attribute must be a valid URI as defined in RFC 2396.

Message: '{}' is not a valid URI
Defaults: x

References:
  http://www.ietf.org/rfc/rfc2396.txt
");
}

#[test]
fn test_explain_fatal_mentions_abort() {
    let text = explain("E07").unwrap();
    assert!(text.starts_with("E07: File does not appear to be a VOSITables file\n"));
    assert!(text.contains("Severity: error"));
    assert!(text.contains("Validation of the document stops"));
    assert!(!text.contains("Defaults:"));
}

#[test]
fn test_explain_unknown_code() {
    assert!(explain("W36").is_none());
    assert!(explain("garbage").is_none());
}

#[test]
fn test_reference_lists_every_code_in_order() {
    let doc = reference_markdown();

    let mut last = 0;
    for condition in catalog::all() {
        let heading = format!("### {}: {}", condition.code, condition.short_name());
        let at = doc
            .find(&heading)
            .unwrap_or_else(|| panic!("missing heading {:?}", heading));
        assert!(at > last, "{} is out of order", condition.code);
        last = at;
    }
}

#[test]
fn test_reference_sections() {
    let doc = reference_markdown();
    let warnings = doc.find("## Warnings").unwrap();
    let exceptions = doc.find("## Exceptions").unwrap();
    let w35 = doc.find("### W35").unwrap();
    let e01 = doc.find("### E01").unwrap();

    assert!(warnings < w35 && w35 < exceptions && exceptions < e01);
    assert!(doc.contains("<a id=\"E09\"></a>"));
    assert!(doc.contains("References: <http://www.ivoa.net/Documents/VOTable/20040811/"));
}

#[test]
fn test_reference_is_deterministic() {
    assert_eq!(reference_markdown(), reference_markdown());
}

#[test]
fn test_reference_markdown_snapshot() {
    insta::assert_snapshot!("reference_markdown", reference_markdown());
}
