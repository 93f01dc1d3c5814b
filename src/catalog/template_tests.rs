use super::*;
use pretty_assertions::assert_eq;

fn strings(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_placeholder_count() {
    assert_eq!(placeholder_count("Size must be positive"), 0);
    assert_eq!(placeholder_count("'{}' is not a valid URI"), 1);
    assert_eq!(placeholder_count("{} and {}"), 2);
    assert_eq!(placeholder_count("{{}} is literal"), 0);
    assert_eq!(placeholder_count(""), 0);
}

#[test]
fn test_fill_in_order() {
    assert_eq!(fill("{} then {}", &strings(&["a", "b"])), "a then b");
    assert_eq!(
        fill("'{}' is not a valid URI", &strings(&["http:::bad"])),
        "'http:::bad' is not a valid URI"
    );
}

#[test]
fn test_fill_escaped_braces() {
    assert_eq!(fill("{{{}}}", &strings(&["x"])), "{x}");
    assert_eq!(fill("a {{b}} c", &[]), "a {b} c");
}

#[test]
fn test_fill_lone_braces_are_text() {
    assert_eq!(fill("a{", &[]), "a{");
    assert_eq!(fill("}b", &[]), "}b");
    assert_eq!(fill("{x}", &[]), "{x}");
    assert_eq!(placeholder_count("{x}"), 0);
}

#[test]
fn test_fill_multibyte_text() {
    assert_eq!(fill("64×64×{}", &strings(&["10*"])), "64×64×10*");
}

#[test]
fn test_fill_argument_braces_not_reinterpreted() {
    assert_eq!(fill("'{}'", &strings(&["{}"])), "'{}'");
}
