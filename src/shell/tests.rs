use super::*;
use std::collections::HashSet;

#[test]
fn test_parse_known_labels() {
    assert_eq!(Shell::parse("Terminal"), Shell::Terminal);
    assert_eq!(Shell::parse("Hyper"), Shell::Hyper);
    assert_eq!(Shell::parse("iTerm2"), Shell::ITerm2);
}

#[test]
fn test_parse_label_round_trip() {
    for shell in Shell::ALL {
        assert_eq!(Shell::parse(shell.label()), shell);
        assert_eq!(Shell::parse(&shell.to_string()), shell);
    }
}

#[test]
fn test_parse_unknown_falls_back_to_default() {
    for label in ["", "Alacritty", "iterm2", "ITERM2", "terminal", " Hyper", "Hyper ", "💻"] {
        assert_eq!(Shell::parse(label), Shell::DEFAULT, "label {label:?}");
    }
}

#[test]
fn test_default_is_terminal() {
    assert_eq!(Shell::default(), Shell::Terminal);
    assert_eq!(Shell::DEFAULT, Shell::Terminal);
}

#[test]
fn test_bundle_identifiers() {
    assert_eq!(Shell::Terminal.bundle_identifier(), "com.apple.Terminal");
    assert_eq!(Shell::Hyper.bundle_identifier(), "co.zeit.hyper");
    assert_eq!(Shell::ITerm2.bundle_identifier(), "com.googlecode.iterm2");
}

#[test]
fn test_bundle_identifiers_are_distinct() {
    let ids: HashSet<&str> = Shell::ALL.iter().map(|s| s.bundle_identifier()).collect();
    assert_eq!(ids.len(), Shell::ALL.len());
}

#[test]
fn test_all_in_declaration_order() {
    assert_eq!(Shell::ALL, [Shell::Terminal, Shell::Hyper, Shell::ITerm2]);
}

#[test]
fn test_from_string() {
    assert_eq!(Shell::from("Hyper"), Shell::Hyper);
    assert_eq!(Shell::from(String::from("nope")), Shell::Terminal);
}
