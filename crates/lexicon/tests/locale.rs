//! Integration tests for locale resolution.

use lexicon::locale::known_languages;
use lexicon::{LocaleError, LocaleIdentifier, parse_locale};
use serde::{Deserialize, Serialize};

// =========================================================================
// Valid Locales
// =========================================================================

#[test]
fn known_language_parses_without_territory() {
    for code in ["en", "fr", "de", "ja", "zh", "pt", "ru", "uk"] {
        let locale = parse_locale(code).unwrap();
        assert_eq!(locale.language(), code);
        assert_eq!(locale.territory(), None);
        assert_eq!(locale.to_string(), code);
    }
}

#[test]
fn every_registry_language_parses() {
    for code in known_languages() {
        let locale = parse_locale(code).unwrap();
        assert_eq!(locale.to_string(), *code);
    }
}

#[test]
fn language_is_lowercased() {
    let locale = parse_locale("FR").unwrap();
    assert_eq!(locale.language(), "fr");
    assert_eq!(locale.to_string(), "fr");
}

#[test]
fn language_territory_is_normalized() {
    let cases = [
        ("en_US", "en", "US"),
        ("pt_br", "pt", "BR"),
        ("ZH_tw", "zh", "TW"),
        ("es_419", "es", "419"),
        ("fil_PH", "fil", "PH"),
    ];
    for (raw, language, territory) in cases {
        let locale = parse_locale(raw).unwrap();
        assert_eq!(locale.language(), language, "{raw}");
        assert_eq!(locale.territory(), Some(territory), "{raw}");
        assert_eq!(locale.to_string(), format!("{language}_{territory}"));
    }
}

#[test]
fn surrounding_whitespace_is_ignored() {
    let locale = parse_locale("  de_AT\n").unwrap();
    assert_eq!(locale.to_string(), "de_AT");
}

#[test]
fn territory_is_not_checked_against_a_registry() {
    let locale = parse_locale("en_ZZ").unwrap();
    assert_eq!(locale.territory(), Some("ZZ"));
}

#[test]
fn differently_cased_inputs_are_equal() {
    assert_eq!(parse_locale("EN_us").unwrap(), parse_locale("en_US").unwrap());
}

#[test]
fn from_str_delegates_to_parse_locale() {
    let locale: LocaleIdentifier = "ru".parse().unwrap();
    assert_eq!(locale.language(), "ru");
    assert!("42".parse::<LocaleIdentifier>().is_err());
}

// =========================================================================
// Fallback Chain
// =========================================================================

#[test]
fn fallback_chain_lists_territory_then_language() {
    let locale = parse_locale("fr_CA").unwrap();
    assert_eq!(locale.fallback_chain(), vec!["fr_CA", "fr"]);
}

#[test]
fn fallback_chain_of_bare_language_is_itself() {
    let locale = parse_locale("en").unwrap();
    assert_eq!(locale.fallback_chain(), vec!["en"]);
}

// =========================================================================
// Malformed Locales
// =========================================================================

#[test]
fn digits_are_malformed() {
    let err = parse_locale("42").unwrap_err();
    assert!(matches!(err, LocaleError::Malformed { .. }));
    assert_eq!(err.input(), "42");
}

#[test]
fn malformed_shapes_are_rejected() {
    for raw in [
        "", "   ", "e", "e4", "en-US", "_US", "en_", "en_U", "en_USA", "en_4x", "en_US_POSIX",
    ] {
        let result = parse_locale(raw);
        assert!(
            matches!(result, Err(LocaleError::Malformed { .. })),
            "expected '{raw}' to be malformed, got {result:?}"
        );
    }
}

#[test]
fn malformed_error_names_input() {
    let err = parse_locale("42").unwrap_err();
    insta::assert_snapshot!(err, @"malformed locale '42': language must be 2 or more ASCII letters");
}

#[test]
fn malformed_territory_error_message() {
    let err = parse_locale("en_USA").unwrap_err();
    insta::assert_snapshot!(
        err,
        @"malformed locale 'en_USA': territory must be 2 ASCII letters or a 3-digit area code"
    );
}

#[test]
fn empty_locale_error_message() {
    let err = parse_locale("").unwrap_err();
    insta::assert_snapshot!(err, @"malformed locale '': locale is empty");
}

// =========================================================================
// Unknown Languages
// =========================================================================

#[test]
fn unknown_two_letter_code_is_unknown_language() {
    let err = parse_locale("xx").unwrap_err();
    assert!(matches!(err, LocaleError::UnknownLanguage { .. }));
    assert_eq!(err.input(), "xx");
}

#[test]
fn unknown_three_letter_code_is_unknown_language() {
    let err = parse_locale("foo").unwrap_err();
    assert_eq!(
        err,
        LocaleError::UnknownLanguage {
            input: "foo".to_string(),
            language: "foo".to_string(),
            suggestions: vec!["fo".to_string()],
        }
    );
}

#[test]
fn long_alphabetic_codes_are_unknown_languages() {
    for (raw, language) in [("engl", "engl"), ("English", "english"), ("abcde_US", "abcde")] {
        match parse_locale(raw) {
            Err(LocaleError::UnknownLanguage {
                language: found, ..
            }) => assert_eq!(found, language),
            other => panic!("expected '{raw}' to be an unknown language, got {other:?}"),
        }
    }
}

#[test]
fn unknown_language_with_territory_reports_language() {
    let err = parse_locale("QQ_us").unwrap_err();
    match err {
        LocaleError::UnknownLanguage {
            input, language, ..
        } => {
            assert_eq!(input, "QQ_us");
            assert_eq!(language, "qq");
        }
        LocaleError::Malformed { .. } => panic!("expected unknown language"),
    }
}

#[test]
fn unknown_language_message_includes_suggestions() {
    let err = parse_locale("xx").unwrap_err();
    insta::assert_snapshot!(err, @"unknown language 'xx' in locale 'xx' (did you mean: xh?)");
}

#[test]
fn unknown_language_and_malformed_messages_differ() {
    let unknown = parse_locale("xx").unwrap_err().to_string();
    let malformed = parse_locale("42").unwrap_err().to_string();
    assert!(unknown.contains("unknown language"));
    assert!(malformed.contains("malformed"));
}

// =========================================================================
// Serde
// =========================================================================

#[derive(Debug, Serialize, Deserialize)]
struct SiteConfig {
    locale: LocaleIdentifier,
}

#[test]
fn locale_deserializes_from_config() {
    let config: SiteConfig = serde_json::from_str(r#"{"locale": "en_gb"}"#).unwrap();
    assert_eq!(config.locale.to_string(), "en_GB");
}

#[test]
fn locale_serializes_as_canonical_string() {
    let config = SiteConfig {
        locale: parse_locale("PT_br").unwrap(),
    };
    assert_eq!(serde_json::to_string(&config).unwrap(), r#"{"locale":"pt_BR"}"#);
}

#[test]
fn invalid_locale_fails_deserialization() {
    let err = serde_json::from_str::<SiteConfig>(r#"{"locale": "42"}"#).unwrap_err();
    assert!(err.to_string().contains("malformed locale '42'"));
}
