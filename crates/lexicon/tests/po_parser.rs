//! Tests for the PO text catalog parser.

use lexicon::Catalog;
use lexicon::parser::{ParseError, PoEntry, parse_po};

const THEME_PO: &str = r#"# French translations for the docs theme.
msgid ""
msgstr ""
"Content-Type: text/plain; charset=UTF-8\n"
"Plural-Forms: nplurals=2; plural=(n > 1);\n"

#: templates/search.html:4
msgid "Search"
msgstr "Rechercher"

#, fuzzy
msgid "Next"
msgstr "Suivant"

msgctxt "navigation"
msgid "Previous"
msgstr "Precedent"

msgid "%(count)s page"
msgid_plural "%(count)s pages"
msgstr[0] "%(count)s page"
msgstr[1] "%(count)s pages"
"#;

// =========================================================================
// Entries
// =========================================================================

#[test]
fn parses_all_entries_in_order() {
    let entries = parse_po(THEME_PO).unwrap();
    let ids: Vec<&str> = entries.iter().map(|entry| entry.id.as_str()).collect();
    assert_eq!(ids, vec!["", "Search", "Next", "Previous", "%(count)s page"]);
}

#[test]
fn header_continuation_lines_are_joined() {
    let entries = parse_po(THEME_PO).unwrap();
    assert!(entries[0].is_header());
    assert_eq!(
        entries[0].translations,
        vec![
            "Content-Type: text/plain; charset=UTF-8\nPlural-Forms: nplurals=2; plural=(n > 1);\n"
        ]
    );
}

#[test]
fn simple_entry() {
    let entries = parse_po(THEME_PO).unwrap();
    assert_eq!(
        entries[1],
        PoEntry {
            flags: vec![],
            context: None,
            id: "Search".to_string(),
            id_plural: None,
            translations: vec!["Rechercher".to_string()],
        }
    );
}

#[test]
fn flags_are_collected() {
    let entries = parse_po(THEME_PO).unwrap();
    assert_eq!(entries[2].flags, vec!["fuzzy"]);
    assert!(entries[2].is_fuzzy());
}

#[test]
fn multiple_flags_on_one_line() {
    let entries = parse_po("#, fuzzy, python-format\nmsgid \"a\"\nmsgstr \"b\"\n").unwrap();
    assert_eq!(entries[0].flags, vec!["fuzzy", "python-format"]);
}

#[test]
fn context_is_captured() {
    let entries = parse_po(THEME_PO).unwrap();
    assert_eq!(entries[3].context.as_deref(), Some("navigation"));
    assert!(!entries[3].is_header());
}

#[test]
fn plural_forms_are_captured() {
    let entries = parse_po(THEME_PO).unwrap();
    let plural = &entries[4];
    assert_eq!(plural.id_plural.as_deref(), Some("%(count)s pages"));
    assert_eq!(plural.translations, vec!["%(count)s page", "%(count)s pages"]);
}

#[test]
fn plural_forms_are_ordered_by_index() {
    let source = r#"
msgid "file"
msgid_plural "files"
msgstr[1] "fichiers"
msgstr[0] "fichier"
"#;
    let entries = parse_po(source).unwrap();
    assert_eq!(entries[0].translations, vec!["fichier", "fichiers"]);
}

#[test]
fn escapes_are_decoded() {
    let source = r#"msgid "Tab\there"
msgstr "Line\nbreak \"quoted\" \\ slash"
"#;
    let entries = parse_po(source).unwrap();
    assert_eq!(entries[0].id, "Tab\there");
    assert_eq!(entries[0].translations[0], "Line\nbreak \"quoted\" \\ slash");
}

#[test]
fn multi_line_msgid_is_joined() {
    let source = r#"msgid ""
"Hello, "
"world"
msgstr "Bonjour, le monde"
"#;
    let entries = parse_po(source).unwrap();
    assert_eq!(entries[0].id, "Hello, world");
    assert!(!entries[0].is_header());
}

#[test]
fn obsolete_entries_are_comments() {
    let source = r#"#~ msgid "Old"
#~ msgstr "Ancien"

msgid "New"
msgstr "Nouveau"
"#;
    let entries = parse_po(source).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, "New");
}

#[test]
fn empty_and_comment_only_files_have_no_entries() {
    assert!(parse_po("").unwrap().is_empty());
    assert!(parse_po("# nothing here\n\n").unwrap().is_empty());
}

#[test]
fn crlf_line_endings_are_accepted() {
    let entries = parse_po("msgid \"a\"\r\nmsgstr \"b\"\r\n").unwrap();
    assert_eq!(entries[0].translations, vec!["b"]);
}

#[test]
fn leading_byte_order_mark_is_skipped() {
    let entries = parse_po("\u{feff}msgid \"a\"\nmsgstr \"b\"\n").unwrap();
    assert_eq!(entries[0].id, "a");
    assert_eq!(entries[0].translations, vec!["b"]);

    let catalog = Catalog::from_po_str("\u{feff}msgid \"Search\"\nmsgstr \"Suche\"\n").unwrap();
    assert_eq!(catalog.gettext("Search"), "Suche");
}

#[test]
fn byte_order_mark_does_not_shift_error_columns() {
    let err = parse_po("\u{feff}bogus\n").unwrap_err();
    assert!(matches!(err, ParseError::Syntax { line: 1, column: 1, .. }), "{err:?}");
}

// =========================================================================
// Errors
// =========================================================================

#[test]
fn missing_msgstr_reports_location() {
    let err = parse_po("msgid \"Search\"\nmsgid \"Other\"\nmsgstr \"x\"\n").unwrap_err();
    assert_eq!(
        err,
        ParseError::Syntax {
            line: 2,
            column: 1,
            message: "unexpected input: 'msgid \"Other\"'".to_string(),
        }
    );
}

#[test]
fn unterminated_string_is_a_syntax_error() {
    let err = parse_po("msgid \"Search\nmsgstr \"x\"\n").unwrap_err();
    match err {
        ParseError::Syntax { line, column, .. } => assert_eq!((line, column), (1, 1)),
        other => panic!("expected syntax error, got {other:?}"),
    }
}

#[test]
fn missing_msgstr_at_end_is_unexpected_eof() {
    let err = parse_po("msgid \"Search\"\n").unwrap_err();
    assert_eq!(err, ParseError::UnexpectedEof { line: 2, column: 1 });
}

#[test]
fn context_without_msgid_is_an_error() {
    let err = parse_po("msgctxt \"nav\"\nmsgstr \"x\"\n").unwrap_err();
    assert!(matches!(err, ParseError::Syntax { line: 2, .. }), "{err:?}");
}

#[test]
fn unknown_escape_is_an_error() {
    assert!(parse_po("msgid \"a\\q\"\nmsgstr \"b\"\n").is_err());
}

#[test]
fn syntax_error_display() {
    let err = parse_po("msgid \"Search\"\nbogus\n").unwrap_err();
    insta::assert_snapshot!(err, @"syntax error at 2:1: unexpected input: 'bogus'");
}

// =========================================================================
// Catalog Construction
// =========================================================================

#[test]
fn catalog_skips_fuzzy_entries() {
    let catalog = Catalog::from_po_str(THEME_PO).unwrap();
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.gettext("Search"), "Rechercher");
    assert_eq!(catalog.gettext("Next"), "Next");
}

#[test]
fn catalog_can_keep_fuzzy_entries() {
    let catalog = Catalog::from_po_entries(parse_po(THEME_PO).unwrap(), true).unwrap();
    assert_eq!(catalog.gettext("Next"), "Suivant");
}

#[test]
fn catalog_drops_untranslated_entries() {
    let catalog = Catalog::from_po_str("msgid \"Home\"\nmsgstr \"\"\n").unwrap();
    assert!(catalog.is_empty());
    assert_eq!(catalog.gettext("Home"), "Home");
}

#[test]
fn catalog_reads_header_and_plural_rule() {
    let catalog = Catalog::from_po_str(THEME_PO).unwrap();
    assert_eq!(
        catalog.header_field("content-type").as_deref(),
        Some("text/plain; charset=UTF-8")
    );
    assert_eq!(catalog.plural_forms().map(|forms| forms.nplurals), Some(2));
    assert_eq!(catalog.ngettext("%(count)s page", "%(count)s pages", 0), "%(count)s page");
    assert_eq!(catalog.ngettext("%(count)s page", "%(count)s pages", 2), "%(count)s pages");
}

#[test]
fn catalog_rejects_bad_plural_header() {
    let source = r#"msgid ""
msgstr "Plural-Forms: nplurals=2; plural=(n >;\n"
"#;
    let err = Catalog::from_po_str(source).unwrap_err();
    assert!(matches!(err, ParseError::PluralForms { .. }), "{err:?}");
}

#[test]
fn catalog_context_lookup() {
    let catalog = Catalog::from_po_str(THEME_PO).unwrap();
    assert_eq!(catalog.pgettext("navigation", "Previous"), "Precedent");
    assert_eq!(catalog.gettext("Previous"), "Previous");
}
