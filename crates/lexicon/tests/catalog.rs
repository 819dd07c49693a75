//! Tests for catalog lookups and layering.

use std::path::{Path, PathBuf};

use lexicon::{
    Catalog, GettextLoader, LocaleIdentifier, MergeCatalog, Message, MessageKey, layer_catalogs,
};

fn catalog(source: &str) -> Catalog {
    Catalog::from_po_str(source).unwrap()
}

fn assert_send_sync<T: Send + Sync>() {}

// =========================================================================
// Lookup
// =========================================================================

#[test]
fn untranslated_messages_come_back_unchanged() {
    let empty = Catalog::new();
    assert_eq!(empty.gettext("Search"), "Search");
    assert_eq!(empty.pgettext("nav", "Next"), "Next");
    assert_eq!(empty.ngettext("page", "pages", 1), "page");
    assert_eq!(empty.ngettext("page", "pages", 0), "pages");
    assert_eq!(empty.npgettext("nav", "page", "pages", 3), "pages");
}

#[test]
fn plural_lookup_without_header_uses_germanic_rule() {
    let mut catalog = Catalog::new();
    catalog.insert(
        MessageKey::new("page"),
        Message::Plural {
            id_plural: "pages".to_string(),
            forms: vec!["Seite".to_string(), "Seiten".to_string()],
        },
    );
    assert!(catalog.plural_forms().is_none());
    assert_eq!(catalog.plural_index(1), 0);
    assert_eq!(catalog.ngettext("page", "pages", 1), "Seite");
    assert_eq!(catalog.ngettext("page", "pages", 0), "Seiten");
}

#[test]
fn missing_plural_form_falls_back_to_source() {
    let mut catalog = Catalog::new();
    catalog.insert(
        MessageKey::new("page"),
        Message::Plural {
            id_plural: "pages".to_string(),
            forms: vec!["Seite".to_string(), String::new()],
        },
    );
    assert_eq!(catalog.ngettext("page", "pages", 2), "pages");
}

#[test]
fn plural_lookup_of_singular_entry_falls_back() {
    let catalog = catalog("msgid \"page\"\nmsgstr \"Seite\"\n");
    assert_eq!(catalog.gettext("page"), "Seite");
    assert_eq!(catalog.ngettext("page", "pages", 2), "pages");
}

#[test]
fn context_lookup_with_plural() {
    let catalog = catalog(
        r#"
msgctxt "sidebar"
msgid "entry"
msgid_plural "entries"
msgstr[0] "Eintrag"
msgstr[1] "Eintraege"
"#,
    );
    assert_eq!(catalog.npgettext("sidebar", "entry", "entries", 1), "Eintrag");
    assert_eq!(catalog.npgettext("sidebar", "entry", "entries", 2), "Eintraege");
    assert_eq!(catalog.ngettext("entry", "entries", 2), "entries");
}

#[test]
fn header_fields_are_case_insensitive() {
    let catalog = catalog(
        r#"
msgid ""
msgstr ""
"Language: de\n"
"Last-Translator: Docs Team\n"
"#,
    );
    assert_eq!(catalog.header_field("language").as_deref(), Some("de"));
    assert_eq!(catalog.header_field("LAST-TRANSLATOR").as_deref(), Some("Docs Team"));
    assert_eq!(catalog.header_field("Plural-Forms"), None);
    assert!(catalog.is_empty());
}

#[test]
fn shared_types_are_send_and_sync() {
    assert_send_sync::<Catalog>();
    assert_send_sync::<LocaleIdentifier>();
    assert_send_sync::<GettextLoader>();
}

// =========================================================================
// Layering
// =========================================================================

#[test]
fn override_wins_and_base_fills_gaps() {
    let mut overrides = catalog(
        r#"
msgid "Search"
msgstr "Recherche"
"#,
    );
    let base = catalog(
        r#"
msgid "Search"
msgstr "Rechercher"

msgid "Next"
msgstr "Suivant"
"#,
    );

    overrides.merge(base);

    assert_eq!(overrides.gettext("Search"), "Recherche");
    assert_eq!(overrides.gettext("Next"), "Suivant");
    assert_eq!(overrides.len(), 2);
}

#[test]
fn untranslated_override_entry_is_filled_from_base() {
    let mut overrides = Catalog::new();
    overrides.insert(MessageKey::new("Next"), Message::Singular(String::new()));
    let base = catalog("msgid \"Next\"\nmsgstr \"Suivant\"\n");

    overrides.merge(base);

    assert_eq!(overrides.gettext("Next"), "Suivant");
}

#[test]
fn contexts_are_layered_independently() {
    let mut overrides = catalog("msgctxt \"nav\"\nmsgid \"Next\"\nmsgstr \"Suivante\"\n");
    let base = catalog("msgid \"Next\"\nmsgstr \"Suivant\"\n");

    overrides.merge(base);

    assert_eq!(overrides.pgettext("nav", "Next"), "Suivante");
    assert_eq!(overrides.gettext("Next"), "Suivant");
}

#[test]
fn header_comes_from_base_only_when_missing() {
    let base = catalog(
        r#"
msgid ""
msgstr "Plural-Forms: nplurals=2; plural=(n > 1);\n"
"#,
    );

    let mut bare = Catalog::new();
    bare.merge(base.clone());
    assert_eq!(bare.header(), base.header());
    assert_eq!(bare.plural_index(0), 0);

    let mut own = catalog(
        r#"
msgid ""
msgstr "Plural-Forms: nplurals=1; plural=0;\n"
"#,
    );
    own.merge(base);
    assert_eq!(own.plural_forms().map(|forms| forms.nplurals), Some(1));
}

#[test]
fn sources_are_ordered_lowest_precedence_first() {
    let base = Catalog::new().with_source("theme/fr/LC_MESSAGES/messages.mo");
    let mut overrides = Catalog::new().with_source("custom/fr/LC_MESSAGES/messages.po");

    overrides.merge(base);

    let expected: Vec<PathBuf> = vec![
        Path::new("theme/fr/LC_MESSAGES/messages.mo").to_path_buf(),
        Path::new("custom/fr/LC_MESSAGES/messages.po").to_path_buf(),
    ];
    assert_eq!(overrides.sources(), expected.as_slice());
}

#[test]
fn layered_catalogs_favor_the_last() {
    let theme = catalog(
        r#"
msgid "Search"
msgstr "Rechercher"

msgid "Next"
msgstr "Suivant"
"#,
    );
    let site = catalog("msgid \"Next\"\nmsgstr \"Suite\"\n");
    let custom = catalog("msgid \"Search\"\nmsgstr \"Recherche\"\n");

    let layered = layer_catalogs([theme, site, custom]).unwrap();

    assert_eq!(layered.gettext("Search"), "Recherche");
    assert_eq!(layered.gettext("Next"), "Suite");
    assert_eq!(layered.len(), 2);
}

#[test]
fn layering_nothing_is_none() {
    assert!(layer_catalogs(Vec::<Catalog>::new()).is_none());
}
