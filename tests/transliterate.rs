use urlify_core::{Urlify, UrlifyError};

#[test]
fn ascii_input_is_returned_unchanged() {
    let mut urlify = Urlify::new();
    for text in ["", "hello", "Petty theft!", "a-b c 1.2/3 <br>"] {
        assert_eq!(urlify.transliterate(text), text);
    }
}

#[test]
fn url_separator_characters_become_hyphens() {
    let mut urlify = Urlify::new();
    assert_eq!(urlify.transliterate("a_b"), "a-b");
    assert_eq!(urlify.transliterate("`x`"), "-x-");
}

#[test]
fn mixed_scripts_use_the_base_table() {
    let mut urlify = Urlify::new();
    // The Greek perispomeni form has no entry and passes through.
    assert_eq!(urlify.transliterate_for("â, ᾶ, ěï", "de"), "a, ᾶ, ei");
    assert_eq!(urlify.transliterate_for("Привет, мир", "ru"), "Privet, mir");
    assert_eq!(urlify.transliterate_for("Їжак", "uk"), "Yizhak");
    assert_eq!(urlify.transliterate_for("Tiếng Việt", "vn"), "Tieng Viet");
}

#[test]
fn german_priority_beats_latin() {
    let mut urlify = Urlify::new();
    assert_eq!(urlify.transliterate_for("für", "de"), "fuer");
    assert_eq!(urlify.transliterate_for("für", "latin"), "fur");
    assert_eq!(urlify.transliterate_for("für", "de"), "fuer");
    assert_eq!(urlify.downcode("Straße"), "Strasse");
}

#[test]
fn default_language_follows_the_engine() {
    let mut german = Urlify::new();
    let mut turkish = Urlify::with_language("tr");
    assert_eq!(german.transliterate("Müller"), "Mueller");
    assert_eq!(turkish.transliterate("Müller"), "Muller");
}

#[test]
fn priority_reorder_persists_across_calls() {
    // Asking for "lv" on a fresh engine leaves "tr" as the last set holding 'ü'.
    let mut fresh = Urlify::new();
    assert_eq!(fresh.transliterate_for("ü", "lv"), "u");

    // Once "de" has been requested it stays at the top, even for later "lv" calls.
    let mut used = Urlify::new();
    used.transliterate_for("ü", "de");
    assert_eq!(used.transliterate_for("ü", "lv"), "ue");
    assert_eq!(used.languages().last(), Some(&"lv"));
}

#[test]
fn registered_maps_win_when_prioritised() {
    let mut urlify = Urlify::new();
    urlify
        .register_language_map("sv", [("ä", "a"), ("ö", "o")])
        .unwrap();

    assert_eq!(urlify.transliterate_for("Smörgås", "sv"), "Smorgas");
    assert_eq!(urlify.transliterate_for("Smörgås", "de"), "Smoergas");
}

#[test]
fn added_chars_outrank_earlier_sets() {
    let mut urlify = Urlify::new();
    urlify.add_chars([("€", "euro"), ("©", "copyright")]).unwrap();
    assert_eq!(urlify.transliterate("5€ ©"), "5euro copyright");
}

#[test]
fn language_maps_registered_after_added_chars_still_win() {
    let mut urlify = Urlify::new();
    urlify.add_chars([("ü", "x")]).unwrap();
    urlify.register_language_map("zz", [("ü", "y")]).unwrap();
    assert_eq!(urlify.transliterate_for("ü", ""), "y");
}

#[test]
fn malformed_maps_are_rejected_without_side_effects() {
    let mut urlify = Urlify::new();
    let before = urlify.languages().len();

    let err = urlify.add_chars([("&amp;", "-")]).unwrap_err();
    assert!(matches!(err, UrlifyError::InvalidArgument(_)));
    let err = urlify.register_language_map("", [("x", "y")]).unwrap_err();
    assert!(matches!(err, UrlifyError::InvalidArgument(_)));

    assert_eq!(urlify.languages().len(), before);
    assert_eq!(urlify.transliterate("&amp;"), "&amp;");
}
