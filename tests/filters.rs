use regex::Regex;
use urlify_core::{SlugOptions, UrlOptions, Urlify};

const SAMPLES: &[&str] = &[
    "",
    "   ",
    " J'étudie le français ",
    "Lo siento, no hablo español.",
    "Petty theft",
    "-- leading and trailing --",
    "the a an of",
    "Über Größe ß ẞ",
    "Привет мир",
    "日本語のテキスト",
    "snake_case_name and kebab-case-name",
    "tabs\tand\nnewlines\r\nmixed",
    "<p>Markup <br/> inside</p>",
    "!!!???",
    "Ελληνικά κείμενα",
    "Smörgåsbord © 2024 … “quoted”",
];

#[test]
fn documented_examples() {
    let mut urlify = Urlify::new();
    assert_eq!(urlify.slug(" J'étudie le français "), "jetudie-le-francais");
    assert_eq!(urlify.slug("Lo siento, no hablo español."), "lo-siento-no-hablo-espanol");
    assert_eq!(urlify.filter("Petty theft"), "petty-theft");
    assert_eq!(urlify.url("Petty<br>theft"), "Petty-theft");
}

#[test]
fn slugs_only_contain_lowercase_alphanumerics_and_inner_hyphens() {
    let shape = Regex::new(r"^[a-z0-9]([a-z0-9-]*[a-z0-9])?$").unwrap();
    let mut urlify = Urlify::new();
    for text in SAMPLES {
        let slug = urlify.slug(text);
        assert!(slug.is_empty() || shape.is_match(&slug), "{text:?} -> {slug:?}");
        assert!(!slug.contains("--"), "{text:?} -> {slug:?}");
    }
}

#[test]
fn slugs_respect_the_length_bound() {
    let mut urlify = Urlify::new();
    for text in SAMPLES {
        for n in 0..25 {
            let slug = urlify.slug_with(text, &SlugOptions::default().max_length(n));
            assert!(slug.chars().count() <= n, "{text:?} ({n}) -> {slug:?}");
        }
    }
}

#[test]
fn default_slug_length_is_sixty() {
    let mut urlify = Urlify::new();
    let long = "word ".repeat(40);
    let slug = urlify.slug(&long);
    assert!(slug.len() <= 60);
    assert!(slug.starts_with("word-word"));
    assert!(!slug.ends_with('-'));
}

#[test]
fn stop_words_only_match_whole_words() {
    let mut urlify = Urlify::new();
    assert_eq!(urlify.slug("the cat"), "cat");
    assert_eq!(urlify.slug("theater"), "theater");
    assert_eq!(urlify.slug("Into the Wild"), "wild");
    assert_eq!(urlify.slug("the a an of"), "");
}

#[test]
fn stop_words_glued_to_unmapped_scripts_are_removed() {
    let mut urlify = Urlify::new();
    assert_eq!(urlify.slug("日本the cat"), "cat");
    let options = UrlOptions::default().remove_stop_words(true);
    assert_eq!(urlify.url_with("日本the cat", &options), "cat");
}

#[test]
fn custom_stop_words() {
    let mut urlify = Urlify::new();
    urlify.add_stop_words(["le", "la"]);
    assert_eq!(urlify.slug(" J'étudie le français "), "jetudie-francais");
    urlify.add_stop_word("Hund");
    assert_eq!(urlify.slug("Katze hund Maus"), "katze-maus");
}

#[test]
fn slugs_across_languages() {
    let mut urlify = Urlify::new();
    assert_eq!(urlify.slug("Über Größe"), "ueber-groesse");
    assert_eq!(urlify.slug_with("Привет мир", &SlugOptions::default().language("ru")), "privet-mir");
    assert_eq!(urlify.slug("Ελληνικά"), "ellhnika");
    assert_eq!(urlify.slug("日本語のテキスト"), "");
}

#[test]
fn underscores_separate_words() {
    let mut urlify = Urlify::new();
    assert_eq!(urlify.slug("snake_case_name"), "snake-case-name");
    assert_eq!(urlify.slug("`quoted`_name"), "quoted-name");
}

#[test]
fn file_name_mode_keeps_extensions() {
    let mut urlify = Urlify::new();
    let options = SlugOptions::default().file_name(true);
    assert_eq!(urlify.slug_with("Résumé Final.docx", &options), "resume-final.docx");
    assert_eq!(urlify.slug("Résumé Final.docx"), "resume-finaldocx");
}

#[test]
fn url_preserves_case_and_keeps_stop_words() {
    let mut urlify = Urlify::new();
    assert_eq!(urlify.url("The Lord of the Rings"), "The-Lord-of-the-Rings");
    assert_eq!(urlify.url("Über <em>Größe</em>"), "Ueber-Groesse");
}

#[test]
fn url_removes_stop_words_on_request() {
    let mut urlify = Urlify::new();
    let options = UrlOptions::default().remove_stop_words(true);
    assert_eq!(urlify.url_with("The Lord of the Rings", &options), "Lord-Rings");
}

#[test]
fn url_handles_line_break_markup() {
    let mut urlify = Urlify::new();
    assert_eq!(urlify.url("first line<br />second line"), "first-line-second-line");
    assert_eq!(urlify.url("a<br>b<br/>c<BR class='x'>d"), "a-b-c-d");
}

#[test]
fn url_length_bound() {
    let mut urlify = Urlify::new();
    let options = UrlOptions::default().max_length(10);
    assert_eq!(urlify.url_with("Petty theft and more", &options), "Petty-thef");
    let long = "segment ".repeat(50);
    assert!(urlify.url(&long).len() <= 200);
}

#[test]
fn empty_input_yields_empty_output() {
    let mut urlify = Urlify::new();
    assert_eq!(urlify.slug(""), "");
    assert_eq!(urlify.url(""), "");
    assert_eq!(urlify.transliterate(""), "");
}
