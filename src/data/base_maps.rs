// File: src/data/base_maps.rs
//! The compiled-in base dataset every engine starts from.
//!
//! Replacements are plain ASCII so that no replacement contains a key of any
//! other set.

/// Language tag used when no priority language is given.
pub const DEFAULT_LANGUAGE: &str = "de";

/// Tags and tables in the order they are loaded into a fresh table.
pub const BASE_MAPS: &[(&str, &[(char, &str)])] = &[
    ("de", DE),
    ("latin", LATIN),
    ("latin_symbols", LATIN_SYMBOLS),
    ("el", EL),
    ("tr", TR),
    ("ru", RU),
    ("uk", UK),
    ("cs", CS),
    ("pl", PL),
    ("ro", RO),
    ("lv", LV),
    ("lt", LT),
    ("vn", VN),
    ("other", OTHER),
    ("url_things", URL_THINGS),
];

// German
const DE: &[(char, &str)] = &[
    ('Ä', "Ae"), ('Ö', "Oe"), ('Ü', "Ue"), ('ä', "ae"), ('ö', "oe"), ('ü', "ue"),
    ('ß', "ss"), ('ẞ', "SS"),
];

// Latin letters with diacritics
const LATIN: &[(char, &str)] = &[
    ('À', "A"), ('Á', "A"), ('Â', "A"), ('Ã', "A"), ('Ä', "A"), ('Å', "A"),
    ('Ă', "A"), ('Æ', "AE"), ('Ç', "C"), ('È', "E"), ('É', "E"), ('Ê', "E"),
    ('Ë', "E"), ('Ì', "I"), ('Í', "I"), ('Î', "I"), ('Ï', "I"), ('Ð', "D"),
    ('Ñ', "N"), ('Ò', "O"), ('Ó', "O"), ('Ô', "O"), ('Õ', "O"), ('Ö', "O"),
    ('Ő', "O"), ('Ø', "O"), ('Ș', "S"), ('Ț', "T"), ('Ù', "U"), ('Ú', "U"),
    ('Û', "U"), ('Ü', "U"), ('Ű', "U"), ('Ý', "Y"), ('Þ', "TH"), ('ß', "ss"),
    ('à', "a"), ('á', "a"), ('â', "a"), ('ã', "a"), ('ä', "a"), ('å', "a"),
    ('ă', "a"), ('æ', "ae"), ('ç', "c"), ('è', "e"), ('é', "e"), ('ê', "e"),
    ('ë', "e"), ('ì', "i"), ('í', "i"), ('î', "i"), ('ï', "i"), ('ð', "d"),
    ('ñ', "n"), ('ò', "o"), ('ó', "o"), ('ô', "o"), ('õ', "o"), ('ö', "o"),
    ('ő', "o"), ('ø', "o"), ('ș', "s"), ('ț', "t"), ('ù', "u"), ('ú', "u"),
    ('û', "u"), ('ü', "u"), ('ű', "u"), ('ý', "y"), ('þ', "th"), ('ÿ', "y"),
];

// Symbols
const LATIN_SYMBOLS: &[(char, &str)] = &[
    ('©', "(c)"),
];

// Greek
const EL: &[(char, &str)] = &[
    ('α', "a"), ('β', "b"), ('γ', "g"), ('δ', "d"), ('ε', "e"), ('ζ', "z"),
    ('η', "h"), ('θ', "8"), ('ι', "i"), ('κ', "k"), ('λ', "l"), ('μ', "m"),
    ('ν', "n"), ('ξ', "3"), ('ο', "o"), ('π', "p"), ('ρ', "r"), ('σ', "s"),
    ('τ', "t"), ('υ', "y"), ('φ', "f"), ('χ', "x"), ('ψ', "ps"), ('ω', "w"),
    ('ά', "a"), ('έ', "e"), ('ί', "i"), ('ό', "o"), ('ύ', "y"), ('ή', "h"),
    ('ώ', "w"), ('ς', "s"), ('ϊ', "i"), ('ΰ', "y"), ('ϋ', "y"), ('ΐ', "i"),
    ('Α', "A"), ('Β', "B"), ('Γ', "G"), ('Δ', "D"), ('Ε', "E"), ('Ζ', "Z"),
    ('Η', "H"), ('Θ', "8"), ('Ι', "I"), ('Κ', "K"), ('Λ', "L"), ('Μ', "M"),
    ('Ν', "N"), ('Ξ', "3"), ('Ο', "O"), ('Π', "P"), ('Ρ', "R"), ('Σ', "S"),
    ('Τ', "T"), ('Υ', "Y"), ('Φ', "F"), ('Χ', "X"), ('Ψ', "PS"), ('Ω', "W"),
    ('Ά', "A"), ('Έ', "E"), ('Ί', "I"), ('Ό', "O"), ('Ύ', "Y"), ('Ή', "H"),
    ('Ώ', "W"), ('Ϊ', "I"), ('Ϋ', "Y"),
];

// Turkish
const TR: &[(char, &str)] = &[
    ('ş', "s"), ('Ş', "S"), ('ı', "i"), ('İ', "I"), ('ç', "c"), ('Ç', "C"),
    ('ü', "u"), ('Ü', "U"), ('ö', "o"), ('Ö', "O"), ('ğ', "g"), ('Ğ', "G"),
];

// Russian
const RU: &[(char, &str)] = &[
    ('а', "a"), ('б', "b"), ('в', "v"), ('г', "g"), ('д', "d"), ('е', "e"),
    ('ё', "yo"), ('ж', "zh"), ('з', "z"), ('и', "i"), ('й', "j"), ('к', "k"),
    ('л', "l"), ('м', "m"), ('н', "n"), ('о', "o"), ('п', "p"), ('р', "r"),
    ('с', "s"), ('т', "t"), ('у', "u"), ('ф', "f"), ('х', "h"), ('ц', "c"),
    ('ч', "ch"), ('ш', "sh"), ('щ', "sh"), ('ъ', ""), ('ы', "y"), ('ь', ""),
    ('э', "e"), ('ю', "yu"), ('я', "ya"), ('А', "A"), ('Б', "B"), ('В', "V"),
    ('Г', "G"), ('Д', "D"), ('Е', "E"), ('Ё', "Yo"), ('Ж', "Zh"), ('З', "Z"),
    ('И', "I"), ('Й', "J"), ('К', "K"), ('Л', "L"), ('М', "M"), ('Н', "N"),
    ('О', "O"), ('П', "P"), ('Р', "R"), ('С', "S"), ('Т', "T"), ('У', "U"),
    ('Ф', "F"), ('Х', "H"), ('Ц', "C"), ('Ч', "Ch"), ('Ш', "Sh"), ('Щ', "Sh"),
    ('Ъ', ""), ('Ы', "Y"), ('Ь', ""), ('Э', "E"), ('Ю', "Yu"), ('Я', "Ya"),
    ('№', ""),
];

// Ukrainian
const UK: &[(char, &str)] = &[
    ('Є', "Ye"), ('І', "I"), ('Ї', "Yi"), ('Ґ', "G"), ('є', "ye"), ('і', "i"),
    ('ї', "yi"), ('ґ', "g"),
];

// Czech
const CS: &[(char, &str)] = &[
    ('č', "c"), ('ď', "d"), ('ě', "e"), ('ň', "n"), ('ř', "r"), ('š', "s"),
    ('ť', "t"), ('ů', "u"), ('ž', "z"), ('Č', "C"), ('Ď', "D"), ('Ě', "E"),
    ('Ň', "N"), ('Ř', "R"), ('Š', "S"), ('Ť', "T"), ('Ů', "U"), ('Ž', "Z"),
];

// Polish
const PL: &[(char, &str)] = &[
    ('ą', "a"), ('ć', "c"), ('ę', "e"), ('ł', "l"), ('ń', "n"), ('ó', "o"),
    ('ś', "s"), ('ź', "z"), ('ż', "z"), ('Ą', "A"), ('Ć', "C"), ('Ę', "e"),
    ('Ł', "L"), ('Ń', "N"), ('Ó', "O"), ('Ś', "S"), ('Ź', "Z"), ('Ż', "Z"),
];

// Romanian
const RO: &[(char, &str)] = &[
    ('ă', "a"), ('â', "a"), ('î', "i"), ('ș', "s"), ('ț', "t"), ('Ţ', "T"),
    ('ţ', "t"),
];

// Latvian
const LV: &[(char, &str)] = &[
    ('ā', "a"), ('č', "c"), ('ē', "e"), ('ģ', "g"), ('ī', "i"), ('ķ', "k"),
    ('ļ', "l"), ('ņ', "n"), ('š', "s"), ('ū', "u"), ('ž', "z"), ('Ā', "A"),
    ('Č', "C"), ('Ē', "E"), ('Ģ', "G"), ('Ī', "i"), ('Ķ', "k"), ('Ļ', "L"),
    ('Ņ', "N"), ('Š', "S"), ('Ū', "u"), ('Ž', "Z"),
];

// Lithuanian
const LT: &[(char, &str)] = &[
    ('ą', "a"), ('č', "c"), ('ę', "e"), ('ė', "e"), ('į', "i"), ('š', "s"),
    ('ų', "u"), ('ū', "u"), ('ž', "z"), ('Ą', "A"), ('Č', "C"), ('Ę', "E"),
    ('Ė', "E"), ('Į', "I"), ('Š', "S"), ('Ų', "U"), ('Ū', "U"), ('Ž', "Z"),
];

// Vietnamese
const VN: &[(char, &str)] = &[
    ('Á', "A"), ('À', "A"), ('Ả', "A"), ('Ã', "A"), ('Ạ', "A"), ('Ă', "A"),
    ('Ắ', "A"), ('Ằ', "A"), ('Ẳ', "A"), ('Ẵ', "A"), ('Ặ', "A"), ('Â', "A"),
    ('Ấ', "A"), ('Ầ', "A"), ('Ẩ', "A"), ('Ẫ', "A"), ('Ậ', "A"), ('á', "a"),
    ('à', "a"), ('ả', "a"), ('ã', "a"), ('ạ', "a"), ('ă', "a"), ('ắ', "a"),
    ('ằ', "a"), ('ẳ', "a"), ('ẵ', "a"), ('ặ', "a"), ('â', "a"), ('ấ', "a"),
    ('ầ', "a"), ('ẩ', "a"), ('ẫ', "a"), ('ậ', "a"), ('É', "E"), ('È', "E"),
    ('Ẻ', "E"), ('Ẽ', "E"), ('Ẹ', "E"), ('Ê', "E"), ('Ế', "E"), ('Ề', "E"),
    ('Ể', "E"), ('Ễ', "E"), ('Ệ', "E"), ('é', "e"), ('è', "e"), ('ẻ', "e"),
    ('ẽ', "e"), ('ẹ', "e"), ('ê', "e"), ('ế', "e"), ('ề', "e"), ('ể', "e"),
    ('ễ', "e"), ('ệ', "e"), ('Í', "I"), ('Ì', "I"), ('Ỉ', "I"), ('Ĩ', "I"),
    ('Ị', "I"), ('í', "i"), ('ì', "i"), ('ỉ', "i"), ('ĩ', "i"), ('ị', "i"),
    ('Ó', "O"), ('Ò', "O"), ('Ỏ', "O"), ('Õ', "O"), ('Ọ', "O"), ('Ô', "O"),
    ('Ố', "O"), ('Ồ', "O"), ('Ổ', "O"), ('Ỗ', "O"), ('Ộ', "O"), ('Ơ', "O"),
    ('Ớ', "O"), ('Ờ', "O"), ('Ở', "O"), ('Ỡ', "O"), ('Ợ', "O"), ('ó', "o"),
    ('ò', "o"), ('ỏ', "o"), ('õ', "o"), ('ọ', "o"), ('ô', "o"), ('ố', "o"),
    ('ồ', "o"), ('ổ', "o"), ('ỗ', "o"), ('ộ', "o"), ('ơ', "o"), ('ớ', "o"),
    ('ờ', "o"), ('ở', "o"), ('ỡ', "o"), ('ợ', "o"), ('Ú', "U"), ('Ù', "U"),
    ('Ủ', "U"), ('Ũ', "U"), ('Ụ', "U"), ('Ư', "U"), ('Ứ', "U"), ('Ừ', "U"),
    ('Ử', "U"), ('Ữ', "U"), ('Ự', "U"), ('ú', "u"), ('ù', "u"), ('ủ', "u"),
    ('ũ', "u"), ('ụ', "u"), ('ư', "u"), ('ứ', "u"), ('ừ', "u"), ('ử', "u"),
    ('ữ', "u"), ('ự', "u"), ('Ý', "Y"), ('Ỳ', "Y"), ('Ỷ', "Y"), ('Ỹ', "Y"),
    ('Ỵ', "Y"), ('ý', "y"), ('ỳ', "y"), ('ỷ', "y"), ('ỹ', "y"), ('ỵ', "y"),
    ('Đ', "D"), ('đ', "d"),
];

// Remaining Latin Extended-A/B letters
const OTHER: &[(char, &str)] = &[
    ('ǽ', "ae"), ('ª', "a"), ('ǎ', "a"), ('ǻ', "a"), ('Ǽ', "AE"), ('Ǎ', "A"),
    ('Ǻ', "A"), ('ĉ', "c"), ('ċ', "c"), ('Ĉ', "C"), ('Ċ', "C"), ('ĕ', "e"),
    ('Ĕ', "E"), ('ſ', "f"), ('ƒ', "f"), ('ĝ', "g"), ('ġ', "g"), ('Ĝ', "G"),
    ('Ġ', "G"), ('ĥ', "h"), ('ħ', "h"), ('Ĥ', "H"), ('Ħ', "H"), ('ĭ', "i"),
    ('ĳ', "ij"), ('ǐ', "i"), ('Ĭ', "I"), ('Ĳ', "IJ"), ('Ǐ', "I"), ('ĵ', "j"),
    ('Ĵ', "J"), ('ĺ', "l"), ('ľ', "l"), ('ŀ', "l"), ('Ĺ', "L"), ('Ľ', "L"),
    ('Ŀ', "L"), ('ŉ', "n"), ('ō', "o"), ('ŏ', "o"), ('œ', "oe"), ('ǒ', "o"),
    ('ǿ', "o"), ('Ō', "O"), ('Ŏ', "O"), ('Œ', "OE"), ('Ǒ', "O"), ('Ǿ', "O"),
    ('ŕ', "r"), ('ŗ', "r"), ('Ŕ', "R"), ('Ŗ', "R"), ('ŝ', "s"), ('Ŝ', "S"),
    ('ţ', "t"), ('ŧ', "t"), ('Ţ', "T"), ('Ŧ', "T"), ('ŭ', "u"), ('ǔ', "u"),
    ('ǖ', "u"), ('ǘ', "u"), ('ǚ', "u"), ('ǜ', "u"), ('Ŭ', "U"), ('Ǔ', "U"),
    ('Ǖ', "U"), ('Ǘ', "U"), ('Ǚ', "U"), ('Ǜ', "U"), ('ŵ', "w"), ('Ŵ', "W"),
    ('ŷ', "y"), ('Ŷ', "Y"), ('Ÿ', "Y"),
];

// Characters that read as separators in URLs
const URL_THINGS: &[(char, &str)] = &[
    ('⁻', "-"), ('_', "-"), ('`', "-"),
];

/// Words removed from slugs before they are built.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "a", "an", "as", "at", "before", "but", "by", "for", "from", "is", "in", "into", "like", "of",
    "off", "on", "onto", "per", "since", "than", "the", "this", "that", "to", "up", "via", "with",
];
