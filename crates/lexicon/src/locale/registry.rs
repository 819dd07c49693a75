//! The static table of languages a locale may name.

/// Known language codes, sorted for binary search.
///
/// Every ISO 639-1 code, plus the ISO 639-2/3 codes that translation catalogs
/// commonly ship under because the language has no two-letter code.
static KNOWN_LANGUAGES: &[&str] = &[
    "aa", "ab", "ae", "af", "ak", "am", "an", "ar", "as", "ast", "av", "ay", "az", //
    "ba", "be", "bg", "bh", "bi", "bm", "bn", "bo", "br", "bs", //
    "ca", "ce", "ceb", "ch", "chr", "ckb", "co", "cr", "cs", "cu", "cv", "cy", //
    "da", "de", "dsb", "dv", "dz", //
    "ee", "el", "en", "eo", "es", "et", "eu", //
    "fa", "ff", "fi", "fil", "fj", "fo", "fr", "fur", "fy", //
    "ga", "gd", "gl", "gn", "gsw", "gu", "gv", //
    "ha", "haw", "he", "hi", "ho", "hr", "hsb", "ht", "hu", "hy", "hz", //
    "ia", "id", "ie", "ig", "ii", "ik", "io", "is", "it", "iu", //
    "ja", "jv", //
    "ka", "kab", "kg", "ki", "kj", "kk", "kl", "km", "kn", "ko", "kok", "kr", "ks", "ku", "kv",
    "kw", "ky", //
    "la", "lb", "lg", "li", "ln", "lo", "lt", "lu", "lv", //
    "mai", "mg", "mh", "mi", "mk", "ml", "mn", "mr", "ms", "mt", "my", //
    "na", "nb", "nd", "nds", "ne", "ng", "nl", "nn", "no", "nr", "nv", "ny", //
    "oc", "oj", "om", "or", "os", //
    "pa", "pi", "pl", "ps", "pt", //
    "qu", //
    "rm", "rn", "ro", "ru", "rw", //
    "sa", "sah", "sc", "scn", "sd", "se", "sg", "si", "sk", "sl", "sm", "smn", "sn", "so", "sq",
    "sr", "ss", "st", "su", "sv", "sw", "szl", //
    "ta", "te", "tg", "th", "ti", "tk", "tl", "tn", "to", "tr", "ts", "tt", "tw", "ty", //
    "ug", "uk", "ur", "uz", //
    "ve", "vi", "vo", //
    "wa", "wo", //
    "xh", //
    "yi", "yo", "yue", //
    "za", "zh", "zu",
];

/// Maximum number of "did you mean" candidates reported for an unknown code.
const MAX_SUGGESTIONS: usize = 3;

/// Whether `language` (already lowercased) is in the registry.
pub fn is_known_language(language: &str) -> bool {
    KNOWN_LANGUAGES.binary_search(&language).is_ok()
}

/// All registry codes in sorted order.
pub fn known_languages() -> &'static [&'static str] {
    KNOWN_LANGUAGES
}

/// Registry codes one edit away from `language`, alphabetically.
pub(crate) fn suggest_languages(language: &str) -> Vec<String> {
    KNOWN_LANGUAGES
        .iter()
        .filter(|code| strsim::levenshtein(language, code) == 1)
        .take(MAX_SUGGESTIONS)
        .map(|code| (*code).to_string())
        .collect()
}
