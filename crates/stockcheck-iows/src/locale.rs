//! Country to IOWS language mapping.

const LANGUAGES: &[(&str, &str)] = &[
    ("at", "de"),
    ("au", "en"),
    ("be", "fr"),
    ("ca", "en"),
    ("ch", "de"),
    ("cn", "zh"),
    ("cz", "cs"),
    ("de", "de"),
    ("dk", "da"),
    ("es", "es"),
    ("fi", "fi"),
    ("fr", "fr"),
    ("gb", "en"),
    ("hu", "hu"),
    ("ie", "en"),
    ("it", "it"),
    ("jp", "ja"),
    ("kr", "ko"),
    ("nl", "nl"),
    ("no", "no"),
    ("pl", "pl"),
    ("pt", "pt"),
    ("ru", "ru"),
    ("se", "sv"),
    ("sk", "sk"),
    ("us", "en"),
];

/// Language segment the IOWS service expects for a country. Unknown
/// countries fall back to `"en"`.
#[must_use]
pub fn language_for_country(country_code: &str) -> &'static str {
    let code = country_code.trim().to_ascii_lowercase();
    LANGUAGES
        .iter()
        .find(|(country, _)| *country == code)
        .map_or("en", |(_, language)| language)
}
