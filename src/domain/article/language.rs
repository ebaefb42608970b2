use lingua::{Language, LanguageDetector, LanguageDetectorBuilder};

/// Languages the detector can choose from; one per voice in the voice table
const DETECTABLE_LANGUAGES: [Language; 6] = [
    Language::English,
    Language::Spanish,
    Language::French,
    Language::German,
    Language::Italian,
    Language::Arabic,
];

pub fn build_detector() -> LanguageDetector {
    LanguageDetectorBuilder::from_languages(&DETECTABLE_LANGUAGES).build()
}

/// ISO 639-1 code for a detectable language
pub fn iso_code(language: Language) -> &'static str {
    match language {
        Language::English => "en",
        Language::Spanish => "es",
        Language::French => "fr",
        Language::German => "de",
        Language::Italian => "it",
        Language::Arabic => "ar",
    }
}

/// Best guess at the language of `text`, or `None` when the detector cannot
/// decide. Callers leave the language unset in that case and the narration
/// falls back to its default voice.
pub fn detect_language(detector: &LanguageDetector, text: &str) -> Option<&'static str> {
    detector.detect_language_of(text).map(iso_code)
}
