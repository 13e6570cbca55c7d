use std::collections::HashMap;

/// Information about a supported language
#[derive(PartialEq, Eq, Clone)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub flag: &'static str,
    pub translation: &'static str,
    pub native_name: &'static str,
}

/// Get information about a supported language
pub fn get_language_info(code: &str) -> Option<LanguageInfo> {
    supported_languages().get(code).cloned()
}

/// Get a map of supported languages
pub fn supported_languages() -> HashMap<&'static str, LanguageInfo> {
    HashMap::from([
        (
            "en",
            LanguageInfo {
                code: "en",
                flag: "🇬🇧",
                translation: include_str!("../translations/en.json"),
                native_name: "English",
            },
        ),
        (
            "pt",
            LanguageInfo {
                code: "pt",
                flag: "🇧🇷",
                translation: include_str!("../translations/pt.json"),
                native_name: "Português",
            },
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_languages_include_english() {
        let languages = supported_languages();
        assert!(languages.contains_key("en"));
        assert!(languages.contains_key("pt"));
    }

    #[test]
    fn test_translations_are_valid_json() {
        for (code, info) in supported_languages() {
            let parsed: Result<serde_json::Value, _> = serde_json::from_str(info.translation);
            assert!(parsed.is_ok(), "translation table for {code} is not valid JSON");
        }
    }

    #[test]
    fn test_get_language_info() {
        assert!(get_language_info("en").is_some());
        assert!(get_language_info("xx").is_none());
    }
}
