use std::fmt;
use std::str::FromStr;

use crate::I18nError;

/// A locale the site ships translations for.
///
/// The set is closed: anything outside it is rejected by [`is_valid_locale`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    Zh,
    En,
}

impl Locale {
    /// Every supported locale, default first.
    pub const ALL: [Locale; 2] = [Locale::Zh, Locale::En];

    /// The code stored in the engine and written to the `lang` attribute.
    pub const fn code(self) -> &'static str {
        match self {
            Locale::Zh => "zh",
            Locale::En => "en",
        }
    }

    /// Name of the language in that language, for language switchers.
    pub const fn native_name(self) -> &'static str {
        match self {
            Locale::Zh => "中文",
            Locale::En => "English",
        }
    }

    /// Exact lookup by code. No case folding or normalization.
    pub fn from_code(code: &str) -> Option<Locale> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_code(s).ok_or_else(|| I18nError::UnsupportedLocale(s.to_string()))
    }
}

/// Membership test against [`Locale::ALL`].
pub fn is_valid_locale(value: &str) -> bool {
    Locale::from_code(value).is_some()
}

/// Normalize locale identifiers to a canonical-ish form for lookup.
///
/// - Converts `_` to `-` (`zh_CN` from Open Graph metadata).
/// - Trims whitespace.
pub fn normalize_locale(s: &str) -> String {
    s.trim().replace('_', "-")
}

/// Create a fallback chain for catalog lookup.
///
/// Example:
/// - `zh-CN` -> `["zh-CN", "zh"]`
/// - `en-US` -> `["en-US", "en", "zh"]`
pub fn locale_fallback_chain(locale: &str) -> Vec<String> {
    let l = normalize_locale(locale);
    let mut chain: Vec<String> = Vec::with_capacity(3);

    if !l.is_empty() {
        if let Some(lang) = l.split('-').next().filter(|lang| !lang.is_empty()) {
            let lang = lang.to_string();
            chain.push(l);
            chain.push(lang);
        }
    }
    chain.push(Locale::default().code().to_string());

    let mut out: Vec<String> = Vec::with_capacity(chain.len());
    for x in chain {
        if !out.contains(&x) {
            out.push(x);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn membership_is_exact() {
        assert!(is_valid_locale("zh"));
        assert!(is_valid_locale("en"));
        assert!(!is_valid_locale("EN"));
        assert!(!is_valid_locale("en-US"));
        assert!(!is_valid_locale(" en"));
        assert!(!is_valid_locale(""));
        assert!(!is_valid_locale("fr"));
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!(Locale::Zh.to_string(), "zh");
        let err = "de".parse::<Locale>().unwrap_err();
        assert!(matches!(err, I18nError::UnsupportedLocale(ref s) if s == "de"));
    }

    #[test]
    fn default_is_first() {
        assert_eq!(Locale::default(), Locale::ALL[0]);
    }

    #[test]
    fn normalize_maps_underscores_and_trims() {
        assert_eq!(normalize_locale(" zh_CN "), "zh-CN");
        assert_eq!(normalize_locale("en_US_POSIX"), "en-US-POSIX");
        assert_eq!(normalize_locale("en"), "en");
    }

    #[test]
    fn fallback_chain() {
        assert_eq!(locale_fallback_chain("zh_CN"), vec!["zh-CN", "zh"]);
        assert_eq!(locale_fallback_chain("en-US"), vec!["en-US", "en", "zh"]);
        assert_eq!(locale_fallback_chain("en"), vec!["en", "zh"]);
        assert_eq!(locale_fallback_chain("  "), vec!["zh"]);
    }
}
