//! Site-wide settings: theme, paging, favicon, SEO defaults.

use podsite_i18n::{normalize_locale, Locale};
use serde::{Deserialize, Serialize};

const DEFAULT_IMAGE: &str =
    "https://neopic2026.oss-cn-beijing.aliyuncs.com/test/Adobe%20Express%20-%20file.png";

/// Accent color the site theme is built around.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeColor {
    #[default]
    Blue,
    Pink,
    Purple,
    Green,
    Yellow,
    Orange,
    Red,
}

impl ThemeColor {
    pub const ALL: [ThemeColor; 7] = [
        ThemeColor::Blue,
        ThemeColor::Pink,
        ThemeColor::Purple,
        ThemeColor::Green,
        ThemeColor::Yellow,
        ThemeColor::Orange,
        ThemeColor::Red,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ThemeColor::Blue => "blue",
            ThemeColor::Pink => "pink",
            ThemeColor::Purple => "purple",
            ThemeColor::Green => "green",
            ThemeColor::Yellow => "yellow",
            ThemeColor::Orange => "orange",
            ThemeColor::Red => "red",
        }
    }

    /// Primary swatch (500 shade).
    pub const fn primary_hex(self) -> &'static str {
        match self {
            ThemeColor::Blue => "#3b82f6",
            ThemeColor::Pink => "#ec4899",
            ThemeColor::Purple => "#a855f7",
            ThemeColor::Green => "#22c55e",
            ThemeColor::Yellow => "#eab308",
            ThemeColor::Orange => "#f97316",
            ThemeColor::Red => "#ef4444",
        }
    }

    /// Hover swatch (600 shade).
    pub const fn hover_hex(self) -> &'static str {
        match self {
            ThemeColor::Blue => "#2563eb",
            ThemeColor::Pink => "#db2777",
            ThemeColor::Purple => "#9333ea",
            ThemeColor::Green => "#16a34a",
            ThemeColor::Yellow => "#ca8a04",
            ThemeColor::Orange => "#ea580c",
            ThemeColor::Red => "#dc2626",
        }
    }
}

/// SEO defaults used when a page does not provide its own.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Seo {
    pub site_name: String,
    pub default_title: String,
    pub default_description: String,
    #[serde(default)]
    pub default_image: String,
    #[serde(default)]
    pub twitter_handle: Option<String>,
    /// Open Graph locale, e.g. `zh_CN`
    #[serde(default = "default_og_locale")]
    pub locale: String,
}

fn default_og_locale() -> String {
    "zh_CN".to_string()
}

impl Seo {
    /// The `og:locale` value, as configured.
    pub fn og_locale(&self) -> &str {
        &self.locale
    }

    /// The supported content locale matching the Open Graph locale's language.
    pub fn content_locale(&self) -> Option<Locale> {
        let normalized = normalize_locale(&self.locale);
        let lang = normalized.split('-').next()?;
        Locale::from_code(&lang.to_ascii_lowercase())
    }
}

impl Default for Seo {
    fn default() -> Self {
        Self {
            site_name: "NeoMatrix".to_string(),
            default_title: "NeoMatrix - 新矩阵".to_string(),
            default_description: "一个关于技术、生活与成长的播客节目。".to_string(),
            default_image: DEFAULT_IMAGE.to_string(),
            twitter_handle: Some("@neonity".to_string()),
            locale: default_og_locale(),
        }
    }
}

/// Site configuration
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Site {
    #[serde(default)]
    pub theme_color: ThemeColor,
    /// Episodes per listing page
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Characters kept when an episode description is shortened
    #[serde(default = "default_description_length")]
    pub default_description_length: usize,
    #[serde(default)]
    pub favicon: String,
    pub seo: Seo,
}

fn default_page_size() -> u32 {
    10
}

fn default_description_length() -> usize {
    120
}

impl Default for Site {
    fn default() -> Self {
        Self {
            theme_color: ThemeColor::Blue,
            page_size: default_page_size(),
            default_description_length: default_description_length(),
            favicon: DEFAULT_IMAGE.to_string(),
            seo: Seo::default(),
        }
    }
}

impl Site {
    /// Shorten `text` for listings using `default_description_length`.
    pub fn excerpt(&self, text: &str) -> String {
        truncate_description(text, self.default_description_length)
    }
}

/// Keep at most `max_chars` characters of `text`, appending `…` when cut.
///
/// Counts Unicode scalar values, so CJK text is not split mid-character.
pub fn truncate_description(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((cut, _)) => {
            let mut out = text[..cut].trim_end().to_string();
            out.push('…');
            out
        }
    }
}
