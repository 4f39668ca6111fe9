//! podsite configuration file handling (podsite.toml)

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::podcast::Podcast;
use crate::site::Site;

/// Top-level configuration
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: Site,
    #[serde(default)]
    pub podcast: Podcast,
}

fn is_http_url(s: &str) -> bool {
    let rest = s
        .strip_prefix("https://")
        .or_else(|| s.strip_prefix("http://"));
    matches!(rest, Some(host) if !host.is_empty() && !host.starts_with('/'))
}

impl SiteConfig {
    /// Parse without validating.
    pub fn from_toml_str(src: &str) -> Result<Self> {
        Ok(toml::from_str(src)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Read, parse and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let src = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&src)?;
        config.validate()?;
        debug!(path = %path.display(), "SiteConfig::load");
        Ok(config)
    }

    /// Write the configuration as TOML, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, self.to_toml()?).map_err(io_err)
    }

    /// Check every field and report all problems at once.
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();
        let site = &self.site;

        if site.page_size == 0 {
            problems.push("site.page_size must be at least 1".to_string());
        }
        if site.default_description_length == 0 {
            problems.push("site.default_description_length must be at least 1".to_string());
        }
        if !site.favicon.is_empty() && !is_http_url(&site.favicon) {
            problems.push(format!("site.favicon is not an http(s) URL: {}", site.favicon));
        }
        if site.seo.site_name.trim().is_empty() {
            problems.push("site.seo.site_name is empty".to_string());
        }
        if !site.seo.default_image.is_empty() && !is_http_url(&site.seo.default_image) {
            problems.push(format!(
                "site.seo.default_image is not an http(s) URL: {}",
                site.seo.default_image
            ));
        }
        if let Some(handle) = &site.seo.twitter_handle {
            if !handle.starts_with('@') || handle.len() < 2 {
                problems.push(format!("site.seo.twitter_handle must look like @name: {handle}"));
            }
        }

        let base = &self.podcast.base;
        for (field, value) in [("link", &base.link), ("cover", &base.cover)] {
            if !value.is_empty() && !is_http_url(value) {
                problems.push(format!("podcast.base.{field} is not an http(s) URL: {value}"));
            }
        }

        for (i, host) in self.podcast.hosts.iter().enumerate() {
            if host.name.trim().is_empty() {
                problems.push(format!("podcast.hosts[{i}].name is empty"));
            }
            if let Some(link) = host.link.as_deref().filter(|l| !is_http_url(l)) {
                problems.push(format!("podcast.hosts[{i}].link is not an http(s) URL: {link}"));
            }
        }

        let mut seen = HashSet::new();
        for (i, platform) in self.podcast.platforms.iter().enumerate() {
            let name = platform.name.trim();
            if name.is_empty() {
                problems.push(format!("podcast.platforms[{i}].name is empty"));
            } else if !seen.insert(name) {
                problems.push(format!("podcast.platforms[{i}] duplicates platform `{name}`"));
            }
            if !is_http_url(&platform.link) {
                problems.push(format!(
                    "podcast.platforms[{i}].link is not an http(s) URL: {}",
                    platform.link
                ));
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(problems))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn urls() {
        assert!(is_http_url("https://neonity.cc"));
        assert!(is_http_url("http://localhost:3000/feed"));
        assert!(!is_http_url("ftp://neonity.cc"));
        assert!(!is_http_url("https://"));
        assert!(!is_http_url("neonity.cc"));
    }

    #[test]
    fn default_is_valid() {
        SiteConfig::default().validate().unwrap();
    }

    #[test]
    fn minimal_file_uses_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
[site.seo]
site_name = "Test"
default_title = "Test"
default_description = "A test show."
"#,
        )
        .unwrap();

        assert_eq!(config.site.page_size, 10);
        assert_eq!(config.site.default_description_length, 120);
        assert_eq!(config.site.seo.locale, "zh_CN");
        assert_eq!(config.site.seo.twitter_handle, None);
        assert_eq!(config.podcast, Podcast::default());
    }

    #[test]
    fn collects_every_problem() {
        let mut config = SiteConfig::default();
        config.site.page_size = 0;
        config.site.seo.twitter_handle = Some("neonity".to_string());
        config.podcast.platforms[1].name = "小宇宙".to_string();
        config.podcast.platforms[2].link = "spotify:user".to_string();

        let Err(ConfigError::Invalid(problems)) = config.validate() else {
            panic!("expected validation failure");
        };
        assert_eq!(problems.len(), 4, "{problems:#?}");
        assert!(problems[0].contains("page_size"));
        assert!(problems[1].contains("twitter_handle"));
        assert!(problems[2].contains("duplicates platform `小宇宙`"));
        assert!(problems[3].contains("platforms[2].link"));
    }

    #[test]
    fn unknown_theme_color_is_a_parse_error() {
        let err = SiteConfig::from_toml_str(
            r#"
[site]
theme_color = "teal"
[site.seo]
site_name = "x"
default_title = "x"
default_description = "x"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
