use podsite_config::{ConfigError, PlatformIcon, SiteConfig, ThemeColor, CONFIG_FILE_NAME};
use pretty_assertions::assert_eq;

#[test]
fn default_config_survives_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

    let config = SiteConfig::default();
    config.save(&path).unwrap();

    let loaded = SiteConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn hand_written_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(
        &path,
        r#"
[site]
theme_color = "purple"
page_size = 20

[site.seo]
site_name = "Night Shift"
default_title = "Night Shift"
default_description = "Late conversations."
twitter_handle = "@nightshift"
locale = "en_US"

[podcast.base]
title = "Night Shift"

[[podcast.hosts]]
name = "Ada"

[[podcast.platforms]]
name = "RSS"
link = "https://example.com/feed.xml"
icon = "rss"

[[podcast.platforms]]
name = "Apple"
link = "https://podcasts.apple.com/podcast/night-shift"
icon = "apple-podcasts"
color_class = "text-purple-500"
"#,
    )
    .unwrap();

    let config = SiteConfig::load(&path).unwrap();
    assert_eq!(config.site.theme_color, ThemeColor::Purple);
    assert_eq!(config.site.page_size, 20);
    assert_eq!(config.site.seo.content_locale(), Some(podsite_i18n::Locale::En));
    assert_eq!(config.podcast.base.missing_fields(), vec!["description", "link", "cover"]);
    assert_eq!(config.podcast.hosts[0].link, None);
    assert_eq!(config.podcast.rss_feed(), Some("https://example.com/feed.xml"));
    assert_eq!(config.podcast.platforms[1].icon, PlatformIcon::ApplePodcasts);
}

#[test]
fn load_reports_missing_file_and_invalid_content() {
    let dir = tempfile::tempdir().unwrap();

    let missing = dir.path().join("absent.toml");
    let err = SiteConfig::load(&missing).unwrap_err();
    assert!(matches!(err, ConfigError::Io { ref path, .. } if path == &missing));
    assert!(err.to_string().contains("absent.toml"));

    let bad = dir.path().join(CONFIG_FILE_NAME);
    let mut config = SiteConfig::default();
    config.site.page_size = 0;
    std::fs::write(&bad, config.to_toml().unwrap()).unwrap();

    let err = SiteConfig::load(&bad).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(ref p) if p.len() == 1));
    assert!(err.to_string().contains("page_size"));
}
