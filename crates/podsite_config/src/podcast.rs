//! Podcast metadata: show details, hosts, and where to listen.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Show-level fields. Empty strings are filled from the RSS feed.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct PodcastBase {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub cover: String,
}

/// Show metadata as read from the feed by the feed collaborator.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub cover: Option<String>,
}

impl PodcastBase {
    /// Names of fields still waiting for feed data.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("title", &self.title),
            ("description", &self.description),
            ("link", &self.link),
            ("cover", &self.cover),
        ]
        .into_iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(k, _)| k)
        .collect()
    }

    /// Fill empty fields from the feed. Configured values always win.
    ///
    /// Returns how many fields were filled.
    pub fn fill_from_feed(&mut self, feed: &FeedMetadata) -> usize {
        let mut filled = 0;
        for (slot, value) in [
            (&mut self.title, &feed.title),
            (&mut self.description, &feed.description),
            (&mut self.link, &feed.link),
            (&mut self.cover, &feed.cover),
        ] {
            let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) else {
                continue;
            };
            if slot.trim().is_empty() {
                *slot = value.to_string();
                filled += 1;
            }
        }
        debug!(filled, "PodcastBase::fill_from_feed");
        filled
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct PodcastHost {
    pub name: String,
    #[serde(default)]
    pub link: Option<String>,
}

/// Icon shown next to a listening platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlatformIcon {
    Xiaoyuzhou,
    ApplePodcasts,
    Spotify,
    Bilibili,
    Youtube,
    Rss,
}

/// A place the show can be listened to or subscribed from.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Platform {
    pub name: String,
    pub link: String,
    pub icon: PlatformIcon,
    /// CSS classes applied to the platform link
    #[serde(default)]
    pub color_class: String,
}

impl Platform {
    fn new(name: &str, link: &str, icon: PlatformIcon, color_class: &str) -> Self {
        Self {
            name: name.to_string(),
            link: link.to_string(),
            icon,
            color_class: color_class.to_string(),
        }
    }
}

/// Podcast configuration
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Podcast {
    #[serde(default)]
    pub base: PodcastBase,
    #[serde(default)]
    pub hosts: Vec<PodcastHost>,
    #[serde(default)]
    pub platforms: Vec<Platform>,
}

impl Podcast {
    pub fn platform(&self, name: &str) -> Option<&Platform> {
        self.platforms.iter().find(|p| p.name == name)
    }

    /// The platform carrying the raw feed, if one is listed.
    pub fn rss_feed(&self) -> Option<&str> {
        self.platforms
            .iter()
            .find(|p| p.icon == PlatformIcon::Rss)
            .map(|p| p.link.as_str())
    }
}

impl Default for Podcast {
    fn default() -> Self {
        Self {
            base: PodcastBase {
                link: "https://podcast-blog.neonity.cc".to_string(),
                ..PodcastBase::default()
            },
            hosts: vec![PodcastHost {
                name: "Neonity".to_string(),
                link: Some("https://neonity.cc".to_string()),
            }],
            platforms: vec![
                Platform::new(
                    "小宇宙",
                    "https://www.xiaoyuzhoufm.com/podcast/6375ba25f78beaeec3a444f0",
                    PlatformIcon::Xiaoyuzhou,
                    "text-blue-500 hover:text-blue-600",
                ),
                Platform::new(
                    "Podcasts",
                    "https://podcasts.apple.com/cn/podcast/neonity",
                    PlatformIcon::ApplePodcasts,
                    "text-purple-500 hover:text-purple-600",
                ),
                Platform::new(
                    "Spotify",
                    "https://open.spotify.com/user/31k53kp6hgkbovg72427dya5av44",
                    PlatformIcon::Spotify,
                    "text-green-500 hover:text-green-600",
                ),
                Platform::new(
                    "Bilibili",
                    "https://space.bilibili.com/10817325",
                    PlatformIcon::Bilibili,
                    "text-blue-500 hover:text-blue-600",
                ),
                Platform::new(
                    "YouTube",
                    "https://www.youtube.com/@neonity2025",
                    PlatformIcon::Youtube,
                    "text-red-500 hover:text-red-600",
                ),
                Platform::new(
                    "RSS",
                    "https://feed.xyzfm.space/7duqlaufpkey",
                    PlatformIcon::Rss,
                    "text-orange-500 hover:text-orange-600",
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_waits_for_feed() {
        let podcast = Podcast::default();
        assert_eq!(podcast.base.missing_fields(), vec!["title", "description", "cover"]);
        assert_eq!(podcast.rss_feed(), Some("https://feed.xyzfm.space/7duqlaufpkey"));
        assert_eq!(podcast.platform("Spotify").map(|p| p.icon), Some(PlatformIcon::Spotify));
    }

    #[test]
    fn feed_fills_only_empty_fields() {
        let mut base = PodcastBase {
            title: "Configured".to_string(),
            ..PodcastBase::default()
        };
        let feed = FeedMetadata {
            title: Some("From feed".to_string()),
            description: Some("  A show.  ".to_string()),
            link: Some("   ".to_string()),
            cover: None,
        };

        assert_eq!(base.fill_from_feed(&feed), 1);
        assert_eq!(base.title, "Configured");
        assert_eq!(base.description, "A show.");
        assert_eq!(base.missing_fields(), vec!["link", "cover"]);
    }
}
