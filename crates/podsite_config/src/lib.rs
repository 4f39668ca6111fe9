//! podsite site configuration
//!
//! Declarative settings for the podcast site, loaded from `podsite.toml`:
//!
//! - [`Site`]: theme color, paging, favicon and [`Seo`] defaults
//! - [`Podcast`]: show metadata (filled from the feed when left empty),
//!   hosts and listening [`Platform`]s
//!
//! [`SiteConfig::default`] is the configuration the site ships with.

mod config;
mod error;
mod podcast;
mod site;

pub use config::SiteConfig;
pub use error::{ConfigError, Result};
pub use podcast::{FeedMetadata, Platform, PlatformIcon, Podcast, PodcastBase, PodcastHost};
pub use site::{truncate_description, Seo, Site, ThemeColor};

/// Conventional configuration file name.
pub const CONFIG_FILE_NAME: &str = "podsite.toml";
