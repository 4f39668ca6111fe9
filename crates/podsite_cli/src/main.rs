//! podsite CLI
//!
//! Commands:
//! - `podsite check` - validate a configuration file and print a summary
//! - `podsite init` - write the default configuration
//! - `podsite lang` - run the language provider against an in-memory document

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use podsite_app::prelude::*;
use podsite_config::{SiteConfig, CONFIG_FILE_NAME};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "podsite")]
#[command(author, version, about = "podsite - podcast site configuration and localization bootstrap", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a configuration file and print a summary
    Check {
        /// Configuration file (defaults to the built-in configuration)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Write the default configuration
    Init {
        /// Target file
        #[arg(default_value = CONFIG_FILE_NAME)]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Render through the language provider and report engine and document state
    Lang {
        /// Locale requested by the page
        #[arg(short, long)]
        requested: Option<String>,

        /// Locale the engine starts on
        #[arg(short, long, default_value_t = Locale::default().code().to_string())]
        initial: String,

        /// Render without a document (server render)
        #[arg(long)]
        headless: bool,

        /// Switch the engine to this locale after mounting
        #[arg(long)]
        switch_to: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Check { config } => cmd_check(config),
        Commands::Init { path, force } => cmd_init(path, force),
        Commands::Lang {
            requested,
            initial,
            headless,
            switch_to,
        } => cmd_lang(requested, &initial, headless, switch_to),
    }
}

fn cmd_check(path: Option<PathBuf>) -> Result<()> {
    let config = match &path {
        Some(path) => SiteConfig::load(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => {
            let config = SiteConfig::default();
            config.validate().context("Built-in configuration is invalid")?;
            config
        }
    };

    let site = &config.site;
    let podcast = &config.podcast;
    println!("Site:        {}", site.seo.site_name);
    println!("Title:       {}", site.seo.default_title);
    println!(
        "Theme:       {} ({} / {})",
        site.theme_color.name(),
        site.theme_color.primary_hex(),
        site.theme_color.hover_hex()
    );
    println!("Page size:   {}", site.page_size);
    println!("Description: {}", site.excerpt(&site.seo.default_description));
    match site.seo.content_locale() {
        Some(locale) => println!("Locale:      {} ({})", site.seo.og_locale(), locale.native_name()),
        None => println!("Locale:      {} (no matching catalog)", site.seo.og_locale()),
    }
    println!(
        "Hosts:       {}",
        podcast
            .hosts
            .iter()
            .map(|h| h.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("Platforms:");
    for p in &podcast.platforms {
        println!("  {:<10} {}", p.name, p.link);
    }

    let missing = podcast.base.missing_fields();
    if !missing.is_empty() {
        match podcast.rss_feed() {
            Some(feed) => info!("{} will be filled from feed {}", missing.join(", "), feed),
            None => warn!("No RSS platform to fill {} from", missing.join(", ")),
        }
    }

    println!("OK");
    Ok(())
}

fn cmd_init(path: PathBuf, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }

    SiteConfig::default()
        .save(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote {}", path.display());
    Ok(())
}

fn cmd_lang(
    requested: Option<String>,
    initial: &str,
    headless: bool,
    switch_to: Option<String>,
) -> Result<()> {
    let initial: Locale = initial
        .parse()
        .with_context(|| format!("Engine cannot start on `{initial}`"))?;
    let engine = Arc::new(I18nEngine::with_builtin_catalogs(initial)?);

    let document = Arc::new(MemoryDocument::new());
    let host = if headless {
        HostEnvironment::Headless
    } else {
        HostEnvironment::interactive(document.clone())
    };
    let provider = LanguageProvider::new(engine.clone(), host);

    let page = provider.render(requested.as_deref(), ());
    println!("Engine:   {}", page.context().locale());
    println!("Greeting: {}", page.context().tr(&t!("greeting", { name: "podsite" })));

    let mounted = provider.mount();
    println!("lang:     {}", document.lang().as_deref().unwrap_or("(unset)"));

    if let Some(next) = switch_to {
        engine.request_locale_change(&next);
        println!("Switched: {}", engine.current_locale());
        println!("lang:     {}", document.lang().as_deref().unwrap_or("(unset)"));
    }

    mounted.unmount();
    println!("Listeners after unmount: {}", engine.subscriber_count());
    Ok(())
}
