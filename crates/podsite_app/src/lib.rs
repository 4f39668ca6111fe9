//! podsite application layer
//!
//! Bootstraps localization for the site: a [`LanguageProvider`] wraps a
//! subtree, reconciles the shared engine with the locale the page requested,
//! and keeps the document `lang` attribute in step with the engine.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use podsite_app::prelude::*;
//!
//! let engine = Arc::new(I18nEngine::with_builtin_catalogs(Locale::Zh).unwrap());
//! let document = Arc::new(MemoryDocument::new());
//! let provider = LanguageProvider::new(engine, HostEnvironment::interactive(document.clone()));
//!
//! let page = provider.render(Some("en"), "episode list");
//! assert_eq!(page.context().locale(), "en");
//!
//! let mounted = provider.mount();
//! assert_eq!(document.lang().as_deref(), Some("en"));
//! mounted.unmount();
//! ```

mod context;
mod phase;
mod provider;


pub use context::{EngineContext, Provided};
pub use phase::{Phase, PhaseEvent, PhaseTransition};
pub use provider::{LanguageProvider, MountHandle};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::context::{EngineContext, Provided};
    pub use crate::provider::{LanguageProvider, MountHandle};

    pub use podsite_host::{HostDocument, HostEnvironment, MemoryDocument};
    pub use podsite_i18n::{t, I18nEngine, Locale, LocaleEngine, Message};
}
