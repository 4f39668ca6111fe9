//! podsite internationalization (i18n)
//!
//! - A closed set of supported [`Locale`]s with a membership predicate
//! - [`LocaleEngine`]: the injectable engine interface (current locale,
//!   change requests, change subscriptions)
//! - [`I18nEngine`]: the shipped engine, backed by Fluent (.ftl) catalogs

mod engine;
mod error;
mod fluent;
mod locale;
mod message;

pub use engine::{I18nEngine, LocaleEngine, LocaleHandler, SubscriptionId};
pub use error::{I18nError, Result};
pub use locale::{is_valid_locale, locale_fallback_chain, normalize_locale, Locale};
pub use message::{ArgValue, Message};

/// Convenience macro for building a catalog key + args as a [`Message`].
///
/// Examples:
/// - `t!("nav-home")`
/// - `t!("greeting", { name: host_name })`
#[macro_export]
macro_rules! t {
    ($id:literal) => {
        $crate::Message::new($id)
    };
    ($id:literal, { $($name:ident : $value:expr),* $(,)? }) => {{
        let mut m = $crate::Message::new($id);
        $(
            m = m.arg(stringify!($name), $value);
        )*
        m
    }};
}
