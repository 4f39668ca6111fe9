use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use slotmap::{new_key_type, SlotMap};
use tracing::debug;

use crate::fluent::FluentStore;
use crate::locale::{locale_fallback_chain, normalize_locale, Locale};
use crate::message::Message;
use crate::I18nError;

new_key_type! {
    /// Handle returned by [`LocaleEngine::subscribe`].
    pub struct SubscriptionId;
}

/// Callback invoked with the newly active locale.
pub type LocaleHandler = Arc<dyn Fn(&str) + Send + Sync>;

const BUILTIN_CATALOGS: [(Locale, &str); 2] = [
    (Locale::Zh, include_str!("../locales/zh.ftl")),
    (Locale::En, include_str!("../locales/en.ftl")),
];

/// The capability set the language provider needs from a localization engine.
///
/// `request_locale_change` must notify subscribers before it returns.
pub trait LocaleEngine: Send + Sync {
    fn current_locale(&self) -> String;

    fn request_locale_change(&self, locale: &str);

    fn subscribe(&self, handler: LocaleHandler) -> SubscriptionId;

    /// Returns `false` if `id` was not (or no longer) registered.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;

    /// Translate `msg` in the current locale. Engines without catalogs echo the id.
    fn tr(&self, msg: &Message) -> String {
        msg.id.to_string()
    }
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

/// Shared localization engine: active locale, change subscribers and Fluent catalogs.
///
/// Share it as `Arc<I18nEngine>` (or `Arc<dyn LocaleEngine>`); it is never a global.
pub struct I18nEngine {
    locale: RwLock<String>,
    subscribers: RwLock<SlotMap<SubscriptionId, LocaleHandler>>,
    fluent: RwLock<FluentStore>,
}

impl I18nEngine {
    /// Engine with no catalogs loaded.
    pub fn new(initial: Locale) -> Self {
        Self {
            locale: RwLock::new(initial.code().to_string()),
            subscribers: RwLock::new(SlotMap::with_key()),
            fluent: RwLock::new(FluentStore::default()),
        }
    }

    /// Engine preloaded with the catalogs bundled in this crate.
    pub fn with_builtin_catalogs(initial: Locale) -> Result<Self, I18nError> {
        let engine = Self::new(initial);
        for (locale, ftl) in BUILTIN_CATALOGS {
            engine.load_ftl(locale.code(), ftl)?;
        }
        Ok(engine)
    }

    /// Parse and load a Fluent (.ftl) catalog for a locale, replacing any previous one.
    pub fn load_ftl(&self, locale: &str, ftl: &str) -> Result<(), I18nError> {
        write(&self.fluent).load_from_str(locale, ftl)
    }

    pub fn has_catalog(&self, locale: &str) -> bool {
        read(&self.fluent).has_locale(locale)
    }

    pub fn subscriber_count(&self) -> usize {
        read(&self.subscribers).len()
    }
}

impl LocaleEngine for I18nEngine {
    fn current_locale(&self) -> String {
        read(&self.locale).clone()
    }

    fn request_locale_change(&self, locale: &str) {
        let loc = normalize_locale(locale);
        if loc.is_empty() {
            return;
        }

        {
            let mut cur = write(&self.locale);
            if *cur == loc {
                return;
            }
            debug!("I18nEngine::request_locale_change: {} -> {}", *cur, loc);
            *cur = loc.clone();
        }

        // Snapshot so handlers can call back into the engine. A handler removed
        // by an earlier one in this pass is skipped.
        let handlers: Vec<(SubscriptionId, LocaleHandler)> = read(&self.subscribers)
            .iter()
            .map(|(id, handler)| (id, Arc::clone(handler)))
            .collect();
        for (id, handler) in handlers {
            if !read(&self.subscribers).contains_key(id) {
                continue;
            }
            handler(&loc);
        }
    }

    fn subscribe(&self, handler: LocaleHandler) -> SubscriptionId {
        write(&self.subscribers).insert(handler)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        write(&self.subscribers).remove(id).is_some()
    }

    fn tr(&self, msg: &Message) -> String {
        let chain = locale_fallback_chain(&self.current_locale());
        let fluent = read(&self.fluent);
        chain
            .iter()
            .find_map(|l| fluent.format_message(l, msg))
            .unwrap_or_else(|| msg.id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    fn recorder(engine: &I18nEngine) -> (SubscriptionId, Arc<Mutex<Vec<String>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let id = engine.subscribe(Arc::new(move |l: &str| {
            sink.lock().unwrap().push(l.to_string());
        }));
        (id, seen)
    }

    #[test]
    fn change_notifies_subscribers() {
        let engine = I18nEngine::new(Locale::Zh);
        let (_id, seen) = recorder(&engine);

        engine.request_locale_change("en");
        assert_eq!(engine.current_locale(), "en");
        assert_eq!(*seen.lock().unwrap(), vec!["en".to_string()]);
    }

    #[test]
    fn same_or_empty_locale_is_silent() {
        let engine = I18nEngine::new(Locale::Zh);
        let (_id, seen) = recorder(&engine);

        engine.request_locale_change("zh");
        engine.request_locale_change("   ");
        assert_eq!(engine.current_locale(), "zh");
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let engine = I18nEngine::new(Locale::Zh);
        let (id, seen) = recorder(&engine);

        assert!(engine.unsubscribe(id));
        assert!(!engine.unsubscribe(id));
        assert_eq!(engine.subscriber_count(), 0);

        engine.request_locale_change("en");
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn handlers_may_read_engine() {
        let engine = Arc::new(I18nEngine::new(Locale::Zh));
        let observed = Arc::new(Mutex::new(String::new()));
        let (e, o) = (Arc::clone(&engine), Arc::clone(&observed));
        engine.subscribe(Arc::new(move |_: &str| {
            *o.lock().unwrap() = e.current_locale();
        }));

        engine.request_locale_change("en");
        assert_eq!(*observed.lock().unwrap(), "en");
    }

    #[test]
    fn handler_removed_mid_notification_is_skipped() {
        let engine = Arc::new(I18nEngine::new(Locale::Zh));
        let victim: Arc<Mutex<Option<SubscriptionId>>> = Arc::default();

        // Registered first, so it runs first (slot order).
        let (e, v) = (Arc::clone(&engine), Arc::clone(&victim));
        engine.subscribe(Arc::new(move |_: &str| {
            if let Some(id) = v.lock().unwrap().take() {
                assert!(e.unsubscribe(id));
            }
        }));
        let (id, seen) = recorder(&engine);
        *victim.lock().unwrap() = Some(id);

        engine.request_locale_change("en");
        assert!(seen.lock().unwrap().is_empty());
        assert_eq!(engine.subscriber_count(), 1);

        engine.request_locale_change("zh");
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn builtin_catalogs_translate() {
        let engine = I18nEngine::with_builtin_catalogs(Locale::En).unwrap();
        assert!(engine.has_catalog("en"));
        assert!(engine.has_catalog("zh"));

        let msg = Message::new("greeting").arg("name", "Neonity");
        assert_eq!(engine.tr(&msg), "Hello, Neonity!");
        assert_eq!(engine.tr(&Message::new("episode-count").arg("count", 1)), "1 episode");

        engine.request_locale_change("zh");
        assert_eq!(engine.tr(&Message::new("nav-home")), "首页");
    }

    #[test]
    fn missing_keys_fall_back() {
        let engine = I18nEngine::new(Locale::En);
        engine.load_ftl("zh", "only-zh = 仅中文").unwrap();
        engine.load_ftl("en", "both = both").unwrap();

        assert_eq!(engine.tr(&Message::new("only-zh")), "仅中文");
        assert_eq!(engine.tr(&Message::new("nowhere")), "nowhere");
    }
}
