//! Language provider
//!
//! Keeps the localization engine on the locale the page asked for and
//! mirrors the engine's locale into the document's `lang` attribute.
//!
//! Two steps, matching the render/mount split of the UI:
//!
//! - [`LanguageProvider::render`] runs inline with rendering. A valid
//!   requested locale that differs from the engine's is applied before the
//!   children are returned, so the first render already uses it and the
//!   client markup matches what the server produced.
//! - [`LanguageProvider::mount`] runs once the subtree is attached. It
//!   subscribes to engine changes, writes `lang` and returns a [`MountHandle`]
//!   that unsubscribes when unmounted or dropped. Headless hosts skip it.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use podsite_host::{HostDocument, HostEnvironment};
use podsite_i18n::{is_valid_locale, LocaleEngine, SubscriptionId};
use tracing::{debug, trace, warn};

use crate::context::{EngineContext, Provided};
use crate::phase::{Phase, PhaseEvent, PhaseMachine, PhaseTransition};

type SharedPhase = Arc<Mutex<PhaseMachine>>;

fn lock(phase: &SharedPhase) -> MutexGuard<'_, PhaseMachine> {
    phase.lock().unwrap_or_else(PoisonError::into_inner)
}

fn write_lang(document: &dyn HostDocument, locale: &str) {
    if let Err(err) = document.set_lang(locale) {
        warn!(%err, locale, "failed to update document lang");
    }
}

pub struct LanguageProvider {
    engine: Arc<dyn LocaleEngine>,
    host: HostEnvironment,
    phase: SharedPhase,
}

impl LanguageProvider {
    pub fn new(engine: Arc<dyn LocaleEngine>, host: HostEnvironment) -> Self {
        Self {
            engine,
            host,
            phase: SharedPhase::default(),
        }
    }

    /// Synchronous step. Unsupported locales are ignored and the engine keeps
    /// its current locale.
    pub fn render<T>(&self, requested: Option<&str>, children: T) -> Provided<T> {
        if let Some(requested) = requested {
            if !is_valid_locale(requested) {
                trace!(requested, "LanguageProvider: ignoring unsupported locale");
            } else if self.engine.current_locale() != requested {
                debug!(requested, "LanguageProvider: applying requested locale");
                self.engine.request_locale_change(requested);
            }
        }

        lock(&self.phase).send(PhaseEvent::Render);
        Provided::new(children, EngineContext::new(Arc::clone(&self.engine)))
    }

    /// Reactive step. Returns a handle owning the engine subscription.
    pub fn mount(&self) -> MountHandle {
        let Some(document) = self.host.document() else {
            debug!("LanguageProvider: headless host, not tracking lang");
            return MountHandle {
                engine: Arc::clone(&self.engine),
                subscription: None,
                phase: Arc::clone(&self.phase),
            };
        };

        // Subscribe before the initial write so no change slips in between.
        // Handlers write the engine's locale at call time, not their argument,
        // so a late or reordered notification cannot leave `lang` stale.
        let doc = Arc::clone(document);
        let engine = Arc::downgrade(&self.engine);
        let phase = Arc::clone(&self.phase);
        let subscription = self.engine.subscribe(Arc::new(move |_: &str| {
            let Some(engine) = engine.upgrade() else {
                return;
            };
            write_lang(&*doc, &engine.current_locale());
            lock(&phase).send(PhaseEvent::LocaleChanged);
        }));

        write_lang(&**document, &self.engine.current_locale());
        lock(&self.phase).send(PhaseEvent::Mount);
        MountHandle {
            engine: Arc::clone(&self.engine),
            subscription: Some(subscription),
            phase: Arc::clone(&self.phase),
        }
    }

    pub fn engine(&self) -> &Arc<dyn LocaleEngine> {
        &self.engine
    }

    pub fn host(&self) -> &HostEnvironment {
        &self.host
    }

    pub fn phase(&self) -> Phase {
        lock(&self.phase).current()
    }

    /// Recent lifecycle transitions, oldest first.
    pub fn history(&self) -> Vec<PhaseTransition> {
        lock(&self.phase).history().to_vec()
    }
}

/// A mounted provider. Unmounts on drop.
#[must_use = "dropping the handle unmounts the provider immediately"]
pub struct MountHandle {
    engine: Arc<dyn LocaleEngine>,
    subscription: Option<SubscriptionId>,
    phase: SharedPhase,
}

impl MountHandle {
    /// Whether this handle holds a live engine subscription.
    pub fn is_listening(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn unmount(self) {}
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        if let Some(id) = self.subscription.take() {
            if !self.engine.unsubscribe(id) {
                trace!("LanguageProvider: subscription already gone");
            }
        }
        lock(&self.phase).send(PhaseEvent::Unmount);
    }
}

impl std::fmt::Debug for MountHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MountHandle")
            .field("subscription", &self.subscription)
            .finish()
    }
}
