//! What the provider hands to its subtree.

use std::sync::Arc;

use podsite_i18n::{Locale, LocaleEngine, Message};

/// Read access to the engine for descendants of a [`crate::LanguageProvider`].
#[derive(Clone)]
pub struct EngineContext {
    engine: Arc<dyn LocaleEngine>,
}

impl EngineContext {
    pub(crate) fn new(engine: Arc<dyn LocaleEngine>) -> Self {
        Self { engine }
    }

    /// The engine's active locale, as stored.
    pub fn locale(&self) -> String {
        self.engine.current_locale()
    }

    /// The active locale if it is one the site supports.
    pub fn supported_locale(&self) -> Option<Locale> {
        Locale::from_code(&self.locale())
    }

    pub fn tr(&self, msg: &Message) -> String {
        self.engine.tr(msg)
    }

    pub fn engine(&self) -> &Arc<dyn LocaleEngine> {
        &self.engine
    }
}

impl std::fmt::Debug for EngineContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineContext")
            .field("locale", &self.locale())
            .finish()
    }
}

/// A rendered subtree wrapped with the engine context.
#[derive(Debug)]
pub struct Provided<T> {
    children: T,
    context: EngineContext,
}

impl<T> Provided<T> {
    pub(crate) fn new(children: T, context: EngineContext) -> Self {
        Self { children, context }
    }

    pub fn children(&self) -> &T {
        &self.children
    }

    pub fn into_children(self) -> T {
        self.children
    }

    pub fn context(&self) -> &EngineContext {
        &self.context
    }

    /// Run `f` over the children with the context in scope, as a descendant would.
    pub fn map<U>(self, f: impl FnOnce(T, &EngineContext) -> U) -> Provided<U> {
        let children = f(self.children, &self.context);
        Provided {
            children,
            context: self.context,
        }
    }
}
