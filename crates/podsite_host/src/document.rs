//! Root document element.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::error::{HostError, Result};

/// Attribute holding the document language.
pub const LANG_ATTRIBUTE: &str = "lang";

/// Whether `name` can be used as an attribute name on an element.
///
/// Mirrors the HTML rule: non-empty, no whitespace, no control characters,
/// none of `"`, `'`, `>`, `/`, `=`.
pub fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && name.chars().all(|c| {
            !c.is_whitespace() && !c.is_control() && !matches!(c, '"' | '\'' | '>' | '/' | '=')
        })
}

/// The root element of a live document.
pub trait HostDocument: Send + Sync {
    fn attribute(&self, name: &str) -> Option<String>;

    fn set_attribute(&self, name: &str, value: &str) -> Result<()>;

    fn lang(&self) -> Option<String> {
        self.attribute(LANG_ATTRIBUTE)
    }

    fn set_lang(&self, value: &str) -> Result<()> {
        self.set_attribute(LANG_ATTRIBUTE, value)
    }
}

/// In-process document root.
#[derive(Default)]
pub struct MemoryDocument {
    attributes: RwLock<FxHashMap<String, String>>,
    read_only: AtomicBool,
    writes: AtomicUsize,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from markup-provided attributes, e.g. a server-rendered `lang`.
    pub fn with_attributes<I, K, V>(attrs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let doc = Self::new();
        for (k, v) in attrs {
            doc.set_attribute(&k.into(), &v.into())?;
        }
        doc.writes.store(0, Ordering::SeqCst);
        Ok(doc)
    }

    /// Reject further writes with [`HostError::ReadOnly`].
    pub fn freeze(&self) {
        self.read_only.store(true, Ordering::SeqCst);
    }

    /// Number of successful attribute writes.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl HostDocument for MemoryDocument {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<()> {
        if !is_valid_attribute_name(name) {
            return Err(HostError::InvalidAttributeName(name.to_string()));
        }
        if self.read_only.load(Ordering::SeqCst) {
            return Err(HostError::ReadOnly);
        }

        trace!(name, value, "MemoryDocument::set_attribute");
        self.attributes
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
