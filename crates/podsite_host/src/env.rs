//! Where the UI is being produced.

use std::sync::Arc;

use crate::document::HostDocument;

/// Host the provider runs in.
///
/// Only [`HostEnvironment::Interactive`] exposes a document; code that mutates
/// the document checks [`HostEnvironment::document`] instead of assuming one.
#[derive(Clone, Default)]
pub enum HostEnvironment {
    /// A live document is attached.
    Interactive(Arc<dyn HostDocument>),
    /// Server or static render: nothing to mutate.
    #[default]
    Headless,
}

impl HostEnvironment {
    pub fn interactive(document: Arc<dyn HostDocument>) -> Self {
        Self::Interactive(document)
    }

    pub fn document(&self) -> Option<&Arc<dyn HostDocument>> {
        match self {
            Self::Interactive(doc) => Some(doc),
            Self::Headless => None,
        }
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self, Self::Interactive(_))
    }
}

impl std::fmt::Debug for HostEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Interactive(doc) => f
                .debug_tuple("Interactive")
                .field(&doc.lang())
                .finish(),
            Self::Headless => f.write_str("Headless"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryDocument;

    #[test]
    fn headless_has_no_document() {
        let host = HostEnvironment::default();
        assert!(!host.is_interactive());
        assert!(host.document().is_none());
        assert_eq!(format!("{host:?}"), "Headless");
    }

    #[test]
    fn interactive_shares_document() {
        let doc = Arc::new(MemoryDocument::new());
        let host = HostEnvironment::interactive(doc.clone());
        assert!(host.is_interactive());

        host.document().unwrap().set_lang("zh").unwrap();
        assert_eq!(doc.lang().as_deref(), Some("zh"));
    }
}
