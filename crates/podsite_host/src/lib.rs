//! podsite host environment
//!
//! The language provider only touches the host through this crate: a
//! [`HostEnvironment`] is either interactive (a live document whose root
//! element carries the `lang` attribute) or headless (server render, no
//! document at all).

pub mod document;
pub mod env;
pub mod error;

pub use document::{is_valid_attribute_name, HostDocument, MemoryDocument, LANG_ATTRIBUTE};
pub use env::HostEnvironment;
pub use error::{HostError, Result};
