use std::collections::HashMap;

use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource, FluentValue};
use unic_langid::LanguageIdentifier;

use crate::locale::normalize_locale;
use crate::message::{ArgValue, Message};
use crate::I18nError;

fn parse_ftl(locale: &str, ftl: &str) -> Result<(String, FluentBundle<FluentResource>), I18nError> {
    let loc = normalize_locale(locale);
    let langid: LanguageIdentifier = loc
        .parse()
        .map_err(|e| I18nError::Fluent(format!("invalid locale `{loc}`: {e}")))?;

    let res = FluentResource::try_new(ftl.to_string())
        .map_err(|(_res, errs)| I18nError::Fluent(format!("ftl parse error: {errs:?}")))?;

    let mut bundle = FluentBundle::new_concurrent(vec![langid]);
    // Rendered into the DOM as-is; bidi isolation marks would leak into markup.
    bundle.set_use_isolating(false);
    bundle
        .add_resource(res)
        .map_err(|errs| I18nError::Fluent(format!("ftl add_resource error: {errs:?}")))?;

    Ok((loc, bundle))
}

/// Fluent bundles keyed by normalized locale.
#[derive(Default)]
pub(crate) struct FluentStore {
    bundles: HashMap<String, FluentBundle<FluentResource>>,
}

impl FluentStore {
    pub(crate) fn load_from_str(&mut self, locale: &str, ftl: &str) -> Result<(), I18nError> {
        let (loc, bundle) = parse_ftl(locale, ftl)?;
        self.bundles.insert(loc, bundle);
        Ok(())
    }

    pub(crate) fn has_locale(&self, locale: &str) -> bool {
        self.bundles.contains_key(&normalize_locale(locale))
    }

    pub(crate) fn format_message(&self, locale: &str, msg: &Message) -> Option<String> {
        let bundle = self.bundles.get(locale)?;
        let pattern = bundle.get_message(&msg.id)?.value()?;

        let mut args = FluentArgs::new();
        for (k, v) in &msg.args {
            let value = match v {
                ArgValue::Str(s) => FluentValue::from(s.as_str()),
                ArgValue::Int(i) => FluentValue::from(*i),
                ArgValue::Float(f) => FluentValue::from(*f),
                ArgValue::Bool(b) => FluentValue::from(b.to_string()),
            };
            args.set(k.as_ref(), value);
        }

        let mut errs = Vec::new();
        let s = bundle
            .format_pattern(pattern, Some(&args), &mut errs)
            .to_string();
        if !errs.is_empty() {
            tracing::warn!(
                locale = %locale,
                message_id = %msg.id,
                errors = ?errs,
                "Fluent formatting errors"
            );
        }
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn formats_with_args() {
        let mut store = FluentStore::default();
        store
            .load_from_str("en", "hello = Hello, { $name }!")
            .unwrap();
        let msg = Message::new("hello").arg("name", "Neonity");
        assert_eq!(store.format_message("en", &msg).as_deref(), Some("Hello, Neonity!"));
    }

    #[test]
    fn missing_key_or_locale_is_none() {
        let mut store = FluentStore::default();
        store.load_from_str("en", "a = A").unwrap();
        assert!(store.format_message("en", &Message::new("b")).is_none());
        assert!(store.format_message("zh", &Message::new("a")).is_none());
    }

    #[test]
    fn rejects_bad_input() {
        let mut store = FluentStore::default();
        assert!(matches!(
            store.load_from_str("en", "= broken"),
            Err(I18nError::Fluent(_))
        ));
        assert!(matches!(
            store.load_from_str("not a locale!", "a = A"),
            Err(I18nError::Fluent(_))
        ));
    }

    #[test]
    fn keys_are_normalized() {
        let mut store = FluentStore::default();
        store.load_from_str("zh_CN", "a = 甲").unwrap();
        assert!(store.has_locale("zh-CN"));
        assert!(store.has_locale("zh_CN"));
    }
}
