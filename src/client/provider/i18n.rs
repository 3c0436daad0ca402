use std::rc::Rc;

use dioxus::prelude::*;
use serde_json::Value;

/// Looks up localized text for a dotted key such as `buttons.create`.
pub trait TranslationProvider {
    /// `None` when the key has no translation for the active locale
    fn translate(&self, key: &str) -> Option<String>;
}

/// Context handle around the host's [`TranslationProvider`].
#[derive(Clone)]
pub struct I18n {
    provider: Rc<dyn TranslationProvider>,
}

impl I18n {
    pub fn new(provider: impl TranslationProvider + 'static) -> Self {
        Self {
            provider: Rc::new(provider),
        }
    }
}

impl PartialEq for I18n {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.provider), Rc::as_ptr(&other.provider))
    }
}

/// Translation function handed to components.
#[derive(Clone, Default, PartialEq)]
pub struct Translate {
    i18n: Option<I18n>,
}

impl Translate {
    pub fn new(i18n: Option<I18n>) -> Self {
        Self { i18n }
    }

    /// Translate `key`, returning `fallback` when no translation exists
    pub fn t(&self, key: &str, fallback: &str) -> String {
        self.i18n
            .as_ref()
            .and_then(|i18n| i18n.provider.translate(key))
            .unwrap_or_else(|| fallback.to_string())
    }
}

pub fn use_translate() -> Translate {
    Translate::new(try_use_context::<I18n>())
}

/// Dictionary of nested JSON objects, e.g. `{"buttons": {"create": "Créer"}}`.
#[derive(Clone, Debug, Default)]
pub struct StaticTranslations {
    messages: Value,
}

impl StaticTranslations {
    pub fn new(messages: Value) -> Self {
        Self { messages }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json).map(Self::new)
    }
}

impl TranslationProvider for StaticTranslations {
    fn translate(&self, key: &str) -> Option<String> {
        key.split('.')
            .try_fold(&self.messages, |node, segment| node.get(segment))
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn looks_up_nested_keys() {
        let translations = StaticTranslations::new(json!({
            "buttons": { "create": "Créer" }
        }));

        assert_eq!(
            translations.translate("buttons.create").as_deref(),
            Some("Créer")
        );
        assert_eq!(translations.translate("buttons"), None);
        assert_eq!(translations.translate("buttons.edit"), None);
    }

    #[test]
    fn falls_back_without_provider() {
        let translate = Translate::default();

        assert_eq!(translate.t("buttons.create", "Create"), "Create");
    }

    #[test]
    fn falls_back_on_missing_key() {
        let translations =
            StaticTranslations::from_json(r#"{"buttons":{"create":"Erstellen"}}"#).unwrap();
        let translate = Translate::new(Some(I18n::new(translations)));

        assert_eq!(translate.t("buttons.create", "Create"), "Erstellen");
        assert_eq!(
            translate.t("buttons.notAccessTitle", "You don't have permission to access"),
            "You don't have permission to access"
        );
    }
}
