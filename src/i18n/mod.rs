//! Display language selection and string tables
//!
//! Three bundled tables (English, Traditional Chinese, Simplified Chinese).
//! Lookups fall back to English, then to the key itself.

pub mod format;
mod strings;

pub use format::{format_amount, format_date, format_signed_amount};

/// Supported display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    TraditionalChinese,
    SimplifiedChinese,
}

/// Ordered prefix rules; the first match wins.
const LANGUAGE_RULES: &[(&str, Language)] = &[
    ("zh-hans", Language::SimplifiedChinese),
    ("zh-cn", Language::SimplifiedChinese),
    ("zh-sg", Language::SimplifiedChinese),
    ("zh", Language::TraditionalChinese),
];

impl Language {
    /// Resolve a host language tag ("en", "zh-Hant", "zh-CN", ...)
    pub fn resolve(tag: &str) -> Self {
        let tag = tag.trim().to_lowercase().replace('_', "-");
        LANGUAGE_RULES
            .iter()
            .find(|(prefix, _)| tag.starts_with(prefix))
            .map(|(_, language)| *language)
            .unwrap_or_default()
    }

    /// Whether dates are written year-first
    pub fn is_chinese(&self) -> bool {
        !matches!(self, Self::English)
    }

    fn table(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::English => strings::EN,
            Self::TraditionalChinese => strings::ZH_HANT,
            Self::SimplifiedChinese => strings::ZH_HANS,
        }
    }
}

/// Looks up UI labels for one language
#[derive(Debug, Clone, Copy, Default)]
pub struct Translator {
    language: Language,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Build a translator straight from a host language tag
    pub fn for_tag(tag: &str) -> Self {
        Self::new(Language::resolve(tag))
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Translate `key`, falling back to English and then to the key itself
    pub fn t<'k>(&self, key: &'k str) -> &'k str {
        lookup(self.language.table(), key)
            .or_else(|| lookup(strings::EN, key))
            .unwrap_or(key)
    }
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}
