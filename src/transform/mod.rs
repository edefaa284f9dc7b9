// WHY: Main engine interface tying the configuration store to the ordered rewrite passes
// Each call owns its working buffer; the engine itself carries only frozen configuration

use anyhow::Result;
use std::sync::Arc;
use tracing::debug;

use crate::config::LineBreaksConfig;

pub mod normalization;
pub mod shortcuts;
pub mod units;
pub mod weak_words;

pub use normalization::WhitespaceNormalizer;
pub use shortcuts::{collapse_shortcuts, ShortcutMap};
pub use units::{bind_digit_groups, bind_units};
pub use weak_words::{apply_weak_words, capitalize_first, process_weak_word};

/// Rewrite counts for one `transform` call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformStats {
    /// Spaces bound after weak words
    pub weak_words: usize,
    /// Spaces bound between a digit and a unit
    pub units: usize,
    /// Shortcut occurrences collapsed
    pub shortcuts: usize,
    /// Spaces bound between digit groups
    pub digit_groups: usize,
}

impl TransformStats {
    /// Total number of rewrites across all passes
    pub fn total(&self) -> usize {
        self.weak_words + self.units + self.shortcuts + self.digit_groups
    }
}

/// Non-breaking space engine
///
/// Cloning is cheap and the engine can be shared across threads; all
/// language tables are resolved when the configuration is built.
#[derive(Debug, Clone)]
pub struct LineBreaks {
    config: Arc<LineBreaksConfig>,
    normalizer: WhitespaceNormalizer,
}

impl LineBreaks {
    /// Create engine over a built configuration
    pub fn new(config: LineBreaksConfig) -> Result<Self> {
        Self::from_shared(Arc::new(config))
    }

    /// Create engine over a configuration shared with other engines
    pub fn from_shared(config: Arc<LineBreaksConfig>) -> Result<Self> {
        Ok(Self {
            config,
            normalizer: WhitespaceNormalizer::new()?,
        })
    }

    /// Create engine with built-in word tables and the `&nbsp;` marker
    pub fn with_default_config() -> Result<Self> {
        Self::new(LineBreaksConfig::default())
    }

    pub fn config(&self) -> &LineBreaksConfig {
        &self.config
    }

    /// Language actually used for `lang`: the argument unless missing or empty
    pub fn resolve_lang<'a>(&'a self, lang: Option<&'a str>) -> &'a str {
        match lang {
            Some(lang) if !lang.is_empty() => lang,
            _ => self.config.default_lang(),
        }
    }

    /// Insert non-breaking markers into `text` for language `lang`
    pub fn transform(&self, text: &str, lang: Option<&str>) -> String {
        self.transform_with_stats(text, lang).0
    }

    /// Same as `transform`, also reporting how many rewrites each pass made
    pub fn transform_with_stats(&self, text: &str, lang: Option<&str>) -> (String, TransformStats) {
        let lang = self.resolve_lang(lang);
        let marker = self.config.marker();
        let weak_word_list = self.config.resolve_weak_words(lang);
        let unit_list = self.config.resolve_units();
        let shortcut_map = self.config.resolve_shortcuts(lang);

        let mut working = self.normalizer.normalize(text);
        let stats = TransformStats {
            weak_words: apply_weak_words(&mut working, weak_word_list, marker),
            units: bind_units(&mut working, unit_list, marker),
            shortcuts: collapse_shortcuts(&mut working, shortcut_map),
            digit_groups: bind_digit_groups(&mut working, marker),
        };

        debug!(
            lang,
            chars = text.chars().count(),
            weak_words = stats.weak_words,
            units = stats.units,
            shortcuts = stats.shortcuts,
            digit_groups = stats.digit_groups,
            "Line breaks transform complete"
        );

        (working, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UNICODE_NBSP;
    use std::sync::OnceLock;

    // WHY: Single shared engine instance reduces test overhead
    static SHARED_ENGINE: OnceLock<LineBreaks> = OnceLock::new();

    fn engine() -> &'static LineBreaks {
        SHARED_ENGINE.get_or_init(|| LineBreaks::with_default_config().unwrap())
    }

    #[test]
    fn test_weak_word_english() {
        assert_eq!(engine().transform("I saw a dog", Some("en")), "I saw a&nbsp;dog");
    }

    #[test]
    fn test_capitalized_weak_word_at_sentence_start() {
        assert_eq!(engine().transform("A dog ran", Some("en")), "A&nbsp;dog ran");
    }

    #[test]
    fn test_units() {
        assert_eq!(engine().transform("10 km", Some("en")), "10&nbsp;km");
        assert_eq!(engine().transform("100km", Some("en")), "100km");
    }

    #[test]
    fn test_digit_grouping() {
        assert_eq!(engine().transform("9 999 999", Some("en")), "9&nbsp;999&nbsp;999");
    }

    #[test]
    fn test_czech_shortcut() {
        assert_eq!(
            engine().transform("to je s. r. o. firma", Some("cs")),
            "to je s.&nbsp;r.&nbsp;o. firma"
        );
    }

    #[test]
    fn test_whitespace_normalized_before_weak_words() {
        assert_eq!(engine().transform("a\t\tb", Some("en")), "a&nbsp;b");
        assert_eq!(engine().transform("x  a   b", Some("en")), "x a&nbsp;b");
    }

    #[test]
    fn test_identity_on_plain_text() {
        let text = "Hello world, nothing here.";
        assert_eq!(engine().transform(text, Some("en")), text);
    }

    #[test]
    fn test_default_language_fallback() {
        let engine = engine();
        assert_eq!(engine.resolve_lang(None), "en");
        assert_eq!(engine.resolve_lang(Some("")), "en");
        assert_eq!(engine.resolve_lang(Some("cs")), "cs");
        assert_eq!(engine.transform("I saw a dog", None), "I saw a&nbsp;dog");
        assert_eq!(engine.transform("I saw a dog", Some("")), "I saw a&nbsp;dog");
    }

    #[test]
    fn test_unknown_language_still_binds_units_and_digits() {
        assert_eq!(
            engine().transform("a dog of 10 kg and 1 000 cats", Some("xx")),
            "a dog of 10&nbsp;kg and 1&nbsp;000 cats"
        );
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            ("I saw a dog and a cat in the 1 000 m² garden", "en"),
            ("A b c a a a x", "en"),
            ("Přišel k nám že s. r. o. platí 2 500 Kč za 3 kg", "cs"),
            ("Der Hund und die Katze", "de"),
            ("1 2 3 4", "en"),
        ];
        for (text, lang) in samples {
            let once = engine().transform(text, Some(lang));
            let twice = engine().transform(&once, Some(lang));
            assert_eq!(once, twice, "Not idempotent for {text:?}");
        }
    }

    #[test]
    fn test_stats_report_each_pass() {
        let (output, stats) =
            engine().transform_with_stats("A firma s. r. o. má 10 kg a 1 000 korun", Some("cs"));
        assert_eq!(output, "A&nbsp;firma s.&nbsp;r.&nbsp;o. má 10&nbsp;kg a&nbsp;1&nbsp;000 korun");
        assert_eq!(
            stats,
            TransformStats {
                weak_words: 2,
                units: 1,
                shortcuts: 1,
                digit_groups: 1,
            }
        );
        assert_eq!(stats.total(), 5);
    }

    #[test]
    fn test_unicode_marker_engine() {
        let config = LineBreaksConfig::builder().marker(UNICODE_NBSP).build().unwrap();
        let engine = LineBreaks::new(config).unwrap();
        assert_eq!(engine.transform("I saw a dog", None), "I saw a\u{a0}dog");
        assert_eq!(engine.transform("je to a. s.", Some("cs")), "je to a.\u{a0}s.");
    }

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LineBreaks>();
    }
}
