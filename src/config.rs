// WHY: Explicitly constructed configuration store replacing a process-wide singleton
// Resolved once at build time, immutable afterwards, so engines can be shared freely

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;
use tracing::{debug, info};

use crate::defaults;
use crate::transform::shortcuts::ShortcutMap;

/// HTML entity emitted by default as the non-breaking-space marker
pub const DEFAULT_MARKER: &str = "&nbsp;";

/// Plain-text alternative marker (U+00A0 NO-BREAK SPACE)
pub const UNICODE_NBSP: &str = "\u{00A0}";

/// Language used when neither the caller nor the configuration names one
pub const DEFAULT_LANG: &str = "en";

static EMPTY_SHORTCUTS: ShortcutMap = ShortcutMap::new();

/// Word list given either as one comma-delimited string or as separate words
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum WordList {
    Joined(String),
    List(Vec<String>),
}

impl WordList {
    /// Split into individual words. Commas are split without trimming and
    /// empty tokens (from "a,,b" or a trailing comma) are dropped.
    pub fn into_words(self) -> Vec<String> {
        let raw: Vec<String> = match self {
            WordList::Joined(joined) => joined.split(',').map(str::to_string).collect(),
            WordList::List(words) => words,
        };
        let total = raw.len();
        let words: Vec<String> = raw.into_iter().filter(|w| !w.is_empty()).collect();
        if words.len() != total {
            debug!(dropped = total - words.len(), "Filtered empty tokens from word list");
        }
        words
    }
}

impl From<&str> for WordList {
    fn from(joined: &str) -> Self {
        WordList::Joined(joined.to_string())
    }
}

impl From<String> for WordList {
    fn from(joined: String) -> Self {
        WordList::Joined(joined)
    }
}

impl From<Vec<String>> for WordList {
    fn from(words: Vec<String>) -> Self {
        WordList::List(words)
    }
}

impl From<Vec<&str>> for WordList {
    fn from(words: Vec<&str>) -> Self {
        WordList::List(words.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for WordList {
    fn from(words: &[&str]) -> Self {
        WordList::List(words.iter().map(|w| w.to_string()).collect())
    }
}

#[derive(Debug, Clone)]
enum ShortcutSource {
    /// Caller supplied replacements, used as-is
    Verbatim(ShortcutMap),
    /// Plain phrases, converted like the built-in defaults
    Phrases(WordList),
}

/// Builder collecting explicit configuration before it is frozen
#[derive(Debug, Clone)]
pub struct LineBreaksConfigBuilder {
    default_lang: String,
    marker: String,
    use_defaults: bool,
    weak_words: Vec<(Option<String>, WordList)>,
    shortcuts: Vec<(Option<String>, ShortcutSource)>,
    units: Option<WordList>,
}

impl Default for LineBreaksConfigBuilder {
    fn default() -> Self {
        Self {
            default_lang: DEFAULT_LANG.to_string(),
            marker: DEFAULT_MARKER.to_string(),
            use_defaults: true,
            weak_words: Vec::new(),
            shortcuts: Vec::new(),
            units: None,
        }
    }
}

impl LineBreaksConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Language used by `transform` when the caller passes none
    pub fn default_lang(mut self, lang: impl Into<String>) -> Self {
        self.default_lang = lang.into();
        self
    }

    /// Text inserted in place of a breakable space
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Skip the built-in tables; only explicit configuration is used
    pub fn without_defaults(mut self) -> Self {
        self.use_defaults = false;
        self
    }

    /// Weak words for `lang` (the default language when `None`).
    /// A later call for the same language replaces the earlier one.
    pub fn weak_words(mut self, words: impl Into<WordList>, lang: Option<&str>) -> Self {
        self.weak_words.push((lang.map(str::to_string), words.into()));
        self
    }

    /// Shortcut replacements for `lang`, used verbatim.
    /// Replacements are expected to already contain the desired markers.
    pub fn shortcuts(mut self, shortcuts: impl Into<ShortcutMap>, lang: Option<&str>) -> Self {
        self.shortcuts.push((
            lang.map(str::to_string),
            ShortcutSource::Verbatim(shortcuts.into()),
        ));
        self
    }

    /// Shortcut phrases for `lang` whose spaces become markers, like the built-in ones
    pub fn shortcut_phrases(mut self, phrases: impl Into<WordList>, lang: Option<&str>) -> Self {
        self.shortcuts.push((
            lang.map(str::to_string),
            ShortcutSource::Phrases(phrases.into()),
        ));
        self
    }

    /// Global unit list, replacing the built-in units entirely
    pub fn units(mut self, units: impl Into<WordList>) -> Self {
        self.units = Some(units.into());
        self
    }

    /// Validate and freeze the configuration
    pub fn build(self) -> Result<LineBreaksConfig> {
        if self.default_lang.is_empty() {
            bail!("Default language must not be empty");
        }
        validate_marker(&self.marker)?;

        let config = self.assemble();
        info!(
            default_lang = %config.default_lang,
            languages = config.languages().len(),
            units = config.units.len(),
            "Line breaks configuration built"
        );
        Ok(config)
    }

    /// Resolve defaults and explicit settings without validation
    fn assemble(self) -> LineBreaksConfig {
        let Self {
            default_lang,
            marker,
            use_defaults,
            weak_words: explicit_weak_words,
            shortcuts: explicit_shortcuts,
            units,
        } = self;

        let mut weak_words: HashMap<String, Vec<String>> = HashMap::new();
        let mut shortcuts: HashMap<String, ShortcutMap> = HashMap::new();

        if use_defaults {
            for (lang, words) in defaults::WEAK_WORD_LANGUAGES {
                weak_words.insert(lang.to_string(), WordList::from(*words).into_words());
            }
            for (lang, phrases) in defaults::SHORTCUT_LANGUAGES {
                shortcuts.insert(lang.to_string(), ShortcutMap::from_phrases(*phrases, &marker));
            }
        }

        for (lang, words) in explicit_weak_words {
            let lang = lang.unwrap_or_else(|| default_lang.clone());
            weak_words.insert(lang, words.into_words());
        }

        for (lang, source) in explicit_shortcuts {
            let lang = lang.unwrap_or_else(|| default_lang.clone());
            let map = match source {
                ShortcutSource::Verbatim(map) => map,
                ShortcutSource::Phrases(phrases) => {
                    ShortcutMap::from_phrases(phrases.into_words(), &marker)
                }
            };
            shortcuts.insert(lang, map);
        }

        let units = match units {
            Some(units) => units.into_words(),
            None if use_defaults => WordList::from(defaults::UNITS).into_words(),
            None => Vec::new(),
        };

        LineBreaksConfig {
            default_lang,
            marker,
            weak_words,
            units,
            shortcuts,
        }
    }
}

fn validate_marker(marker: &str) -> Result<()> {
    if marker.is_empty() {
        bail!("Non-breaking marker must not be empty");
    }
    if marker.contains([' ', '\t']) {
        bail!("Non-breaking marker {marker:?} must not contain spaces or tabs");
    }
    Ok(())
}

/// Frozen word lists per language, the unit list and the marker
#[derive(Debug, Clone)]
pub struct LineBreaksConfig {
    default_lang: String,
    marker: String,
    weak_words: HashMap<String, Vec<String>>,
    units: Vec<String>,
    shortcuts: HashMap<String, ShortcutMap>,
}

impl LineBreaksConfig {
    pub fn builder() -> LineBreaksConfigBuilder {
        LineBreaksConfigBuilder::new()
    }

    pub fn default_lang(&self) -> &str {
        &self.default_lang
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Weak words for `lang`; empty when the language is unknown
    pub fn resolve_weak_words(&self, lang: &str) -> &[String] {
        self.weak_words.get(lang).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Global unit list
    pub fn resolve_units(&self) -> &[String] {
        &self.units
    }

    /// Shortcuts for `lang`; empty when the language is unknown
    pub fn resolve_shortcuts(&self, lang: &str) -> &ShortcutMap {
        self.shortcuts.get(lang).unwrap_or(&EMPTY_SHORTCUTS)
    }

    /// Every language with weak words or shortcuts configured, sorted
    pub fn languages(&self) -> Vec<&str> {
        let langs: BTreeSet<&str> = self
            .weak_words
            .keys()
            .chain(self.shortcuts.keys())
            .map(String::as_str)
            .collect();
        langs.into_iter().collect()
    }
}

impl Default for LineBreaksConfig {
    fn default() -> Self {
        LineBreaksConfigBuilder::default().assemble()
    }
}

/// On-disk TOML form of the configuration.
///
/// Shortcut tables keep the order their entries appear in the file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub default_lang: Option<String>,
    pub marker: Option<String>,
    pub use_defaults: Option<bool>,
    pub units: Option<WordList>,
    #[serde(default)]
    pub weak_words: BTreeMap<String, WordList>,
    #[serde(default)]
    pub shortcuts: BTreeMap<String, ShortcutMap>,
    #[serde(default)]
    pub shortcut_phrases: BTreeMap<String, WordList>,
}

impl ConfigFile {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse line breaks configuration")
    }

    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Load configuration from a TOML file (async version)
    pub async fn load_async<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Apply the file on top of a fresh builder
    pub fn into_builder(self) -> LineBreaksConfigBuilder {
        let mut builder = LineBreaksConfigBuilder::new();
        if let Some(lang) = self.default_lang {
            builder = builder.default_lang(lang);
        }
        if let Some(marker) = self.marker {
            builder = builder.marker(marker);
        }
        if self.use_defaults == Some(false) {
            builder = builder.without_defaults();
        }
        if let Some(units) = self.units {
            builder = builder.units(units);
        }
        for (lang, words) in self.weak_words {
            builder = builder.weak_words(words, Some(&lang));
        }
        for (lang, phrases) in self.shortcut_phrases {
            builder = builder.shortcut_phrases(phrases, Some(&lang));
        }
        // Verbatim tables win over phrase lists for the same language
        for (lang, table) in self.shortcuts {
            builder = builder.shortcuts(table, Some(&lang));
        }
        builder
    }
}
