// WHY: Shortcut collapsing keeps multi-token abbreviations like "s. r. o." on one line
// Plain literal replacement, no word boundaries, applied in insertion order

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use std::fmt;

/// Ordered mapping from a literal phrase to its non-breaking replacement
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortcutMap {
    entries: Vec<(String, String)>,
}

impl ShortcutMap {
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Build a map from plain phrases, replacing every ordinary space with `marker`
    pub fn from_phrases<I, S>(phrases: I, marker: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = Self::new();
        for phrase in phrases {
            let phrase = phrase.as_ref();
            map.insert(phrase, phrase.replace(' ', marker));
        }
        map
    }

    /// Insert or replace the target for `phrase`, keeping its position
    pub fn insert(&mut self, phrase: impl Into<String>, replacement: impl Into<String>) {
        let phrase = phrase.into();
        let replacement = replacement.into();
        match self.entries.iter_mut().find(|(p, _)| *p == phrase) {
            Some(entry) => entry.1 = replacement,
            None => self.entries.push((phrase, replacement)),
        }
    }

    pub fn get(&self, phrase: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| p == phrase)
            .map(|(_, r)| r.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, r)| (p.as_str(), r.as_str()))
    }
}

impl<P, R> FromIterator<(P, R)> for ShortcutMap
where
    P: Into<String>,
    R: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (P, R)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (phrase, replacement) in iter {
            map.insert(phrase, replacement);
        }
        map
    }
}

/// Deserializes from a `phrase = replacement` table, keeping document order
impl<'de> Deserialize<'de> for ShortcutMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ShortcutMapVisitor;

        impl<'de> Visitor<'de> for ShortcutMapVisitor {
            type Value = ShortcutMap;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a table of phrase = replacement strings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = ShortcutMap::new();
                while let Some((phrase, replacement)) = access.next_entry::<String, String>()? {
                    map.insert(phrase, replacement);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(ShortcutMapVisitor)
    }
}

/// Replace every literal occurrence of each phrase with its replacement.
/// Returns the number of phrase occurrences replaced.
pub fn collapse_shortcuts(text: &mut String, shortcuts: &ShortcutMap) -> usize {
    let mut replaced = 0;
    for (phrase, replacement) in shortcuts.iter() {
        // Empty phrases would match between every character
        if phrase.is_empty() || phrase == replacement {
            continue;
        }
        let hits = text.matches(phrase).count();
        if hits > 0 {
            *text = text.replace(phrase, replacement);
            replaced += hits;
        }
    }
    replaced
}
