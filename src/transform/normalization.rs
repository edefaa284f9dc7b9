// WHY: Whitespace normalization must run before any word matching
// Tabs become one space, then runs of spaces collapse, so " w " searches see single spaces

use anyhow::Result;
use regex_automata::meta::Regex;

/// Compiled patterns for the tab and space collapse passes
#[derive(Debug, Clone)]
pub struct WhitespaceNormalizer {
    tabs: Regex,
    spaces: Regex,
}

impl WhitespaceNormalizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            tabs: Regex::new(r"\t+")?,
            spaces: Regex::new(r" {2,}")?,
        })
    }

    /// Collapse tab runs into one space, then space runs into one space.
    /// Newlines and other whitespace are left untouched.
    pub fn normalize(&self, text: &str) -> String {
        let detabbed = replace_all(&self.tabs, text, " ");
        replace_all(&self.spaces, &detabbed, " ")
    }
}

fn replace_all(regex: &Regex, text: &str, replacement: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut last_end = 0;
    for found in regex.find_iter(text) {
        result.push_str(&text[last_end..found.start()]);
        result.push_str(replacement);
        last_end = found.end();
    }
    result.push_str(&text[last_end..]);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(text: &str) -> String {
        WhitespaceNormalizer::new().unwrap().normalize(text)
    }

    #[test]
    fn test_tabs_collapse_to_single_space() {
        assert_eq!(normalize("a\tb"), "a b");
        assert_eq!(normalize("Multiple\t\t\tconsecutive\ttabs."), "Multiple consecutive tabs.");
    }

    #[test]
    fn test_spaces_collapse() {
        assert_eq!(normalize("a  b     c"), "a b c");
        assert_eq!(normalize("  leading and trailing  "), " leading and trailing ");
    }

    #[test]
    fn test_mixed_tabs_and_spaces() {
        // Tab collapse runs first, so " \t " ends up as three spaces, then one
        assert_eq!(normalize("a \t b"), "a b");
    }

    #[test]
    fn test_newlines_preserved() {
        assert_eq!(normalize("line one\n  line two\r\n"), "line one\n line two\r\n");
    }

    #[test]
    fn test_unicode_untouched() {
        assert_eq!(normalize("Příliš\t\tžluťoučký  kůň"), "Příliš žluťoučký kůň");
        assert_eq!(normalize(""), "");
    }
}
