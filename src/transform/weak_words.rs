// WHY: Literal substring scan instead of a pattern so weak words never need escaping
// and exactly one occurrence is consumed per match

use tracing::trace;

/// Bind every standalone occurrence of `word` to the following word.
///
/// The text is padded with one boundary space at each end so words at the
/// edges can match. Each match of `" word "` has its trailing space replaced
/// by `marker`, and the scan resumes right after that space in the unmodified
/// source. The padding is stripped again before returning; the trailing pad
/// itself is never replaced because there is nothing after it to bind to.
///
/// The result is assembled in a fresh buffer, so the pass stays linear in
/// the text length however many matches it makes. All offsets come from
/// `str::find` and `str::len` and therefore land on character boundaries
/// regardless of multi-byte content.
///
/// Returns the number of markers inserted.
pub fn process_weak_word(text: &mut String, word: &str, marker: &str) -> usize {
    if word.is_empty() || text.is_empty() {
        return 0;
    }

    let mut padded = String::with_capacity(text.len() + 2);
    padded.push(' ');
    padded.push_str(text);
    padded.push(' ');

    let needle = format!(" {word} ");
    let mut result = String::new();
    let mut copied = 0;
    let mut inserted = 0;

    while let Some(offset) = padded[copied..].find(&needle) {
        let space_after = copied + offset + 1 + word.len();
        if space_after == padded.len() - 1 {
            break;
        }
        if inserted == 0 {
            result.reserve(padded.len() + marker.len());
        }
        result.push_str(&padded[copied..space_after]);
        result.push_str(marker);
        // The consumed space cannot open the next match, same as when the
        // marker sits in its place
        copied = space_after + 1;
        inserted += 1;
        trace!(word, position = space_after - 1, "Bound weak word");
    }

    if inserted > 0 {
        result.push_str(&padded[copied..padded.len() - 1]);
        text.clear();
        text.push_str(&result[1..]);
    }
    inserted
}

/// Upper-case only the first character of `word`
pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Run the boundary scan for each word as written and with its first letter
/// capitalized (sentence start). Returns the total number of markers inserted.
pub fn apply_weak_words(text: &mut String, words: &[String], marker: &str) -> usize {
    let mut inserted = 0;
    for word in words {
        inserted += process_weak_word(text, word, marker);
        let capitalized = capitalize_first(word);
        if capitalized != *word {
            inserted += process_weak_word(text, &capitalized, marker);
        }
    }
    inserted
}
