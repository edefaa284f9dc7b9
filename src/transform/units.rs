// WHY: Unit and digit-group passes are plain character scans
// Unit tokens like "°C" or "m²" are compared literally, never spliced into a pattern

/// Replace each ordinary space for which `binds(previous_char, rest_after_space)`
/// holds. Returns the number of spaces replaced.
fn bind_spaces<F>(text: &mut String, marker: &str, mut binds: F) -> usize
where
    F: FnMut(char, &str) -> bool,
{
    let mut result = String::with_capacity(text.len());
    let mut previous: Option<char> = None;
    let mut bound = 0;

    for (index, ch) in text.char_indices() {
        let bind_here = ch == ' '
            && previous.is_some_and(|prev| binds(prev, &text[index + ch.len_utf8()..]));
        if bind_here {
            result.push_str(marker);
            bound += 1;
        } else {
            result.push(ch);
        }
        previous = Some(ch);
    }

    if bound > 0 {
        *text = result;
    }
    bound
}

/// Bind every "digit, space, unit" triple. The unit is matched as a literal
/// prefix of the text after the space. Returns the number of spaces replaced.
pub fn bind_units(text: &mut String, units: &[String], marker: &str) -> usize {
    if units.is_empty() {
        return 0;
    }
    bind_spaces(text, marker, |prev, rest| {
        prev.is_ascii_digit()
            && units
                .iter()
                .any(|unit| !unit.is_empty() && rest.starts_with(unit.as_str()))
    })
}

/// Bind every space that sits between two digits ("9 999 999").
///
/// Matches overlap on the shared digit: "1 2 3" becomes "1&nbsp;2&nbsp;3"
/// in one pass, where a consuming "digit space digit" replacement would
/// leave "1&nbsp;2 3" and bind the second space only on a rerun. Binding
/// both keeps `transform` idempotent. Returns the number of spaces replaced.
pub fn bind_digit_groups(text: &mut String, marker: &str) -> usize {
    bind_spaces(text, marker, |prev, rest| {
        prev.is_ascii_digit() && rest.starts_with(|c: char| c.is_ascii_digit())
    })
}
