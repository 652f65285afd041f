//! # Naming
//!
//! Turns Go identifiers into readable labels for fields without docs.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Lower,
    Upper,
    Digit,
    Other,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_lowercase() {
            CharClass::Lower
        } else if c.is_uppercase() {
            CharClass::Upper
        } else if c.is_numeric() {
            CharClass::Digit
        } else {
            CharClass::Other
        }
    }
}

/// Splits a camel-case identifier into words.
///
/// Consecutive characters of the same class (lower, upper, digit, other)
/// form a run. An upper-case run directly followed by a lower-case run hands
/// its last letter over, so acronyms stay whole: `HTTPServer` becomes
/// `["HTTP", "Server"]`.
pub fn split_camel_case(ident: &str) -> Vec<String> {
    let mut runs: Vec<Vec<char>> = Vec::new();
    let mut last_class = None;

    for c in ident.chars() {
        let class = CharClass::of(c);
        match runs.last_mut() {
            Some(run) if last_class == Some(class) => run.push(c),
            _ => runs.push(vec![c]),
        }
        last_class = Some(class);
    }

    for i in 1..runs.len() {
        let (head, tail) = runs.split_at_mut(i);
        let (prev, next) = (&mut head[i - 1], &mut tail[0]);
        let prev_upper = prev.first().is_some_and(|c| c.is_uppercase());
        let next_lower = next.first().is_some_and(|c| c.is_lowercase());
        if prev_upper && next_lower {
            if let Some(moved) = prev.pop() {
                next.insert(0, moved);
            }
        }
    }

    runs.into_iter()
        .filter(|run| !run.is_empty())
        .map(|run| run.into_iter().collect::<String>())
        .collect()
}

/// The fallback doc string: identifier words joined by single spaces.
pub fn humanize(ident: &str) -> String {
    split_camel_case(ident).join(" ")
}
