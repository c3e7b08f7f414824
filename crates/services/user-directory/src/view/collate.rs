//! Locale-aware text ordering for display sorting.

use std::cmp::Ordering;

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Compare two display strings the way a default locale collator does for
/// the directory's data.
///
/// Levels, each consulted only on a tie of the previous one:
/// 1. base letters, ignoring accents and case (`Émile` < `Frank`)
/// 2. accents, unaccented first (`Eve` < `Ève`)
/// 3. case, lowercase first (`ann` < `Ann`)
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| folded(a).cmp(folded(b)))
        .then_with(|| case_order(a, b))
}

/// Lowercased characters with combining marks removed
fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

/// Lowercased, decomposed characters, accents kept
fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn case_order(a: &str, b: &str) -> Ordering {
    a.nfd()
        .zip(b.nfd())
        .find(|(x, y)| x != y)
        .map(|(x, y)| match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => x.cmp(&y),
        })
        .unwrap_or(Ordering::Equal)
}
