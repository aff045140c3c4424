// crates/govdb-core/src/text.rs
use std::cmp::Ordering;

/// Convert a string into a folded key suitable for matching and collation.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Türkiye` -> `Turkiye`)
/// 2\) Normalize to lowercase
///
/// The implementation uses the `deunicode` crate to perform a best-effort
/// transliteration from Unicode to ASCII.
///
/// # Examples
///
/// ```rust
/// use govdb_core::text::fold_key;
///
/// assert_eq!(fold_key("Côte d'Ivoire"), "cote d'ivoire");
/// assert_eq!(fold_key("Straße"), "strasse");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// `true` if the folded `haystack` contains the folded `needle`.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    fold_key(haystack).contains(&fold_key(needle))
}

/// Locale-style collation of two strings.
///
/// Strings are ordered by their folded form first, so case and diacritics
/// only matter when the folded forms are equal. The raw strings break those
/// ties, which keeps the result a total order.
///
/// ```rust
/// use std::cmp::Ordering;
/// use govdb_core::text::collate;
///
/// assert_eq!(collate("apple", "Banana"), Ordering::Less);
/// assert_eq!(collate("Émirats", "Espagne"), Ordering::Less);
/// ```
pub fn collate(a: &str, b: &str) -> Ordering {
    fold_key(a).cmp(&fold_key(b)).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collation_ignores_case_before_raw_order() {
        // Raw byte order would put every uppercase letter first.
        assert_eq!(collate("b", "C"), Ordering::Less);
        assert_eq!(collate("B", "c"), Ordering::Less);
    }

    #[test]
    fn collation_tie_breaks_on_raw_text() {
        assert_eq!(collate("Europe", "europe"), Ordering::Less);
        assert_eq!(collate("Asia", "Asia"), Ordering::Equal);
    }

    #[test]
    fn contains_folded_matches_transliterated_text() {
        assert!(contains_folded("Türkiye", "turk"));
        assert!(contains_folded("United Kingdom", "KING"));
        assert!(!contains_folded("Japan", "korea"));
    }
}
