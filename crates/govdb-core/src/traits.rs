// crates/govdb-core/src/traits.rs
use crate::path::FieldValue;
use crate::text::fold_key;

/// A record whose named fields can be walked one segment at a time.
///
/// Dotted field paths (`policy.enforcement.active`) are resolved by asking
/// each level for the next segment, so an implementor only describes its own
/// direct fields. Nested records hand back a `Field::Record`, terminal values
/// a `Field::Value`.
///
/// Field names are the JSON (camelCase) names of the record.
pub trait Record {
    /// Looks up a direct field by name. `None` if the record has no such field.
    fn field(&self, name: &str) -> Option<Field<'_>>;
}

impl<T: Record + ?Sized> Record for &T {
    fn field(&self, name: &str) -> Option<Field<'_>> {
        (**self).field(name)
    }
}

/// One step of path resolution.
#[derive(Clone, Copy)]
pub enum Field<'a> {
    Value(FieldValue<'a>),
    Record(&'a dyn Record),
}

impl std::fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Field::Record(_) => f.write_str("Record(..)"),
        }
    }
}

/// Records searchable by their display name.
///
/// Matching is a substring test on the [`fold_key`] form of both sides, so
/// `"cote"` finds `Côte d'Ivoire` and `"KING"` finds `United Kingdom`.
/// Whitespace in the query is significant.
///
/// ```rust
/// use govdb_core::traits::NameMatch;
///
/// struct Jurisdiction(&'static str);
/// impl NameMatch for Jurisdiction {
///     fn name_str(&self) -> &str {
///         self.0
///     }
/// }
///
/// assert!(Jurisdiction("Türkiye").name_contains("TURK"));
/// assert!(Jurisdiction("South Korea").name_contains(" "));
/// assert!(!Jurisdiction("Japan").name_contains(" "));
/// ```
pub trait NameMatch {
    fn name_str(&self) -> &str;

    /// `true` if the folded name contains the folded `q`. Empty `q` matches.
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}
