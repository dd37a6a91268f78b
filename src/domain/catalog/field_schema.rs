// Centralized field table for normalized video records.
//
// Every output field and its fallback lives here; the normalizer reads nothing else.
// Order matters: it is the serialization order of `VideoRecord`.

/// A scalar output field and the value used when its column is absent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDefault {
    pub name: &'static str,
    pub default: &'static str,
}

const fn field(name: &'static str, default: &'static str) -> FieldDefault {
    FieldDefault { name, default }
}

pub const SCALAR_FIELDS: [FieldDefault; 10] = [
    field("id", ""),
    field("title", ""),
    field("description", ""),
    field("url", ""),
    field("thumbnail", ""),
    field("duration", ""),
    field("published_at", ""),
    field("channel_title", ""),
    // Counts stay strings; no numeric coercion.
    field("view_count", "0"),
    field("like_count", "0"),
];

/// List-valued field, split from a single delimited column
pub const TAGS_FIELD: &str = "tags";

pub const TAG_SEPARATOR: char = ',';

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_field_names_are_unique() {
        let names: HashSet<&str> = SCALAR_FIELDS.iter().map(|f| f.name).collect();
        assert_eq!(names.len(), SCALAR_FIELDS.len());
        assert!(!names.contains(TAGS_FIELD));
    }

    #[test]
    fn test_only_counts_default_to_zero() {
        let zero: Vec<&str> = SCALAR_FIELDS
            .iter()
            .filter(|f| f.default == "0")
            .map(|f| f.name)
            .collect();
        assert_eq!(zero, vec!["view_count", "like_count"]);
    }
}
