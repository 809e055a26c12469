//! Record access seam: runtime field values and static field shapes
//!
//! The builder compiles predicates against any type implementing [`Record`].
//! `shape` answers the static question "does this field exist, and what kind
//! of storage is it?" while `field` is the evaluator's runtime access path.

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset};

/// A runtime field value read from a record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    Integer(i32),
    Long(i64),
    Boolean(bool),
    Timestamp(DateTime<FixedOffset>),
    /// A value drawn from a closed set of symbolic names
    Enum(String),
    /// A nested record reached through a navigation path segment
    Record(HashMap<String, FieldValue>),
    /// A sequence of related elements (usually nested records)
    Collection(Vec<FieldValue>),
}

impl FieldValue {
    /// Returns the type name of this value for error messages and logs
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::String(_) => "String",
            FieldValue::Integer(_) => "Integer",
            FieldValue::Long(_) => "Long",
            FieldValue::Boolean(_) => "Boolean",
            FieldValue::Timestamp(_) => "Timestamp",
            FieldValue::Enum(_) => "Enum",
            FieldValue::Record(_) => "Record",
            FieldValue::Collection(_) => "Collection",
        }
    }
}

/// Static shape of a field on a record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    /// Always present, single value
    Scalar,
    /// May be unset; comparisons against an unset value are false
    Nullable,
    /// Sequence of related elements, filtered with an existence quantifier
    Collection,
}

/// A record type that predicates can be compiled against.
///
/// `shape` is consulted once per clause at build time; a configured field
/// whose name the record type does not carry fails the build rather than
/// the evaluation.
pub trait Record {
    /// Resolve a top-level field name to its shape, or `None` if the record
    /// type has no such field.
    fn shape(field: &str) -> Option<FieldShape>
    where
        Self: Sized;

    /// Read a field value. `None` models null/unset.
    fn field(&self, name: &str) -> Option<FieldValue>;
}

/// Walk a dot-separated navigation path starting from a record.
///
/// The first segment reads from the record itself; later segments descend
/// through nested [`FieldValue::Record`] values. A missing segment anywhere
/// along the path yields `None`, never an error.
pub fn resolve_path<T: Record>(record: &T, path: &[String]) -> Option<FieldValue> {
    let mut current = record.field(path.first()?)?;

    for segment in &path[1..] {
        match current {
            FieldValue::Record(fields) => {
                current = fields.get(segment.as_str())?.clone();
            }
            _ => return None,
        }
    }

    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Order {
        customer: Option<HashMap<String, FieldValue>>,
    }

    impl Record for Order {
        fn shape(field: &str) -> Option<FieldShape> {
            match field {
                "customer" => Some(FieldShape::Nullable),
                "total" => Some(FieldShape::Scalar),
                _ => None,
            }
        }

        fn field(&self, name: &str) -> Option<FieldValue> {
            match name {
                "customer" => self.customer.clone().map(FieldValue::Record),
                "total" => Some(FieldValue::Integer(100)),
                _ => None,
            }
        }
    }

    fn path(segments: &[&str]) -> Vec<String> {
        segments.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_resolve_single_segment() {
        let order = Order { customer: None };
        assert_eq!(
            resolve_path(&order, &path(&["total"])),
            Some(FieldValue::Integer(100))
        );
    }

    #[test]
    fn test_resolve_nested_segment() {
        let mut customer = HashMap::new();
        customer.insert("name".to_string(), FieldValue::String("Ann".to_string()));
        let order = Order {
            customer: Some(customer),
        };

        assert_eq!(
            resolve_path(&order, &path(&["customer", "name"])),
            Some(FieldValue::String("Ann".to_string()))
        );
    }

    #[test]
    fn test_resolve_null_base_returns_none() {
        let order = Order { customer: None };
        assert_eq!(resolve_path(&order, &path(&["customer", "name"])), None);
    }

    #[test]
    fn test_resolve_missing_nested_segment_returns_none() {
        let order = Order {
            customer: Some(HashMap::new()),
        };
        assert_eq!(resolve_path(&order, &path(&["customer", "name"])), None);
    }

    #[test]
    fn test_resolve_through_scalar_returns_none() {
        let order = Order { customer: None };
        // "total" is an integer; descending further is not an error
        assert_eq!(resolve_path(&order, &path(&["total", "cents"])), None);
    }
}
