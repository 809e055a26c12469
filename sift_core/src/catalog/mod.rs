//! Field catalog: declares which fields can be filtered and how
//!
//! The builder only needs a read-only lookup (`resolve`) plus a dialect
//! flag; everything else here is configuration surface for the consuming
//! application's query UI.

mod defaults;

pub use defaults::{boolean_valid_values, operators_for};

use serde::{Deserialize, Serialize};

use crate::filter::SearchOperator;

/// Native data types a filter field can carry.
///
/// The "simplified" integer variants permit only equality operators; the
/// full variants add the ordering operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DataType {
    #[default]
    String,
    Integer32,
    SimplifiedInteger32,
    Integer64,
    SimplifiedInteger64,
    Boolean,
    Timestamp,
    Xml,
}

/// Configuration for one filterable field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Unique field identifier; dot-separated for navigation paths
    pub field_id: String,
    /// User interface display name
    pub display_name: String,
    pub data_type: DataType,
    /// When set, the clause value is read as a boolean and the field is
    /// tested for being set or unset, ignoring the requested operator
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub existence_comparison: bool,
    /// Permitted operators in display order; the first entry is the default
    pub operators: Vec<(SearchOperator, String)>,
    /// Closed set of (value, label) pairs; non-empty on a String field
    /// marks the field as an enumeration
    #[serde(default)]
    pub valid_values: Vec<(String, String)>,
}

impl FieldDescriptor {
    /// Create a descriptor with the default operator set for its data type.
    pub fn new(
        field_id: impl Into<String>,
        display_name: impl Into<String>,
        data_type: DataType,
    ) -> Self {
        Self {
            field_id: field_id.into(),
            display_name: display_name.into(),
            data_type,
            existence_comparison: false,
            operators: operators_for(data_type),
            valid_values: Vec::new(),
        }
    }

    /// Mark this field as an existence comparison.
    pub fn with_existence_comparison(mut self) -> Self {
        self.existence_comparison = true;
        self
    }

    /// Restrict the field to a closed set of symbolic values.
    pub fn with_valid_values(mut self, values: Vec<(String, String)>) -> Self {
        self.valid_values = values;
        self
    }

    /// Override the permitted operator list.
    pub fn with_operators(mut self, operators: Vec<(SearchOperator, String)>) -> Self {
        self.operators = operators;
        self
    }

    /// The default operator a query UI should preselect.
    pub fn default_operator(&self) -> SearchOperator {
        self.operators
            .first()
            .map(|(op, _)| *op)
            .unwrap_or_default()
    }

    /// Whether the descriptor declares a closed enumeration.
    pub fn is_enumeration(&self) -> bool {
        self.data_type == DataType::String && !self.valid_values.is_empty()
    }
}

/// Read-only lookup the predicate builder consumes.
pub trait FieldCatalog {
    /// Resolve a field identifier to its descriptor.
    fn resolve(&self, field_id: &str) -> Option<&FieldDescriptor>;

    /// Whether the consuming backend expects wildcard-pattern text operators
    /// instead of native substring/prefix/suffix operators.
    fn wildcard_dialect(&self) -> bool {
        false
    }
}

/// A straightforward catalog over a descriptor list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchCatalog {
    pub fields: Vec<FieldDescriptor>,
    #[serde(default)]
    pub wildcard_dialect: bool,
}

impl SearchCatalog {
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        Self {
            fields,
            wildcard_dialect: false,
        }
    }

    /// Enable the wildcard-pattern dialect for the target backend.
    pub fn with_wildcard_dialect(mut self) -> Self {
        self.wildcard_dialect = true;
        self
    }
}

impl FieldCatalog for SearchCatalog {
    fn resolve(&self, field_id: &str) -> Option<&FieldDescriptor> {
        self.fields
            .iter()
            .find(|f| f.field_id.eq_ignore_ascii_case(field_id))
    }

    fn wildcard_dialect(&self) -> bool {
        self.wildcard_dialect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_is_case_insensitive() {
        let catalog = SearchCatalog::new(vec![FieldDescriptor::new(
            "managerId",
            "Manager",
            DataType::String,
        )]);

        assert!(catalog.resolve("managerid").is_some());
        assert!(catalog.resolve("MANAGERID").is_some());
        assert!(catalog.resolve("manager_id").is_none());
    }

    #[test]
    fn test_default_operator_is_first_entry() {
        let descriptor = FieldDescriptor::new("age", "Age", DataType::Integer32);
        assert_eq!(descriptor.default_operator(), SearchOperator::Equals);
    }

    #[test]
    fn test_enumeration_requires_string_type() {
        let values = vec![("open".to_string(), "Open".to_string())];
        let string_field = FieldDescriptor::new("status", "Status", DataType::String)
            .with_valid_values(values.clone());
        assert!(string_field.is_enumeration());

        // Boolean fields carry default valid values but are not enumerations
        let bool_field = FieldDescriptor::new("active", "Active", DataType::Boolean)
            .with_valid_values(boolean_valid_values());
        assert!(!bool_field.is_enumeration());
    }

    #[test]
    fn test_descriptor_roundtrip() {
        let descriptor = FieldDescriptor::new("hired_at", "Hired", DataType::Timestamp);
        let json = serde_json::to_string(&descriptor).unwrap();
        let back: FieldDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(descriptor, back);
    }
}
