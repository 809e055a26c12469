//! Error types for predicate construction

use std::fmt;

use crate::catalog::DataType;

/// Errors that can occur while building a condition from filter clauses.
///
/// Every variant is fatal to the whole build: a partially built predicate
/// tree would be unsafe to combine or evaluate, so the first failing clause
/// fails the entire request.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildError {
    /// The first path segment of a filter id does not resolve to a field
    /// on the record type
    FieldNotResolved { field_id: String },
    /// The field catalog has no descriptor for the filter id
    FieldNotConfigured { field_id: String },
    /// The literal value could not be coerced to the field's native type
    ValueConversionFailed {
        field_id: String,
        value: String,
        expected: DataType,
    },
    /// An internal operator reached a branch with no construction rule
    UnsupportedOperator { operator: String, context: String },
    /// The clause list was empty and no seed condition was supplied
    EmptyFilter,
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::FieldNotResolved { field_id } => {
                write!(f, "Field '{}' does not exist on the record type", field_id)
            }
            BuildError::FieldNotConfigured { field_id } => {
                write!(f, "No filter field configured with the id '{}'", field_id)
            }
            BuildError::ValueConversionFailed {
                field_id,
                value,
                expected,
            } => {
                write!(
                    f,
                    "Value '{}' for field '{}' cannot be converted to {:?}",
                    value, field_id, expected
                )
            }
            BuildError::UnsupportedOperator { operator, context } => {
                write!(f, "Operator '{}' is not supported for {}", operator, context)
            }
            BuildError::EmptyFilter => {
                write!(f, "At least one filter clause is required")
            }
        }
    }
}

impl std::error::Error for BuildError {}
