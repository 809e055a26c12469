//! Default operator sets per data type
//!
//! Entries are in the order a query UI should display them; the first entry
//! is the default operator for the type.

use super::DataType;
use crate::filter::SearchOperator;

fn labeled(operators: &[SearchOperator]) -> Vec<(SearchOperator, String)> {
    operators
        .iter()
        .map(|op| (*op, op.symbol().to_string()))
        .collect()
}

/// Operators for string-valued fields.
pub fn string_operators() -> Vec<(SearchOperator, String)> {
    labeled(&[
        SearchOperator::Equals,
        SearchOperator::NotEquals,
        SearchOperator::Contains,
        SearchOperator::DoesNotContain,
        SearchOperator::StartsWith,
        SearchOperator::DoesNotStartWith,
        SearchOperator::EndsWith,
        SearchOperator::DoesNotEndWith,
    ])
}

/// Operators for full integer fields (equality plus ordering).
pub fn integer_operators() -> Vec<(SearchOperator, String)> {
    labeled(&[
        SearchOperator::Equals,
        SearchOperator::NotEquals,
        SearchOperator::GreaterThan,
        SearchOperator::GreaterThanOrEqual,
        SearchOperator::LessThan,
        SearchOperator::LessThanOrEqual,
    ])
}

/// Operators for simplified integer fields (equality only).
pub fn simplified_integer_operators() -> Vec<(SearchOperator, String)> {
    labeled(&[SearchOperator::Equals, SearchOperator::NotEquals])
}

/// Operators for boolean fields.
pub fn boolean_operators() -> Vec<(SearchOperator, String)> {
    labeled(&[SearchOperator::Equals, SearchOperator::NotEquals])
}

/// Operators for timestamp fields.
pub fn timestamp_operators() -> Vec<(SearchOperator, String)> {
    labeled(&[
        SearchOperator::Equals,
        SearchOperator::NotEquals,
        SearchOperator::GreaterThan,
        SearchOperator::GreaterThanOrEqual,
        SearchOperator::LessThan,
        SearchOperator::LessThanOrEqual,
    ])
}

/// Operator set for a data type. Unknown or text-like types fall back to
/// the string set.
pub fn operators_for(data_type: DataType) -> Vec<(SearchOperator, String)> {
    match data_type {
        DataType::Integer32 | DataType::Integer64 => integer_operators(),
        DataType::SimplifiedInteger32 | DataType::SimplifiedInteger64 => {
            simplified_integer_operators()
        }
        DataType::Boolean => boolean_operators(),
        DataType::Timestamp => timestamp_operators(),
        DataType::String | DataType::Xml => string_operators(),
    }
}

/// Default (value, label) pairs for boolean fields.
pub fn boolean_valid_values() -> Vec<(String, String)> {
    vec![
        ("true".to_string(), "Yes".to_string()),
        ("false".to_string(), "No".to_string()),
    ]
}
