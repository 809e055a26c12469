//! Caller-facing filter request model
//!
//! A [`FilterClause`] is one data-driven condition sent from a query
//! interface: which field, which operator, a raw literal value, how the
//! clause combines with its previous sibling, and an optional nested group.

use serde::{Deserialize, Serialize};

use crate::condition::CombineOperator;

/// Logic operator joining a clause with the running result at its level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogicOperator {
    #[default]
    And,
    Or,
}

/// Abstract comparison operators exposed to filter callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SearchOperator {
    #[default]
    Equals,
    NotEquals,
    GreaterThan,
    LessThan,
    GreaterThanOrEqual,
    LessThanOrEqual,
    Contains,
    DoesNotContain,
    StartsWith,
    DoesNotStartWith,
    EndsWith,
    DoesNotEndWith,
}

impl SearchOperator {
    /// Display symbol for query interfaces.
    pub fn symbol(&self) -> &'static str {
        match self {
            SearchOperator::Equals => "=",
            SearchOperator::NotEquals => "<>",
            SearchOperator::GreaterThan => ">",
            SearchOperator::LessThan => "<",
            SearchOperator::GreaterThanOrEqual => ">=",
            SearchOperator::LessThanOrEqual => "<=",
            SearchOperator::Contains => "contains",
            SearchOperator::DoesNotContain => "does not contain",
            SearchOperator::StartsWith => "starts with",
            SearchOperator::DoesNotStartWith => "does not start with",
            SearchOperator::EndsWith => "ends with",
            SearchOperator::DoesNotEndWith => "does not end with",
        }
    }

    /// Map an abstract operator to the internal operator used for
    /// construction.
    ///
    /// Equality and ordering map one-to-one. Contains maps to the native
    /// substring operator unless the backend expects wildcard-pattern text
    /// operators. The starts-with and ends-with families always take the
    /// wildcard-pattern form; the literal is only rewritten with `%` markers
    /// when the dialect is active, so the pattern degenerates to a plain
    /// prefix/suffix match otherwise.
    pub fn to_combine_operator(&self, wildcard_dialect: bool) -> CombineOperator {
        match self {
            SearchOperator::Equals => CombineOperator::Equal,
            SearchOperator::NotEquals => CombineOperator::NotEqual,
            SearchOperator::GreaterThan => CombineOperator::GreaterThan,
            SearchOperator::LessThan => CombineOperator::LessThan,
            SearchOperator::GreaterThanOrEqual => CombineOperator::GreaterThanOrEqual,
            SearchOperator::LessThanOrEqual => CombineOperator::LessThanOrEqual,
            SearchOperator::Contains => {
                if wildcard_dialect {
                    CombineOperator::Like
                } else {
                    CombineOperator::Contains
                }
            }
            SearchOperator::DoesNotContain => {
                if wildcard_dialect {
                    CombineOperator::NotLike
                } else {
                    CombineOperator::NotContains
                }
            }
            SearchOperator::StartsWith => CombineOperator::LikeStartsWith,
            SearchOperator::DoesNotStartWith => CombineOperator::LikeNotStartsWith,
            SearchOperator::EndsWith => CombineOperator::LikeEndsWith,
            SearchOperator::DoesNotEndWith => CombineOperator::LikeNotEndsWith,
        }
    }
}

/// One filter row from a query request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterClause {
    /// How this clause combines with the previous sibling result
    #[serde(default)]
    pub logic: LogicOperator,
    /// Field identifier; dot-separated segments denote a navigation path
    pub field_id: String,
    #[serde(default)]
    pub operator: SearchOperator,
    /// Raw literal, coerced at the leaf that consumes it
    #[serde(default)]
    pub value: String,
    /// Nested sub-group combined into this clause's contribution
    #[serde(default)]
    pub children: Vec<FilterClause>,
}

impl FilterClause {
    /// Create a simple clause with default And logic and no children.
    pub fn new(field_id: impl Into<String>, operator: SearchOperator, value: impl Into<String>) -> Self {
        Self {
            logic: LogicOperator::And,
            field_id: field_id.into(),
            operator,
            value: value.into(),
            children: Vec::new(),
        }
    }

    /// Set the logic operator joining this clause to the previous result.
    pub fn with_logic(mut self, logic: LogicOperator) -> Self {
        self.logic = logic;
        self
    }

    /// Attach a nested group of clauses.
    pub fn with_children(mut self, children: Vec<FilterClause>) -> Self {
        self.children = children;
        self
    }
}
