//! Wildcard marker rewriting for pattern-dialect backends

use crate::condition::CombineOperator;

const WILDCARD: char = '%';

/// Surround or anchor a literal with `%` markers as its operator requires.
///
/// Substring patterns get markers at both ends, prefix patterns a trailing
/// marker, suffix patterns a leading marker. Rewriting is idempotent: a
/// marker already present is never doubled. Operators outside the
/// wildcard-pattern family leave the literal untouched.
pub(crate) fn rewrite_literal(op: CombineOperator, value: String) -> String {
    match op {
        CombineOperator::Like | CombineOperator::NotLike => {
            with_trailing(with_leading(value))
        }
        CombineOperator::LikeStartsWith | CombineOperator::LikeNotStartsWith => {
            with_trailing(value)
        }
        CombineOperator::LikeEndsWith | CombineOperator::LikeNotEndsWith => with_leading(value),
        _ => value,
    }
}

fn with_leading(value: String) -> String {
    if value.starts_with(WILDCARD) {
        value
    } else {
        format!("{}{}", WILDCARD, value)
    }
}

fn with_trailing(mut value: String) -> String {
    if !value.ends_with(WILDCARD) {
        value.push(WILDCARD);
    }
    value
}
