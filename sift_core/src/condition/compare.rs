//! Runtime comparison semantics
//!
//! The executable half of a leaf condition: compare a resolved field value
//! against a literal under an internal operator. String comparisons are
//! case-insensitive. Timestamps compare by calendar date only. Integers of
//! different widths are promoted before comparing.

use std::cmp::Ordering;

use crate::condition::CombineOperator;
use crate::record::FieldValue;

/// Evaluate `value <op> literal` for a leaf comparison.
///
/// Values of mismatched types compare as false rather than erroring; the
/// builder's coercion step makes mismatches unreachable for well-formed
/// catalogs, but navigation paths can surface surprises at runtime.
pub(crate) fn compare_values(
    value: &FieldValue,
    op: CombineOperator,
    literal: &FieldValue,
) -> bool {
    match (value, literal) {
        (FieldValue::Boolean(v), FieldValue::Boolean(l)) => match op {
            CombineOperator::Equal => v == l,
            CombineOperator::NotEqual => v != l,
            _ => false,
        },
        (FieldValue::Timestamp(v), FieldValue::Timestamp(l)) => {
            ordered(v.date_naive().cmp(&l.date_naive()), op)
        }
        (FieldValue::Integer(_) | FieldValue::Long(_), FieldValue::Integer(_) | FieldValue::Long(_)) => {
            let v = widen(value);
            let l = widen(literal);
            ordered(v.cmp(&l), op)
        }
        (
            FieldValue::String(v) | FieldValue::Enum(v),
            FieldValue::String(l) | FieldValue::Enum(l),
        ) => compare_strings(v, op, l),
        _ => false,
    }
}

fn widen(value: &FieldValue) -> i64 {
    match value {
        FieldValue::Integer(n) => i64::from(*n),
        FieldValue::Long(n) => *n,
        _ => unreachable!("widen is only called on integer values"),
    }
}

fn ordered(ordering: Ordering, op: CombineOperator) -> bool {
    match op {
        CombineOperator::Equal => ordering == Ordering::Equal,
        CombineOperator::NotEqual => ordering != Ordering::Equal,
        CombineOperator::GreaterThan => ordering == Ordering::Greater,
        CombineOperator::GreaterThanOrEqual => ordering != Ordering::Less,
        CombineOperator::LessThan => ordering == Ordering::Less,
        CombineOperator::LessThanOrEqual => ordering != Ordering::Greater,
        _ => false,
    }
}

fn compare_strings(value: &str, op: CombineOperator, pattern: &str) -> bool {
    let v = value.to_lowercase();
    let p = pattern.to_lowercase();
    match op {
        CombineOperator::Equal => v == p,
        CombineOperator::NotEqual => v != p,
        CombineOperator::Contains => v.contains(&p),
        CombineOperator::NotContains => !v.contains(&p),
        CombineOperator::StartsWith => v.starts_with(&p),
        CombineOperator::NotStartsWith => !v.starts_with(&p),
        CombineOperator::EndsWith => v.ends_with(&p),
        CombineOperator::NotEndsWith => !v.ends_with(&p),
        CombineOperator::Like => like_match(&v, &p),
        CombineOperator::NotLike => !like_match(&v, &p),
        CombineOperator::LikeStartsWith => v.starts_with(strip_markers(&p)),
        CombineOperator::LikeNotStartsWith => !v.starts_with(strip_markers(&p)),
        CombineOperator::LikeEndsWith => v.ends_with(strip_markers(&p)),
        CombineOperator::LikeNotEndsWith => !v.ends_with(strip_markers(&p)),
        _ => false,
    }
}

/// Interpret `%` markers the way the target dialect would: anchored at
/// neither end means exact match, at one end a prefix or suffix match, at
/// both ends a substring match.
fn like_match(value: &str, pattern: &str) -> bool {
    let leading = pattern.starts_with('%');
    let trailing = pattern.len() > 1 && pattern.ends_with('%');
    let core = strip_markers(pattern);
    match (leading, trailing) {
        (true, true) => value.contains(core),
        (false, true) => value.starts_with(core),
        (true, false) => value.ends_with(core),
        (false, false) => value == core,
    }
}

fn strip_markers(pattern: &str) -> &str {
    pattern.trim_matches('%')
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset};

    fn s(text: &str) -> FieldValue {
        FieldValue::String(text.to_string())
    }

    fn ts(text: &str) -> FieldValue {
        FieldValue::Timestamp(DateTime::<FixedOffset>::parse_from_rfc3339(text).unwrap())
    }

    // ===== Strings =====

    #[test]
    fn test_string_equality_is_case_insensitive() {
        assert!(compare_values(
            &s("Ann Lee"),
            CombineOperator::Equal,
            &s("ann lee")
        ));
        assert!(compare_values(
            &s("Ann Lee"),
            CombineOperator::NotEqual,
            &s("Bob")
        ));
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        assert!(compare_values(
            &s("Ann Lee"),
            CombineOperator::Contains,
            &s("ann")
        ));
        assert!(!compare_values(
            &s("Bob"),
            CombineOperator::Contains,
            &s("ann")
        ));
        assert!(compare_values(
            &s("Bob"),
            CombineOperator::NotContains,
            &s("ann")
        ));
    }

    #[test]
    fn test_like_markers_select_match_kind() {
        assert!(compare_values(&s("Ann Lee"), CombineOperator::Like, &s("%ann%")));
        assert!(compare_values(&s("Ann Lee"), CombineOperator::Like, &s("ann%")));
        assert!(compare_values(&s("Ann Lee"), CombineOperator::Like, &s("%lee")));
        assert!(compare_values(&s("Ann Lee"), CombineOperator::Like, &s("ann lee")));
        assert!(!compare_values(&s("Ann Lee"), CombineOperator::Like, &s("lee%")));
    }

    #[test]
    fn test_prefix_suffix_with_and_without_markers() {
        // A dialect-rewritten pattern and a raw one behave the same
        for pattern in ["ann", "ann%"] {
            assert!(compare_values(
                &s("Ann Lee"),
                CombineOperator::LikeStartsWith,
                &s(pattern)
            ));
        }
        for pattern in ["lee", "%lee"] {
            assert!(compare_values(
                &s("Ann Lee"),
                CombineOperator::LikeEndsWith,
                &s(pattern)
            ));
        }
        assert!(compare_values(
            &s("Ann Lee"),
            CombineOperator::LikeNotStartsWith,
            &s("lee")
        ));
    }

    // ===== Numbers =====

    #[test]
    fn test_integer_ordering() {
        let v = FieldValue::Integer(35);
        assert!(compare_values(&v, CombineOperator::GreaterThan, &FieldValue::Integer(30)));
        assert!(!compare_values(&v, CombineOperator::LessThan, &FieldValue::Integer(30)));
        assert!(compare_values(&v, CombineOperator::GreaterThanOrEqual, &FieldValue::Integer(35)));
        assert!(compare_values(&v, CombineOperator::LessThanOrEqual, &FieldValue::Integer(35)));
    }

    #[test]
    fn test_mixed_width_integers_are_promoted() {
        assert!(compare_values(
            &FieldValue::Integer(35),
            CombineOperator::Equal,
            &FieldValue::Long(35)
        ));
        assert!(compare_values(
            &FieldValue::Long(40),
            CombineOperator::GreaterThan,
            &FieldValue::Integer(35)
        ));
    }

    // ===== Timestamps =====

    #[test]
    fn test_timestamps_compare_by_date_only() {
        let morning = ts("2024-06-01T08:00:00+00:00");
        let evening = ts("2024-06-01T23:30:00+00:00");
        assert!(compare_values(&morning, CombineOperator::Equal, &evening));
        assert!(!compare_values(&morning, CombineOperator::LessThan, &evening));

        let next_day = ts("2024-06-02T00:00:00+00:00");
        assert!(compare_values(&morning, CombineOperator::LessThan, &next_day));
    }

    // ===== Mismatches =====

    #[test]
    fn test_mismatched_types_compare_false() {
        assert!(!compare_values(
            &s("35"),
            CombineOperator::Equal,
            &FieldValue::Integer(35)
        ));
        assert!(!compare_values(
            &FieldValue::Boolean(true),
            CombineOperator::GreaterThan,
            &FieldValue::Boolean(false)
        ));
    }

    #[test]
    fn test_enum_compares_like_string() {
        assert!(compare_values(
            &FieldValue::Enum("Active".to_string()),
            CombineOperator::Equal,
            &FieldValue::Enum("active".to_string())
        ));
    }
}
