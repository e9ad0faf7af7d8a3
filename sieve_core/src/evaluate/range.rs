//! Range predicate over numeric fields

use log::debug;
use rust_decimal::Decimal;

use crate::{FieldValue, RangeValue};

/// A range constrains records only when bounded tighter than the definition's limits.
pub fn is_active(value: &RangeValue, min: Decimal, max: Decimal) -> bool {
    match value {
        RangeValue::Unbounded => false,
        RangeValue::Bounded { lo, hi } => *lo > min || *hi < max,
    }
}

/// Check if a numeric field lies within the inclusive bounds
pub fn matches(field_value: &FieldValue, value: &RangeValue) -> bool {
    let (lo, hi) = match value {
        RangeValue::Unbounded => return true,
        RangeValue::Bounded { lo, hi } => (lo, hi),
    };

    match field_value {
        FieldValue::Number(number) => lo <= number && number <= hi,
        other => {
            debug!("Range filter cannot compare {} field", other.type_name());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounded(lo: i64, hi: i64) -> RangeValue {
        RangeValue::Bounded {
            lo: Decimal::from(lo),
            hi: Decimal::from(hi),
        }
    }

    fn number(n: i64) -> FieldValue {
        FieldValue::Number(Decimal::from(n))
    }

    #[test]
    fn test_full_bounds_inactive() {
        assert!(!is_active(&bounded(0, 100), Decimal::ZERO, Decimal::from(100)));
    }

    #[test]
    fn test_narrowed_bounds_active() {
        assert!(is_active(&bounded(10, 100), Decimal::ZERO, Decimal::from(100)));
        assert!(is_active(&bounded(0, 99), Decimal::ZERO, Decimal::from(100)));
    }

    #[test]
    fn test_unbounded_inactive() {
        assert!(!is_active(&RangeValue::Unbounded, Decimal::ZERO, Decimal::from(100)));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let range = bounded(100, 200);
        assert!(matches(&number(100), &range));
        assert!(matches(&number(150), &range));
        assert!(matches(&number(200), &range));
    }

    #[test]
    fn test_outside_bounds() {
        let range = bounded(100, 200);
        assert!(!matches(&number(99), &range));
        assert!(!matches(&number(201), &range));
    }

    #[test]
    fn test_decimal_values() {
        let range = bounded(0, 1);
        assert!(matches(&FieldValue::Number(Decimal::new(5, 1)), &range));
        assert!(!matches(&FieldValue::Number(Decimal::new(101, 2)), &range));
    }

    #[test]
    fn test_non_numeric_field_fails() {
        assert!(!matches(&FieldValue::from("150000"), &bounded(0, 200_000)));
        assert!(!matches(&FieldValue::Boolean(true), &bounded(0, 1)));
    }
}
