//! Key comparators for mapping generators and select menus.

use std::cmp::Ordering;

use super::value::Value;

/// Comparator used to order mapping keys.
pub type CompareFn = fn(&Value, &Value) -> Ordering;

/// Ascending order.
///
/// Integers compare numerically across signed and unsigned values, floats
/// compare numerically; any other pairing compares display strings.
///
/// ```
/// use std::cmp::Ordering;
///
/// use quill_markup::{Value, cmp_asc};
///
/// assert_eq!(cmp_asc(&Value::from(9), &Value::from(10)), Ordering::Less);
/// assert_eq!(cmp_asc(&Value::from("9"), &Value::from("10")), Ordering::Greater);
/// ```
#[must_use]
pub fn cmp_asc(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => x.cmp(y),
        (Value::UInt(x), Value::UInt(y)) => x.cmp(y),
        (Value::Int(x), Value::UInt(y)) => i128::from(*x).cmp(&i128::from(*y)),
        (Value::UInt(x), Value::Int(y)) => i128::from(*x).cmp(&i128::from(*y)),
        (Value::Float(x), Value::Float(y)) => x.total_cmp(y),
        _ => a.to_string().cmp(&b.to_string()),
    }
}

/// Descending order: the reverse of [`cmp_asc`].
#[must_use]
pub fn cmp_desc(a: &Value, b: &Value) -> Ordering {
    cmp_asc(a, b).reverse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_numeric() {
        assert_eq!(cmp_asc(&Value::Int(-1), &Value::UInt(1)), Ordering::Less);
        assert_eq!(cmp_asc(&Value::UInt(20), &Value::UInt(3)), Ordering::Greater);
    }

    #[test]
    fn test_floats_numeric() {
        assert_eq!(cmp_asc(&Value::Float(2.5), &Value::Float(10.0)), Ordering::Less);
    }

    #[test]
    fn test_mixed_families_compare_as_text() {
        // "10" < "9.5" lexicographically
        assert_eq!(cmp_asc(&Value::Int(10), &Value::Float(9.5)), Ordering::Less);
    }

    #[test]
    fn test_text() {
        assert_eq!(cmp_asc(&"apple".into(), &"banana".into()), Ordering::Less);
        assert_eq!(cmp_desc(&"apple".into(), &"banana".into()), Ordering::Greater);
    }

    #[test]
    fn test_sort_keys() {
        let mut keys: Vec<Value> = vec![3.into(), 1.into(), 2.into()];
        keys.sort_by(cmp_desc);
        assert_eq!(keys, [Value::Int(3), Value::Int(2), Value::Int(1)]);
    }
}
