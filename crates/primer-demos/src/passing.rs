//! Copy-on-call versus reference-on-call parameter passing.
//!
//! [`increment`] takes its argument by value: the callee works on an
//! independent copy, and the caller sees nothing unless it captures the
//! return value. [`increment_in_place`] takes a mutable borrow: the callee
//! writes through to the caller's storage.

/// Add one to a copy of `count` and return the result.
///
/// The caller's variable is unaffected; capturing the return value is the
/// only way to observe the increment.
pub fn increment(mut count: i64) -> i64 {
    count += 1;
    count
}

/// Add one to the caller's variable through a mutable borrow.
///
/// The write lands in the caller's storage, so the caller observes the new
/// value as soon as the call returns.
pub fn increment_in_place(count: &mut i64) {
    *count += 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_value_leaves_the_original_untouched() {
        let count: i64 = 10;
        let _ = increment(count);
        assert_eq!(count, 10);
    }

    #[test]
    fn by_value_return_carries_the_increment() {
        let count: i64 = 10;
        let count2 = increment(count);
        assert_eq!(count2, 11);
        assert_eq!(count, 10);
    }

    #[test]
    fn by_reference_mutates_in_place() {
        let mut count: i64 = 10;
        increment_in_place(&mut count);
        assert_eq!(count, 11);
    }
}
