//! The range-exercise transform: double every element.

/// Each element of `values` multiplied by two, in order.
pub fn doubled(values: &[i64]) -> Vec<i64> {
    values.iter().map(|v| v * 2).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubles_the_exercise_input() {
        assert_eq!(doubled(&[10, 20, 30, 40]), vec![20, 40, 60, 80]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(doubled(&[]), Vec::<i64>::new());
    }
}
