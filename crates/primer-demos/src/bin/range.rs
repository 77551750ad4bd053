//! Iterate a fixed-size array three ways: (index, value), value-only, and
//! index-only.

const NUMBERS: [i64; 4] = [10, 20, 30, 40];

fn main() {
    // Index and value together.
    for (i, num) in NUMBERS.iter().enumerate() {
        println!("{i} {num}");
    }

    // Value only; the index is not needed.
    for num in NUMBERS {
        println!("{num}");
    }

    // Index only; the value is not needed.
    for idx in 0..NUMBERS.len() {
        println!("{idx}");
    }
}

#[cfg(test)]
mod tests {
    use super::NUMBERS;

    #[test]
    fn index_value_form_visits_in_order() {
        let pairs: Vec<(usize, i64)> = NUMBERS.iter().copied().enumerate().collect();
        assert_eq!(pairs, vec![(0, 10), (1, 20), (2, 30), (3, 40)]);
    }

    #[test]
    fn value_only_form_visits_in_order() {
        let values: Vec<i64> = NUMBERS.into_iter().collect();
        assert_eq!(values, vec![10, 20, 30, 40]);
    }

    #[test]
    fn index_only_form_visits_in_order() {
        let indices: Vec<usize> = (0..NUMBERS.len()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }
}
