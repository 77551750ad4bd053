//! Construct a map from a literal set of pairs and iterate it.

use indexmap::IndexMap;

fn main() {
    let grades = IndexMap::from([("susan", 100i64), ("bob", 89)]);

    println!("Map Values");
    println!("**********");
    for (name, grade) in &grades {
        println!("{name} {grade}");
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    #[test]
    fn literal_construction_holds_both_pairs() {
        let grades = IndexMap::from([("susan", 100i64), ("bob", 89)]);
        assert_eq!(grades.len(), 2);
        assert_eq!(grades["susan"], 100);
        assert_eq!(grades["bob"], 89);
    }
}
