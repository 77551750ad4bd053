//! Insert, update, and extend a map of grades, iterating between steps.
//!
//! `IndexMap` iterates in first-insertion order, so re-running the demo
//! prints the entries in the same order every time.

use indexmap::IndexMap;

fn main() {
    let mut grades: IndexMap<&str, i64> = IndexMap::new();

    grades.insert("brian", 100);

    println!("Map");
    println!("**********");
    for (name, grade) in &grades {
        println!("{name} {grade}");
    }

    // Updating an existing key replaces its value and keeps its position.
    grades.insert("brian", 65);

    let g = grades["brian"];
    println!("brian's grade is {g}");

    grades.insert("bob", 85);
    grades.insert("dipendra", 88);

    println!("\nAdding Values");
    println!("**********");
    for (name, grade) in &grades {
        println!("{name} {grade}");
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    #[test]
    fn update_then_extend_leaves_three_entries() {
        let mut grades: IndexMap<&str, i64> = IndexMap::new();
        grades.insert("brian", 100);
        grades.insert("brian", 65);
        grades.insert("bob", 85);
        grades.insert("dipendra", 88);

        assert_eq!(grades.len(), 3);
        assert_eq!(grades["brian"], 65);
    }

    #[test]
    fn iteration_order_follows_first_insertion() {
        let mut grades: IndexMap<&str, i64> = IndexMap::new();
        grades.insert("brian", 100);
        grades.insert("brian", 65);
        grades.insert("bob", 85);
        grades.insert("dipendra", 88);

        let names: Vec<&str> = grades.keys().copied().collect();
        assert_eq!(names, vec!["brian", "bob", "dipendra"]);
    }
}
