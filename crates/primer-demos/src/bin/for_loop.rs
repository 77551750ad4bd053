//! Declare a fixed-size array and iterate over it by index.
//!
//! The array's element count is part of its type: `[i64; 4]` can never grow
//! or shrink, only its elements can change.

// The explicit index loop is the point of this demo.
#[allow(clippy::needless_range_loop)]
fn main() {
    let numbers: [i64; 4] = [10, 20, 30, 40];

    for i in 0..numbers.len() {
        println!("{} {}", i, numbers[i]);
    }
}
