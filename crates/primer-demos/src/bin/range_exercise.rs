//! The completed range exercise: print every element of the array doubled.
//!
//! The exercise asks the reader to iterate the array with a range loop and
//! print each value multiplied by two; [`doubled`] is the finished transform.

use primer_demos::doubling::doubled;

fn main() {
    let numbers: [i64; 4] = [10, 20, 30, 40];

    println!("{numbers:?}");

    for value in doubled(&numbers) {
        println!("{value}");
    }
}
