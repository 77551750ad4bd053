//! Pass a copy of a local integer; the caller's original is unaffected.
//!
//! The callee increments its own copy and returns it. The original keeps
//! its value; only the captured return value carries the increment.

use primer_demos::passing::increment;

fn main() {
    let count: i64 = 10;

    println!("Before: {count} {:p}", &count);

    let count2 = increment(count);

    println!("After:  {count} {:p}", &count);
    println!("After:  {count2} {:p}", &count2);
}
