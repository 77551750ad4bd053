//! Pass a mutable borrow of a local integer; the caller observes the change.
//!
//! The callee receives the caller's storage location and writes through it,
//! so the new value is visible here without any return value.

use primer_demos::passing::increment_in_place;

fn main() {
    let mut count: i64 = 10;

    println!("Before: {count} {:p}", &count);

    increment_in_place(&mut count);

    println!("After:  {count} {:p}", &count);
}
