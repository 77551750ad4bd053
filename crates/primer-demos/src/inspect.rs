//! Console helpers shared by the demo binaries.

use primer_view::View;
use std::fmt::Display;

/// Print a section header.
pub fn banner(title: &str) {
    println!("{title}");
    println!("*************************");
}

/// Print a view's length, capacity, and per-element address identity.
///
/// Two views printing the same address for a position are windows onto the
/// same slot of the same backing buffer.
pub fn inspect<T: Clone + Default + Display>(view: &View<T>) {
    println!("Length[{}] Capacity[{}]", view.len(), view.capacity());
    for i in 0..view.len() {
        println!("[{i}] {:#x} {}", view.elem_addr(i), view.get(i));
    }
    println!();
}
