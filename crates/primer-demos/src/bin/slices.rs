//! Views over a shared fruit buffer: aliasing, in-place mutation, and
//! silent detach when growth exhausts the shared capacity.
//!
//! Every step prints each view's length, capacity, and per-element address
//! so the moment the sub-view leaves the shared buffer is visible in the
//! output.

use primer_demos::inspect::{banner, inspect};
use primer_view::View;

fn main() {
    // A view with no backing allocation at all.
    let mut sl: View<String> = View::new();
    banner("Empty View");
    inspect(&sl);

    sl.push("Mango".to_string());
    banner("View after Push");
    inspect(&sl);

    // Five visible elements over eight reserved slots.
    let mut fruit: View<String> = View::with_len(5, 8);
    fruit.set(0, "Apple".to_string());
    fruit.set(1, "Orange".to_string());
    fruit.set(2, "Banana".to_string());
    fruit.set(3, "Grape".to_string());
    fruit.set(4, "Plum".to_string());

    banner("Fruit View");
    inspect(&fruit);

    // Tight window onto positions 2 and 3. Its capacity stops at its own
    // last element, so growth detaches instead of overwriting the parent's
    // trailing elements.
    let mut sub = fruit.subview_to(2, 4).unwrap();
    banner("View of Fruit View");
    inspect(&sub);

    // Write through the sub-view; the parent sees it at position 2.
    sub.set(0, "CHANGED".to_string());

    banner("Fruit View");
    inspect(&fruit);
    banner("View of Fruit View");
    inspect(&sub);

    // Two pushes carry the sub-view past its shared capacity. The first one
    // detaches it onto a fresh buffer; the parent keeps its own elements.
    sub.push("Kiwi".to_string());
    sub.push("Lychee".to_string());
    inspect(&sub);
    inspect(&fruit);
    println!(
        "sub still shares the fruit buffer: {}\n",
        sub.shares_backing(&fruit)
    );

    // Shortcut windows: everything from position 2, and the first three.
    let tail = fruit.subview(2, fruit.len()).unwrap();
    banner("Shortcut View");
    inspect(&tail);

    let head = fruit.subview(0, 3).unwrap();
    banner("Shortcut View 2");
    inspect(&head);
}
