//! Capacity-backed views over shared growable buffers.
//!
//! This crate provides [`View`], a length- and capacity-bounded window over
//! a contiguous backing buffer that any number of views may share. It exists
//! to make the aliasing behavior of growable sequences observable:
//!
//! - writes through one view are seen by every sibling whose window covers
//!   the slot, for as long as they share the backing allocation;
//! - growth past a view's reserved capacity moves it onto a fresh allocation
//!   and severs the aliasing **silently**.
//!
//! # Examples
//!
//! ```
//! use primer_view::View;
//!
//! let fruit = View::from_slice(&["apple", "orange", "banana", "grape"]);
//! let mut sub = fruit.subview(2, 4).unwrap();
//!
//! sub.set(0, "CHANGED");
//! assert_eq!(fruit.get(2), "CHANGED");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod view;

// Public re-exports for the primary API surface.
pub use error::ViewError;
pub use view::View;
