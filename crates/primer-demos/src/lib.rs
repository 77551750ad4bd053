//! Support library for the primer demo binaries.
//!
//! Each binary under `src/bin/` is a standalone demonstration of one
//! language-semantics topic: fixed-size arrays, iteration forms, maps,
//! copy-on-call vs. reference-on-call parameter passing, and view aliasing
//! over shared growable buffers. The modules here hold the pieces the demos
//! share and the behaviors worth testing in isolation.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod doubling;
pub mod inspect;
pub mod passing;
