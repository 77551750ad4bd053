//! Length/capacity-bounded windows over shared backing buffers.
//!
//! A [`View`] is the growable-sequence primitive of this workspace: a window
//! of `len` visible elements into a contiguous backing buffer of `cap`
//! reserved slots. Any number of views may alias the same backing buffer;
//! writes through one view are observed by every other view whose window
//! overlaps, until a view grows past its reserved capacity and detaches onto
//! a fresh allocation.

use crate::error::ViewError;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared backing storage for one or more views.
///
/// Allocated to full capacity at creation and never resized in place, so
/// element addresses stay stable for as long as the allocation is shared.
type Backing<T> = Rc<RefCell<Vec<T>>>;

/// A length- and capacity-bounded window over a shared backing buffer.
///
/// The window starts `offset` slots into the backing buffer, exposes `len`
/// elements, and may grow in place up to `cap` elements. Cloning a `View`
/// clones the window, not the elements: the clone aliases the same backing
/// buffer.
///
/// # Aliasing and detach
///
/// [`set`](View::set) and in-capacity [`push`](View::push) write straight
/// into the shared backing buffer, so sibling views observe them. A `push`
/// that would exceed `cap` instead copies the visible elements into a fresh
/// backing buffer with doubled capacity and pushes there; the view is then
/// detached and no further operation on it touches its former siblings.
/// Detach is silent — callers that care can watch
/// [`shares_backing`](View::shares_backing).
#[derive(Clone, Debug)]
pub struct View<T> {
    backing: Backing<T>,
    offset: usize,
    len: usize,
    cap: usize,
}

impl<T: Clone + Default> View<T> {
    /// Create an empty view with no backing allocation (length 0, capacity 0).
    ///
    /// The first [`push`](View::push) allocates.
    pub fn new() -> Self {
        Self {
            backing: Rc::new(RefCell::new(Vec::new())),
            offset: 0,
            len: 0,
            cap: 0,
        }
    }

    /// Create a view of `len` default-valued elements over a fresh backing
    /// buffer with `cap` reserved slots.
    ///
    /// # Panics
    ///
    /// Panics if `len > cap`.
    pub fn with_len(len: usize, cap: usize) -> Self {
        assert!(len <= cap, "length {len} exceeds capacity {cap}");
        Self {
            backing: Rc::new(RefCell::new(vec![T::default(); cap])),
            offset: 0,
            len,
            cap,
        }
    }

    /// Create a view holding a copy of `items`, with capacity equal to length.
    pub fn from_slice(items: &[T]) -> Self {
        Self {
            backing: Rc::new(RefCell::new(items.to_vec())),
            offset: 0,
            len: items.len(),
            cap: items.len(),
        }
    }

    /// Number of visible elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the view exposes no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of reserved slots the view may grow into without detaching.
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Read the element at `index` out of the shared backing buffer.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn get(&self, index: usize) -> T {
        assert!(index < self.len, "index {index} out of range {}", self.len);
        self.backing.borrow()[self.offset + index].clone()
    }

    /// Write the element at `index` in place.
    ///
    /// The write lands in the shared backing buffer, so every aliasing view
    /// whose window covers the slot observes it.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn set(&mut self, index: usize, value: T) {
        assert!(index < self.len, "index {index} out of range {}", self.len);
        self.backing.borrow_mut()[self.offset + index] = value;
    }

    /// Clone the visible elements into a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.backing.borrow()[self.offset..self.offset + self.len].to_vec()
    }

    /// Window onto positions `[start, end)` of this view.
    ///
    /// The sub-view shares the backing buffer; its capacity extends to the
    /// end of this view's reserved capacity, so in-capacity growth keeps
    /// writing into the shared allocation. `end` may reach past `len` up to
    /// `capacity()`, exposing reserved-but-unused slots.
    ///
    /// Returns [`ViewError::InvalidRange`] if `start > end` or
    /// `end > capacity()`.
    pub fn subview(&self, start: usize, end: usize) -> Result<Self, ViewError> {
        self.check_range(start, end)?;
        Ok(Self {
            backing: Rc::clone(&self.backing),
            offset: self.offset + start,
            len: end - start,
            cap: self.cap - start,
        })
    }

    /// Window onto `[start, end)` with capacity clipped to `end`.
    ///
    /// Unlike [`subview`](View::subview), the sub-view's reserved capacity
    /// stops at its own last element, so the very first `push` detaches it.
    /// Use this form when growth of the sub-view must never disturb the
    /// parent's trailing elements.
    pub fn subview_to(&self, start: usize, end: usize) -> Result<Self, ViewError> {
        self.check_range(start, end)?;
        Ok(Self {
            backing: Rc::clone(&self.backing),
            offset: self.offset + start,
            len: end - start,
            cap: end - start,
        })
    }

    /// Append `value`, growing in place while reserved capacity remains.
    ///
    /// Within capacity, the new element is written into the shared backing
    /// buffer: aliasing views whose windows cover the slot observe it. When
    /// the push would exceed capacity, the visible elements are copied into
    /// a fresh backing buffer of doubled capacity and the view detaches
    /// silently — former siblings are left exactly as they were.
    pub fn push(&mut self, value: T) {
        if self.len == self.cap {
            self.detach();
        }
        self.backing.borrow_mut()[self.offset + self.len] = value;
        self.len += 1;
    }

    /// Returns `true` if both views alias the same backing allocation.
    pub fn shares_backing(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.backing, &other.backing)
    }

    /// Address-like identity of the element at `index`.
    ///
    /// Stable until the view detaches. Two views reporting the same address
    /// for a position are windows onto the same slot.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn elem_addr(&self, index: usize) -> usize {
        assert!(index < self.len, "index {index} out of range {}", self.len);
        let backing = self.backing.borrow();
        &backing[self.offset + index] as *const T as usize
    }

    /// Move the visible elements onto a fresh backing buffer with doubled
    /// capacity, severing aliasing with any sibling views.
    fn detach(&mut self) {
        let new_cap = (self.cap * 2).max(1);
        let mut fresh = vec![T::default(); new_cap];
        {
            let backing = self.backing.borrow();
            fresh[..self.len].clone_from_slice(&backing[self.offset..self.offset + self.len]);
        }
        self.backing = Rc::new(RefCell::new(fresh));
        self.offset = 0;
        self.cap = new_cap;
    }

    fn check_range(&self, start: usize, end: usize) -> Result<(), ViewError> {
        if start > end || end > self.cap {
            return Err(ViewError::InvalidRange {
                start,
                end,
                bound: self.cap,
            });
        }
        Ok(())
    }
}

impl<T: Clone + Default> Default for View<T> {
    fn default() -> Self {
        Self::new()
    }
}
