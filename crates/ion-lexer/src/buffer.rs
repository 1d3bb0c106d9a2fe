//! Stretchy buffer: a growable, contiguous sequence with amortized O(1) append.
//!
//! Length and capacity live next to the storage rather than in a header
//! prefixed to the allocation. Capacity is tracked by the buffer itself, so
//! growth follows one rule regardless of the allocator:
//!
//! ```text
//! new_capacity = max(desired_length, 2 * old_capacity + 1)
//! ```
//!
//! The `+ 1` lets the first append grow an unallocated buffer, and the `max`
//! satisfies a bulk append in a single reallocation.
//!
//! Any growth may move the storage. The borrow checker enforces what callers
//! of a raw stretchy buffer had to remember: no reference into the contents
//! survives an append.

use std::alloc::{handle_alloc_error, Layout};
use std::cmp::max;
use std::fmt;
use std::ops::{Deref, Index};

use tracing::{debug, error};

use crate::error::{BufferError, ErrorKind};

/// Number of appends performed by [`self_test`] when run from the entrypoint.
pub const SELF_TEST_LEN: usize = 1024;

pub struct StretchyBuf<T> {
    items: Vec<T>,
    /// Logical capacity, always `>= items.len()`
    cap: usize,
    /// Reallocations since creation or the last release
    grow_count: u32,
}

impl<T> StretchyBuf<T> {
    /// Creates an empty buffer. Nothing is allocated until the first append.
    #[must_use]
    pub const fn new() -> Self {
        StretchyBuf {
            items: Vec::new(),
            cap: 0,
            grow_count: 0,
        }
    }

    /// Number of live elements. `0` for an unallocated buffer.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Number of allocated slots. `0` for an unallocated buffer.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of reallocations performed since creation or the last [`release`](Self::release).
    #[must_use]
    pub fn grow_count(&self) -> u32 {
        self.grow_count
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Appends `item`, growing the storage if it is full.
    ///
    /// Allocation failure is fatal: the process is terminated through the
    /// global allocation error handler. Use [`try_push`](Self::try_push) to
    /// handle it instead.
    pub fn push(&mut self, item: T) {
        if let Err(err) = self.try_push(item) {
            fatal_growth_failure::<T>(err);
        }
    }

    /// Appends `item`, growing the storage if it is full.
    ///
    /// # Errors
    ///
    /// Returns a [`BufferError`] if the new capacity overflows or can't be
    /// allocated. The buffer is left untouched in that case.
    pub fn try_push(&mut self, item: T) -> Result<(), BufferError> {
        if self.items.len() == self.cap {
            self.grow(self.cap + 1)?;
        }

        debug_assert!(self.items.len() < self.cap);

        self.items.push(item);
        Ok(())
    }

    /// Makes room for at least `additional` more elements with at most one
    /// reallocation.
    ///
    /// # Errors
    ///
    /// Returns a [`BufferError`] if the new capacity overflows or can't be
    /// allocated.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), BufferError> {
        let Some(desired) = self.items.len().checked_add(additional) else {
            return Err(BufferError::new(
                ErrorKind::BufferCapacityOverflow,
                usize::MAX,
            ));
        };

        if desired > self.cap {
            self.grow(desired)?;
        }

        Ok(())
    }

    /// Frees the storage. The buffer becomes empty and unallocated.
    /// Releasing an empty buffer is a no-op.
    pub fn release(&mut self) {
        self.items = Vec::new();
        self.cap = 0;
        self.grow_count = 0;
    }

    fn grow(&mut self, desired: usize) -> Result<(), BufferError> {
        debug_assert!(desired > self.cap);

        let new_cap = self
            .cap
            .checked_mul(2)
            .and_then(|c| c.checked_add(1))
            .map(|doubled| max(doubled, desired))
            .ok_or_else(|| BufferError::new(ErrorKind::BufferCapacityOverflow, desired))?;

        if Layout::array::<T>(new_cap).is_err() {
            return Err(BufferError::new(
                ErrorKind::BufferCapacityOverflow,
                new_cap,
            ));
        }

        self.items
            .try_reserve_exact(new_cap - self.items.len())
            .map_err(|_| BufferError::new(ErrorKind::BufferAllocationFailed, new_cap))?;

        debug!(
            old_cap = self.cap,
            new_cap,
            len = self.items.len(),
            "growing stretchy buffer"
        );

        self.cap = new_cap;
        self.grow_count = self.grow_count.saturating_add(1);

        Ok(())
    }
}

impl<T: Clone> StretchyBuf<T> {
    /// Appends all of `items`, growing at most once.
    ///
    /// Allocation failure is fatal, see [`push`](Self::push).
    pub fn extend_from_slice(&mut self, items: &[T]) {
        if let Err(err) = self.try_extend_from_slice(items) {
            fatal_growth_failure::<T>(err);
        }
    }

    /// Appends all of `items`, growing at most once.
    ///
    /// # Errors
    ///
    /// Returns a [`BufferError`] if the new capacity overflows or can't be
    /// allocated. Nothing is appended in that case.
    pub fn try_extend_from_slice(&mut self, items: &[T]) -> Result<(), BufferError> {
        self.try_reserve(items.len())?;
        self.items.extend_from_slice(items);
        Ok(())
    }
}

#[cold]
fn fatal_growth_failure<T>(err: BufferError) -> ! {
    error!(%err, "stretchy buffer growth failed");

    match Layout::array::<T>(err.count()) {
        Ok(layout) if err.error_kind() == ErrorKind::BufferAllocationFailed => {
            handle_alloc_error(layout)
        }
        _ => panic!("{err}"),
    }
}

impl<T> Default for StretchyBuf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for StretchyBuf<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> Index<usize> for StretchyBuf<T> {
    type Output = T;

    /// # Panics
    /// If `index` is out of bounds.
    #[allow(clippy::indexing_slicing)]
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T: Clone> Clone for StretchyBuf<T> {
    /// The clone is an independent owner with the same logical capacity.
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.cap);
        items.extend_from_slice(&self.items);

        StretchyBuf {
            items,
            cap: self.cap,
            grow_count: 0,
        }
    }
}

impl<T: PartialEq> PartialEq for StretchyBuf<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for StretchyBuf<T> {}

impl<T: fmt::Debug> fmt::Debug for StretchyBuf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StretchyBuf")
            .field("len", &self.items.len())
            .field("cap", &self.cap)
            .field("items", &self.items)
            .finish()
    }
}

impl<T> Extend<T> for StretchyBuf<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for StretchyBuf<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut buf = StretchyBuf::new();
        buf.extend(iter);
        buf
    }
}

impl<T> IntoIterator for StretchyBuf<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a StretchyBuf<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Appends `0..len` to a fresh buffer, reads every element back and releases it.
///
/// # Errors
///
/// Returns the growth error if an append fails, or
/// [`ErrorKind::BufferSelfTestMismatch`] carrying the first index that
/// didn't read back as written.
pub fn self_test(len: usize) -> Result<(), BufferError> {
    let mut buf = StretchyBuf::new();

    for i in 0..len {
        buf.try_push(i)?;
    }

    if buf.len() != len {
        return Err(BufferError::new(
            ErrorKind::BufferSelfTestMismatch,
            buf.len(),
        ));
    }

    if let Some(bad) = buf.iter().enumerate().position(|(i, &v)| i != v) {
        return Err(BufferError::new(ErrorKind::BufferSelfTestMismatch, bad));
    }

    debug!(
        len,
        cap = buf.capacity(),
        grow_count = buf.grow_count(),
        "stretchy buffer self-test passed"
    );

    buf.release();
    Ok(())
}
